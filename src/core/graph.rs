//! 图模型模块
//!
//! 画布/调用方提供的异构图统一转换为规范的内存表示
//! 运行期间图保持只读，所有算法共享同一份 `Arc<Graph>`

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::core::error::{EngineError, EngineResult};

/// 节点标识，构图后不再变化
pub type NodeId = i64;

/// 图节点
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    pub label: String,
}

impl Node {
    pub fn new(id: NodeId, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
        }
    }

    /// 未指定标签时默认使用节点 id 的字符串形式
    pub fn unlabeled(id: NodeId) -> Self {
        Self {
            id,
            label: id.to_string(),
        }
    }
}

/// 图边，方向由图级别的 `directed` 标志决定，不在边上单独记录
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub source: NodeId,
    pub target: NodeId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
}

impl Edge {
    pub fn new(source: NodeId, target: NodeId) -> Self {
        Self {
            source,
            target,
            weight: None,
        }
    }

    pub fn weighted(source: NodeId, target: NodeId, weight: f64) -> Self {
        Self {
            source,
            target,
            weight: Some(weight),
        }
    }

    /// 无权边在需要权重的算法中按 1 处理
    pub fn weight_or_default(&self) -> f64 {
        self.weight.unwrap_or(1.0)
    }
}

/// 规范图结构
///
/// 不变量：节点 id 唯一，每条边的端点都指向已存在的节点
/// 单次运行期间只读，runner 不会增删节点或边
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Graph {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
    pub directed: bool,
    pub weighted: bool,
}

impl Graph {
    pub fn new(nodes: Vec<Node>, edges: Vec<Edge>, directed: bool, weighted: bool) -> Self {
        Self {
            nodes,
            edges,
            directed,
            weighted,
        }
    }

    /// 校验图的结构完整性
    ///
    /// 只检查结构问题（空图、id 重复、悬空端点）；
    /// 算法与图类型是否匹配（例如在有向图上跑 Prim）由调用方负责
    pub fn validate(&self) -> EngineResult<()> {
        if self.nodes.is_empty() {
            return Err(EngineError::InvalidGraph("图中没有节点".to_string()));
        }

        let mut seen: HashSet<NodeId> = HashSet::new();
        for node in &self.nodes {
            if !seen.insert(node.id) {
                return Err(EngineError::InvalidGraph(format!(
                    "节点 id 重复: {}",
                    node.id
                )));
            }
        }

        for edge in &self.edges {
            if !seen.contains(&edge.source) {
                return Err(EngineError::InvalidGraph(format!(
                    "边的起点不存在: {}",
                    edge.source
                )));
            }
            if !seen.contains(&edge.target) {
                return Err(EngineError::InvalidGraph(format!(
                    "边的终点不存在: {}",
                    edge.target
                )));
            }
        }

        Ok(())
    }

    /// 按节点 id 查找标签；校验过的图中 id 必然存在
    pub fn label(&self, id: NodeId) -> &str {
        self.nodes
            .iter()
            .find(|n| n.id == id)
            .map(|n| n.label.as_str())
            .unwrap_or("?")
    }

    /// 节点在插入序中的下标，供基于数组的并查集使用
    pub fn index_of(&self, id: NodeId) -> Option<usize> {
        self.nodes.iter().position(|n| n.id == id)
    }

    /// 按边插入序返回 `id` 的邻居及对应权重
    ///
    /// 有向图只沿 source→target 方向；无向图额外沿 target→source 方向
    pub fn neighbors(&self, id: NodeId) -> Vec<(NodeId, f64)> {
        let mut result = Vec::new();
        for edge in &self.edges {
            if edge.source == id {
                result.push((edge.target, edge.weight_or_default()));
            } else if !self.directed && edge.target == id {
                result.push((edge.source, edge.weight_or_default()));
            }
        }
        result
    }

    /// 解析调用方给出的起点
    ///
    /// 依次尝试：标签精确匹配 → 字符串化的节点 id 匹配 → 兜底第一个节点
    /// 起点不存在不是错误，静默替换为第一个节点
    pub fn resolve_start(&self, start: Option<&str>) -> NodeId {
        if let Some(s) = start {
            if let Some(node) = self.nodes.iter().find(|n| n.label == s) {
                return node.id;
            }
            if let Some(node) = self.nodes.iter().find(|n| n.id.to_string() == s) {
                return node.id;
            }
        }
        self.nodes[0].id
    }
}

/// 权重/距离的显示格式：整数值不带小数点
pub fn format_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}
