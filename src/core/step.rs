//! Step 契约模块
//!
//! 每个 Step 是一帧完整、自包含的状态快照，渲染端可以任意正放、倒放、
//! 跳转而不需要重新计算。Step 创建后不再修改，index 严格递增

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use crate::core::graph::{Graph, NodeId};

/// 距离值，`Infinite` 渲染为 "∞"
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Distance {
    Finite(f64),
    Infinite,
}

impl Distance {
    pub fn is_finite(&self) -> bool {
        matches!(self, Distance::Finite(_))
    }
}

impl From<f64> for Distance {
    fn from(value: f64) -> Self {
        if value.is_infinite() {
            Distance::Infinite
        } else {
            Distance::Finite(value)
        }
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Distance::Finite(v) => write!(f, "{}", crate::core::graph::format_number(*v)),
            Distance::Infinite => write!(f, "∞"),
        }
    }
}

impl Serialize for Distance {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Distance::Finite(v) => serializer.serialize_f64(*v),
            Distance::Infinite => serializer.serialize_str("∞"),
        }
    }
}

/// 距离表：标签 → 距离，按标签排序保证输出稳定
pub type DistanceTable = BTreeMap<String, Distance>;

/// 一组需要着色的节点和边（边以端点对表示）
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Selection {
    pub nodes: Vec<NodeId>,
    pub edges: Vec<(NodeId, NodeId)>,
}

impl Selection {
    pub fn nodes(nodes: Vec<NodeId>) -> Self {
        Self {
            nodes,
            edges: Vec::new(),
        }
    }

    pub fn new(nodes: Vec<NodeId>, edges: Vec<(NodeId, NodeId)>) -> Self {
        Self { nodes, edges }
    }
}

/// 算法专属的附加状态，每次运行只会出现其中一种变体
///
/// Kruskal 的 MST 权重与并查集分区合并为 `UnionFind` 变体，
/// Bellman-Ford 的轮次计数与距离表合并为 `Pass` 变体
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum AlgorithmAux {
    /// BFS 队列内容（FIFO 序的标签）
    Queue { labels: Vec<String> },
    /// DFS 栈内容（栈底到栈顶的标签）
    Stack { labels: Vec<String> },
    /// Dijkstra 距离表
    Distances { table: DistanceTable },
    /// Prim 已累计的 MST 权重
    MstProgress { weight: f64 },
    /// Kruskal 的 MST 权重与并查集分区（每个内层列表按标签排序）
    UnionFind { weight: f64, sets: Vec<Vec<String>> },
    /// Bellman-Ford 松弛轮次与当前距离表
    Pass {
        current: usize,
        total: usize,
        table: DistanceTable,
    },
}

/// 单步状态快照
///
/// `graph` 是整次运行共享的同一个 `Arc<Graph>`，渲染端只按 index 取帧
#[derive(Debug, Clone, Serialize)]
pub struct Step {
    pub index: usize,
    pub description: String,
    pub graph: Arc<Graph>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highlights: Option<Selection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visited: Option<Selection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<Selection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aux: Option<AlgorithmAux>,
}

/// 待提交的 Step 内容，由 `StepTrace` 补上 index 和共享图引用
#[derive(Debug, Clone, Default)]
pub struct StepDraft {
    pub description: String,
    pub highlights: Option<Selection>,
    pub visited: Option<Selection>,
    pub path: Option<Selection>,
    pub aux: Option<AlgorithmAux>,
}

impl StepDraft {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            ..Default::default()
        }
    }

    pub fn highlights(mut self, selection: Selection) -> Self {
        self.highlights = Some(selection);
        self
    }

    pub fn visited(mut self, selection: Selection) -> Self {
        self.visited = Some(selection);
        self
    }

    pub fn path(mut self, selection: Selection) -> Self {
        self.path = Some(selection);
        self
    }

    pub fn aux(mut self, aux: AlgorithmAux) -> Self {
        self.aux = Some(aux);
        self
    }
}

/// 单次运行的 Step 记录器
///
/// 持有共享图引用，按提交顺序分配 index，运行结束后整体交还给调用方
#[derive(Debug)]
pub struct StepTrace {
    graph: Arc<Graph>,
    steps: Vec<Step>,
}

impl StepTrace {
    pub fn new(graph: Arc<Graph>) -> Self {
        Self {
            graph,
            steps: Vec::new(),
        }
    }

    pub fn graph(&self) -> &Arc<Graph> {
        &self.graph
    }

    pub fn record(&mut self, draft: StepDraft) {
        self.steps.push(Step {
            index: self.steps.len(),
            description: draft.description,
            graph: self.graph.clone(),
            highlights: draft.highlights,
            visited: draft.visited,
            path: draft.path,
            aux: draft.aux,
        });
    }

    pub fn finish(self) -> Vec<Step> {
        self.steps
    }
}
