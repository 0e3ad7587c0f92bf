//! 算法分发模块
//!
//! 把算法 id 和参数映射到对应 runner，一次性返回完整的 Step 序列。
//! 同样的输入两次调用产出逐字节相同的结果，运行之间不共享任何可变状态

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::core::error::{EngineError, EngineResult};
use crate::core::graph::Graph;
use crate::core::step::Step;
use crate::services::algorithm::{defaults, BellmanFord, Bfs, Dfs, Dijkstra, Kruskal, Prim};

/// 支持的算法标识
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AlgorithmId {
    Bfs,
    Dfs,
    Dijkstra,
    Prim,
    Kruskal,
    BellmanFord,
}

impl AlgorithmId {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlgorithmId::Bfs => "bfs",
            AlgorithmId::Dfs => "dfs",
            AlgorithmId::Dijkstra => "dijkstra",
            AlgorithmId::Prim => "prim",
            AlgorithmId::Kruskal => "kruskal",
            AlgorithmId::BellmanFord => "bellman-ford",
        }
    }

    pub fn all() -> [AlgorithmId; 6] {
        [
            AlgorithmId::Bfs,
            AlgorithmId::Dfs,
            AlgorithmId::Dijkstra,
            AlgorithmId::Prim,
            AlgorithmId::Kruskal,
            AlgorithmId::BellmanFord,
        ]
    }
}

impl fmt::Display for AlgorithmId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AlgorithmId {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bfs" => Ok(AlgorithmId::Bfs),
            "dfs" => Ok(AlgorithmId::Dfs),
            "dijkstra" => Ok(AlgorithmId::Dijkstra),
            "prim" => Ok(AlgorithmId::Prim),
            "kruskal" => Ok(AlgorithmId::Kruskal),
            "bellman-ford" => Ok(AlgorithmId::BellmanFord),
            other => Err(EngineError::UnknownAlgorithm(other.to_string())),
        }
    }
}

/// 运行参数
///
/// `graph` 缺省时使用对应算法的内置示例图；
/// `start_vertex` 可以是标签或字符串化的节点 id，解析失败兜底第一个节点；
/// Kruskal 没有起点概念，忽略该参数
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_vertex: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub graph: Option<Graph>,
}

/// 运行指定算法，返回完整的 Step 序列（非空，至少两步）
///
/// 只校验图的结构完整性；算法与图类型是否匹配（如在有向图上跑 Prim、
/// 给 Dijkstra 负权边）由调用方负责，引擎按原样模拟
pub fn run_algorithm(id: AlgorithmId, params: RunParams) -> EngineResult<Vec<Step>> {
    let graph = params.graph.unwrap_or_else(|| defaults::sample_graph(id));
    graph.validate()?;
    let graph = Arc::new(graph);
    let start = graph.resolve_start(params.start_vertex.as_deref());

    log::debug!(
        "运行算法 {}, 节点数={}, 边数={}, start={}",
        id,
        graph.nodes.len(),
        graph.edges.len(),
        start
    );

    let steps = match id {
        AlgorithmId::Bfs => Bfs::trace(&graph, start),
        AlgorithmId::Dfs => Dfs::trace(&graph, start),
        AlgorithmId::Dijkstra => Dijkstra::trace(&graph, start),
        AlgorithmId::Prim => Prim::trace(&graph, start),
        AlgorithmId::Kruskal => Kruskal::trace(&graph),
        AlgorithmId::BellmanFord => BellmanFord::trace(&graph, start),
    };

    log::debug!("算法 {} 完成, 共 {} 步", id, steps.len());
    Ok(steps)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::graph::Node;

    #[test]
    fn test_parse_ids() {
        assert_eq!(
            "bellman-ford".parse::<AlgorithmId>(),
            Ok(AlgorithmId::BellmanFord)
        );
        assert_eq!(
            "floyd".parse::<AlgorithmId>(),
            Err(EngineError::UnknownAlgorithm("floyd".to_string()))
        );
    }

    #[test]
    fn test_id_round_trip() {
        for id in AlgorithmId::all() {
            assert_eq!(id.as_str().parse::<AlgorithmId>(), Ok(id));
        }
    }

    #[test]
    fn test_default_graph_substituted() {
        let steps = run_algorithm(AlgorithmId::Bfs, RunParams::default())
            .expect("default run should succeed");
        assert!(!steps.is_empty());
        assert_eq!(steps[0].graph.as_ref(), &defaults::bfs_sample());
    }

    #[test]
    fn test_invalid_graph_rejected() {
        let params = RunParams {
            start_vertex: None,
            graph: Some(Graph::new(vec![], vec![], false, false)),
        };
        assert!(run_algorithm(AlgorithmId::Dfs, params).is_err());
    }

    #[test]
    fn test_kruskal_ignores_start_vertex() {
        let with_start = run_algorithm(
            AlgorithmId::Kruskal,
            RunParams {
                start_vertex: Some("D".to_string()),
                graph: None,
            },
        )
        .expect("kruskal run");
        let without = run_algorithm(AlgorithmId::Kruskal, RunParams::default())
            .expect("kruskal run");

        let a: Vec<&str> = with_start.iter().map(|s| s.description.as_str()).collect();
        let b: Vec<&str> = without.iter().map(|s| s.description.as_str()).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_single_node_run_non_empty() {
        let params = RunParams {
            start_vertex: None,
            graph: Some(Graph::new(vec![Node::new(0, "A")], vec![], false, false)),
        };
        let steps = run_algorithm(AlgorithmId::Bfs, params).expect("single node run");
        assert!(steps.len() >= 2);
    }
}
