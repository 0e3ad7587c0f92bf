//! 内置示例图模块
//!
//! 每个算法有一张独立的示例图，调用方未提供图时由分发器代入。
//! 显式命名的构造函数便于测试直接引用，而不是埋在 runner 里的隐式兜底

use crate::core::graph::{Edge, Graph, Node};
use crate::services::dispatch::AlgorithmId;

/// 按算法 id 取对应的示例图
pub fn sample_graph(id: AlgorithmId) -> Graph {
    match id {
        AlgorithmId::Bfs => bfs_sample(),
        AlgorithmId::Dfs => dfs_sample(),
        AlgorithmId::Dijkstra => dijkstra_sample(),
        AlgorithmId::Prim => prim_sample(),
        AlgorithmId::Kruskal => kruskal_sample(),
        AlgorithmId::BellmanFord => bellman_ford_sample(),
    }
}

/// 无向无权树：A-B, A-C, B-D, C-E
pub fn bfs_sample() -> Graph {
    Graph::new(
        vec![
            Node::new(0, "A"),
            Node::new(1, "B"),
            Node::new(2, "C"),
            Node::new(3, "D"),
            Node::new(4, "E"),
        ],
        vec![
            Edge::new(0, 1),
            Edge::new(0, 2),
            Edge::new(1, 3),
            Edge::new(2, 4),
        ],
        false,
        false,
    )
}

/// 两条分支的无向图，能展示深入和回溯：A-B-C-D 和 A-E-F
pub fn dfs_sample() -> Graph {
    Graph::new(
        vec![
            Node::new(0, "A"),
            Node::new(1, "B"),
            Node::new(2, "C"),
            Node::new(3, "D"),
            Node::new(4, "E"),
            Node::new(5, "F"),
        ],
        vec![
            Edge::new(0, 1),
            Edge::new(1, 2),
            Edge::new(2, 3),
            Edge::new(0, 4),
            Edge::new(4, 5),
        ],
        false,
        false,
    )
}

/// 有向带权图：A→B(4), A→C(2), C→B(1), B→D(5)
pub fn dijkstra_sample() -> Graph {
    Graph::new(
        vec![
            Node::new(0, "A"),
            Node::new(1, "B"),
            Node::new(2, "C"),
            Node::new(3, "D"),
        ],
        vec![
            Edge::weighted(0, 1, 4.0),
            Edge::weighted(0, 2, 2.0),
            Edge::weighted(2, 1, 1.0),
            Edge::weighted(1, 3, 5.0),
        ],
        true,
        true,
    )
}

/// 无向带权图，有多条同割竞争边：A-B(2), A-C(3), B-C(1), B-D(4), C-E(5), D-E(2)
pub fn prim_sample() -> Graph {
    Graph::new(
        vec![
            Node::new(0, "A"),
            Node::new(1, "B"),
            Node::new(2, "C"),
            Node::new(3, "D"),
            Node::new(4, "E"),
        ],
        vec![
            Edge::weighted(0, 1, 2.0),
            Edge::weighted(0, 2, 3.0),
            Edge::weighted(1, 2, 1.0),
            Edge::weighted(1, 3, 4.0),
            Edge::weighted(2, 4, 5.0),
            Edge::weighted(3, 4, 2.0),
        ],
        false,
        true,
    )
}

/// 无向带权图：(A,B,3), (A,C,5), (B,C,1), (B,D,4), (C,D,2)
pub fn kruskal_sample() -> Graph {
    Graph::new(
        vec![
            Node::new(0, "A"),
            Node::new(1, "B"),
            Node::new(2, "C"),
            Node::new(3, "D"),
        ],
        vec![
            Edge::weighted(0, 1, 3.0),
            Edge::weighted(0, 2, 5.0),
            Edge::weighted(1, 2, 1.0),
            Edge::weighted(1, 3, 4.0),
            Edge::weighted(2, 3, 2.0),
        ],
        false,
        true,
    )
}

/// 含负权边且带一个可达负环的有向图：
/// A→B(4), A→C(2), C→B(-1), B→D(2), D→E(1), E→B(-4)；B→D→E→B 总权 -1
pub fn bellman_ford_sample() -> Graph {
    Graph::new(
        vec![
            Node::new(0, "A"),
            Node::new(1, "B"),
            Node::new(2, "C"),
            Node::new(3, "D"),
            Node::new(4, "E"),
        ],
        vec![
            Edge::weighted(0, 1, 4.0),
            Edge::weighted(0, 2, 2.0),
            Edge::weighted(2, 1, -1.0),
            Edge::weighted(1, 3, 2.0),
            Edge::weighted(3, 4, 1.0),
            Edge::weighted(4, 1, -4.0),
        ],
        true,
        true,
    )
}
