//! Dijkstra 算法模块
//!
//! 带权图单源最短路径。权重假定非负（不做显式检查，负权请用 Bellman-Ford）
//! 选点用线性扫描而不是堆，平手按节点插入序决定，保证逐步回放完全确定

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use crate::core::graph::{format_number, Graph, NodeId};
use crate::core::step::{
    AlgorithmAux, Distance, DistanceTable, Selection, Step, StepDraft, StepTrace,
};

/// Dijkstra 算法结构体
pub struct Dijkstra;

/// 单次 Dijkstra 运行的局部状态
struct DijkstraState {
    distances: HashMap<NodeId, f64>,
    predecessors: HashMap<NodeId, NodeId>,
    unvisited: HashSet<NodeId>,
    visited_nodes: Vec<NodeId>,
}

impl DijkstraState {
    fn new(graph: &Graph, start: NodeId) -> Self {
        let mut distances = HashMap::new();
        let mut unvisited = HashSet::new();
        for node in &graph.nodes {
            distances.insert(node.id, f64::INFINITY);
            unvisited.insert(node.id);
        }
        distances.insert(start, 0.0);
        Self {
            distances,
            predecessors: HashMap::new(),
            unvisited,
            visited_nodes: Vec::new(),
        }
    }

    /// 未访问节点中距离最小且有限者，按节点插入序破平手
    fn next_node(&self, graph: &Graph) -> Option<NodeId> {
        let mut best: Option<(NodeId, f64)> = None;
        for node in &graph.nodes {
            if !self.unvisited.contains(&node.id) {
                continue;
            }
            let dist = self.distances[&node.id];
            if !dist.is_finite() {
                continue;
            }
            match best {
                Some((_, d)) if dist >= d => {}
                _ => best = Some((node.id, dist)),
            }
        }
        best.map(|(id, _)| id)
    }

    fn table(&self, graph: &Graph) -> DistanceTable {
        graph
            .nodes
            .iter()
            .map(|n| (n.label.clone(), Distance::from(self.distances[&n.id])))
            .collect()
    }

    /// 已确定节点及其最短路径树边（前驱边），按节点插入序
    fn visited_selection(&self, graph: &Graph) -> Selection {
        let edges = graph
            .nodes
            .iter()
            .filter(|n| self.visited_nodes.contains(&n.id))
            .filter_map(|n| self.predecessors.get(&n.id).map(|&p| (p, n.id)))
            .collect();
        Selection::new(self.visited_nodes.clone(), edges)
    }
}

impl Dijkstra {
    /// 从 `start` 出发计算最短路径并记录每一步
    pub fn trace(graph: &Arc<Graph>, start: NodeId) -> Vec<Step> {
        log::debug!("Dijkstra 开始, start={}", start);
        let mut trace = StepTrace::new(graph.clone());
        let mut state = DijkstraState::new(graph, start);

        trace.record(
            StepDraft::new(format!(
                "Initialize distances: {} = 0, all other nodes ∞",
                graph.label(start)
            ))
            .highlights(Selection::nodes(vec![start]))
            .aux(AlgorithmAux::Distances {
                table: state.table(graph),
            }),
        );

        while let Some(current) = state.next_node(graph) {
            state.unvisited.remove(&current);
            state.visited_nodes.push(current);

            trace.record(
                StepDraft::new(format!(
                    "Visit {} (distance {})",
                    graph.label(current),
                    format_number(state.distances[&current])
                ))
                .highlights(Selection::nodes(vec![current]))
                .visited(state.visited_selection(graph))
                .aux(AlgorithmAux::Distances {
                    table: state.table(graph),
                }),
            );

            // 对每条指向未访问邻居的出边做松弛；每个节点至多产生一条松弛 Step
            let mut improved: Vec<NodeId> = Vec::new();
            let mut improved_edges: Vec<(NodeId, NodeId)> = Vec::new();
            let mut details: Vec<String> = Vec::new();
            let mut had_candidates = false;
            let dist_current = state.distances[&current];

            for (neighbor, weight) in graph.neighbors(current) {
                if !state.unvisited.contains(&neighbor) {
                    continue;
                }
                had_candidates = true;
                let old = state.distances[&neighbor];
                let candidate = dist_current + weight;
                if candidate < old {
                    state.distances.insert(neighbor, candidate);
                    state.predecessors.insert(neighbor, current);
                    improved.push(neighbor);
                    improved_edges.push((current, neighbor));
                    details.push(format!(
                        "{} = min({}, {} + {}) = {}",
                        graph.label(neighbor),
                        Distance::from(old),
                        format_number(dist_current),
                        format_number(weight),
                        format_number(candidate)
                    ));
                }
            }

            if !improved.is_empty() {
                trace.record(
                    StepDraft::new(details.join("; "))
                        .highlights(Selection::new(improved, improved_edges))
                        .visited(state.visited_selection(graph))
                        .aux(AlgorithmAux::Distances {
                            table: state.table(graph),
                        }),
                );
            } else if had_candidates {
                trace.record(
                    StepDraft::new(format!(
                        "No shorter path found from {}",
                        graph.label(current)
                    ))
                    .highlights(Selection::nodes(vec![current]))
                    .visited(state.visited_selection(graph))
                    .aux(AlgorithmAux::Distances {
                        table: state.table(graph),
                    }),
                );
            }
        }

        // 剩余不可达节点保持 ∞
        let summary: Vec<String> = graph
            .nodes
            .iter()
            .map(|n| format!("{} = {}", n.label, Distance::from(state.distances[&n.id])))
            .collect();
        trace.record(
            StepDraft::new(format!("Dijkstra complete: {}", summary.join(", ")))
                .visited(state.visited_selection(graph))
                .aux(AlgorithmAux::Distances {
                    table: state.table(graph),
                }),
        );

        trace.finish()
    }
}
