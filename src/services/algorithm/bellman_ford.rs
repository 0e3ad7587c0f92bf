//! Bellman-Ford 算法模块
//!
//! 支持负权边的单源最短路径。最多做 |V|-1 轮全边松弛，
//! 整轮无更新即可提前收敛；收敛后再扫一遍，仍可松弛说明存在负权环。
//! 负权环是以 Step 数据报告的终态，不是错误

use std::collections::HashMap;
use std::sync::Arc;

use crate::core::graph::{format_number, Graph, NodeId};
use crate::core::step::{
    AlgorithmAux, Distance, DistanceTable, Selection, Step, StepDraft, StepTrace,
};

/// Bellman-Ford 算法结构体
pub struct BellmanFord;

/// 单次 Bellman-Ford 运行的局部状态
struct BellmanFordState {
    distances: HashMap<NodeId, f64>,
    predecessors: HashMap<NodeId, NodeId>,
}

impl BellmanFordState {
    fn new(graph: &Graph, start: NodeId) -> Self {
        let mut distances = HashMap::new();
        for node in &graph.nodes {
            distances.insert(node.id, f64::INFINITY);
        }
        distances.insert(start, 0.0);
        Self {
            distances,
            predecessors: HashMap::new(),
        }
    }

    fn table(&self, graph: &Graph) -> DistanceTable {
        graph
            .nodes
            .iter()
            .map(|n| (n.label.clone(), Distance::from(self.distances[&n.id])))
            .collect()
    }

    /// 沿前驱链把所有可达节点合并成一个 path 集合，供渲染端整体高亮
    fn path_selection(&self, graph: &Graph) -> Selection {
        let nodes: Vec<NodeId> = graph
            .nodes
            .iter()
            .filter(|n| self.distances[&n.id].is_finite())
            .map(|n| n.id)
            .collect();
        let edges: Vec<(NodeId, NodeId)> = graph
            .nodes
            .iter()
            .filter_map(|n| self.predecessors.get(&n.id).map(|&p| (p, n.id)))
            .collect();
        Selection::new(nodes, edges)
    }
}

/// 按边插入序展开全部有向弧；无向边两个方向各算一条
fn arcs(graph: &Graph) -> Vec<(NodeId, NodeId, f64)> {
    let mut result = Vec::new();
    for edge in &graph.edges {
        let weight = edge.weight_or_default();
        result.push((edge.source, edge.target, weight));
        if !graph.directed {
            result.push((edge.target, edge.source, weight));
        }
    }
    result
}

impl BellmanFord {
    /// 从 `start` 出发计算最短路径并记录每一轮松弛
    pub fn trace(graph: &Arc<Graph>, start: NodeId) -> Vec<Step> {
        log::debug!("Bellman-Ford 开始, start={}", start);
        let mut trace = StepTrace::new(graph.clone());
        let mut state = BellmanFordState::new(graph, start);
        let arcs = arcs(graph);
        let total_passes = graph.nodes.len().saturating_sub(1);

        trace.record(
            StepDraft::new(format!(
                "Initialize distances: {} = 0, all other nodes ∞ (up to {} relaxation passes)",
                graph.label(start),
                total_passes
            ))
            .highlights(Selection::nodes(vec![start]))
            .aux(AlgorithmAux::Pass {
                current: 0,
                total: total_passes,
                table: state.table(graph),
            }),
        );

        let mut converged_early = false;
        let mut passes_run = 0;
        for pass in 1..=total_passes {
            passes_run = pass;
            let mut relaxed_edges: Vec<(NodeId, NodeId)> = Vec::new();
            let mut relaxed_nodes: Vec<NodeId> = Vec::new();
            let mut details: Vec<String> = Vec::new();

            for &(source, target, weight) in &arcs {
                let dist_source = state.distances[&source];
                if !dist_source.is_finite() {
                    continue;
                }
                let candidate = dist_source + weight;
                let old = state.distances[&target];
                if candidate < old {
                    state.distances.insert(target, candidate);
                    state.predecessors.insert(target, source);
                    relaxed_edges.push((source, target));
                    if !relaxed_nodes.contains(&target) {
                        relaxed_nodes.push(target);
                    }
                    details.push(format!(
                        "{} = min({}, {} + {}) = {}",
                        graph.label(target),
                        Distance::from(old),
                        format_number(dist_source),
                        format_number(weight),
                        format_number(candidate)
                    ));
                }
            }

            if relaxed_edges.is_empty() {
                trace.record(
                    StepDraft::new(format!(
                        "Pass {} of {}: no distance changed, stopping early",
                        pass, total_passes
                    ))
                    .aux(AlgorithmAux::Pass {
                        current: pass,
                        total: total_passes,
                        table: state.table(graph),
                    }),
                );
                converged_early = true;
                break;
            }

            trace.record(
                StepDraft::new(format!(
                    "Pass {} of {}: {}",
                    pass,
                    total_passes,
                    details.join("; ")
                ))
                .highlights(Selection::new(relaxed_nodes, relaxed_edges))
                .aux(AlgorithmAux::Pass {
                    current: pass,
                    total: total_passes,
                    table: state.table(graph),
                }),
            );
        }

        // 提前收敛时不可能再有可松弛的边，负权环检查只在跑满轮次后进行
        if !converged_early {
            let still_relaxable: Vec<(NodeId, NodeId)> = arcs
                .iter()
                .filter(|&&(source, target, weight)| {
                    let dist_source = state.distances[&source];
                    dist_source.is_finite() && dist_source + weight < state.distances[&target]
                })
                .map(|&(source, target, _)| (source, target))
                .collect();

            if !still_relaxable.is_empty() {
                let texts: Vec<String> = still_relaxable
                    .iter()
                    .map(|&(s, t)| format!("{} → {}", graph.label(s), graph.label(t)))
                    .collect();
                trace.record(
                    StepDraft::new(format!(
                        "After {} passes these edges can still relax: {}",
                        total_passes,
                        texts.join(", ")
                    ))
                    .highlights(Selection::new(Vec::new(), still_relaxable))
                    .aux(AlgorithmAux::Pass {
                        current: total_passes,
                        total: total_passes,
                        table: state.table(graph),
                    }),
                );
                trace.record(
                    StepDraft::new(
                        "Negative-weight cycle detected: shortest paths are undefined".to_string(),
                    )
                    .aux(AlgorithmAux::Pass {
                        current: total_passes,
                        total: total_passes,
                        table: state.table(graph),
                    }),
                );
                return trace.finish();
            }
        }

        let summary: Vec<String> = graph
            .nodes
            .iter()
            .map(|n| format!("{} = {}", n.label, Distance::from(state.distances[&n.id])))
            .collect();
        trace.record(
            StepDraft::new(format!("Bellman-Ford complete: {}", summary.join(", ")))
                .path(state.path_selection(graph))
                .aux(AlgorithmAux::Pass {
                    current: passes_run,
                    total: total_passes,
                    table: state.table(graph),
                }),
        );

        trace.finish()
    }
}
