//! Kruskal 算法模块
//!
//! 无向图最小生成树，按权稳定排序后逐边尝试合并。
//! 无权图按每条边权重 1 处理；没有起点的概念

use std::sync::Arc;

use crate::core::graph::{format_number, Graph, NodeId};
use crate::core::step::{AlgorithmAux, Selection, Step, StepDraft, StepTrace};
use crate::services::algorithm::union_find::UnionFind;

/// Kruskal 算法结构体
pub struct Kruskal;

/// 单次 Kruskal 运行的局部状态
struct KruskalState {
    uf: UnionFind,
    mst_edges: Vec<(NodeId, NodeId)>,
    mst_weight: f64,
}

impl KruskalState {
    fn new(node_count: usize) -> Self {
        Self {
            uf: UnionFind::new(node_count),
            mst_edges: Vec::new(),
            mst_weight: 0.0,
        }
    }

    /// 当前分区：外层按成员在节点插入序中的首次出现排序，内层标签排序
    fn partition(&mut self, graph: &Graph) -> Vec<Vec<String>> {
        let mut sets: Vec<Vec<String>> = Vec::new();
        let mut roots: Vec<usize> = Vec::new();
        for (index, _) in graph.nodes.iter().enumerate() {
            let root = self.uf.find(index);
            if !roots.contains(&root) {
                roots.push(root);
                sets.push(Vec::new());
            }
        }
        for (index, node) in graph.nodes.iter().enumerate() {
            let root = self.uf.find(index);
            let slot = roots
                .iter()
                .position(|&r| r == root)
                .unwrap_or(roots.len() - 1);
            sets[slot].push(node.label.clone());
        }
        for set in &mut sets {
            set.sort();
        }
        sets
    }

    fn mst_selection(&self) -> Selection {
        let mut nodes: Vec<NodeId> = Vec::new();
        for &(a, b) in &self.mst_edges {
            if !nodes.contains(&a) {
                nodes.push(a);
            }
            if !nodes.contains(&b) {
                nodes.push(b);
            }
        }
        Selection::new(nodes, self.mst_edges.clone())
    }
}

fn edge_text(graph: &Graph, source: NodeId, target: NodeId, weight: f64) -> String {
    format!(
        "{}-{} ({})",
        graph.label(source),
        graph.label(target),
        format_number(weight)
    )
}

impl Kruskal {
    /// 对整张图构建最小生成树并记录每一步
    ///
    /// 选够 `节点数 - 1` 条边即停止；不连通图得到生成森林
    pub fn trace(graph: &Arc<Graph>) -> Vec<Step> {
        log::debug!("Kruskal 开始, 边数={}", graph.edges.len());
        let mut trace = StepTrace::new(graph.clone());
        let node_count = graph.nodes.len();
        let mut state = KruskalState::new(node_count);

        // 稳定排序：同权边保持原有插入序
        let mut sorted: Vec<(NodeId, NodeId, f64)> = graph
            .edges
            .iter()
            .map(|e| (e.source, e.target, e.weight_or_default()))
            .collect();
        sorted.sort_by(|a, b| a.2.partial_cmp(&b.2).unwrap_or(std::cmp::Ordering::Equal));

        let order: Vec<String> = sorted
            .iter()
            .map(|&(s, t, w)| edge_text(graph, s, t, w))
            .collect();
        trace.record(
            StepDraft::new(format!("Sort edges by weight: {}", order.join(", ")))
                .aux(AlgorithmAux::UnionFind {
                    weight: 0.0,
                    sets: state.partition(graph),
                }),
        );

        for &(source, target, weight) in &sorted {
            if state.mst_edges.len() >= node_count.saturating_sub(1) {
                // 已经选满 n-1 条边
                break;
            }
            let (Some(si), Some(ti)) = (graph.index_of(source), graph.index_of(target)) else {
                continue;
            };

            if state.uf.union(si, ti) {
                state.mst_edges.push((source, target));
                state.mst_weight += weight;
                let sets = state.partition(graph);
                trace.record(
                    StepDraft::new(format!(
                        "Add {} to the MST and union its endpoints: total weight {}",
                        edge_text(graph, source, target, weight),
                        format_number(state.mst_weight)
                    ))
                    .highlights(Selection::new(
                        vec![source, target],
                        vec![(source, target)],
                    ))
                    .path(state.mst_selection())
                    .aux(AlgorithmAux::UnionFind {
                        weight: state.mst_weight,
                        sets,
                    }),
                );
            } else {
                let sets = state.partition(graph);
                trace.record(
                    StepDraft::new(format!(
                        "Edge {} would create a cycle - skip",
                        edge_text(graph, source, target, weight)
                    ))
                    .highlights(Selection::new(
                        vec![source, target],
                        vec![(source, target)],
                    ))
                    .path(state.mst_selection())
                    .aux(AlgorithmAux::UnionFind {
                        weight: state.mst_weight,
                        sets,
                    }),
                );
            }
        }

        let chosen: Vec<String> = state
            .mst_edges
            .iter()
            .map(|&(s, t)| format!("{}-{}", graph.label(s), graph.label(t)))
            .collect();
        let sets = state.partition(graph);
        trace.record(
            StepDraft::new(format!(
                "Kruskal complete: edges {}, total weight {}",
                chosen.join(", "),
                format_number(state.mst_weight)
            ))
            .path(state.mst_selection())
            .aux(AlgorithmAux::UnionFind {
                weight: state.mst_weight,
                sets,
            }),
        );

        trace.finish()
    }
}
