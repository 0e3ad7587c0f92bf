//! Prim 算法模块
//!
//! 带权无向图最小生成树，逐点生长。每轮扫描割边（恰有一个端点在树内的边），
//! 取权最小者，平手取先出现的那条

use std::sync::Arc;

use crate::core::graph::{format_number, Graph, NodeId};
use crate::core::step::{AlgorithmAux, Selection, Step, StepDraft, StepTrace};

/// Prim 算法结构体
pub struct Prim;

/// 割边候选：`inside` 在树内，`outside` 在树外
#[derive(Debug, Clone, Copy)]
struct CutEdge {
    inside: NodeId,
    outside: NodeId,
    weight: f64,
}

/// 单次 Prim 运行的局部状态
struct PrimState {
    visited_nodes: Vec<NodeId>,
    mst_edges: Vec<(NodeId, NodeId)>,
    mst_weight: f64,
}

impl PrimState {
    fn new(start: NodeId) -> Self {
        Self {
            visited_nodes: vec![start],
            mst_edges: Vec::new(),
            mst_weight: 0.0,
        }
    }

    /// 按边插入序收集当前割边，无向图两个方向都要检查
    fn cut_edges(&self, graph: &Graph) -> Vec<CutEdge> {
        let mut cut = Vec::new();
        for edge in &graph.edges {
            let source_in = self.visited_nodes.contains(&edge.source);
            let target_in = self.visited_nodes.contains(&edge.target);
            if source_in == target_in {
                continue;
            }
            let (inside, outside) = if source_in {
                (edge.source, edge.target)
            } else {
                (edge.target, edge.source)
            };
            cut.push(CutEdge {
                inside,
                outside,
                weight: edge.weight_or_default(),
            });
        }
        cut
    }

    fn mst_selection(&self) -> Selection {
        Selection::new(self.visited_nodes.clone(), self.mst_edges.clone())
    }
}

fn edge_text(graph: &Graph, edge: &CutEdge) -> String {
    format!(
        "{}-{} ({})",
        graph.label(edge.inside),
        graph.label(edge.outside),
        format_number(edge.weight)
    )
}

impl Prim {
    /// 从 `start` 出发生长最小生成树并记录每一步
    ///
    /// 图不连通时割边会提前耗尽，返回部分生成树（不是错误）
    pub fn trace(graph: &Arc<Graph>, start: NodeId) -> Vec<Step> {
        log::debug!("Prim 开始, start={}", start);
        let mut trace = StepTrace::new(graph.clone());
        let mut state = PrimState::new(start);
        let total = graph.nodes.len();

        trace.record(
            StepDraft::new(format!(
                "Start Prim from {}: MST weight 0",
                graph.label(start)
            ))
            .highlights(Selection::nodes(vec![start]))
            .visited(Selection::nodes(vec![start]))
            .path(state.mst_selection())
            .aux(AlgorithmAux::MstProgress { weight: 0.0 }),
        );

        while state.visited_nodes.len() < total {
            let cut = state.cut_edges(graph);
            let Some(chosen) = cut.iter().copied().reduce(|best, candidate| {
                // 严格小于：平手保留先出现的割边
                if candidate.weight < best.weight {
                    candidate
                } else {
                    best
                }
            }) else {
                // 割边耗尽：不连通，剩余节点无法并入
                break;
            };

            if cut.len() > 1 {
                let candidates: Vec<String> = cut.iter().map(|e| edge_text(graph, e)).collect();
                trace.record(
                    StepDraft::new(format!(
                        "Cut edges: {}; choose {}",
                        candidates.join(", "),
                        edge_text(graph, &chosen)
                    ))
                    .highlights(Selection::new(
                        cut.iter().map(|e| e.outside).collect(),
                        cut.iter().map(|e| (e.inside, e.outside)).collect(),
                    ))
                    .visited(Selection::nodes(state.visited_nodes.clone()))
                    .path(state.mst_selection())
                    .aux(AlgorithmAux::MstProgress {
                        weight: state.mst_weight,
                    }),
                );
            }

            state.visited_nodes.push(chosen.outside);
            state.mst_edges.push((chosen.inside, chosen.outside));
            state.mst_weight += chosen.weight;

            trace.record(
                StepDraft::new(format!(
                    "Add {} to the MST via {}: total weight {}",
                    graph.label(chosen.outside),
                    edge_text(graph, &chosen),
                    format_number(state.mst_weight)
                ))
                .highlights(Selection::new(
                    vec![chosen.outside],
                    vec![(chosen.inside, chosen.outside)],
                ))
                .visited(Selection::nodes(state.visited_nodes.clone()))
                .path(state.mst_selection())
                .aux(AlgorithmAux::MstProgress {
                    weight: state.mst_weight,
                }),
            );
        }

        let description = if state.visited_nodes.len() < total {
            format!(
                "Prim stopped: MST covers {} of {} nodes (disconnected graph), total weight {}",
                state.visited_nodes.len(),
                total,
                format_number(state.mst_weight)
            )
        } else {
            format!(
                "Prim complete: total weight {}",
                format_number(state.mst_weight)
            )
        };
        trace.record(
            StepDraft::new(description)
                .visited(Selection::nodes(state.visited_nodes.clone()))
                .path(state.mst_selection())
                .aux(AlgorithmAux::MstProgress {
                    weight: state.mst_weight,
                }),
        );

        trace.finish()
    }
}
