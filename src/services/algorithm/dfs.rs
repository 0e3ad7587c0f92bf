//! DFS 算法模块
//!
//! 深度优先遍历，使用显式 LIFO 栈而不是调用递归，
//! 这样压栈、访问、回溯都是可独立观察的 Step

use std::collections::HashSet;
use std::sync::Arc;

use crate::core::graph::{Graph, NodeId};
use crate::core::step::{AlgorithmAux, Selection, Step, StepDraft, StepTrace};

/// DFS 算法结构体
pub struct Dfs;

/// 单次 DFS 运行的局部状态
struct DfsState {
    stack: Vec<NodeId>,
    seen: HashSet<NodeId>,
    visited_nodes: Vec<NodeId>,
    visited_edges: Vec<(NodeId, NodeId)>,
}

impl DfsState {
    fn new(start: NodeId) -> Self {
        Self {
            stack: vec![start],
            seen: HashSet::new(),
            visited_nodes: Vec::new(),
            visited_edges: Vec::new(),
        }
    }

    fn stack_labels(&self, graph: &Graph) -> Vec<String> {
        self.stack.iter().map(|&n| graph.label(n).to_string()).collect()
    }

    fn visited_selection(&self) -> Selection {
        Selection::new(self.visited_nodes.clone(), self.visited_edges.clone())
    }
}

impl Dfs {
    /// 从 `start` 出发做深度优先遍历，返回完整的 Step 序列
    ///
    /// 邻居选择按边插入序取第一个未访问者（不是按标签排序）
    pub fn trace(graph: &Arc<Graph>, start: NodeId) -> Vec<Step> {
        log::debug!("DFS 开始, start={}", start);
        let mut trace = StepTrace::new(graph.clone());
        let mut state = DfsState::new(start);

        trace.record(
            StepDraft::new(format!("Push start node {} onto the stack", graph.label(start)))
                .highlights(Selection::nodes(vec![start]))
                .aux(AlgorithmAux::Stack {
                    labels: state.stack_labels(graph),
                }),
        );

        loop {
            let Some(&top) = state.stack.last() else {
                break;
            };

            if state.seen.insert(top) {
                state.visited_nodes.push(top);
                trace.record(
                    StepDraft::new(format!("Visit {}", graph.label(top)))
                        .highlights(Selection::nodes(vec![top]))
                        .visited(state.visited_selection())
                        .aux(AlgorithmAux::Stack {
                            labels: state.stack_labels(graph),
                        }),
                );
                continue;
            }

            let next = graph
                .neighbors(top)
                .into_iter()
                .map(|(n, _)| n)
                .find(|n| !state.seen.contains(n));

            if let Some(neighbor) = next {
                state.stack.push(neighbor);
                state.visited_edges.push((top, neighbor));
                trace.record(
                    StepDraft::new(format!(
                        "Advance along edge {} → {}",
                        graph.label(top),
                        graph.label(neighbor)
                    ))
                    .highlights(Selection::new(vec![neighbor], vec![(top, neighbor)]))
                    .visited(state.visited_selection())
                    .aux(AlgorithmAux::Stack {
                        labels: state.stack_labels(graph),
                    }),
                );
            } else {
                state.stack.pop();
                if let Some(&new_top) = state.stack.last() {
                    trace.record(
                        StepDraft::new(format!("Backtrack to {}", graph.label(new_top)))
                            .highlights(Selection::nodes(vec![new_top]))
                            .visited(state.visited_selection())
                            .aux(AlgorithmAux::Stack {
                                labels: state.stack_labels(graph),
                            }),
                    );
                } else {
                    let labels: Vec<&str> =
                        state.visited_nodes.iter().map(|&n| graph.label(n)).collect();
                    trace.record(
                        StepDraft::new(format!(
                            "Stack empty, DFS complete: visited {}",
                            labels.join(", ")
                        ))
                        .visited(state.visited_selection())
                        .aux(AlgorithmAux::Stack { labels: Vec::new() }),
                    );
                }
            }
        }

        trace.finish()
    }
}
