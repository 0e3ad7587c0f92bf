//! BFS 算法模块
//!
//! 广度优先遍历，显式 FIFO 队列，每个状态变化记录一个 Step

use std::collections::{HashSet, VecDeque};
use std::sync::Arc;

use crate::core::graph::{Graph, NodeId};
use crate::core::step::{AlgorithmAux, Selection, Step, StepDraft, StepTrace};

/// BFS 算法结构体
pub struct Bfs;

/// 单次 BFS 运行的局部状态
struct BfsState {
    queue: VecDeque<NodeId>,
    seen: HashSet<NodeId>,
    visited_nodes: Vec<NodeId>,
    visited_edges: Vec<(NodeId, NodeId)>,
}

impl BfsState {
    fn new(start: NodeId) -> Self {
        let mut seen = HashSet::new();
        seen.insert(start);
        Self {
            queue: VecDeque::from([start]),
            seen,
            visited_nodes: vec![start],
            visited_edges: Vec::new(),
        }
    }

    fn queue_labels(&self, graph: &Graph) -> Vec<String> {
        self.queue.iter().map(|&n| graph.label(n).to_string()).collect()
    }

    fn visited_selection(&self) -> Selection {
        Selection::new(self.visited_nodes.clone(), self.visited_edges.clone())
    }
}

impl Bfs {
    /// 从 `start` 出发做广度优先遍历，返回完整的 Step 序列
    ///
    /// 最后一个 Step 的 visited 集合即从起点可达的全部节点；
    /// 不可达节点只是不出现在 visited 中，不算错误
    pub fn trace(graph: &Arc<Graph>, start: NodeId) -> Vec<Step> {
        log::debug!("BFS 开始, start={}", start);
        let mut trace = StepTrace::new(graph.clone());
        let mut state = BfsState::new(start);

        trace.record(
            StepDraft::new(format!(
                "Start BFS from {}: enqueue {}",
                graph.label(start),
                graph.label(start)
            ))
            .highlights(Selection::nodes(vec![start]))
            .visited(state.visited_selection())
            .aux(AlgorithmAux::Queue {
                labels: state.queue_labels(graph),
            }),
        );

        while let Some(current) = state.queue.pop_front() {
            let mut discovered: Vec<NodeId> = Vec::new();
            let mut discovered_edges: Vec<(NodeId, NodeId)> = Vec::new();

            for (neighbor, _) in graph.neighbors(current) {
                if state.seen.insert(neighbor) {
                    state.visited_nodes.push(neighbor);
                    state.visited_edges.push((current, neighbor));
                    state.queue.push_back(neighbor);
                    discovered.push(neighbor);
                    discovered_edges.push((current, neighbor));
                }
            }

            if !discovered.is_empty() {
                let labels: Vec<&str> = discovered.iter().map(|&n| graph.label(n)).collect();
                trace.record(
                    StepDraft::new(format!(
                        "Dequeue {}: discover {} and enqueue",
                        graph.label(current),
                        labels.join(", ")
                    ))
                    .highlights(Selection::new(discovered, discovered_edges))
                    .visited(state.visited_selection())
                    .aux(AlgorithmAux::Queue {
                        labels: state.queue_labels(graph),
                    }),
                );
            } else if !state.queue.is_empty() {
                // 没有新邻居也要落一步，反映队列变化
                trace.record(
                    StepDraft::new(format!(
                        "Dequeue {}: no unvisited neighbors",
                        graph.label(current)
                    ))
                    .highlights(Selection::nodes(vec![current]))
                    .visited(state.visited_selection())
                    .aux(AlgorithmAux::Queue {
                        labels: state.queue_labels(graph),
                    }),
                );
            }
            // 队列已空且没有新发现：直接进入结束步
        }

        let labels: Vec<&str> = state.visited_nodes.iter().map(|&n| graph.label(n)).collect();
        trace.record(
            StepDraft::new(format!(
                "BFS complete: visited {} ({} of {} nodes)",
                labels.join(", "),
                state.visited_nodes.len(),
                graph.nodes.len()
            ))
            .visited(state.visited_selection())
            .aux(AlgorithmAux::Queue { labels: Vec::new() }),
        );

        trace.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::graph::{Edge, Node};

    fn line_graph() -> Arc<Graph> {
        // A - B - C 无向链
        Arc::new(Graph::new(
            vec![Node::new(0, "A"), Node::new(1, "B"), Node::new(2, "C")],
            vec![Edge::new(0, 1), Edge::new(1, 2)],
            false,
            false,
        ))
    }

    #[test]
    fn test_visits_all_reachable() {
        let graph = line_graph();
        let steps = Bfs::trace(&graph, 0);

        let last = steps.last().expect("trace should not be empty");
        let visited = last.visited.as_ref().expect("final step has visited set");
        assert_eq!(visited.nodes, vec![0, 1, 2]);
    }

    #[test]
    fn test_first_step_queue_contains_start() {
        let graph = line_graph();
        let steps = Bfs::trace(&graph, 0);

        match &steps[0].aux {
            Some(AlgorithmAux::Queue { labels }) => assert_eq!(labels, &vec!["A".to_string()]),
            other => panic!("expected queue aux, got {:?}", other),
        }
    }

    #[test]
    fn test_final_queue_empty() {
        let graph = line_graph();
        let steps = Bfs::trace(&graph, 0);

        match &steps.last().expect("non-empty").aux {
            Some(AlgorithmAux::Queue { labels }) => assert!(labels.is_empty()),
            other => panic!("expected queue aux, got {:?}", other),
        }
    }

    #[test]
    fn test_unreachable_node_absent() {
        let graph = Arc::new(Graph::new(
            vec![Node::new(0, "A"), Node::new(1, "B"), Node::new(2, "C")],
            vec![Edge::new(0, 1)],
            false,
            false,
        ));
        let steps = Bfs::trace(&graph, 0);

        let visited = steps
            .last()
            .expect("non-empty")
            .visited
            .as_ref()
            .expect("final visited");
        assert_eq!(visited.nodes, vec![0, 1]);
        assert!(!visited.nodes.contains(&2));
    }

    #[test]
    fn test_single_node_graph() {
        let graph = Arc::new(Graph::new(vec![Node::new(7, "X")], vec![], false, false));
        let steps = Bfs::trace(&graph, 7);

        // 初始化步 + 结束步
        assert_eq!(steps.len(), 2);
        assert_eq!(
            steps[1].visited.as_ref().expect("final visited").nodes,
            vec![7]
        );
    }

    #[test]
    fn test_directed_edges_not_followed_backwards() {
        let graph = Arc::new(Graph::new(
            vec![Node::new(0, "A"), Node::new(1, "B")],
            vec![Edge::new(1, 0)],
            true,
            false,
        ));
        let steps = Bfs::trace(&graph, 0);

        let visited = steps
            .last()
            .expect("non-empty")
            .visited
            .as_ref()
            .expect("final visited");
        assert_eq!(visited.nodes, vec![0]);
    }
}
