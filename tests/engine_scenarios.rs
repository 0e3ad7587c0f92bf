//! 场景测试：四个固定输入的端到端回放结果

use graphtrace::services::algorithm::defaults;
use graphtrace::services::dispatch::{run_algorithm, AlgorithmId, RunParams};
use graphtrace::{AlgorithmAux, Distance, Step};

fn run_default(id: AlgorithmId, start: Option<&str>) -> Vec<Step> {
    run_algorithm(
        id,
        RunParams {
            start_vertex: start.map(|s| s.to_string()),
            graph: None,
        },
    )
    .expect("default run should succeed")
}

#[test]
fn scenario_a_dijkstra_distances() {
    let steps = run_default(AlgorithmId::Dijkstra, Some("A"));

    let last = steps.last().expect("non-empty trace");
    let Some(AlgorithmAux::Distances { table }) = &last.aux else {
        panic!("expected distances aux on final step");
    };
    assert_eq!(table["A"], Distance::Finite(0.0));
    assert_eq!(table["C"], Distance::Finite(2.0));
    assert_eq!(table["B"], Distance::Finite(3.0));
    assert_eq!(table["D"], Distance::Finite(8.0));
}

#[test]
fn scenario_b_kruskal_mst() {
    let steps = run_default(AlgorithmId::Kruskal, None);

    let last = steps.last().expect("non-empty trace");
    let path = last.path.as_ref().expect("final step has mst path");

    // 默认图节点 id：A=0, B=1, C=2, D=3；MST = B-C(1), C-D(2), A-B(3)
    assert_eq!(path.edges, vec![(1, 2), (2, 3), (0, 1)]);
    let Some(AlgorithmAux::UnionFind { weight, sets }) = &last.aux else {
        panic!("expected union-find aux on final step");
    };
    assert_eq!(*weight, 6.0);
    assert_eq!(sets.len(), 1);
}

#[test]
fn scenario_c_bfs_visitation_order() {
    let steps = run_default(AlgorithmId::Bfs, Some("A"));

    let last = steps.last().expect("non-empty trace");
    let visited = last.visited.as_ref().expect("final step has visited set");
    let labels: Vec<&str> = visited
        .nodes
        .iter()
        .map(|&id| steps[0].graph.label(id))
        .collect();
    assert_eq!(labels, vec!["A", "B", "C", "D", "E"]);
}

#[test]
fn scenario_d_bellman_ford_negative_cycle() {
    let steps = run_default(AlgorithmId::BellmanFord, Some("A"));

    let n = steps.len();
    assert!(steps[n - 2].description.contains("can still relax"));
    assert!(steps[n - 1].description.contains("Negative-weight cycle detected"));
    // 不得出现带最终距离的完成步
    assert!(!steps
        .iter()
        .any(|s| s.description.starts_with("Bellman-Ford complete")));
}

#[test]
fn scenario_d_default_graph_really_has_negative_cycle() {
    let graph = defaults::bellman_ford_sample();
    let negative_edges = graph
        .edges
        .iter()
        .filter(|e| e.weight.unwrap_or(1.0) < 0.0)
        .count();
    assert!(negative_edges >= 2);
}
