//! 跨算法性质测试：确定性、单调访问、两种 MST 与两种最短路径算法的一致性

use graphtrace::services::algorithm::defaults;
use graphtrace::services::dispatch::{run_algorithm, AlgorithmId, RunParams};
use graphtrace::{AlgorithmAux, DistanceTable, Graph, Step};

fn run(id: AlgorithmId, graph: Option<Graph>, start: Option<&str>) -> Vec<Step> {
    run_algorithm(
        id,
        RunParams {
            start_vertex: start.map(|s| s.to_string()),
            graph,
        },
    )
    .expect("run should succeed")
}

#[test]
fn determinism_identical_output_for_identical_input() {
    for id in AlgorithmId::all() {
        let first = run(id, None, Some("A"));
        let second = run(id, None, Some("A"));

        let a = serde_json::to_value(&first).expect("serialize first");
        let b = serde_json::to_value(&second).expect("serialize second");
        assert_eq!(a, b, "non-deterministic output for {}", id);
    }
}

#[test]
fn monotonic_visitation_never_shrinks() {
    for id in [AlgorithmId::Bfs, AlgorithmId::Dfs, AlgorithmId::Dijkstra] {
        let steps = run(id, None, None);
        let mut previous = 0;
        for step in &steps {
            if let Some(visited) = &step.visited {
                assert!(
                    visited.nodes.len() >= previous,
                    "visited set shrank for {}",
                    id
                );
                previous = visited.nodes.len();
            }
        }
    }
}

#[test]
fn bfs_visits_in_distance_order() {
    // 默认图按层：A 距离 0，B/C 距离 1，D/E 距离 2
    let steps = run(AlgorithmId::Bfs, None, Some("A"));
    let graph = steps[0].graph.clone();
    let visited = steps
        .last()
        .expect("non-empty")
        .visited
        .as_ref()
        .expect("final visited");

    let depth = |label: &str| -> usize {
        match label {
            "A" => 0,
            "B" | "C" => 1,
            _ => 2,
        }
    };
    let depths: Vec<usize> = visited
        .nodes
        .iter()
        .map(|&id| depth(graph.label(id)))
        .collect();
    let mut sorted = depths.clone();
    sorted.sort();
    assert_eq!(depths, sorted);
}

#[test]
fn prim_and_kruskal_agree_on_total_weight() {
    let graph = defaults::kruskal_sample();

    let prim_steps = run(AlgorithmId::Prim, Some(graph.clone()), Some("A"));
    let kruskal_steps = run(AlgorithmId::Kruskal, Some(graph), None);

    let Some(AlgorithmAux::MstProgress { weight: prim_weight }) =
        prim_steps.last().expect("non-empty").aux.clone()
    else {
        panic!("expected mst aux from prim");
    };
    let Some(AlgorithmAux::UnionFind {
        weight: kruskal_weight,
        ..
    }) = kruskal_steps.last().expect("non-empty").aux.clone()
    else {
        panic!("expected union-find aux from kruskal");
    };
    assert_eq!(prim_weight, kruskal_weight);
}

#[test]
fn bellman_ford_matches_dijkstra_on_non_negative_weights() {
    let graph = defaults::dijkstra_sample();

    let dijkstra_steps = run(AlgorithmId::Dijkstra, Some(graph.clone()), Some("A"));
    let bf_steps = run(AlgorithmId::BellmanFord, Some(graph), Some("A"));

    let dijkstra_table: DistanceTable = match &dijkstra_steps.last().expect("non-empty").aux {
        Some(AlgorithmAux::Distances { table }) => table.clone(),
        other => panic!("expected distances aux, got {:?}", other),
    };
    let bf_table: DistanceTable = match &bf_steps.last().expect("non-empty").aux {
        Some(AlgorithmAux::Pass { table, .. }) => table.clone(),
        other => panic!("expected pass aux, got {:?}", other),
    };
    assert_eq!(dijkstra_table, bf_table);
}

#[test]
fn start_vertex_resolves_label_id_and_fallback() {
    let graph = defaults::bfs_sample();

    // 标签 "B" 与其 id 的字符串 "1" 应解析到同一个起点
    let by_label = run(AlgorithmId::Bfs, Some(graph.clone()), Some("B"));
    let by_id = run(AlgorithmId::Bfs, Some(graph.clone()), Some("1"));
    assert_eq!(by_label[0].description, by_id[0].description);

    // 无法解析时静默兜底第一个节点
    let fallback = run(AlgorithmId::Bfs, Some(graph.clone()), Some("nope"));
    let default_start = run(AlgorithmId::Bfs, Some(graph), None);
    assert_eq!(fallback[0].description, default_start[0].description);
}

#[test]
fn every_run_is_non_empty_and_indexed_sequentially() {
    for id in AlgorithmId::all() {
        let steps = run_algorithm(id, RunParams::default()).expect("default run");
        assert!(!steps.is_empty());
        for (expected, step) in steps.iter().enumerate() {
            assert_eq!(step.index, expected);
        }
    }
}

#[test]
fn shared_graph_reference_across_steps() {
    let steps = run(AlgorithmId::Dfs, None, None);
    let first = &steps[0].graph;
    for step in &steps {
        assert!(std::sync::Arc::ptr_eq(first, &step.graph));
    }
}
