//! Phase 2 tests: Dijkstra, Bellman-Ford, path reconstruction.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use pathspan::graph::{bellman_ford, dijkstra, reconstruct_path, GraphBuilder, WeightedGraph};
use pathspan::types::{Distance, GraphError};

// ==================== Helper ====================

/// AB=4, AC=2, BC=1, BD=5, CD=8.
fn sample_graph() -> WeightedGraph {
    GraphBuilder::new()
        .add_nodes(&["A", "B", "C", "D"])
        .link("A", "B", 4.0)
        .link("A", "C", 2.0)
        .link("B", "C", 1.0)
        .link("B", "D", 5.0)
        .link("C", "D", 8.0)
        .build()
        .unwrap()
}

/// {A, B, C} connected, D isolated.
fn disconnected_graph() -> WeightedGraph {
    GraphBuilder::new()
        .add_nodes(&["A", "B", "C", "D"])
        .link("A", "B", 4.0)
        .link("A", "C", 2.0)
        .link("B", "C", 1.0)
        .build()
        .unwrap()
}

/// Random connected graph with non-negative integer weights.
fn random_graph(rng: &mut StdRng, n: usize, extra_edges: usize) -> WeightedGraph {
    let ids: Vec<String> = (0..n).map(|i| format!("n{}", i)).collect();
    let mut builder = GraphBuilder::new();
    for id in &ids {
        builder.add_node(id);
    }
    // Spanning chain keeps it connected
    for i in 1..n {
        let j = rng.gen_range(0..i);
        builder.link(&ids[i], &ids[j], rng.gen_range(0..20) as f64);
    }
    for _ in 0..extra_edges {
        let a = rng.gen_range(0..n);
        let b = rng.gen_range(0..n);
        if a != b {
            builder.link(&ids[a], &ids[b], rng.gen_range(0..20) as f64);
        }
    }
    builder.build().unwrap()
}

/// Assert that consecutive path nodes are joined by edges whose weights sum
/// to the reported distance.
fn assert_path_matches_edges(graph: &WeightedGraph, path: &[&str], distance: Distance) {
    let mut total = 0.0;
    for pair in path.windows(2) {
        let best = graph
            .edges()
            .iter()
            .filter(|e| e.opposite(pair[0]) == Some(pair[1]))
            .map(|e| e.weight)
            .fold(f64::INFINITY, f64::min);
        assert!(best.is_finite(), "no edge between {} and {}", pair[0], pair[1]);
        total += best;
    }
    assert_eq!(Distance::Finite(total), distance);
}

// ==================== Dijkstra Tests ====================

#[test]
fn test_dijkstra_sample_distances() {
    let graph = sample_graph();
    let result = dijkstra(&graph, "A").unwrap();

    assert_eq!(result.distance("A"), Some(Distance::Finite(0.0)));
    assert_eq!(result.distance("B"), Some(Distance::Finite(3.0)));
    assert_eq!(result.distance("C"), Some(Distance::Finite(2.0)));
    assert_eq!(result.distance("D"), Some(Distance::Finite(8.0)));
    assert_eq!(result.source_id(), "A");
}

#[test]
fn test_dijkstra_sample_path() {
    let graph = sample_graph();
    let result = dijkstra(&graph, "A").unwrap();
    let path = result.path_to("D");
    assert_eq!(path, vec!["A", "C", "B", "D"]);
    assert_path_matches_edges(&graph, &path, result.distance("D").unwrap());
}

#[test]
fn test_dijkstra_predecessors() {
    let graph = sample_graph();
    let result = dijkstra(&graph, "A").unwrap();
    assert_eq!(result.previous("A"), None);
    assert_eq!(result.previous("C"), Some("A"));
    assert_eq!(result.previous("B"), Some("C"));
    assert_eq!(result.previous("D"), Some("B"));
}

#[test]
fn test_dijkstra_path_to_self() {
    let graph = sample_graph();
    for source in ["A", "B", "C", "D"] {
        let result = dijkstra(&graph, source).unwrap();
        assert_eq!(result.path_to(source), vec![source]);
    }
}

#[test]
fn test_dijkstra_unreachable_destination() {
    let graph = disconnected_graph();
    let result = dijkstra(&graph, "A").unwrap();
    assert_eq!(result.distance("D"), Some(Distance::Unreached));
    assert_eq!(result.previous("D"), None);
    assert!(result.path_to("D").is_empty());
    assert_eq!(result.reached_count(), 3);
}

#[test]
fn test_dijkstra_unknown_source() {
    let graph = sample_graph();
    match dijkstra(&graph, "Z").unwrap_err() {
        GraphError::NodeNotFound(id) => assert_eq!(id, "Z"),
        e => panic!("Expected NodeNotFound error, got {:?}", e),
    }
}

#[test]
fn test_dijkstra_unknown_destination_path() {
    let graph = sample_graph();
    let result = dijkstra(&graph, "A").unwrap();
    assert!(result.path_to("Z").is_empty());
    assert_eq!(result.distance("Z"), None);
}

#[test]
fn test_dijkstra_tie_prefers_first_listed_node() {
    // S reaches X and Y at equal cost; both reach T at equal cost.
    // X is listed first, so it is settled first and becomes T's predecessor.
    let graph = GraphBuilder::new()
        .add_nodes(&["S", "X", "Y", "T"])
        .link("S", "Y", 1.0)
        .link("S", "X", 1.0)
        .link("Y", "T", 1.0)
        .link("X", "T", 1.0)
        .build()
        .unwrap();
    let result = dijkstra(&graph, "S").unwrap();
    assert_eq!(result.distance("T"), Some(Distance::Finite(2.0)));
    assert_eq!(result.path_to("T"), vec!["S", "X", "T"]);
}

#[test]
fn test_dijkstra_parallel_edges_use_lightest() {
    let graph = GraphBuilder::new()
        .add_nodes(&["A", "B"])
        .link_with_id("heavy", "A", "B", 9.0)
        .link_with_id("light", "A", "B", 2.0)
        .build()
        .unwrap();
    let result = dijkstra(&graph, "A").unwrap();
    assert_eq!(result.distance("B"), Some(Distance::Finite(2.0)));
}

#[test]
fn test_dijkstra_zero_weight_edges() {
    let graph = GraphBuilder::new()
        .add_nodes(&["A", "B", "C"])
        .link("A", "B", 0.0)
        .link("B", "C", 0.0)
        .build()
        .unwrap();
    let result = dijkstra(&graph, "A").unwrap();
    assert_eq!(result.distance("C"), Some(Distance::Finite(0.0)));
    assert_eq!(result.path_to("C"), vec!["A", "B", "C"]);
}

#[test]
fn test_dijkstra_single_node() {
    let graph = GraphBuilder::new().add_node("solo").build().unwrap();
    let result = dijkstra(&graph, "solo").unwrap();
    assert_eq!(result.distance("solo"), Some(Distance::ZERO));
    assert_eq!(result.path_to("solo"), vec!["solo"]);
}

#[test]
fn test_dijkstra_serializes_by_node_id() {
    let graph = disconnected_graph();
    let result = dijkstra(&graph, "A").unwrap();
    let value = serde_json::to_value(&result).unwrap();
    assert_eq!(value["source"], "A");
    assert_eq!(value["distances"]["B"], 3.0);
    assert!(value["distances"]["D"].is_null());
    assert_eq!(value["previous"]["B"], "C");
    assert!(value["previous"]["A"].is_null());
}

// ==================== Bellman-Ford Tests ====================

#[test]
fn test_bellman_ford_sample() {
    let graph = sample_graph();
    let result = bellman_ford(&graph, "A").unwrap();
    assert!(!result.has_negative_cycle);
    assert_eq!(result.paths.distance("D"), Some(Distance::Finite(8.0)));
    assert_eq!(result.paths.path_to("D"), vec!["A", "C", "B", "D"]);
}

#[test]
fn test_bellman_ford_single_negative_edge_is_cycle() {
    let graph = GraphBuilder::new()
        .add_nodes(&["X", "Y"])
        .link("X", "Y", -1.0)
        .build()
        .unwrap();
    let result = bellman_ford(&graph, "X").unwrap();
    assert!(result.has_negative_cycle);
}

#[test]
fn test_bellman_ford_negative_cycle_path_terminates() {
    let graph = GraphBuilder::new()
        .add_nodes(&["X", "Y", "Z"])
        .link("X", "Y", -1.0)
        .link("Y", "Z", 2.0)
        .build()
        .unwrap();
    let result = bellman_ford(&graph, "X").unwrap();
    assert!(result.has_negative_cycle);
    // Predecessors may form a loop between X and Y; reconstruction must stop.
    let _ = result.paths.path_to("Z");
    let _ = result.paths.path_to("X");
}

#[test]
fn test_bellman_ford_negative_edge_unreachable_from_source() {
    let graph = GraphBuilder::new()
        .add_nodes(&["A", "B", "X", "Y"])
        .link("A", "B", 3.0)
        .link("X", "Y", -4.0)
        .build()
        .unwrap();
    let result = bellman_ford(&graph, "A").unwrap();
    assert!(!result.has_negative_cycle);
    assert_eq!(result.paths.distance("B"), Some(Distance::Finite(3.0)));
    assert_eq!(result.paths.distance("X"), Some(Distance::Unreached));
    assert!(result.paths.path_to("Y").is_empty());
}

#[test]
fn test_bellman_ford_unreachable_destination() {
    let graph = disconnected_graph();
    let result = bellman_ford(&graph, "A").unwrap();
    assert_eq!(result.paths.distance("D"), Some(Distance::Unreached));
    assert!(result.paths.path_to("D").is_empty());
}

#[test]
fn test_bellman_ford_unknown_source() {
    let graph = sample_graph();
    assert!(matches!(
        bellman_ford(&graph, "nope").unwrap_err(),
        GraphError::NodeNotFound(_)
    ));
}

#[test]
fn test_bellman_ford_serializes_flag() {
    let graph = sample_graph();
    let value = serde_json::to_value(bellman_ford(&graph, "A").unwrap()).unwrap();
    assert_eq!(value["has_negative_cycle"], false);
    assert_eq!(value["distances"]["D"], 8.0);
}

#[test]
fn test_shortest_paths_agree_on_non_negative_graphs() {
    let mut rng = StdRng::seed_from_u64(7);
    for round in 0..50 {
        let n = rng.gen_range(1..30);
        let graph = random_graph(&mut rng, n, n * 2);
        let source = graph.id_of(rng.gen_range(0..n)).to_string();

        let d = dijkstra(&graph, &source).unwrap();
        let bf = bellman_ford(&graph, &source).unwrap();
        assert!(!bf.has_negative_cycle, "round {}", round);
        assert_eq!(d.distances, bf.paths.distances, "round {}", round);

        for node in graph.nodes() {
            let path = d.path_to(&node.id);
            assert_eq!(path.first().copied(), Some(source.as_str()));
            assert_path_matches_edges(&graph, &path, d.distance(&node.id).unwrap());
        }
    }
}

// ==================== Path Reconstruction Tests ====================

#[test]
fn test_reconstruct_path_basic() {
    // 0 <- 2 <- 1 <- 3
    let previous = vec![None, Some(2), Some(0), Some(1)];
    assert_eq!(reconstruct_path(&previous, 0, 3), vec![0, 2, 1, 3]);
    assert_eq!(reconstruct_path(&previous, 0, 0), vec![0]);
}

#[test]
fn test_reconstruct_path_wrong_source() {
    let previous = vec![None, Some(0), None];
    assert!(reconstruct_path(&previous, 2, 1).is_empty());
    assert_eq!(reconstruct_path(&previous, 2, 2), vec![2]);
}

#[test]
fn test_reconstruct_path_loop_returns_empty() {
    let previous = vec![Some(1), Some(0), Some(1)];
    assert!(reconstruct_path(&previous, 0, 2).is_empty());
}
