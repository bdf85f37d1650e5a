//! Known-topology regression tests.
//!
//! Each test uses a hand-crafted graph with known properties. Expected
//! values are computed by hand and hardcoded, so any algorithm change that
//! shifts them is caught.

use propagraph_analytics::{
    DegreeMode, GraphError, WeightedDigraph, all_unweighted_shortest_paths_bfs,
    all_unweighted_shortest_paths_floyd_warshall, all_weighted_shortest_paths_bellman_ford,
    all_weighted_shortest_paths_dijkstra, all_weighted_shortest_paths_floyd_warshall,
    average_edge_degree, average_edge_weight, average_strength_centrality, find_cycle,
    graph_diameter, has_cycle, max_edge_degree, max_edge_degree_weighted, max_edge_weight,
    max_strength_centrality, min_edge_degree_weighted, min_edge_weight, min_strength_centrality,
    weighted_global_clustering, weighted_local_clustering, weighted_path_weight,
};
use propagraph_core::{ErrorKind, WeightedGraph};

const EPS: f64 = 1e-9;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn indexed(n: usize, edges: &[(usize, usize, f64)]) -> WeightedGraph {
    let mut g = WeightedGraph::with_nodes((0..n).map(|i| format!("n{i}"))).expect("nodes");
    for &(s, t, w) in edges {
        g.add_edge(s, t, w).expect("edge");
    }
    g
}

/// Five nodes, each pointing at the next two (mod 5).
///
/// ```text
/// node1 → node2 1.0   node1 → node3 1.5
/// node2 → node3 2.0   node2 → node4 2.5
/// node3 → node4 3.0   node3 → node5 3.5
/// node4 → node5 4.0   node4 → node1 4.5
/// node5 → node1 5.0   node5 → node2 5.5
/// ```
fn five_ring() -> WeightedGraph {
    WeightedGraph::from_named_edges(
        ["node1", "node2", "node3", "node4", "node5"],
        [
            ("node1", "node2", 1.0),
            ("node2", "node3", 2.0),
            ("node3", "node4", 3.0),
            ("node4", "node5", 4.0),
            ("node5", "node1", 5.0),
            ("node1", "node3", 1.5),
            ("node2", "node4", 2.5),
            ("node3", "node5", 3.5),
            ("node4", "node1", 4.5),
            ("node5", "node2", 5.5),
        ],
    )
    .expect("valid graph")
}

// ---------------------------------------------------------------------------
// Small shapes
// ---------------------------------------------------------------------------

#[test]
fn chain_of_three() {
    let g = indexed(3, &[(0, 1, 1.0), (1, 2, 1.0)]);
    assert!(!has_cycle(&g));
    assert_eq!(graph_diameter(&g), 2);

    let bfs = all_unweighted_shortest_paths_bfs(&g, 0).expect("bfs");
    assert_eq!(bfs[2].path, vec![0, 1, 2]);
    let back = all_unweighted_shortest_paths_bfs(&g, 2).expect("bfs");
    assert!(back[0].path.is_empty());
}

#[test]
fn triangle_cycle() {
    let g = indexed(3, &[(0, 1, 1.0), (1, 2, 1.0), (2, 0, 1.0)]);
    assert!(has_cycle(&g));
    assert_eq!(find_cycle(&g), Some(vec![0, 1, 2, 0]));
}

#[test]
fn negative_triangle_is_rejected_by_every_weighted_all_pairs() {
    let g = indexed(3, &[(0, 1, 1.0), (1, 2, -3.0), (2, 0, 1.0)]);
    let err = all_weighted_shortest_paths_bellman_ford(&g, 0).unwrap_err();
    assert_eq!(err, GraphError::NegativeCycle { origin: 0 });
    let err = all_weighted_shortest_paths_floyd_warshall(&g).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NegativeCycle);
    // Hop counts are still well defined.
    assert_eq!(graph_diameter(&g), 2);
}

#[test]
fn algorithm_preconditions_are_exclusive() {
    let positive = indexed(2, &[(0, 1, 1.0)]);
    let negative = indexed(2, &[(0, 1, -1.0)]);

    assert!(all_weighted_shortest_paths_dijkstra(&positive, 0).is_ok());
    assert_eq!(
        all_weighted_shortest_paths_bellman_ford(&positive, 0)
            .unwrap_err()
            .kind(),
        ErrorKind::InvalidArgument
    );

    assert!(all_weighted_shortest_paths_bellman_ford(&negative, 0).is_ok());
    assert_eq!(
        all_weighted_shortest_paths_dijkstra(&negative, 0)
            .unwrap_err()
            .kind(),
        ErrorKind::InvalidArgument
    );
}

#[test]
fn zero_weight_edge_reads_the_same_to_dijkstra_and_floyd_warshall() {
    let g = WeightedGraph::from_named_edges(["a", "b"], [("a", "b", 0.0)]).expect("graph");
    let all = all_weighted_shortest_paths_floyd_warshall(&g).expect("floyd-warshall");
    let single = all_weighted_shortest_paths_dijkstra(&g, 0).expect("dijkstra");
    assert_eq!(all[0][1].is_reachable(), single[1].is_reachable());
    assert!(!single[1].is_reachable());

    // Hop-based queries and explicit walks still see the edge.
    assert_eq!(graph_diameter(&g), 1);
    assert!(weighted_path_weight(&g, &[0, 1]).expect("weight").abs() < EPS);
}

#[test]
fn path_weight_breaks_when_edge_removed() {
    let g = indexed(3, &[(0, 1, 2.0), (1, 2, 3.0)]);
    let w = weighted_path_weight(&g, &[0, 1, 2]).expect("weight");
    assert!((w - 5.0).abs() < EPS);

    let cut = indexed(3, &[(0, 1, 2.0)]);
    assert_eq!(
        weighted_path_weight(&cut, &[0, 1, 2]).unwrap_err().kind(),
        ErrorKind::InvalidArgument
    );
}

#[test]
fn empty_graph_statistics_are_sentinels() {
    let g = WeightedGraph::new();
    assert!(average_edge_weight(&g).abs() < EPS);
    assert!(max_edge_weight(&g).is_empty());
    assert!(max_strength_centrality(&g, DegreeMode::Full).is_empty());
    assert!(weighted_global_clustering(&g).abs() < EPS);
    assert!(!has_cycle(&g));
    assert_eq!(graph_diameter(&g), 0);
    assert_eq!(
        all_unweighted_shortest_paths_floyd_warshall(&g)
            .unwrap_err()
            .kind(),
        ErrorKind::OutOfRange
    );
}

// ---------------------------------------------------------------------------
// Five-node ring
// ---------------------------------------------------------------------------

#[test]
fn five_ring_weights() {
    let g = five_ring();
    assert_eq!(g.node_count(), 5);
    assert_eq!(g.edge_count(), 10);
    assert!((average_edge_weight(&g) - 3.25).abs() < EPS);

    let max = max_edge_weight(&g);
    assert_eq!(max.name, "node5");
    assert!((max.value - 5.5).abs() < EPS);

    let min = min_edge_weight(&g);
    assert_eq!(min.name, "node1");
    assert!((min.value - 1.0).abs() < EPS);
}

#[test]
fn five_ring_degrees() {
    let g = five_ring();
    assert!((average_edge_degree(&g, DegreeMode::Out) - 2.0).abs() < EPS);

    // Every node has out-degree 2; the first one wins.
    let max = max_edge_degree(&g, DegreeMode::Out);
    assert_eq!((max.name.as_str(), max.value), ("node1", 2));

    let heavy = max_edge_degree_weighted(&g, DegreeMode::Out);
    assert_eq!(heavy.name, "node5");
    assert!((heavy.value - 10.5).abs() < EPS);

    let light = min_edge_degree_weighted(&g, DegreeMode::Out);
    assert_eq!(light.name, "node1");
    assert!((light.value - 2.5).abs() < EPS);
}

#[test]
fn five_ring_incoming_strength() {
    // In-strength: node1 9.5, node2 6.5, node3 3.5, node4 5.5, node5 7.5
    let g = five_ring();
    let max = max_strength_centrality(&g, DegreeMode::In);
    assert_eq!(max.name, "node1");
    assert!((max.value - 9.5).abs() < EPS);

    let min = min_strength_centrality(&g, DegreeMode::In);
    assert_eq!(min.name, "node3");
    assert!((min.value - 3.5).abs() < EPS);

    assert!((average_strength_centrality(&g, DegreeMode::In) - 6.5).abs() < EPS);
    // Full strength counts every edge twice across the graph.
    assert!((average_strength_centrality(&g, DegreeMode::Full) - 13.0).abs() < EPS);
}

#[test]
fn five_ring_clustering() {
    // Successor pairs are joined by weights 2, 3, 4, 5 (reverse edge), 1.
    let g = five_ring();
    let expected = [2.0, 3.0, 4.0, 5.0, 1.0];
    for (node, want) in expected.iter().enumerate() {
        let got = weighted_local_clustering(&g, node).expect("clustering");
        assert!((got - want).abs() < EPS, "node {node}: {got}");
    }
    assert!((weighted_global_clustering(&g) - 3.0).abs() < EPS);
}

#[test]
fn five_ring_paths() {
    let g = five_ring();
    assert!(has_cycle(&g));
    assert_eq!(graph_diameter(&g), 2);

    let dijkstra = all_weighted_shortest_paths_dijkstra(&g, 0).expect("dijkstra");
    assert_eq!(dijkstra[1].path, vec![0, 1]);
    assert_eq!(dijkstra[2].path, vec![0, 2]);
    assert_eq!(dijkstra[3].path, vec![0, 1, 3]);
    assert_eq!(dijkstra[4].path, vec![0, 2, 4]);

    let all = all_weighted_shortest_paths_floyd_warshall(&g).expect("floyd-warshall");
    for (target, record) in dijkstra.iter().enumerate() {
        assert_eq!(all[0][target].path, record.path, "target {target}");
    }
    assert!((all[0][4].distance - 5.0).abs() < EPS);

    let walked = weighted_path_weight(&g, &all[0][3].path).expect("weight");
    assert!((walked - all[0][3].distance).abs() < EPS);
    assert!((weighted_path_weight(&g, &[0, 1, 2, 3]).expect("weight") - 6.0).abs() < EPS);
}
