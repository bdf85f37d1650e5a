//! Dijkstra's algorithm with a linear minimum scan.
//!
//! Each round settles the unsettled node of smallest finite tentative
//! distance (lowest index on ties), then relaxes its outgoing edges. No
//! priority queue: selection is a linear scan, O(V²) overall.
//!
//! Only edges of strictly positive weight are relaxed. A zero-weight edge
//! is indistinguishable from a missing one through `edge_weight`, and is
//! treated as missing here.

use fixedbitset::FixedBitSet;
use propagraph_core::{GraphError, GraphResult, WeightedDigraph};
use tracing::{debug, instrument};

use super::{NodePath, node_paths};
use crate::metrics::weight::has_negative_weights;

/// Lightest path from `source` to every node.
///
/// Returns one [`NodePath`] per node, in index order.
///
/// # Errors
///
/// - [`GraphError::OutOfRange`] if `source` is not in the graph.
/// - [`GraphError::InvalidArgument`] if any edge weight is negative; use
///   [`all_weighted_shortest_paths_bellman_ford`](super::all_weighted_shortest_paths_bellman_ford)
///   for such graphs.
#[instrument(skip(graph))]
pub fn all_weighted_shortest_paths_dijkstra<G: WeightedDigraph>(
    graph: &G,
    source: usize,
) -> GraphResult<Vec<NodePath>> {
    graph.check_node(source)?;
    if has_negative_weights(graph) {
        debug!("rejecting graph with negative weights");
        return Err(GraphError::InvalidArgument(
            "dijkstra requires non-negative edge weights; use bellman-ford for negative weights"
                .to_string(),
        ));
    }

    let n = graph.node_count();
    let mut dist = vec![f64::INFINITY; n];
    let mut parent: Vec<Option<usize>> = vec![None; n];
    let mut settled = FixedBitSet::with_capacity(n);
    dist[source] = 0.0;

    while let Some(node) = closest_unsettled(&dist, &settled) {
        settled.insert(node);
        for next in graph.successors(node) {
            let weight = graph.edge_weight(node, next);
            if weight <= 0.0 || settled.contains(next) {
                continue;
            }
            let candidate = dist[node] + weight;
            if candidate < dist[next] {
                dist[next] = candidate;
                parent[next] = Some(node);
            }
        }
    }

    debug!(settled = settled.count_ones(..), nodes = n, "dijkstra complete");
    Ok(node_paths(&parent, source))
}

/// Unsettled node with the smallest finite distance; lowest index on ties.
fn closest_unsettled(dist: &[f64], settled: &FixedBitSet) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (node, &d) in dist.iter().enumerate() {
        if settled.contains(node) || !d.is_finite() {
            continue;
        }
        if best.is_none_or(|b| d < dist[b]) {
            best = Some(node);
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paths::bfs::all_unweighted_shortest_paths_bfs;
    use propagraph_core::{ErrorKind, WeightedGraph};

    fn indexed(n: usize, edges: &[(usize, usize, f64)]) -> WeightedGraph {
        let mut g = WeightedGraph::with_nodes((0..n).map(|i| format!("n{i}"))).expect("nodes");
        for &(s, t, w) in edges {
            g.add_edge(s, t, w).expect("edge");
        }
        g
    }

    #[test]
    fn lighter_longer_path_wins() {
        let g = indexed(3, &[(0, 1, 1.0), (1, 2, 1.0), (0, 2, 5.0)]);
        let paths = all_weighted_shortest_paths_dijkstra(&g, 0).expect("valid");
        assert_eq!(paths[2].path, vec![0, 1, 2]);
        assert_eq!(paths[0].path, vec![0]);
    }

    #[test]
    fn negative_weight_rejected() {
        let g = indexed(3, &[(0, 1, 1.0), (2, 1, -1.0)]);
        let err = all_weighted_shortest_paths_dijkstra(&g, 0).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn zero_weight_edge_is_not_relaxed() {
        let g = indexed(3, &[(0, 1, 0.0), (1, 2, 1.0)]);
        let paths = all_weighted_shortest_paths_dijkstra(&g, 0).expect("valid");
        assert!(paths[1].path.is_empty());
        assert!(paths[2].path.is_empty());
    }

    #[test]
    fn unit_weights_agree_with_bfs() {
        let edges = [(0, 1, 1.0), (0, 2, 1.0), (1, 3, 1.0), (2, 3, 1.0), (3, 4, 1.0)];
        let g = indexed(6, &edges);
        let dijkstra = all_weighted_shortest_paths_dijkstra(&g, 0).expect("valid");
        let bfs = all_unweighted_shortest_paths_bfs(&g, 0).expect("valid");
        for (d, b) in dijkstra.iter().zip(&bfs) {
            assert_eq!(d.path.len(), b.path.len(), "node {}", d.node);
        }
        assert!(dijkstra[5].path.is_empty());
    }

    #[test]
    fn invalid_source() {
        let g = indexed(1, &[]);
        assert_eq!(
            all_weighted_shortest_paths_dijkstra(&g, 4).unwrap_err().kind(),
            ErrorKind::OutOfRange
        );
    }

    #[test]
    fn closest_prefers_lower_index_on_tie() {
        let dist = [f64::INFINITY, 2.0, 2.0, 1.0];
        let mut settled = FixedBitSet::with_capacity(4);
        assert_eq!(closest_unsettled(&dist, &settled), Some(3));
        settled.insert(3);
        assert_eq!(closest_unsettled(&dist, &settled), Some(1));
    }
}
