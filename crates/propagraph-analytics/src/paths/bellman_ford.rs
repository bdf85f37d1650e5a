//! Bellman-Ford shortest paths for graphs with negative weights.
//!
//! This entry point only accepts graphs that actually contain a negative
//! weight; non-negative graphs belong to Dijkstra. After `V - 1` rounds of
//! relaxing every edge, one more pass checks whether any edge still
//! improves a distance, which means a negative cycle is reachable from the
//! source.

use propagraph_core::{Edge, GraphError, GraphResult, WeightedDigraph};
use tracing::{debug, instrument, trace};

use super::{NodePath, node_paths};
use crate::metrics::weight::has_negative_weights;

/// Lightest path from `source` to every node of a negative-weight graph.
///
/// Returns one [`NodePath`] per node, in index order.
///
/// # Errors
///
/// - [`GraphError::OutOfRange`] if `source` is not in the graph.
/// - [`GraphError::InvalidArgument`] if no edge weight is negative.
/// - [`GraphError::NegativeCycle`] if a negative cycle is reachable from
///   `source`.
#[instrument(skip(graph))]
pub fn all_weighted_shortest_paths_bellman_ford<G: WeightedDigraph>(
    graph: &G,
    source: usize,
) -> GraphResult<Vec<NodePath>> {
    graph.check_node(source)?;
    if !has_negative_weights(graph) {
        debug!("rejecting graph without negative weights");
        return Err(GraphError::InvalidArgument(
            "bellman-ford is reserved for graphs with negative edge weights; use dijkstra"
                .to_string(),
        ));
    }

    let n = graph.node_count();
    let edges: Vec<Edge> = graph.edges().collect();
    let mut dist = vec![f64::INFINITY; n];
    let mut parent: Vec<Option<usize>> = vec![None; n];
    dist[source] = 0.0;

    for round in 1..n {
        if !relax_round(&edges, &mut dist, &mut parent) {
            trace!(round, "distances settled early");
            break;
        }
    }

    if edges.iter().any(|edge| relaxes(&dist, edge)) {
        debug!(source, "negative cycle detected");
        return Err(GraphError::NegativeCycle { origin: source });
    }

    debug!(nodes = n, edges = edges.len(), "bellman-ford complete");
    Ok(node_paths(&parent, source))
}

/// Relax every edge once; `false` if no distance changed.
fn relax_round(edges: &[Edge], dist: &mut [f64], parent: &mut [Option<usize>]) -> bool {
    let mut changed = false;
    for edge in edges {
        if relaxes(dist, edge) {
            dist[edge.target] = dist[edge.source] + edge.weight;
            parent[edge.target] = Some(edge.source);
            changed = true;
        }
    }
    changed
}

/// Whether `edge` shortens the distance to its target.
fn relaxes(dist: &[f64], edge: &Edge) -> bool {
    dist[edge.source].is_finite() && dist[edge.source] + edge.weight < dist[edge.target]
}
