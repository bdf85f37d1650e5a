//! Edge-weight aggregates.

use propagraph_core::WeightedDigraph;

use crate::ranked::{Ranked, pick};

/// Mean weight over all edges, or `0.0` for an edgeless graph.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn average_edge_weight<G: WeightedDigraph>(graph: &G) -> f64 {
    let count = graph.edge_count();
    if count == 0 {
        return 0.0;
    }
    graph.edges().map(|e| e.weight).sum::<f64>() / count as f64
}

/// Heaviest edge, reported by the name of its source node.
///
/// The first edge (in iteration order) reaching the maximum wins. Returns
/// `("", 0.0)` for an edgeless graph.
#[must_use]
pub fn max_edge_weight<G: WeightedDigraph>(graph: &G) -> Ranked<f64> {
    extreme_edge(graph, |candidate, current| candidate > current)
}

/// Lightest edge, reported by the name of its source node.
///
/// The first edge (in iteration order) reaching the minimum wins. Returns
/// `("", 0.0)` for an edgeless graph.
#[must_use]
pub fn min_edge_weight<G: WeightedDigraph>(graph: &G) -> Ranked<f64> {
    extreme_edge(graph, |candidate, current| candidate < current)
}

/// Whether any edge has a weight below zero.
#[must_use]
pub fn has_negative_weights<G: WeightedDigraph>(graph: &G) -> bool {
    graph.edges().any(|e| e.weight < 0.0)
}

fn extreme_edge<G, F>(graph: &G, replaces: F) -> Ranked<f64>
where
    G: WeightedDigraph,
    F: Fn(f64, f64) -> bool,
{
    pick(graph.edges().map(|e| (e.source, e.weight)), replaces).map_or_else(
        Ranked::empty,
        |(source, weight)| Ranked::new(graph.node_name(source), weight),
    )
}
