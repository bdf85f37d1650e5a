//! Strength centrality: the summed weight of a node's incident edges.
//!
//! Numerically this matches weighted degree, but it is computed in a single
//! pass over the edge list and its extremes use non-strict comparisons, so
//! the **last** node reaching the maximum or minimum is reported.

use propagraph_core::{DegreeMode, WeightedDigraph};
use tracing::instrument;

use crate::ranked::{Ranked, pick};

/// Strength of every node under `mode`, indexed by node.
///
/// `Full` adds an edge to both endpoints; a self-loop therefore counts
/// twice on its node.
#[must_use]
#[instrument(skip(graph))]
pub fn strength_centrality<G: WeightedDigraph>(graph: &G, mode: DegreeMode) -> Vec<f64> {
    let mut strength = vec![0.0; graph.node_count()];
    for edge in graph.edges() {
        if mode.counts_outgoing() {
            strength[edge.source] += edge.weight;
        }
        if mode.counts_incoming() {
            strength[edge.target] += edge.weight;
        }
    }
    strength
}

/// Mean strength over all nodes, or `0.0` for an empty graph.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn average_strength_centrality<G: WeightedDigraph>(graph: &G, mode: DegreeMode) -> f64 {
    let n = graph.node_count();
    if n == 0 {
        return 0.0;
    }
    strength_centrality(graph, mode).iter().sum::<f64>() / n as f64
}

/// Node with the highest strength; the **last** tied node wins.
#[must_use]
pub fn max_strength_centrality<G: WeightedDigraph>(graph: &G, mode: DegreeMode) -> Ranked<f64> {
    extreme_strength(graph, mode, |candidate, current| candidate >= current)
}

/// Node with the lowest strength; the **last** tied node wins.
#[must_use]
pub fn min_strength_centrality<G: WeightedDigraph>(graph: &G, mode: DegreeMode) -> Ranked<f64> {
    extreme_strength(graph, mode, |candidate, current| candidate <= current)
}

fn extreme_strength<G, F>(graph: &G, mode: DegreeMode, replaces: F) -> Ranked<f64>
where
    G: WeightedDigraph,
    F: Fn(f64, f64) -> bool,
{
    if graph.edge_count() == 0 {
        return Ranked::empty();
    }
    let strength = strength_centrality(graph, mode);
    pick(strength.into_iter().enumerate(), replaces).map_or_else(Ranked::empty, |(node, value)| {
        Ranked::new(graph.node_name(node), value)
    })
}
