//! Plain and weighted degree statistics.
//!
//! Per-node degree is the in-, out-, or in+out edge count selected by
//! [`DegreeMode`]; weighted degree sums the weights of the same edges.
//! Extremes keep the first node reaching them. Graphs without edges yield
//! the `("", 0)` sentinel.

use propagraph_core::{DegreeMode, WeightedDigraph};

use crate::ranked::{Ranked, pick};

// ---------------------------------------------------------------------------
// Edge counts
// ---------------------------------------------------------------------------

/// Edges per node: `edge_count / node_count`, or `0.0` without edges.
///
/// `_mode` is accepted for symmetry with the per-node functions; the ratio
/// is the same for every mode.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn average_edge_degree<G: WeightedDigraph>(graph: &G, _mode: DegreeMode) -> f64 {
    let edges = graph.edge_count();
    if edges == 0 {
        return 0.0;
    }
    edges as f64 / graph.node_count() as f64
}

/// Node with the highest degree under `mode`; earlier nodes win ties.
#[must_use]
pub fn max_edge_degree<G: WeightedDigraph>(graph: &G, mode: DegreeMode) -> Ranked<usize> {
    extreme_degree(graph, mode, |candidate, current| candidate > current)
}

/// Node with the lowest degree under `mode`; earlier nodes win ties.
#[must_use]
pub fn min_edge_degree<G: WeightedDigraph>(graph: &G, mode: DegreeMode) -> Ranked<usize> {
    extreme_degree(graph, mode, |candidate, current| candidate < current)
}

// ---------------------------------------------------------------------------
// Weighted degree
// ---------------------------------------------------------------------------

/// Mean weighted degree over all nodes, or `0.0` for an empty graph.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn average_edge_degree_weighted<G: WeightedDigraph>(graph: &G, mode: DegreeMode) -> f64 {
    let n = graph.node_count();
    if n == 0 {
        return 0.0;
    }
    (0..n)
        .map(|node| graph.weighted_degree(node, mode))
        .sum::<f64>()
        / n as f64
}

/// Node with the highest weighted degree; earlier nodes win ties.
#[must_use]
pub fn max_edge_degree_weighted<G: WeightedDigraph>(graph: &G, mode: DegreeMode) -> Ranked<f64> {
    extreme_weighted_degree(graph, mode, |candidate, current| candidate > current)
}

/// Node with the lowest weighted degree; earlier nodes win ties.
#[must_use]
pub fn min_edge_degree_weighted<G: WeightedDigraph>(graph: &G, mode: DegreeMode) -> Ranked<f64> {
    extreme_weighted_degree(graph, mode, |candidate, current| candidate < current)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn extreme_degree<G, F>(graph: &G, mode: DegreeMode, replaces: F) -> Ranked<usize>
where
    G: WeightedDigraph,
    F: Fn(usize, usize) -> bool,
{
    if graph.edge_count() == 0 {
        return Ranked::empty();
    }
    let degrees = (0..graph.node_count()).map(|node| (node, graph.degree(node, mode)));
    pick(degrees, replaces).map_or_else(Ranked::empty, |(node, degree)| {
        Ranked::new(graph.node_name(node), degree)
    })
}

fn extreme_weighted_degree<G, F>(graph: &G, mode: DegreeMode, replaces: F) -> Ranked<f64>
where
    G: WeightedDigraph,
    F: Fn(f64, f64) -> bool,
{
    if graph.edge_count() == 0 {
        return Ranked::empty();
    }
    let degrees = (0..graph.node_count()).map(|node| (node, graph.weighted_degree(node, mode)));
    pick(degrees, replaces).map_or_else(Ranked::empty, |(node, weight)| {
        Ranked::new(graph.node_name(node), weight)
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
