//! Weighted clustering coefficients.
//!
//! # Definition
//!
//! For a node `v` with successors `N(v)` and `k = |N(v)|`:
//!
//! ```text
//! C(v) = Σ w(u, x) / (k (k - 1) / 2)     over unordered pairs {u, x} ⊆ N(v)
//! ```
//!
//! where `w(u, x)` is the weight of `u → x`, or of `x → u` when the first
//! is missing or zero, and only positive weights contribute. The
//! denominator is every possible pair, connected or not; this is not the
//! Barrat coefficient. `C(v) = 0` when `k < 2` or no pair qualifies.

use propagraph_core::{GraphResult, WeightedDigraph};

/// Weighted clustering coefficient of `node`.
///
/// # Errors
///
/// Returns [`GraphError::OutOfRange`](propagraph_core::GraphError::OutOfRange)
/// if `node` is not in the graph.
pub fn weighted_local_clustering<G: WeightedDigraph>(graph: &G, node: usize) -> GraphResult<f64> {
    graph.check_node(node)?;
    Ok(local_clustering(graph, node))
}

/// Mean of [`weighted_local_clustering`] over all nodes; `0.0` when empty.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn weighted_global_clustering<G: WeightedDigraph>(graph: &G) -> f64 {
    let n = graph.node_count();
    if n == 0 {
        return 0.0;
    }
    (0..n).map(|node| local_clustering(graph, node)).sum::<f64>() / n as f64
}

#[allow(clippy::cast_precision_loss, clippy::float_cmp)]
fn local_clustering<G: WeightedDigraph>(graph: &G, node: usize) -> f64 {
    let neighbors: Vec<usize> = graph.successors(node).collect();
    let k = neighbors.len();
    if k < 2 {
        return 0.0;
    }

    let mut sum = 0.0;
    let mut qualifying = 0usize;
    for (i, &u) in neighbors.iter().enumerate() {
        for &x in &neighbors[i + 1..] {
            let mut weight = graph.edge_weight(u, x);
            if weight == 0.0 {
                weight = graph.edge_weight(x, u);
            }
            if weight > 0.0 {
                sum += weight;
                qualifying += 1;
            }
        }
    }

    if qualifying == 0 {
        return 0.0;
    }
    let possible_pairs = (k * (k - 1) / 2) as f64;
    sum / possible_pairs
}
