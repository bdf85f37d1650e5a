//! Total weight of an explicit walk.

use propagraph_core::{GraphError, GraphResult, WeightedDigraph};

/// Total weight of the walk `path[0] → path[1] → … → path[last]`.
///
/// An empty or single-node path weighs `0.0`. A zero-weight edge is a valid
/// step; only a missing edge is rejected.
///
/// # Errors
///
/// - [`GraphError::OutOfRange`] if any index is not in the graph. Every
///   index is validated before any edge is looked up.
/// - [`GraphError::InvalidArgument`] if two consecutive nodes are not
///   joined by an edge.
pub fn weighted_path_weight<G: WeightedDigraph>(graph: &G, path: &[usize]) -> GraphResult<f64> {
    for &node in path {
        graph.check_node(node)?;
    }

    path.windows(2).try_fold(0.0, |total, step| {
        let (from, to) = (step[0], step[1]);
        graph
            .edge_weight_checked(from, to)
            .map(|weight| total + weight)
            .ok_or_else(|| {
                GraphError::InvalidArgument(format!(
                    "no edge {from} -> {to} ('{}' -> '{}') on the path",
                    graph.node_name(from),
                    graph.node_name(to)
                ))
            })
    })
}
