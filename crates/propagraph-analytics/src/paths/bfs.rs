//! Breadth-first shortest paths with unit edge cost.

use std::collections::VecDeque;

use fixedbitset::FixedBitSet;
use propagraph_core::{GraphResult, WeightedDigraph};
use tracing::{debug, instrument};

use super::{NodePath, node_paths};

/// Fewest-hop path from `source` to every node, ignoring edge weights.
///
/// Returns one [`NodePath`] per node, in index order. Successors are
/// expanded in ascending index order, so among equally short paths the one
/// through lower-indexed nodes is reported.
///
/// # Errors
///
/// Returns [`GraphError::OutOfRange`](propagraph_core::GraphError::OutOfRange)
/// if `source` is not in the graph.
#[instrument(skip(graph))]
pub fn all_unweighted_shortest_paths_bfs<G: WeightedDigraph>(
    graph: &G,
    source: usize,
) -> GraphResult<Vec<NodePath>> {
    graph.check_node(source)?;

    let n = graph.node_count();
    let mut parent: Vec<Option<usize>> = vec![None; n];
    let mut seen = FixedBitSet::with_capacity(n);
    seen.insert(source);

    let mut queue = VecDeque::from([source]);
    while let Some(node) = queue.pop_front() {
        for next in graph.successors(node) {
            if !seen.put(next) {
                parent[next] = Some(node);
                queue.push_back(next);
            }
        }
    }

    debug!(reached = seen.count_ones(..), nodes = n, "bfs complete");
    Ok(node_paths(&parent, source))
}
