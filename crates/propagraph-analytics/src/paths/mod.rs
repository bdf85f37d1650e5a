//! Shortest paths.
//!
//! # Overview
//!
//! Five algorithms with different preconditions. Preconditions are checked
//! before any work is done; there is no automatic fallback from one
//! algorithm to another, so the caller always knows which guarantees and
//! which complexity it is getting.
//!
//! | Function | Rejects | Cost |
//! |----------|---------|------|
//! | [`all_unweighted_shortest_paths_bfs`] | bad source | O(V + E) |
//! | [`all_weighted_shortest_paths_dijkstra`] | bad source, any negative weight | O(V²) |
//! | [`all_weighted_shortest_paths_bellman_ford`] | bad source, **no** negative weight, negative cycle | O(V·E) |
//! | [`all_weighted_shortest_paths_floyd_warshall`] | empty graph, negative cycle | O(V³) |
//! | [`all_unweighted_shortest_paths_floyd_warshall`] | empty graph | O(V³) |
//!
//! Paths are vertex sequences starting at the source and ending at the
//! destination. A node's path to itself is `[node]`; an unreachable node
//! has an empty path.

pub mod bellman_ford;
pub mod bfs;
pub mod diameter;
pub mod dijkstra;
pub mod floyd_warshall;
pub mod walk;

pub use bellman_ford::all_weighted_shortest_paths_bellman_ford;
pub use bfs::all_unweighted_shortest_paths_bfs;
pub use diameter::graph_diameter;
pub use dijkstra::all_weighted_shortest_paths_dijkstra;
pub use floyd_warshall::{
    all_unweighted_shortest_paths_floyd_warshall, all_weighted_shortest_paths_floyd_warshall,
};
pub use walk::weighted_path_weight;

use serde::Serialize;

/// A node index paired with a path to or from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodePath {
    /// The endpoint this record describes.
    pub node: usize,
    /// Vertex sequence; empty when unreachable.
    pub path: Vec<usize>,
}

impl NodePath {
    /// Whether a path exists.
    #[must_use]
    pub fn is_reachable(&self) -> bool {
        !self.path.is_empty()
    }

    /// Number of edges on the path, or `None` when unreachable.
    #[must_use]
    pub fn hops(&self) -> Option<usize> {
        self.path.len().checked_sub(1)
    }
}

/// A path with its total weight.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeightedPath {
    /// Sum of edge weights; `f64::INFINITY` when unreachable.
    pub distance: f64,
    /// Vertex sequence; empty when unreachable.
    pub path: Vec<usize>,
}

impl WeightedPath {
    /// The record for an unreachable pair.
    #[must_use]
    pub const fn unreachable() -> Self {
        Self {
            distance: f64::INFINITY,
            path: Vec::new(),
        }
    }

    /// Whether a path exists.
    #[must_use]
    pub fn is_reachable(&self) -> bool {
        !self.path.is_empty()
    }
}

/// Rebuild `source → … → target` from a predecessor array.
///
/// Returns an empty path if `target` was never reached. The walk is capped
/// at `parent.len()` steps.
pub(crate) fn trace_parents(parent: &[Option<usize>], source: usize, target: usize) -> Vec<usize> {
    if target == source {
        return vec![source];
    }
    let mut path = vec![target];
    let mut cursor = target;
    while cursor != source {
        match parent[cursor] {
            Some(prev) if path.len() <= parent.len() => {
                path.push(prev);
                cursor = prev;
            }
            _ => return Vec::new(),
        }
    }
    path.reverse();
    path
}

/// Assemble per-node records from a predecessor array.
pub(crate) fn node_paths(parent: &[Option<usize>], source: usize) -> Vec<NodePath> {
    (0..parent.len())
        .map(|node| NodePath {
            node,
            path: trace_parents(parent, source, node),
        })
        .collect()
}
