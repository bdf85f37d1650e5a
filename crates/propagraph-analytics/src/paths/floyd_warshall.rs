//! All-pairs shortest paths (Floyd-Warshall).
//!
//! # Algorithm
//!
//! A distance matrix is seeded with `0` on the diagonal and the cost of
//! every direct edge, and a next-hop matrix records the first step of the
//! best known path for each pair. For each intermediate `k`, every pair
//! `(i, j)` adopts `i → k → j` when it is strictly shorter. Paths are read
//! back by following next hops from `i` until `j`.
//!
//! Two cost models share the same core: actual edge weights, and unit cost
//! per edge (hop count). The weighted model treats a zero-weight edge as
//! absent, as Dijkstra does, so both agree on every non-negative graph. The
//! unit-cost model seeds from explicit edge existence, matching BFS.

use propagraph_core::{GraphError, GraphResult, WeightedDigraph};
use tracing::{debug, instrument};

use super::{NodePath, WeightedPath};

/// Distance and next-hop matrices for every ordered pair.
struct AllPairs {
    dist: Vec<Vec<f64>>,
    next: Vec<Vec<Option<usize>>>,
}

impl AllPairs {
    /// Seed from the graph's edges, costing each with `cost`; edges it maps
    /// to `None` are left out.
    fn seeded<G, F>(graph: &G, cost: F) -> Self
    where
        G: WeightedDigraph,
        F: Fn(f64) -> Option<f64>,
    {
        let n = graph.node_count();
        let mut dist = vec![vec![f64::INFINITY; n]; n];
        let mut next = vec![vec![None; n]; n];
        for (i, (row, hops)) in dist.iter_mut().zip(next.iter_mut()).enumerate() {
            row[i] = 0.0;
            hops[i] = Some(i);
        }
        for edge in graph.edges() {
            let (i, j) = (edge.source, edge.target);
            let Some(c) = cost(edge.weight) else {
                continue;
            };
            if c < dist[i][j] {
                dist[i][j] = c;
                next[i][j] = Some(j);
            }
        }
        Self { dist, next }
    }

    fn relax(&mut self) {
        let n = self.dist.len();
        for k in 0..n {
            for i in 0..n {
                let through_k = self.dist[i][k];
                if !through_k.is_finite() {
                    continue;
                }
                for j in 0..n {
                    let candidate = through_k + self.dist[k][j];
                    if candidate < self.dist[i][j] {
                        self.dist[i][j] = candidate;
                        self.next[i][j] = self.next[i][k];
                    }
                }
            }
        }
    }

    /// First node whose distance to itself went negative.
    fn negative_cycle_node(&self) -> Option<usize> {
        (0..self.dist.len()).find(|&i| self.dist[i][i] < 0.0)
    }

    fn path(&self, from: usize, to: usize) -> Vec<usize> {
        if self.next[from][to].is_none() {
            return Vec::new();
        }
        let mut path = vec![from];
        let mut cursor = from;
        while cursor != to {
            match self.next[cursor][to] {
                Some(hop) if path.len() <= self.dist.len() => {
                    path.push(hop);
                    cursor = hop;
                }
                _ => return Vec::new(),
            }
        }
        path
    }
}

/// Lightest path and its weight for every ordered pair.
///
/// `result[i][j]` describes `i → j`; unreachable pairs are
/// `(+inf, [])` and `result[i][i]` is `(0, [i])`. Zero-weight edges are
/// not traversed. Negative weights are allowed as long as they form no
/// negative cycle.
///
/// # Errors
///
/// - [`GraphError::EmptyGraph`] for a graph without nodes.
/// - [`GraphError::NegativeCycle`] if some node can reach itself at negative
///   total weight; `origin` is the lowest such node.
#[instrument(skip(graph))]
pub fn all_weighted_shortest_paths_floyd_warshall<G: WeightedDigraph>(
    graph: &G,
) -> GraphResult<Vec<Vec<WeightedPath>>> {
    let n = graph.node_count();
    if n == 0 {
        return Err(GraphError::EmptyGraph {
            operation: "weighted floyd-warshall",
        });
    }

    let mut pairs = AllPairs::seeded(graph, nonzero_weight);
    pairs.relax();
    if let Some(origin) = pairs.negative_cycle_node() {
        debug!(origin, "negative cycle on the diagonal");
        return Err(GraphError::NegativeCycle { origin });
    }

    debug!(nodes = n, "weighted floyd-warshall complete");
    Ok((0..n)
        .map(|i| {
            (0..n)
                .map(|j| {
                    let path = pairs.path(i, j);
                    if path.is_empty() {
                        WeightedPath::unreachable()
                    } else {
                        WeightedPath {
                            distance: pairs.dist[i][j],
                            path,
                        }
                    }
                })
                .collect()
        })
        .collect())
}

/// Fewest-hop path for every ordered pair.
///
/// `result[i][j]` describes `i → j` and carries the **destination** `j` as
/// its `node`; unreachable pairs have an empty path.
///
/// # Errors
///
/// Returns [`GraphError::EmptyGraph`] for a graph without nodes.
#[instrument(skip(graph))]
pub fn all_unweighted_shortest_paths_floyd_warshall<G: WeightedDigraph>(
    graph: &G,
) -> GraphResult<Vec<Vec<NodePath>>> {
    let n = graph.node_count();
    if n == 0 {
        return Err(GraphError::EmptyGraph {
            operation: "unweighted floyd-warshall",
        });
    }

    let mut pairs = AllPairs::seeded(graph, |_| Some(1.0));
    pairs.relax();

    debug!(nodes = n, "unweighted floyd-warshall complete");
    Ok((0..n)
        .map(|i| {
            (0..n)
                .map(|j| NodePath {
                    node: j,
                    path: pairs.path(i, j),
                })
                .collect()
        })
        .collect())
}

/// An edge's weight as a traversal cost; zero reads as no edge.
#[allow(clippy::float_cmp)]
fn nonzero_weight(weight: f64) -> Option<f64> {
    (weight != 0.0).then_some(weight)
}
