//! Graph diameter in hops.

use propagraph_core::WeightedDigraph;
use tracing::{debug, instrument};

use super::floyd_warshall::all_unweighted_shortest_paths_floyd_warshall;

/// Longest fewest-hop distance between any two mutually reachable nodes.
///
/// Measured in edges. Unreachable pairs are ignored, so a graph whose
/// nodes cannot reach one another has diameter `0`, as does the empty
/// graph.
#[must_use]
#[instrument(skip(graph))]
pub fn graph_diameter<G: WeightedDigraph>(graph: &G) -> usize {
    let all = match all_unweighted_shortest_paths_floyd_warshall(graph) {
        Ok(all) => all,
        Err(err) => {
            debug!(%err, "no pairs to measure");
            return 0;
        }
    };
    all.iter()
        .flatten()
        .map(|record| record.path.len())
        .max()
        .unwrap_or(0)
        .saturating_sub(1)
}
