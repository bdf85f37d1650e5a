#![forbid(unsafe_code)]
//! propagraph-analytics library.
//!
//! Read-only analyses over any [`WeightedDigraph`]: edge and node
//! statistics, clustering, cycle detection, and shortest paths.
//!
//! # Conventions
//!
//! - **Errors**: Fallible operations return [`GraphResult`]; statistics that
//!   cannot fail return plain values.
//! - **Logging**: Use `tracing` macros (`info!`, `warn!`, `error!`, `debug!`, `trace!`).
//! - **Indices**: Node arguments are dense indices `0..node_count()`.

pub mod clustering;
pub mod cycles;
pub mod metrics;
pub mod paths;
pub mod ranked;

pub use clustering::{weighted_global_clustering, weighted_local_clustering};
pub use cycles::{find_cycle, has_cycle};
pub use metrics::degree::{
    average_edge_degree, average_edge_degree_weighted, max_edge_degree, max_edge_degree_weighted,
    min_edge_degree, min_edge_degree_weighted,
};
pub use metrics::strength::{
    average_strength_centrality, max_strength_centrality, min_strength_centrality,
    strength_centrality,
};
pub use metrics::weight::{
    average_edge_weight, has_negative_weights, max_edge_weight, min_edge_weight,
};
pub use paths::{
    NodePath, WeightedPath, all_unweighted_shortest_paths_bfs,
    all_unweighted_shortest_paths_floyd_warshall, all_weighted_shortest_paths_bellman_ford,
    all_weighted_shortest_paths_dijkstra, all_weighted_shortest_paths_floyd_warshall,
    graph_diameter, weighted_path_weight,
};
pub use propagraph_core::{DegreeMode, GraphError, GraphResult, WeightedDigraph};
pub use ranked::Ranked;
