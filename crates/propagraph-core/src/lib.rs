#![forbid(unsafe_code)]
//! propagraph-core library.
//!
//! The weighted directed graph that every propagraph analysis reads from,
//! its error type, and edge-list loading.
//!
//! # Conventions
//!
//! - **Errors**: graph operations return [`GraphResult`]; file and config
//!   loading return `anyhow::Result` with context.
//! - **Logging**: Use `tracing` macros (`info!`, `warn!`, `error!`, `debug!`, `trace!`).

pub mod config;
pub mod error;
pub mod graph;
pub mod loader;

pub use config::{LoaderConfig, load_loader_config};
pub use error::{ErrorKind, GraphError, GraphResult};
pub use graph::{DegreeMode, Edge, WeightedDigraph, WeightedGraph};
pub use loader::{load_edge_list, parse_edge_list};
