//! Edge-list loading.
//!
//! # Format
//!
//! A delimited text file (tab by default) whose first line is a header.
//! Column roles are detected case-insensitively by substring:
//!
//! | Role   | Header contains       |
//! |--------|-----------------------|
//! | source | `start` or `source`   |
//! | target | `end` or `target`     |
//! | weight | `weight`              |
//!
//! When a role is missing and the header has exactly three columns, the
//! columns are taken positionally as source, target, weight. Every data
//! line must have as many fields as the header. Nodes are numbered in order
//! of first appearance.

use std::path::Path;

use anyhow::{Context, Result, bail};
use tracing::{debug, instrument, warn};

use crate::config::LoaderConfig;
use crate::graph::{WeightedDigraph, WeightedGraph};

/// Resolved column positions of the three edge fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Columns {
    source: usize,
    target: usize,
    weight: usize,
    width: usize,
}

/// Read an edge-list file into a [`WeightedGraph`].
///
/// # Errors
///
/// Returns an error if the file cannot be read or [`parse_edge_list`]
/// rejects its contents.
#[instrument(skip(config))]
pub fn load_edge_list(path: &Path, config: &LoaderConfig) -> Result<WeightedGraph> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read edge list {}", path.display()))?;
    parse_edge_list(&text, config).with_context(|| format!("Invalid edge list {}", path.display()))
}

/// Parse edge-list text into a [`WeightedGraph`].
///
/// # Errors
///
/// Returns an error when the header is missing or has no usable columns,
/// a data line has the wrong number of fields, or a weight is not a finite
/// number.
pub fn parse_edge_list(text: &str, config: &LoaderConfig) -> Result<WeightedGraph> {
    let mut lines = text
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty() && !config.is_comment(line));

    let Some((_, header)) = lines.next() else {
        bail!("edge list is empty: a header line is required");
    };
    let header_fields = split_fields(header, config);
    let columns = resolve_columns(&header_fields)?;

    let mut graph = WeightedGraph::new();
    for (line_no, line) in lines {
        let fields = split_fields(line, config);
        if fields.len() != columns.width {
            bail!(
                "line {}: expected {} fields to match the header, found {}",
                line_no + 1,
                columns.width,
                fields.len()
            );
        }

        let raw_weight = fields[columns.weight];
        let weight: f64 = raw_weight.parse().with_context(|| {
            format!("line {}: weight '{raw_weight}' is not a number", line_no + 1)
        })?;
        let source = graph.ensure_node(fields[columns.source].to_string());
        let target = graph.ensure_node(fields[columns.target].to_string());
        graph
            .add_edge(source, target, weight)
            .with_context(|| format!("line {}: rejected edge", line_no + 1))?;
    }

    if graph.edge_count() == 0 {
        warn!("edge list contains no edges");
    }
    debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "edge list parsed"
    );
    Ok(graph)
}

fn split_fields<'a>(line: &'a str, config: &LoaderConfig) -> Vec<&'a str> {
    line.split(config.delimiter)
        .map(|field| if config.trim_fields { field.trim() } else { field })
        .collect()
}

fn resolve_columns(header: &[&str]) -> Result<Columns> {
    let mut source = None;
    let mut target = None;
    let mut weight = None;

    for (i, name) in header.iter().enumerate() {
        let lower = name.to_lowercase();
        if lower.contains("start") || lower.contains("source") {
            source = Some(i);
        } else if lower.contains("end") || lower.contains("target") {
            target = Some(i);
        } else if lower.contains("weight") {
            weight = Some(i);
        }
    }

    match (source, target, weight) {
        (Some(source), Some(target), Some(weight)) => Ok(Columns {
            source,
            target,
            weight,
            width: header.len(),
        }),
        _ if header.len() == 3 => {
            warn!("header lacks start/end/weight names, using columns 0, 1, 2");
            Ok(Columns {
                source: 0,
                target: 1,
                weight: 2,
                width: 3,
            })
        }
        _ => bail!("header does not name start, end, and weight columns: {header:?}"),
    }
}
