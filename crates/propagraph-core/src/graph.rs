//! Weighted directed graph model.
//!
//! # Overview
//!
//! [`WeightedDigraph`] is the read-only query surface every analytics
//! routine is written against: dense node indices `0..N`, a display name
//! per node, and at most one weighted edge per ordered `(source, target)`
//! pair. [`WeightedGraph`] is the concrete, petgraph-backed implementation.
//!
//! ## Absent vs. zero-weight edges
//!
//! [`WeightedDigraph::edge_weight`] reports `0.0` for a missing edge, so an
//! explicit zero-weight edge and no edge at all look the same through it.
//! Use [`WeightedDigraph::edge_weight_checked`] or
//! [`WeightedDigraph::has_edge`] when the distinction matters.
//!
//! ## Iteration order
//!
//! [`WeightedDigraph::edges`] yields edges in insertion order and node
//! neighbor iterators yield ascending indices. First/last tie-breaks in the
//! metrics depend on these orders.

use std::collections::HashMap;

use petgraph::Direction;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use serde::{Deserialize, Serialize};

use crate::error::{GraphError, GraphResult};

// ---------------------------------------------------------------------------
// DegreeMode / Edge
// ---------------------------------------------------------------------------

/// Which incident edges a per-node computation considers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DegreeMode {
    /// Incoming edges only.
    In,
    /// Outgoing edges only.
    Out,
    /// Incoming and outgoing edges, each direction counted separately.
    Full,
}

impl DegreeMode {
    /// Whether incoming edges are counted.
    #[must_use]
    pub const fn counts_incoming(self) -> bool {
        matches!(self, Self::In | Self::Full)
    }

    /// Whether outgoing edges are counted.
    #[must_use]
    pub const fn counts_outgoing(self) -> bool {
        matches!(self, Self::Out | Self::Full)
    }
}

/// A directed weighted edge `source -> target`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub source: usize,
    pub target: usize,
    pub weight: f64,
}

// ---------------------------------------------------------------------------
// WeightedDigraph
// ---------------------------------------------------------------------------

/// Read-only query surface of a weighted directed graph.
///
/// Methods taking a node index assume it is in `[0, node_count())`;
/// implementations return empty/zero answers for anything else rather than
/// panicking. Callers that accept user indices validate them first.
pub trait WeightedDigraph {
    /// Number of nodes.
    fn node_count(&self) -> usize;

    /// Number of directed edges.
    fn edge_count(&self) -> usize;

    /// Whether the edge `source -> target` exists.
    fn has_edge(&self, source: usize, target: usize) -> bool;

    /// Weight of `source -> target`, or `0.0` when the edge is absent.
    fn edge_weight(&self, source: usize, target: usize) -> f64;

    /// Nodes reachable over one outgoing edge, ascending.
    fn successors(&self, node: usize) -> impl Iterator<Item = usize> + '_;

    /// Nodes with an edge into `node`, ascending.
    fn predecessors(&self, node: usize) -> impl Iterator<Item = usize> + '_;

    /// Display name of `node`.
    fn node_name(&self, node: usize) -> &str;

    /// Every edge, in insertion order.
    fn edges(&self) -> impl Iterator<Item = Edge> + '_;

    /// Adjacency list of `node`: its outgoing neighbors.
    fn adjacency_list(&self, node: usize) -> impl Iterator<Item = usize> + '_ {
        self.successors(node)
    }

    /// Weight of `source -> target`, distinguishing an absent edge from an
    /// explicit zero weight.
    fn edge_weight_checked(&self, source: usize, target: usize) -> Option<f64> {
        self.has_edge(source, target)
            .then(|| self.edge_weight(source, target))
    }

    /// Whether `node` is a valid index.
    fn contains_node(&self, node: usize) -> bool {
        node < self.node_count()
    }

    /// Number of incoming edges.
    fn in_degree(&self, node: usize) -> usize {
        self.predecessors(node).count()
    }

    /// Number of outgoing edges.
    fn out_degree(&self, node: usize) -> usize {
        self.successors(node).count()
    }

    /// Edge count around `node` per `mode`.
    fn degree(&self, node: usize, mode: DegreeMode) -> usize {
        let mut total = 0;
        if mode.counts_incoming() {
            total += self.in_degree(node);
        }
        if mode.counts_outgoing() {
            total += self.out_degree(node);
        }
        total
    }

    /// Sum of incident edge weights per `mode`.
    ///
    /// `Full` adds both directions, so a reciprocal pair contributes twice.
    fn weighted_degree(&self, node: usize, mode: DegreeMode) -> f64 {
        let mut total = 0.0;
        if mode.counts_incoming() {
            total += self
                .predecessors(node)
                .map(|pred| self.edge_weight(pred, node))
                .sum::<f64>();
        }
        if mode.counts_outgoing() {
            total += self
                .successors(node)
                .map(|succ| self.edge_weight(node, succ))
                .sum::<f64>();
        }
        total
    }

    /// Fail with [`GraphError::OutOfRange`] unless `node` is valid.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::OutOfRange`] when `node >= node_count()`.
    fn check_node(&self, node: usize) -> GraphResult<()> {
        if self.contains_node(node) {
            Ok(())
        } else {
            Err(GraphError::OutOfRange {
                index: node,
                node_count: self.node_count(),
            })
        }
    }
}

// ---------------------------------------------------------------------------
// WeightedGraph
// ---------------------------------------------------------------------------

/// A petgraph-backed weighted directed graph with unique node names.
///
/// Node `i` is petgraph's `NodeIndex::new(i)`; nodes are never removed, so
/// indices stay dense.
#[derive(Debug, Clone, Default)]
pub struct WeightedGraph {
    graph: DiGraph<String, f64>,
    node_map: HashMap<String, NodeIndex>,
}

impl WeightedGraph {
    /// Create an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an edgeless graph with one node per name, in order.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::InvalidArgument`] if a name repeats.
    pub fn with_nodes<I, S>(names: I) -> GraphResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut graph = Self::new();
        for name in names {
            graph.add_node(name)?;
        }
        Ok(graph)
    }

    /// Build a graph from named edges.
    ///
    /// `nodes` are added first, in order; edge endpoints not yet present
    /// are appended in order of first appearance.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::InvalidArgument`] for a repeated name in
    /// `nodes` or a non-finite weight.
    pub fn from_named_edges<N, E, S>(nodes: N, edges: E) -> GraphResult<Self>
    where
        N: IntoIterator<Item = S>,
        E: IntoIterator<Item = (S, S, f64)>,
        S: Into<String>,
    {
        let mut graph = Self::with_nodes(nodes)?;
        for (source, target, weight) in edges {
            let source = graph.ensure_node(source.into());
            let target = graph.ensure_node(target.into());
            graph.add_edge(source, target, weight)?;
        }
        Ok(graph)
    }

    /// Add a node and return its index.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::InvalidArgument`] if the name is taken.
    pub fn add_node(&mut self, name: impl Into<String>) -> GraphResult<usize> {
        let name = name.into();
        if self.node_map.contains_key(&name) {
            return Err(GraphError::InvalidArgument(format!(
                "node name '{name}' is already present"
            )));
        }
        let idx = self.graph.add_node(name.clone());
        self.node_map.insert(name, idx);
        Ok(idx.index())
    }

    /// Add `source -> target`, replacing the weight if the edge exists.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::OutOfRange`] for an unknown index and
    /// [`GraphError::InvalidArgument`] for a NaN or infinite weight.
    pub fn add_edge(&mut self, source: usize, target: usize, weight: f64) -> GraphResult<()> {
        self.check_node(source)?;
        self.check_node(target)?;
        if !weight.is_finite() {
            return Err(GraphError::InvalidArgument(format!(
                "edge {source} -> {target} has non-finite weight {weight}"
            )));
        }
        self.graph
            .update_edge(NodeIndex::new(source), NodeIndex::new(target), weight);
        Ok(())
    }

    /// Add an edge between two named nodes.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::InvalidArgument`] if either name is unknown or
    /// the weight is not finite.
    pub fn add_edge_by_name(&mut self, source: &str, target: &str, weight: f64) -> GraphResult<()> {
        let lookup = |name: &str| {
            self.node_index(name).ok_or_else(|| {
                GraphError::InvalidArgument(format!("node '{name}' is not in the graph"))
            })
        };
        let (source, target) = (lookup(source)?, lookup(target)?);
        self.add_edge(source, target, weight)
    }

    /// Look up the index of a named node.
    #[must_use]
    pub fn node_index(&self, name: &str) -> Option<usize> {
        self.node_map.get(name).map(|idx| idx.index())
    }

    /// Node names in index order.
    #[must_use]
    pub fn node_names(&self) -> Vec<&str> {
        self.graph
            .node_indices()
            .filter_map(|idx| self.graph.node_weight(idx))
            .map(String::as_str)
            .collect()
    }

    pub(crate) fn ensure_node(&mut self, name: String) -> usize {
        if let Some(idx) = self.node_map.get(&name) {
            return idx.index();
        }
        let idx = self.graph.add_node(name.clone());
        self.node_map.insert(name, idx);
        idx.index()
    }

    fn neighbors(&self, node: usize, dir: Direction) -> std::vec::IntoIter<usize> {
        let mut out: Vec<usize> = if self.contains_node(node) {
            self.graph
                .neighbors_directed(NodeIndex::new(node), dir)
                .map(NodeIndex::index)
                .collect()
        } else {
            Vec::new()
        };
        out.sort_unstable();
        out.into_iter()
    }
}

impl WeightedDigraph for WeightedGraph {
    fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    fn has_edge(&self, source: usize, target: usize) -> bool {
        self.contains_node(source)
            && self.contains_node(target)
            && self
                .graph
                .contains_edge(NodeIndex::new(source), NodeIndex::new(target))
    }

    fn edge_weight(&self, source: usize, target: usize) -> f64 {
        if !(self.contains_node(source) && self.contains_node(target)) {
            return 0.0;
        }
        self.graph
            .find_edge(NodeIndex::new(source), NodeIndex::new(target))
            .and_then(|e| self.graph.edge_weight(e))
            .copied()
            .unwrap_or(0.0)
    }

    fn successors(&self, node: usize) -> impl Iterator<Item = usize> + '_ {
        self.neighbors(node, Direction::Outgoing)
    }

    fn predecessors(&self, node: usize) -> impl Iterator<Item = usize> + '_ {
        self.neighbors(node, Direction::Incoming)
    }

    fn node_name(&self, node: usize) -> &str {
        if self.contains_node(node) {
            self.graph
                .node_weight(NodeIndex::new(node))
                .map_or("", String::as_str)
        } else {
            ""
        }
    }

    fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.graph.edge_references().map(|e| Edge {
            source: e.source().index(),
            target: e.target().index(),
            weight: *e.weight(),
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
