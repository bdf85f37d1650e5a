use std::fmt;

/// Coarse error category, for callers that decide between aborting and
/// retrying with a different algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A node index outside `[0, N)`, or an operation that needs nodes was
    /// called on an empty graph.
    OutOfRange,
    /// An algorithm precondition does not hold for this graph or input.
    InvalidArgument,
    /// A negative-weight cycle makes shortest distances undefined.
    NegativeCycle,
}

impl ErrorKind {
    /// Stable identifier for logs and machine parsing.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OutOfRange => "out_of_range",
            Self::InvalidArgument => "invalid_argument",
            Self::NegativeCycle => "negative_cycle",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors raised by graph construction and graph algorithms.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GraphError {
    /// A node index is not in the graph.
    #[error("node index {index} is out of range for a graph with {node_count} nodes")]
    OutOfRange { index: usize, node_count: usize },

    /// The operation needs at least one node.
    #[error("{operation} requires a non-empty graph")]
    EmptyGraph { operation: &'static str },

    /// A precondition on the graph or the arguments does not hold.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A negative-weight cycle: Bellman-Ford can still relax an edge after
    /// `V - 1` rounds, or an all-pairs distance from a node to itself went
    /// negative.
    #[error("negative cycle reachable from node {origin}")]
    NegativeCycle { origin: usize },
}

impl GraphError {
    /// The coarse category of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::OutOfRange { .. } | Self::EmptyGraph { .. } => ErrorKind::OutOfRange,
            Self::InvalidArgument(_) => ErrorKind::InvalidArgument,
            Self::NegativeCycle { .. } => ErrorKind::NegativeCycle,
        }
    }
}

/// Result alias for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;

#[cfg(test)]
mod tests {
    use super::{ErrorKind, GraphError};

    #[test]
    fn empty_graph_is_out_of_range_kind() {
        let err = GraphError::EmptyGraph {
            operation: "floyd-warshall",
        };
        assert_eq!(err.kind(), ErrorKind::OutOfRange);
        assert_eq!(err.to_string(), "floyd-warshall requires a non-empty graph");
    }

    #[test]
    fn kinds_map_one_to_one() {
        assert_eq!(
            GraphError::OutOfRange {
                index: 7,
                node_count: 3
            }
            .kind(),
            ErrorKind::OutOfRange
        );
        assert_eq!(
            GraphError::InvalidArgument("x".into()).kind(),
            ErrorKind::InvalidArgument
        );
        assert_eq!(
            GraphError::NegativeCycle { origin: 0 }.kind(),
            ErrorKind::NegativeCycle
        );
    }

    #[test]
    fn kind_names_are_machine_friendly() {
        for kind in [
            ErrorKind::OutOfRange,
            ErrorKind::InvalidArgument,
            ErrorKind::NegativeCycle,
        ] {
            let name = kind.as_str();
            assert!(name.chars().all(|c| c.is_ascii_lowercase() || c == '_'));
        }
    }
}
