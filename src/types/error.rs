//! Error types for the weighted-digraph library.

use thiserror::Error;

use super::{EdgeId, VertexId};

/// All errors that can occur in the weighted-digraph library.
#[derive(Error, Debug)]
pub enum GraphError {
    /// Cost or endpoint lookup on an edge ID that is not live.
    #[error("Edge ID {0} not found")]
    UnknownEdge(EdgeId),

    /// No edge joins the two vertices in either direction.
    #[error("No edge between vertices {from} and {to}")]
    UnknownEdgeBetween { from: VertexId, to: VertexId },

    /// Vertex is absent, out of the declared range, or above the storage limit.
    #[error("Invalid vertex: {0}")]
    InvalidVertex(VertexId),

    /// An edge with the same endpoints already exists.
    #[error("Edge {from} -> {to} already exists")]
    DuplicateEdge { from: VertexId, to: VertexId },

    /// A cycle with negative total cost is reachable from the start vertex.
    #[error("The graph contains a negative cost cycle")]
    NegativeCycleDetected,

    /// The target vertex cannot be reached from the start vertex.
    #[error("There is no path from {from} to {to}")]
    NoPathFound { from: VertexId, to: VertexId },

    /// Restore requested before any snapshot was taken.
    #[error("No snapshot has been taken")]
    NothingToRestore,

    /// More distinct edges requested than the vertex set can hold.
    #[error("Cannot place {requested} edges, at most {max} are possible")]
    TooManyEdges { requested: usize, max: usize },

    /// A summed cost does not fit in a [`Cost`](super::Cost).
    #[error("Total cost overflows a 64-bit signed integer")]
    CostOverflow,

    /// The tour search ran out of its step budget.
    #[error("Search stopped after {0} steps")]
    SearchLimitReached(u64),

    /// Malformed graph text.
    #[error("Parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result type for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;
