//! The edge record stored in the graph's edge table.

use serde::Serialize;

use super::{Cost, EdgeId, VertexId};

/// A directed, costed edge between two vertices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Edge {
    /// Identifier assigned by the store when the edge was added.
    pub id: EdgeId,
    /// Origin vertex.
    pub from: VertexId,
    /// Destination vertex.
    pub to: VertexId,
    /// Signed cost; negative values are valid.
    pub cost: Cost,
}

impl Edge {
    /// Create a new edge record.
    pub fn new(id: EdgeId, from: VertexId, to: VertexId, cost: Cost) -> Self {
        Self { id, from, to, cost }
    }

    /// Whether the edge starts and ends at the same vertex.
    pub fn is_self_loop(&self) -> bool {
        self.from == self.to
    }

    /// The `(from, to)` pair.
    pub fn endpoints(&self) -> (VertexId, VertexId) {
        (self.from, self.to)
    }
}

impl std::fmt::Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}) {}->{} {}", self.id, self.from, self.to, self.cost)
    }
}
