//! All data types for the weighted-digraph library.

pub mod edge;
pub mod error;

pub use edge::Edge;
pub use error::{GraphError, GraphResult};

/// Vertex identifier. Vertices are stored densely, indexed by this value.
pub type VertexId = usize;

/// Edge identifier, an index into the store's edge table.
pub type EdgeId = usize;

/// Signed edge cost.
pub type Cost = i64;

/// Largest vertex identifier the dense adjacency storage accepts.
pub const MAX_VERTEX_ID: VertexId = (1 << 24) - 1;

/// Lowest cost assigned by random graph generation.
pub const RANDOM_COST_MIN: Cost = 1;

/// Highest cost assigned by random graph generation.
pub const RANDOM_COST_MAX: Cost = 100;
