//! In-memory graph operations — the core data structure.

pub mod builder;
pub mod random;
pub mod store;
pub mod traversal;

pub use builder::GraphBuilder;
pub use random::generate_random;
pub use store::{GraphSnapshot, GraphStore};
pub use traversal::shortest_path_bfs;
