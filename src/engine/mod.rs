//! High-level operations — path, spanning-tree and tour algorithms, plus the
//! workspace that owns a graph and its snapshot.

pub mod spanning;
pub mod tour;
pub mod walk;
pub mod workspace;

pub use spanning::{minimum_spanning_tree, SpanningTree};
pub use tour::{approximate_tour, Tour, TourParams};
pub use walk::{lowest_cost_walk, Walk};
pub use workspace::Workspace;
