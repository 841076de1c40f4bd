//! weighted-digraph — in-memory directed graph with signed edge costs.
//!
//! Stores vertices and costed directed edges with forward and reverse
//! adjacency indexes, and runs breadth-first shortest path, a bounded
//! lowest-cost walk with negative-cycle detection, Prim's spanning tree and a
//! backtracking approximation of a Hamiltonian cycle over it.

pub mod cli;
pub mod engine;
pub mod format;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use engine::{
    approximate_tour, lowest_cost_walk, minimum_spanning_tree, SpanningTree, Tour, TourParams,
    Walk, Workspace,
};
pub use format::{GraphReader, GraphWriter};
pub use graph::{generate_random, shortest_path_bfs, GraphBuilder, GraphSnapshot, GraphStore};
pub use types::{
    Cost, Edge, EdgeId, GraphError, GraphResult, VertexId, MAX_VERTEX_ID, RANDOM_COST_MAX,
    RANDOM_COST_MIN,
};
