//! Fluent API for building GraphStore instances.

use crate::types::{Cost, GraphResult, VertexId};

use super::GraphStore;

/// Fluent builder for constructing a [`GraphStore`].
///
/// Edges are inserted in the order they were declared, so IDs run
/// `0..edge_count` in declaration order.
pub struct GraphBuilder {
    declared_vertices: usize,
    vertices: Vec<VertexId>,
    edges: Vec<(VertexId, VertexId, Cost)>,
}

impl GraphBuilder {
    /// Create a new builder with no declared vertices.
    pub fn new() -> Self {
        Self {
            declared_vertices: 0,
            vertices: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Declare `count` vertices and create slots `0..count` for them.
    pub fn with_vertices(count: usize) -> Self {
        Self {
            declared_vertices: count,
            vertices: (0..count).collect(),
            edges: Vec::new(),
        }
    }

    /// Add a standalone vertex.
    pub fn vertex(&mut self, v: VertexId) -> &mut Self {
        self.vertices.push(v);
        self
    }

    /// Add a directed edge.
    pub fn edge(&mut self, from: VertexId, to: VertexId, cost: Cost) -> &mut Self {
        self.edges.push((from, to, cost));
        self
    }

    /// Add both `a -> b` and `b -> a` with the same cost.
    pub fn both_ways(&mut self, a: VertexId, b: VertexId, cost: Cost) -> &mut Self {
        self.edges.push((a, b, cost));
        self.edges.push((b, a, cost));
        self
    }

    /// Build the final GraphStore.
    pub fn build(&self) -> GraphResult<GraphStore> {
        let mut graph = GraphStore::with_declared_vertices(self.declared_vertices);
        for &v in &self.vertices {
            graph.add_vertex(v)?;
        }
        for &(from, to, cost) in &self.edges {
            graph.add_edge(from, to, cost)?;
        }
        Ok(graph)
    }
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}
