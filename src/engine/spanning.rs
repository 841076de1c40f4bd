//! Prim's minimum spanning tree over the undirected view of the graph.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use serde::Serialize;

use crate::graph::GraphStore;
use crate::types::{Cost, GraphError, GraphResult, VertexId};

/// Accepted tree edges as `(parent, child)` pairs, in acceptance order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SpanningTree {
    pub edges: Vec<(VertexId, VertexId)>,
}

impl SpanningTree {
    /// Number of tree edges.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Whether the tree has no edges.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Sum of the costs of the tree edges, looked up in either direction.
    /// Fails with [`GraphError::CostOverflow`] if the sum leaves the `i64` range.
    pub fn total_cost(&self, graph: &GraphStore) -> GraphResult<Cost> {
        self.edges.iter().try_fold(0, |total: Cost, &(parent, child)| {
            total
                .checked_add(graph.cost_between(parent, child)?)
                .ok_or(GraphError::CostOverflow)
        })
    }
}

/// Grow a minimum spanning tree from `start`, treating every directed edge
/// as undirected.
///
/// Only the component containing `start` is covered; other vertices are left
/// out without error. Ties are broken by cost, then by vertex ID.
pub fn minimum_spanning_tree(graph: &GraphStore, start: VertexId) -> GraphResult<SpanningTree> {
    if !graph.contains_vertex(start) {
        return Err(GraphError::InvalidVertex(start));
    }

    let bound = graph.vertex_bound();
    let mut dist: Vec<Option<Cost>> = vec![None; bound];
    let mut prev: Vec<Option<VertexId>> = vec![None; bound];
    let mut processed = vec![false; bound];
    let mut queue: BinaryHeap<Reverse<(Cost, VertexId)>> = BinaryHeap::new();

    dist[start] = Some(0);
    processed[start] = true;

    for neighbor in graph.all_neighbors(start) {
        if processed[neighbor] {
            continue;
        }
        let cost = graph.cost_between(neighbor, start)?;
        dist[neighbor] = Some(cost);
        prev[neighbor] = Some(start);
        queue.push(Reverse((cost, neighbor)));
    }

    let mut tree = SpanningTree::default();
    while let Some(Reverse((_, vertex))) = queue.pop() {
        if processed[vertex] {
            continue;
        }
        processed[vertex] = true;
        if let Some(parent) = prev[vertex] {
            tree.edges.push((parent, vertex));
        }

        for neighbor in graph.all_neighbors(vertex) {
            if processed[neighbor] {
                continue;
            }
            let cost = graph.cost_between(neighbor, vertex)?;
            if dist[neighbor].map_or(true, |known| cost < known) {
                dist[neighbor] = Some(cost);
                prev[neighbor] = Some(vertex);
                queue.push(Reverse((cost, neighbor)));
            }
        }
    }

    log::debug!(
        "spanning tree from {} accepted {} edges",
        start,
        tree.edges.len()
    );
    Ok(tree)
}
