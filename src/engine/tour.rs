//! Nearest-neighbour approximation of a Hamiltonian cycle (TSP).
//!
//! Depth-first search from the origin that always tries the cheapest
//! outbound edge first and backtracks on dead ends. Runs on an explicit work
//! stack. The first closed cycle found is returned; it is not necessarily the
//! cheapest, and a `None` result does not prove that no cycle exists.

use serde::Serialize;

use crate::graph::GraphStore;
use crate::types::{Cost, GraphError, GraphResult, VertexId};

/// Parameters for a tour search.
#[derive(Debug, Clone, Copy, Default)]
pub struct TourParams {
    /// Vertex the cycle starts and ends at.
    pub origin: VertexId,
    /// Maximum number of candidate edges to examine. `None` = unbounded.
    pub step_limit: Option<u64>,
}

impl TourParams {
    /// Search from `origin` with no step limit.
    pub fn from_origin(origin: VertexId) -> Self {
        Self {
            origin,
            step_limit: None,
        }
    }

    /// Stop with [`GraphError::SearchLimitReached`] after `limit` steps.
    pub fn step_limit(mut self, limit: u64) -> Self {
        self.step_limit = Some(limit);
        self
    }
}

/// A closed tour. The edge from the last vertex back to the first is implied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tour {
    /// Vertices in visiting order, origin first.
    pub vertices: Vec<VertexId>,
    /// Total cost including the closing edge.
    pub cost: Cost,
}

impl Tour {
    /// Directed edges of the tour, including the closing edge.
    pub fn edges(&self) -> Vec<(VertexId, VertexId)> {
        let mut edges: Vec<(VertexId, VertexId)> =
            self.vertices.windows(2).map(|w| (w[0], w[1])).collect();
        if let (Some(&first), Some(&last)) = (self.vertices.first(), self.vertices.last()) {
            edges.push((last, first));
        }
        edges
    }
}

struct Frame {
    vertex: VertexId,
    depth: usize,
    /// Cost of the edge used to reach this vertex.
    entry_cost: Cost,
    /// Outbound `(neighbor, cost)` pairs, cheapest first.
    candidates: Vec<(VertexId, Cost)>,
    next: usize,
}

impl Frame {
    fn new(graph: &GraphStore, vertex: VertexId, depth: usize, entry_cost: Cost) -> GraphResult<Self> {
        let mut candidates = graph
            .outbound_pairs(vertex)
            .iter()
            .map(|&(neighbor, id)| Ok((neighbor, graph.cost_of_edge(id)?)))
            .collect::<GraphResult<Vec<_>>>()?;
        // Stable: equal costs keep insertion order.
        candidates.sort_by_key(|&(_, cost)| cost);
        Ok(Self {
            vertex,
            depth,
            entry_cost,
            candidates,
            next: 0,
        })
    }
}

/// Search for a Hamiltonian cycle through the declared number of vertices.
///
/// The cost of a closed cycle is summed with checked arithmetic; a total
/// outside the `i64` range fails with [`GraphError::CostOverflow`].
pub fn approximate_tour(graph: &GraphStore, params: TourParams) -> GraphResult<Option<Tour>> {
    let origin = params.origin;
    if !graph.contains_vertex(origin) {
        return Err(GraphError::InvalidVertex(origin));
    }
    let n = graph.declared_vertex_count();
    if n == 0 {
        return Ok(None);
    }

    let mut visited = vec![false; graph.vertex_bound()];
    visited[origin] = true;
    let mut stack = vec![Frame::new(graph, origin, 0, 0)?];
    let mut steps: u64 = 0;

    while let Some(frame) = stack.last_mut() {
        let Some(&(neighbor, cost)) = frame.candidates.get(frame.next) else {
            visited[frame.vertex] = false;
            stack.pop();
            continue;
        };
        frame.next += 1;

        steps += 1;
        if let Some(limit) = params.step_limit {
            if steps > limit {
                log::warn!("tour search from {} gave up after {} steps", origin, limit);
                return Err(GraphError::SearchLimitReached(limit));
            }
        }

        if neighbor == origin && frame.depth + 1 == n {
            let cost = stack
                .iter()
                .map(|f| f.entry_cost)
                .chain(std::iter::once(cost))
                .try_fold(0, |total: Cost, c| total.checked_add(c))
                .ok_or(GraphError::CostOverflow)?;
            let vertices = stack.iter().map(|f| f.vertex).collect();
            log::debug!("tour from {} closed after {} steps", origin, steps);
            return Ok(Some(Tour { vertices, cost }));
        }

        if !visited[neighbor] {
            let depth = frame.depth + 1;
            visited[neighbor] = true;
            stack.push(Frame::new(graph, neighbor, depth, cost)?);
        }
    }

    Ok(None)
}
