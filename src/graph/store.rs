//! Core graph structure — vertices, costed edges and adjacency indexes.

use crate::types::{Cost, Edge, EdgeId, GraphError, GraphResult, VertexId, MAX_VERTEX_ID};

/// Per-vertex adjacency: `(neighbor, edge_id)` pairs in insertion order.
#[derive(Debug, Clone, Default)]
struct Adjacency {
    /// Edges originating at this vertex, keyed by destination.
    outbound: Vec<(VertexId, EdgeId)>,
    /// Edges terminating at this vertex, keyed by origin.
    inbound: Vec<(VertexId, EdgeId)>,
}

/// The in-memory directed graph with signed edge costs.
///
/// Vertices live in a dense table indexed by [`VertexId`]; edges live in a
/// flat table indexed by [`EdgeId`]. Edge IDs are handed out from the length
/// of the edge table and are never reused, so a removed edge leaves an empty
/// slot behind.
///
/// The edge table therefore only grows: every edge ever added keeps a slot
/// (a `None` tombstone once removed) until the store is dropped or reloaded,
/// and [`GraphStore::snapshot`] copies the tombstones along with live edges.
/// Saving and reloading compacts IDs to `0..edge_count`.
#[derive(Debug, Clone, Default)]
pub struct GraphStore {
    /// Vertex tally recorded at construction. Not incremented by
    /// [`GraphStore::add_vertex`], decremented by [`GraphStore::remove_vertex`].
    declared_vertex_count: usize,
    /// Adjacency slots, `None` for absent vertices.
    slots: Vec<Option<Adjacency>>,
    /// Edge table, `None` for removed edges.
    edges: Vec<Option<Edge>>,
    /// Number of live vertices.
    vertex_count: usize,
    /// Number of live edges.
    edge_count: usize,
}

/// An independent deep copy of a [`GraphStore`].
#[derive(Debug, Clone)]
pub struct GraphSnapshot {
    graph: GraphStore,
}

impl GraphSnapshot {
    /// The graph state captured by this snapshot.
    pub fn graph(&self) -> &GraphStore {
        &self.graph
    }

    /// Consume the snapshot, yielding the captured graph.
    pub fn into_graph(self) -> GraphStore {
        self.graph
    }
}

impl GraphStore {
    /// Create a new empty graph with a declared vertex count of zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty graph that declares `count` vertices.
    ///
    /// No vertex slots are created; vertices appear when edges reference them
    /// or when added explicitly.
    pub fn with_declared_vertices(count: usize) -> Self {
        Self {
            declared_vertex_count: count,
            ..Self::default()
        }
    }

    /// The declared vertex count. May drift from [`GraphStore::vertex_count`].
    pub fn declared_vertex_count(&self) -> usize {
        self.declared_vertex_count
    }

    /// Overwrite the declared vertex count.
    pub fn set_declared_vertex_count(&mut self, count: usize) {
        self.declared_vertex_count = count;
    }

    /// Number of live vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Number of live edges.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// One past the highest vertex identifier that has ever held a slot.
    /// Algorithms size their per-vertex scratch arrays with this.
    pub(crate) fn vertex_bound(&self) -> usize {
        self.slots.len()
    }

    fn slot(&self, v: VertexId) -> Option<&Adjacency> {
        self.slots.get(v).and_then(Option::as_ref)
    }

    fn slot_mut(&mut self, v: VertexId) -> Option<&mut Adjacency> {
        self.slots.get_mut(v).and_then(Option::as_mut)
    }

    /// Whether `v` is a live vertex.
    pub fn contains_vertex(&self, v: VertexId) -> bool {
        self.slot(v).is_some()
    }

    /// All live vertices, ascending.
    pub fn vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(v, slot)| slot.as_ref().map(|_| v))
    }

    /// All live edges, ascending by ID.
    pub fn edges(&self) -> impl Iterator<Item = &Edge> + '_ {
        self.edges.iter().flatten()
    }

    /// All live edges ordered by origin, then destination.
    pub fn edges_by_endpoints(&self) -> Vec<&Edge> {
        let mut edges: Vec<&Edge> = self.edges().collect();
        edges.sort_by_key(|e| e.endpoints());
        edges
    }

    /// Look up a live edge by ID.
    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(id).and_then(Option::as_ref)
    }

    /// Add a vertex. Returns `true` if it was created, `false` if it already
    /// existed. The declared vertex count is left untouched.
    pub fn add_vertex(&mut self, v: VertexId) -> GraphResult<bool> {
        if v > MAX_VERTEX_ID {
            return Err(GraphError::InvalidVertex(v));
        }
        if v >= self.slots.len() {
            self.slots.resize_with(v + 1, || None);
        }
        if self.slots[v].is_some() {
            return Ok(false);
        }
        self.slots[v] = Some(Adjacency::default());
        self.vertex_count += 1;
        Ok(true)
    }

    /// Remove a vertex and every edge incident to it, returning the removed
    /// edges. A self-loop is removed (and counted) once. No-op if absent.
    pub fn remove_vertex(&mut self, v: VertexId) -> Vec<Edge> {
        let Some(adjacency) = self.slots.get_mut(v).and_then(Option::take) else {
            return Vec::new();
        };
        self.vertex_count -= 1;
        self.declared_vertex_count = self.declared_vertex_count.saturating_sub(1);

        let mut incident: Vec<EdgeId> = adjacency
            .outbound
            .iter()
            .chain(adjacency.inbound.iter())
            .map(|&(_, id)| id)
            .collect();
        incident.sort_unstable();
        incident.dedup();

        let mut removed = Vec::with_capacity(incident.len());
        for id in incident {
            let Some(edge) = self.edges.get_mut(id).and_then(Option::take) else {
                continue;
            };
            self.edge_count -= 1;
            if edge.from != v {
                if let Some(slot) = self.slot_mut(edge.from) {
                    slot.outbound.retain(|&(_, e)| e != id);
                }
            }
            if edge.to != v {
                if let Some(slot) = self.slot_mut(edge.to) {
                    slot.inbound.retain(|&(_, e)| e != id);
                }
            }
            removed.push(edge);
        }

        log::debug!("removed vertex {} with {} incident edges", v, removed.len());
        removed
    }

    /// Add an edge, creating missing endpoints. Returns the assigned ID.
    pub fn add_edge(&mut self, from: VertexId, to: VertexId, cost: Cost) -> GraphResult<EdgeId> {
        for v in [from, to] {
            if v > MAX_VERTEX_ID {
                return Err(GraphError::InvalidVertex(v));
            }
        }
        if self.edge_exists(from, to) {
            return Err(GraphError::DuplicateEdge { from, to });
        }
        self.add_vertex(from)?;
        self.add_vertex(to)?;

        let id = self.edges.len();
        self.edges.push(Some(Edge::new(id, from, to, cost)));
        if let Some(slot) = self.slot_mut(from) {
            slot.outbound.push((to, id));
        }
        if let Some(slot) = self.slot_mut(to) {
            slot.inbound.push((from, id));
        }
        self.edge_count += 1;
        Ok(id)
    }

    /// Remove the edge `from -> to`, returning it. `None` if it does not exist.
    pub fn remove_edge(&mut self, from: VertexId, to: VertexId) -> Option<Edge> {
        let id = self.edge_id(from, to)?;
        let edge = self.edges.get_mut(id).and_then(Option::take)?;
        if let Some(slot) = self.slot_mut(from) {
            slot.outbound.retain(|&(_, e)| e != id);
        }
        if let Some(slot) = self.slot_mut(to) {
            slot.inbound.retain(|&(_, e)| e != id);
        }
        self.edge_count -= 1;
        Some(edge)
    }

    /// Whether the edge `from -> to` exists.
    pub fn edge_exists(&self, from: VertexId, to: VertexId) -> bool {
        self.edge_id(from, to).is_some()
    }

    /// ID of the edge `from -> to`.
    pub fn edge_id(&self, from: VertexId, to: VertexId) -> Option<EdgeId> {
        self.slot(from)?
            .outbound
            .iter()
            .find(|&&(neighbor, _)| neighbor == to)
            .map(|&(_, id)| id)
    }

    /// `(from, to)` of a live edge.
    pub fn endpoints(&self, id: EdgeId) -> Option<(VertexId, VertexId)> {
        self.edge(id).map(Edge::endpoints)
    }

    /// Number of edges terminating at `v`; 0 if absent.
    pub fn in_degree(&self, v: VertexId) -> usize {
        self.slot(v).map_or(0, |slot| slot.inbound.len())
    }

    /// Number of edges originating at `v`; 0 if absent.
    pub fn out_degree(&self, v: VertexId) -> usize {
        self.slot(v).map_or(0, |slot| slot.outbound.len())
    }

    /// Outbound `(neighbor, edge_id)` pairs of `v` in insertion order.
    pub(crate) fn outbound_pairs(&self, v: VertexId) -> &[(VertexId, EdgeId)] {
        self.slot(v)
            .map(|slot| slot.outbound.as_slice())
            .unwrap_or_default()
    }

    /// Inbound `(neighbor, edge_id)` pairs of `v` in insertion order.
    pub(crate) fn inbound_pairs(&self, v: VertexId) -> &[(VertexId, EdgeId)] {
        self.slot(v)
            .map(|slot| slot.inbound.as_slice())
            .unwrap_or_default()
    }

    /// Destinations of edges leaving `v`, ascending.
    pub fn outbound_neighbors(&self, v: VertexId) -> Vec<VertexId> {
        sorted_neighbors(self.outbound_pairs(v))
    }

    /// Origins of edges entering `v`, ascending.
    pub fn inbound_neighbors(&self, v: VertexId) -> Vec<VertexId> {
        sorted_neighbors(self.inbound_pairs(v))
    }

    /// Union of inbound and outbound neighbors of `v`, ascending and deduplicated.
    pub fn all_neighbors(&self, v: VertexId) -> Vec<VertexId> {
        let mut neighbors: Vec<VertexId> = self
            .outbound_pairs(v)
            .iter()
            .chain(self.inbound_pairs(v))
            .map(|&(neighbor, _)| neighbor)
            .collect();
        neighbors.sort_unstable();
        neighbors.dedup();
        neighbors
    }

    /// Edges leaving `v` in insertion order.
    pub fn outbound_edges(&self, v: VertexId) -> Vec<&Edge> {
        self.outbound_pairs(v)
            .iter()
            .filter_map(|&(_, id)| self.edge(id))
            .collect()
    }

    /// Edges entering `v` in insertion order.
    pub fn inbound_edges(&self, v: VertexId) -> Vec<&Edge> {
        self.inbound_pairs(v)
            .iter()
            .filter_map(|&(_, id)| self.edge(id))
            .collect()
    }

    /// Cost of a live edge.
    pub fn cost_of_edge(&self, id: EdgeId) -> GraphResult<Cost> {
        self.edge(id)
            .map(|edge| edge.cost)
            .ok_or(GraphError::UnknownEdge(id))
    }

    /// Change the cost of a live edge.
    pub fn set_cost(&mut self, id: EdgeId, cost: Cost) -> GraphResult<()> {
        let edge = self
            .edges
            .get_mut(id)
            .and_then(Option::as_mut)
            .ok_or(GraphError::UnknownEdge(id))?;
        edge.cost = cost;
        Ok(())
    }

    /// Cost of the edge joining `u` and `v`, treating the graph as undirected.
    /// `u -> v` is preferred over `v -> u`.
    pub fn cost_between(&self, u: VertexId, v: VertexId) -> GraphResult<Cost> {
        self.edge_id(u, v)
            .or_else(|| self.edge_id(v, u))
            .and_then(|id| self.edge(id))
            .map(|edge| edge.cost)
            .ok_or(GraphError::UnknownEdgeBetween { from: u, to: v })
    }

    /// Take an independent deep copy of the whole store.
    pub fn snapshot(&self) -> GraphSnapshot {
        GraphSnapshot {
            graph: self.clone(),
        }
    }

    /// Replace all live state with the contents of `snapshot`.
    pub fn restore(&mut self, snapshot: GraphSnapshot) {
        *self = snapshot.into_graph();
    }
}

fn sorted_neighbors(pairs: &[(VertexId, EdgeId)]) -> Vec<VertexId> {
    let mut neighbors: Vec<VertexId> = pairs.iter().map(|&(neighbor, _)| neighbor).collect();
    neighbors.sort_unstable();
    neighbors
}
