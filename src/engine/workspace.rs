//! Controller-side ownership of the live graph and its retained snapshot.

use crate::graph::{GraphSnapshot, GraphStore};
use crate::types::{GraphError, GraphResult};

/// Owns the graph being edited plus at most one snapshot of it.
///
/// Taking a snapshot replaces the previous one. Restoring copies the snapshot
/// back over the live graph and keeps the snapshot, so it can be restored
/// again later.
#[derive(Debug, Clone, Default)]
pub struct Workspace {
    graph: GraphStore,
    snapshot: Option<GraphSnapshot>,
}

impl Workspace {
    /// Start a workspace around an existing graph.
    pub fn new(graph: GraphStore) -> Self {
        Self {
            graph,
            snapshot: None,
        }
    }

    /// The live graph.
    pub fn graph(&self) -> &GraphStore {
        &self.graph
    }

    /// The live graph, mutably.
    pub fn graph_mut(&mut self) -> &mut GraphStore {
        &mut self.graph
    }

    /// Whether a snapshot is being retained.
    pub fn has_snapshot(&self) -> bool {
        self.snapshot.is_some()
    }

    /// The retained snapshot, if any.
    pub fn snapshot(&self) -> Option<&GraphSnapshot> {
        self.snapshot.as_ref()
    }

    /// Snapshot the live graph, discarding any earlier snapshot.
    pub fn take_snapshot(&mut self) {
        self.snapshot = Some(self.graph.snapshot());
    }

    /// Replace the live graph with the retained snapshot.
    pub fn restore_snapshot(&mut self) -> GraphResult<()> {
        let snapshot = self.snapshot.clone().ok_or(GraphError::NothingToRestore)?;
        self.graph.restore(snapshot);
        log::debug!(
            "restored snapshot with {} vertices and {} edges",
            self.graph.vertex_count(),
            self.graph.edge_count()
        );
        Ok(())
    }

    /// Swap in a new live graph (after a load or random generation),
    /// returning the old one. The snapshot is kept.
    pub fn replace_graph(&mut self, graph: GraphStore) -> GraphStore {
        std::mem::replace(&mut self.graph, graph)
    }

    /// Consume the workspace, yielding the live graph.
    pub fn into_graph(self) -> GraphStore {
        self.graph
    }
}
