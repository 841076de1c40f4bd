//! Graph traversal algorithms (BFS).

use std::collections::VecDeque;

use crate::types::{GraphError, GraphResult, VertexId};

use super::GraphStore;

/// Check that `v` lies in `[0, declared_vertex_count)`. The vertex need not
/// hold a slot; an absent vertex simply has no edges.
pub(crate) fn check_declared(graph: &GraphStore, v: VertexId) -> GraphResult<()> {
    if v < graph.declared_vertex_count() {
        Ok(())
    } else {
        Err(GraphError::InvalidVertex(v))
    }
}

/// Fewest-edges path from `start` to `end` following outbound edges.
///
/// Neighbours are visited in the order their edges were inserted, which
/// decides the predecessor on ties between equally short paths. Returns an
/// empty path when `end` cannot be reached.
pub fn shortest_path_bfs(
    graph: &GraphStore,
    start: VertexId,
    end: VertexId,
) -> GraphResult<Vec<VertexId>> {
    check_declared(graph, start)?;
    check_declared(graph, end)?;

    let bound = graph.vertex_bound().max(start + 1).max(end + 1);
    let mut visited = vec![false; bound];
    let mut parent: Vec<Option<VertexId>> = vec![None; bound];
    let mut queue: VecDeque<VertexId> = VecDeque::new();

    visited[start] = true;
    queue.push_back(start);

    let mut reached = false;
    while let Some(current) = queue.pop_front() {
        if current == end {
            reached = true;
            break;
        }
        for &(neighbor, _) in graph.outbound_pairs(current) {
            if visited[neighbor] {
                continue;
            }
            visited[neighbor] = true;
            parent[neighbor] = Some(current);
            queue.push_back(neighbor);
        }
    }

    if !reached {
        return Ok(Vec::new());
    }

    let mut path = vec![end];
    let mut current = end;
    while let Some(prev) = parent[current] {
        path.push(prev);
        current = prev;
    }
    path.reverse();
    Ok(path)
}
