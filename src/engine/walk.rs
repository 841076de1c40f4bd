//! Lowest-cost walk — bounded relaxation over walk length (Bellman-Ford variant).
//!
//! `d[k][x]` holds the lowest cost of a walk from the start vertex to `x`
//! using at most `k` edges. Rows are filled for `k = 0..=n` where `n` is the
//! declared vertex count; any change between rows `n - 1` and `n` means a
//! negative cycle is reachable from the start. A row equal to its
//! predecessor repeats forever, so filling stops there.

use serde::Serialize;

use crate::graph::traversal::check_declared;
use crate::graph::GraphStore;
use crate::types::{Cost, GraphError, GraphResult, VertexId};

/// A lowest-cost walk and its total cost.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Walk {
    /// Sum of edge costs along `path`.
    pub cost: Cost,
    /// Vertices from start to end inclusive.
    pub path: Vec<VertexId>,
}

impl Walk {
    /// Number of edges in the walk.
    pub fn len(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    /// Whether the walk has no edges.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Sentinel larger than the magnitude of any walk of up to `n + 1` edges.
fn infinity_for(graph: &GraphStore, n: usize) -> Cost {
    let max_abs = graph
        .edges()
        .map(|edge| edge.cost.saturating_abs())
        .max()
        .unwrap_or(0)
        .max(1);
    max_abs
        .saturating_mul(Cost::try_from(n).unwrap_or(Cost::MAX).saturating_add(1))
        .saturating_add(1)
}

/// Find the lowest-cost walk from `start` to `end`.
///
/// Fails with [`GraphError::NegativeCycleDetected`] when any negative cycle
/// is reachable from `start`, whatever `end` is, and with
/// [`GraphError::NoPathFound`] when `end` is unreachable.
///
/// Only the previous and current rows of `d` are kept, plus one predecessor
/// entry per vertex, so memory is linear in the highest live vertex ID rather
/// than in the declared count. Rounds stop early once a row repeats.
pub fn lowest_cost_walk(graph: &GraphStore, start: VertexId, end: VertexId) -> GraphResult<Walk> {
    check_declared(graph, start)?;
    check_declared(graph, end)?;

    let n = graph.declared_vertex_count();
    let bound = graph.vertex_bound().max(start + 1).max(end + 1);
    let infinity = infinity_for(graph, n);

    let mut prev: Vec<Cost> = vec![infinity; bound];
    prev[start] = 0;
    let mut row = prev.clone();
    let mut pred: Vec<Option<VertexId>> = vec![None; bound];

    for k in 1..=n {
        row.copy_from_slice(&prev);
        let mut changed = false;
        for x in graph.vertices() {
            for &(y, id) in graph.inbound_pairs(x) {
                if prev[y] == infinity {
                    continue;
                }
                let candidate = prev[y].saturating_add(graph.cost_of_edge(id)?);
                if candidate < row[x] {
                    row[x] = candidate;
                    pred[x] = Some(y);
                    changed = true;
                }
            }
        }

        if !changed {
            break;
        }
        // Row n still improving on row n - 1.
        if k == n {
            log::debug!("negative cycle reachable from vertex {}", start);
            return Err(GraphError::NegativeCycleDetected);
        }
        std::mem::swap(&mut prev, &mut row);
    }

    let cost = row[end];
    if cost == infinity {
        return Err(GraphError::NoPathFound {
            from: start,
            to: end,
        });
    }

    // Without a reachable negative cycle the predecessor links form a tree
    // rooted at `start`.
    let mut path = vec![end];
    let mut current = end;
    while current != start {
        match pred[current] {
            Some(p) if path.len() <= bound => {
                path.push(p);
                current = p;
            }
            _ => break,
        }
    }
    path.reverse();

    Ok(Walk { cost, path })
}
