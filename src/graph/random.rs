//! Random graph generation.

use rand::Rng;

use crate::types::{Cost, GraphError, GraphResult, RANDOM_COST_MAX, RANDOM_COST_MIN};

use super::GraphStore;

/// Generate a graph declaring `vertex_count` vertices with `edge_count`
/// distinct random edges. Self-loops are allowed.
///
/// Each edge is first inserted with its insertion index as cost, then given a
/// uniform cost in `[RANDOM_COST_MIN, RANDOM_COST_MAX]`.
pub fn generate_random<R: Rng + ?Sized>(
    vertex_count: usize,
    edge_count: usize,
    rng: &mut R,
) -> GraphResult<GraphStore> {
    let max = vertex_count.saturating_mul(vertex_count);
    if edge_count > max {
        return Err(GraphError::TooManyEdges {
            requested: edge_count,
            max,
        });
    }

    let mut graph = GraphStore::with_declared_vertices(vertex_count);
    for i in 0..edge_count {
        let (from, to) = loop {
            let from = rng.gen_range(0..vertex_count);
            let to = rng.gen_range(0..vertex_count);
            if !graph.edge_exists(from, to) {
                break (from, to);
            }
        };
        let id = graph.add_edge(from, to, i as Cost)?;
        graph.set_cost(id, rng.gen_range(RANDOM_COST_MIN..=RANDOM_COST_MAX))?;
    }

    log::debug!(
        "generated random graph with {} vertices and {} edges",
        vertex_count,
        edge_count
    );
    Ok(graph)
}
