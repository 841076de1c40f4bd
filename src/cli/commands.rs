//! CLI command implementations.
//!
//! Every command loads the graph file, runs one operation and, if the
//! operation mutates the graph, writes the file back. Edge IDs are assigned
//! on load in file order, so they are stable as long as the file is only
//! rewritten by these commands.

use std::path::{Path, PathBuf};

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::engine::{approximate_tour, lowest_cost_walk, minimum_spanning_tree, TourParams};
use crate::format::{GraphReader, GraphWriter};
use crate::graph::{generate_random, shortest_path_bfs, GraphStore};
use crate::types::{Cost, Edge, EdgeId, GraphError, GraphResult, VertexId};

fn print_json(value: &serde_json::Value) {
    println!(
        "{}",
        serde_json::to_string_pretty(value).unwrap_or_default()
    );
}

fn edges_json(edges: &[&Edge]) -> serde_json::Value {
    serde_json::to_value(edges).unwrap_or_default()
}

/// Path of the snapshot kept next to a graph file.
pub fn snapshot_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(".snapshot");
    PathBuf::from(name)
}

/// Reject vertices outside the declared range.
fn check_in_declared_range(graph: &GraphStore, vertices: &[VertexId]) -> GraphResult<()> {
    match vertices
        .iter()
        .find(|&&v| v >= graph.declared_vertex_count())
    {
        Some(&v) => Err(GraphError::InvalidVertex(v)),
        None => Ok(()),
    }
}

/// Create a new graph file declaring `vertices` vertices and no edges.
pub fn cmd_create(path: &Path, vertices: usize) -> GraphResult<()> {
    let graph = GraphStore::with_declared_vertices(vertices);
    GraphWriter::write_to_file(&graph, path)?;
    println!("Created {}", path.display());
    Ok(())
}

/// Display vertex and edge counts.
pub fn cmd_info(path: &Path, json: bool) -> GraphResult<()> {
    let graph = GraphReader::read_from_file(path)?;
    if json {
        print_json(&serde_json::json!({
            "file": path.display().to_string(),
            "declared_vertices": graph.declared_vertex_count(),
            "vertices": graph.vertex_count(),
            "edges": graph.edge_count(),
        }));
    } else {
        println!("File: {}", path.display());
        println!("The number of vertices is: {}", graph.declared_vertex_count());
        println!("Vertices with edges or slots: {}", graph.vertex_count());
        println!("The number of edges is: {}", graph.edge_count());
    }
    Ok(())
}

/// List live vertices.
pub fn cmd_vertices(path: &Path, json: bool) -> GraphResult<()> {
    let graph = GraphReader::read_from_file(path)?;
    let vertices: Vec<VertexId> = graph.vertices().collect();
    if json {
        print_json(&serde_json::json!(vertices));
    } else {
        println!("The vertices of the graph are:");
        for v in vertices {
            println!("{}", v);
        }
    }
    Ok(())
}

/// List every edge with its ID and cost.
pub fn cmd_edges(path: &Path, json: bool) -> GraphResult<()> {
    let graph = GraphReader::read_from_file(path)?;
    let edges = graph.edges_by_endpoints();
    if json {
        print_json(&edges_json(&edges));
    } else {
        println!("{} {}", graph.declared_vertex_count(), graph.edge_count());
        for edge in edges {
            println!("{}", edge);
        }
    }
    Ok(())
}

/// Print the cost of an edge.
pub fn cmd_cost(path: &Path, edge_id: EdgeId, json: bool) -> GraphResult<()> {
    let graph = GraphReader::read_from_file(path)?;
    let cost = graph.cost_of_edge(edge_id)?;
    if json {
        print_json(&serde_json::json!({"edge": edge_id, "cost": cost}));
    } else {
        println!("The cost of edge {} is {}.", edge_id, cost);
    }
    Ok(())
}

/// Print in-degree and out-degree of a vertex.
pub fn cmd_degree(path: &Path, vertex: VertexId, json: bool) -> GraphResult<()> {
    let graph = GraphReader::read_from_file(path)?;
    let in_degree = graph.in_degree(vertex);
    let out_degree = graph.out_degree(vertex);
    if json {
        print_json(&serde_json::json!({
            "vertex": vertex,
            "in_degree": in_degree,
            "out_degree": out_degree,
        }));
    } else {
        println!("The in-degree of vertex {} is {}.", vertex, in_degree);
        println!("The out-degree of vertex {} is {}.", vertex, out_degree);
    }
    Ok(())
}

/// Print the endpoints of an edge.
pub fn cmd_endpoints(path: &Path, edge_id: EdgeId, json: bool) -> GraphResult<()> {
    let graph = GraphReader::read_from_file(path)?;
    let (from, to) = graph
        .endpoints(edge_id)
        .ok_or(GraphError::UnknownEdge(edge_id))?;
    if json {
        print_json(&serde_json::json!({"edge": edge_id, "from": from, "to": to}));
    } else {
        println!("The endpoints of edge {} are {} and {}.", edge_id, from, to);
    }
    Ok(())
}

/// Report whether `from -> to` exists.
pub fn cmd_has_edge(path: &Path, from: VertexId, to: VertexId, json: bool) -> GraphResult<()> {
    let graph = GraphReader::read_from_file(path)?;
    let id = graph.edge_id(from, to);
    if json {
        print_json(&serde_json::json!({"from": from, "to": to, "exists": id.is_some(), "edge": id}));
    } else {
        match id {
            Some(id) => println!(
                "There is an edge from vertex {} to vertex {}, having the index: {}",
                from, to, id
            ),
            None => println!("There is no edge from vertex {} to vertex {}.", from, to),
        }
    }
    Ok(())
}

/// Change the cost of an edge.
pub fn cmd_set_cost(path: &Path, edge_id: EdgeId, cost: Cost, json: bool) -> GraphResult<()> {
    let mut graph = GraphReader::read_from_file(path)?;
    graph.set_cost(edge_id, cost)?;
    GraphWriter::write_to_file(&graph, path)?;
    if json {
        print_json(&serde_json::json!({"edge": edge_id, "cost": cost}));
    } else {
        println!("The cost of edge {} has been modified to {}.", edge_id, cost);
    }
    Ok(())
}

/// Add an edge between two vertices of the declared range.
pub fn cmd_add_edge(
    path: &Path,
    from: VertexId,
    to: VertexId,
    cost: Cost,
    json: bool,
) -> GraphResult<()> {
    let mut graph = GraphReader::read_from_file(path)?;
    check_in_declared_range(&graph, &[from, to])?;
    let id = graph.add_edge(from, to, cost)?;
    GraphWriter::write_to_file(&graph, path)?;
    if json {
        print_json(&serde_json::json!({"edge": id, "from": from, "to": to, "cost": cost}));
    } else {
        println!(
            "The edge from {} to {} with cost {} has been added.",
            from, to, cost
        );
    }
    Ok(())
}

/// Remove an edge.
pub fn cmd_remove_edge(path: &Path, from: VertexId, to: VertexId, json: bool) -> GraphResult<()> {
    let mut graph = GraphReader::read_from_file(path)?;
    let removed = graph.remove_edge(from, to);
    if removed.is_some() {
        GraphWriter::write_to_file(&graph, path)?;
    }
    if json {
        print_json(&serde_json::json!({"from": from, "to": to, "removed": removed.is_some()}));
    } else if removed.is_some() {
        println!("The edge from {} to {} has been removed!", from, to);
    } else {
        println!("There is no edge from {} to {}.", from, to);
    }
    Ok(())
}

/// Add a vertex. Only vertices with edges survive a save, so an isolated
/// vertex is reported but not persisted.
pub fn cmd_add_vertex(path: &Path, vertex: VertexId, json: bool) -> GraphResult<()> {
    let mut graph = GraphReader::read_from_file(path)?;
    let created = graph.add_vertex(vertex)?;
    if json {
        print_json(&serde_json::json!({"vertex": vertex, "created": created}));
    } else if created {
        println!("Vertex {} added.", vertex);
    } else {
        println!("Vertex {} already exists.", vertex);
    }
    Ok(())
}

/// Remove a vertex and its incident edges.
pub fn cmd_remove_vertex(path: &Path, vertex: VertexId, json: bool) -> GraphResult<()> {
    let mut graph = GraphReader::read_from_file(path)?;
    if !graph.contains_vertex(vertex) {
        return Err(GraphError::InvalidVertex(vertex));
    }
    let removed = graph.remove_vertex(vertex);
    GraphWriter::write_to_file(&graph, path)?;
    if json {
        print_json(&serde_json::json!({"vertex": vertex, "removed_edges": removed.len()}));
    } else {
        println!(
            "Vertex {} removed together with {} edges.",
            vertex,
            removed.len()
        );
    }
    Ok(())
}

fn print_incident_edges(vertex: VertexId, direction: &str, edges: &[&Edge], json: bool) {
    if json {
        print_json(&edges_json(edges));
    } else if edges.is_empty() {
        println!("There are no {} edges for vertex {}.", direction, vertex);
    } else {
        println!("The {} edges of vertex {} are:", direction, vertex);
        for edge in edges {
            println!(
                "Edge ID: {}, Start vertex: {}, End vertex: {}, Cost: {}",
                edge.id, edge.from, edge.to, edge.cost
            );
        }
    }
}

/// List edges entering a vertex.
pub fn cmd_inbound(path: &Path, vertex: VertexId, json: bool) -> GraphResult<()> {
    let graph = GraphReader::read_from_file(path)?;
    print_incident_edges(vertex, "inbound", &graph.inbound_edges(vertex), json);
    Ok(())
}

/// List edges leaving a vertex.
pub fn cmd_outbound(path: &Path, vertex: VertexId, json: bool) -> GraphResult<()> {
    let graph = GraphReader::read_from_file(path)?;
    print_incident_edges(vertex, "outbound", &graph.outbound_edges(vertex), json);
    Ok(())
}

/// Replace the graph file with a random graph.
pub fn cmd_generate(
    path: &Path,
    vertices: usize,
    edges: usize,
    seed: Option<u64>,
    json: bool,
) -> GraphResult<()> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let graph = generate_random(vertices, edges, &mut rng)?;
    GraphWriter::write_to_file(&graph, path)?;
    if json {
        print_json(&serde_json::json!({"vertices": vertices, "edges": edges}));
    } else {
        println!(
            "Random graph with {} vertices and {} edges written to {}",
            vertices,
            edges,
            path.display()
        );
    }
    Ok(())
}

/// Save a copy of the graph next to it, replacing any earlier copy.
pub fn cmd_snapshot(path: &Path) -> GraphResult<()> {
    let graph = GraphReader::read_from_file(path)?;
    let target = snapshot_path(path);
    GraphWriter::write_to_file(&graph, &target)?;
    println!("Graph copied to {}", target.display());
    Ok(())
}

/// Overwrite the graph with its saved copy.
pub fn cmd_restore(path: &Path) -> GraphResult<()> {
    let source = snapshot_path(path);
    if !source.exists() {
        return Err(GraphError::NothingToRestore);
    }
    let saved = GraphReader::read_from_file(&source)?;
    GraphWriter::write_to_file(&saved, path)?;
    println!("Graph restored from {}", source.display());
    Ok(())
}

/// Breadth-first shortest path.
pub fn cmd_bfs(path: &Path, start: VertexId, end: VertexId, json: bool) -> GraphResult<()> {
    let graph = GraphReader::read_from_file(path)?;
    let route = shortest_path_bfs(&graph, start, end)?;
    if json {
        print_json(&serde_json::json!({
            "from": start,
            "to": end,
            "found": !route.is_empty(),
            "length": route.len().saturating_sub(1),
            "path": route,
        }));
    } else if route.is_empty() {
        println!("There is no path from {} to {}", start, end);
    } else {
        println!("The length of the shortest path is {}", route.len() - 1);
        println!("The shortest path from {} to {} is: {:?}", start, end, route);
    }
    Ok(())
}

/// Lowest-cost walk.
pub fn cmd_walk(path: &Path, start: VertexId, end: VertexId, json: bool) -> GraphResult<()> {
    let graph = GraphReader::read_from_file(path)?;
    let walk = lowest_cost_walk(&graph, start, end)?;
    if json {
        print_json(&serde_json::to_value(&walk).unwrap_or_default());
    } else {
        println!("The cost of the lowest cost walk is: {}", walk.cost);
        println!(
            "The lowest cost walk from {} to {} is: {:?}",
            start, end, walk.path
        );
    }
    Ok(())
}

/// Prim's minimum spanning tree.
pub fn cmd_mst(path: &Path, start: VertexId, json: bool) -> GraphResult<()> {
    let graph = GraphReader::read_from_file(path)?;
    let tree = minimum_spanning_tree(&graph, start)?;
    let total = tree.total_cost(&graph)?;
    if json {
        print_json(&serde_json::json!({
            "start": start,
            "edges": tree.edges,
            "total_cost": total,
        }));
    } else {
        println!("The minimum spanning tree will have the edges:");
        for (parent, child) in &tree.edges {
            println!("{} <-> {}", parent, child);
        }
        println!("The total cost of this MST is {}.", total);
    }
    Ok(())
}

/// Approximate Hamiltonian cycle.
pub fn cmd_tour(
    path: &Path,
    origin: VertexId,
    step_limit: Option<u64>,
    json: bool,
) -> GraphResult<()> {
    let graph = GraphReader::read_from_file(path)?;
    let params = TourParams {
        origin,
        step_limit,
    };
    let tour = approximate_tour(&graph, params)?;
    if json {
        match &tour {
            Some(tour) => print_json(&serde_json::json!({
                "found": true,
                "cost": tour.cost,
                "vertices": tour.vertices,
                "edges": tour.edges(),
            })),
            None => print_json(&serde_json::json!({"found": false})),
        }
    } else {
        match tour {
            Some(tour) => {
                println!("Hamiltonian cycle cost: {}", tour.cost);
                println!("Edges:");
                for (from, to) in tour.edges() {
                    println!("{} -> {}", from, to);
                }
            }
            None => println!("No cycle was found!"),
        }
    }
    Ok(())
}
