//! CLI entry point for the `wdg` command-line tool.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use weighted_digraph::cli::commands;
use weighted_digraph::GraphError;

#[derive(Parser)]
#[command(
    name = "wdg",
    about = "Directed graphs with costed edges: paths, spanning trees and tours"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new graph file with no edges
    Create {
        /// Path to the graph file to create
        file: PathBuf,
        /// Number of vertices to declare
        #[arg(long, default_value = "0")]
        vertices: usize,
    },
    /// Display vertex and edge counts
    Info {
        /// Path to the graph file
        file: PathBuf,
    },
    /// List the vertices
    Vertices {
        /// Path to the graph file
        file: PathBuf,
    },
    /// List the edges with IDs and costs
    Edges {
        /// Path to the graph file
        file: PathBuf,
    },
    /// Print the cost of an edge
    Cost {
        /// Path to the graph file
        file: PathBuf,
        /// Edge ID
        edge_id: usize,
    },
    /// Print the in-degree and out-degree of a vertex
    Degree {
        /// Path to the graph file
        file: PathBuf,
        /// Vertex ID
        vertex: usize,
    },
    /// Print the endpoints of an edge
    Endpoints {
        /// Path to the graph file
        file: PathBuf,
        /// Edge ID
        edge_id: usize,
    },
    /// Check whether an edge exists
    HasEdge {
        /// Path to the graph file
        file: PathBuf,
        /// Origin vertex
        from: usize,
        /// Destination vertex
        to: usize,
    },
    /// Change the cost of an edge
    SetCost {
        /// Path to the graph file
        file: PathBuf,
        /// Edge ID
        edge_id: usize,
        /// New cost
        #[arg(allow_negative_numbers = true)]
        cost: i64,
    },
    /// Add an edge
    AddEdge {
        /// Path to the graph file
        file: PathBuf,
        /// Origin vertex
        from: usize,
        /// Destination vertex
        to: usize,
        /// Edge cost
        #[arg(allow_negative_numbers = true)]
        cost: i64,
    },
    /// Remove an edge
    RemoveEdge {
        /// Path to the graph file
        file: PathBuf,
        /// Origin vertex
        from: usize,
        /// Destination vertex
        to: usize,
    },
    /// Add a vertex
    AddVertex {
        /// Path to the graph file
        file: PathBuf,
        /// Vertex ID
        vertex: usize,
    },
    /// Remove a vertex and all its edges
    RemoveVertex {
        /// Path to the graph file
        file: PathBuf,
        /// Vertex ID
        vertex: usize,
    },
    /// List the edges entering a vertex
    Inbound {
        /// Path to the graph file
        file: PathBuf,
        /// Vertex ID
        vertex: usize,
    },
    /// List the edges leaving a vertex
    Outbound {
        /// Path to the graph file
        file: PathBuf,
        /// Vertex ID
        vertex: usize,
    },
    /// Overwrite the file with a random graph
    Generate {
        /// Path to the graph file
        file: PathBuf,
        /// Number of vertices
        vertices: usize,
        /// Number of edges
        edges: usize,
        /// Seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Save a copy of the graph next to the file
    Snapshot {
        /// Path to the graph file
        file: PathBuf,
    },
    /// Overwrite the graph with its saved copy
    Restore {
        /// Path to the graph file
        file: PathBuf,
    },
    /// Shortest path by number of edges (breadth-first search)
    Bfs {
        /// Path to the graph file
        file: PathBuf,
        /// Start vertex
        start: usize,
        /// End vertex
        end: usize,
    },
    /// Lowest-cost walk, detecting negative cycles
    Walk {
        /// Path to the graph file
        file: PathBuf,
        /// Start vertex
        start: usize,
        /// End vertex
        end: usize,
    },
    /// Minimum spanning tree (Prim) over the undirected view
    Mst {
        /// Path to the graph file
        file: PathBuf,
        /// Start vertex
        start: usize,
    },
    /// Low-cost Hamiltonian cycle (approximate TSP)
    Tour {
        /// Path to the graph file
        file: PathBuf,
        /// Vertex the cycle starts and ends at
        #[arg(long, default_value = "0")]
        origin: usize,
        /// Give up after this many search steps
        #[arg(long)]
        step_limit: Option<u64>,
    },
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    let mut logger = env_logger::Builder::from_default_env();
    if cli.verbose {
        logger.filter_level(log::LevelFilter::Debug);
    }
    logger.init();

    let result = match cli.command {
        Commands::Create { file, vertices } => commands::cmd_create(&file, vertices),
        Commands::Info { file } => commands::cmd_info(&file, json),
        Commands::Vertices { file } => commands::cmd_vertices(&file, json),
        Commands::Edges { file } => commands::cmd_edges(&file, json),
        Commands::Cost { file, edge_id } => commands::cmd_cost(&file, edge_id, json),
        Commands::Degree { file, vertex } => commands::cmd_degree(&file, vertex, json),
        Commands::Endpoints { file, edge_id } => commands::cmd_endpoints(&file, edge_id, json),
        Commands::HasEdge { file, from, to } => commands::cmd_has_edge(&file, from, to, json),
        Commands::SetCost {
            file,
            edge_id,
            cost,
        } => commands::cmd_set_cost(&file, edge_id, cost, json),
        Commands::AddEdge {
            file,
            from,
            to,
            cost,
        } => commands::cmd_add_edge(&file, from, to, cost, json),
        Commands::RemoveEdge { file, from, to } => {
            commands::cmd_remove_edge(&file, from, to, json)
        }
        Commands::AddVertex { file, vertex } => commands::cmd_add_vertex(&file, vertex, json),
        Commands::RemoveVertex { file, vertex } => {
            commands::cmd_remove_vertex(&file, vertex, json)
        }
        Commands::Inbound { file, vertex } => commands::cmd_inbound(&file, vertex, json),
        Commands::Outbound { file, vertex } => commands::cmd_outbound(&file, vertex, json),
        Commands::Generate {
            file,
            vertices,
            edges,
            seed,
        } => commands::cmd_generate(&file, vertices, edges, seed, json),
        Commands::Snapshot { file } => commands::cmd_snapshot(&file),
        Commands::Restore { file } => commands::cmd_restore(&file),
        Commands::Bfs { file, start, end } => commands::cmd_bfs(&file, start, end, json),
        Commands::Walk { file, start, end } => commands::cmd_walk(&file, start, end, json),
        Commands::Mst { file, start } => commands::cmd_mst(&file, start, json),
        Commands::Tour {
            file,
            origin,
            step_limit,
        } => commands::cmd_tour(&file, origin, step_limit, json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match &e {
            GraphError::Io(_) => 1,
            GraphError::Parse { .. } => 2,
            GraphError::UnknownEdge(_)
            | GraphError::UnknownEdgeBetween { .. }
            | GraphError::InvalidVertex(_)
            | GraphError::DuplicateEdge { .. }
            | GraphError::NothingToRestore => 4,
            _ => 5,
        };
        process::exit(code);
    }
}
