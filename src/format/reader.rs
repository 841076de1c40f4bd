//! Reads graph text files into an in-memory graph.
//!
//! Format: a `<vertexCount> <edgeCount>` header line followed by `edgeCount`
//! lines of `<from> <to> <cost>`. Blank lines are ignored.

use std::io::{BufRead, BufReader, Read};
use std::path::Path;
use std::str::FromStr;

use crate::graph::GraphStore;
use crate::types::error::{GraphError, GraphResult};
use crate::types::{Cost, VertexId};

/// Reader for graph text files.
pub struct GraphReader;

impl GraphReader {
    /// Read a graph file into a GraphStore.
    pub fn read_from_file(path: &Path) -> GraphResult<GraphStore> {
        let mut file = std::fs::File::open(path)?;
        let graph = Self::read_from(&mut file)?;
        log::debug!(
            "loaded {} ({} vertices declared, {} edges)",
            path.display(),
            graph.declared_vertex_count(),
            graph.edge_count()
        );
        Ok(graph)
    }

    /// Read from any reader into a GraphStore. Edges get IDs `0..edgeCount`
    /// in file order.
    pub fn read_from(reader: &mut impl Read) -> GraphResult<GraphStore> {
        let mut lines = Vec::new();
        for (i, line) in BufReader::new(reader).lines().enumerate() {
            let line = line?;
            if !line.trim().is_empty() {
                lines.push((i + 1, line));
            }
        }
        let mut lines = lines.into_iter();

        let (header_no, header) = lines
            .next()
            .ok_or_else(|| parse_error(1, "missing header line".to_string()))?;
        let fields = split_fields(header_no, &header, 2)?;
        let vertex_count: usize = parse_value(header_no, fields[0])?;
        let edge_count: usize = parse_value(header_no, fields[1])?;

        let mut graph = GraphStore::with_declared_vertices(vertex_count);
        for found in 0..edge_count {
            let (no, line) = lines.next().ok_or_else(|| {
                parse_error(
                    header_no + found + 1,
                    format!("expected {} edges, found {}", edge_count, found),
                )
            })?;
            let fields = split_fields(no, &line, 3)?;
            let from: VertexId = parse_value(no, fields[0])?;
            let to: VertexId = parse_value(no, fields[1])?;
            let cost: Cost = parse_value(no, fields[2])?;
            graph.add_edge(from, to, cost)?;
        }

        if let Some((no, _)) = lines.next() {
            log::warn!("ignoring trailing content from line {}", no);
        }

        Ok(graph)
    }
}

fn parse_error(line: usize, message: String) -> GraphError {
    GraphError::Parse { line, message }
}

fn split_fields(line: usize, text: &str, expected: usize) -> GraphResult<Vec<&str>> {
    let fields: Vec<&str> = text.split_whitespace().collect();
    if fields.len() != expected {
        return Err(parse_error(
            line,
            format!("expected {} values, found {}", expected, fields.len()),
        ));
    }
    Ok(fields)
}

fn parse_value<T: FromStr>(line: usize, field: &str) -> GraphResult<T>
where
    T::Err: std::fmt::Display,
{
    field
        .parse::<T>()
        .map_err(|e| parse_error(line, format!("invalid value {:?}: {}", field, e)))
}
