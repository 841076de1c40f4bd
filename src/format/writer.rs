//! Writes graph text files from an in-memory graph.

use std::io::Write;
use std::path::Path;

use crate::graph::GraphStore;
use crate::types::error::GraphResult;

/// Writer for graph text files.
pub struct GraphWriter;

impl GraphWriter {
    /// Write a complete GraphStore to a file, replacing it.
    pub fn write_to_file(graph: &GraphStore, path: &Path) -> GraphResult<()> {
        let file = std::fs::File::create(path)?;
        let mut writer = std::io::BufWriter::new(file);
        Self::write_to(graph, &mut writer)?;
        writer.flush()?;
        log::debug!(
            "saved {} ({} vertices declared, {} edges)",
            path.display(),
            graph.declared_vertex_count(),
            graph.edge_count()
        );
        Ok(())
    }

    /// Write a complete GraphStore to any writer. Edges are ordered by origin,
    /// then destination; edge IDs are not written.
    pub fn write_to(graph: &GraphStore, writer: &mut impl Write) -> GraphResult<()> {
        writeln!(
            writer,
            "{} {}",
            graph.declared_vertex_count(),
            graph.edge_count()
        )?;
        for edge in graph.edges_by_endpoints() {
            writeln!(writer, "{} {} {}", edge.from, edge.to, edge.cost)?;
        }
        Ok(())
    }

    /// Render a GraphStore to a string.
    pub fn to_text(graph: &GraphStore) -> GraphResult<String> {
        let mut buf = Vec::new();
        Self::write_to(graph, &mut buf)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}
