pub mod model;

use std::io::Write;
use std::path::Path;

use anyhow::Context;
use petgraph::visit::{EdgeRef, IntoEdgeReferences};

use crate::graph::PhraseGraph;

use model::{LinkEntry, NodeEntry, NodeLinkGraph};

/// Convert a phrase graph into the node-link document, preserving BFS
/// discovery order for nodes and edge insertion order for links.
pub fn to_node_link(graph: &PhraseGraph) -> NodeLinkGraph {
    let nodes = graph
        .phrases()
        .map(|p| NodeEntry { id: p.to_owned() })
        .collect();

    let links = graph
        .graph
        .edge_references()
        .map(|e| LinkEntry {
            source: graph.graph[e.source()].clone(),
            target: graph.graph[e.target()].clone(),
        })
        .collect();

    NodeLinkGraph {
        directed: true,
        multigraph: false,
        graph: serde_json::Map::new(),
        nodes,
        links,
    }
}

/// Write the graph as node-link JSON to `path`, overwriting any existing file.
///
/// Atomic write: temp file in the target directory, then rename.
pub fn write_json(path: &Path, graph: &PhraseGraph) -> anyhow::Result<()> {
    let doc = to_node_link(graph);

    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let mut tmp = tempfile::NamedTempFile::new_in(dir)
        .with_context(|| format!("failed to create temp file in {}", dir.display()))?;
    serde_json::to_writer(&mut tmp, &doc).context("failed to serialize graph")?;
    tmp.as_file().flush()?;
    tmp.persist(path)
        .with_context(|| format!("failed to write {}", path.display()))?;

    Ok(())
}
