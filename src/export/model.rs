use serde::{Deserialize, Serialize};

/// Node-link document, the shape force-graph viewers consume:
/// `{"directed": true, "multigraph": false, "graph": {}, "nodes": [...], "links": [...]}`.
#[derive(Debug, Serialize, Deserialize)]
pub struct NodeLinkGraph {
    pub directed: bool,
    pub multigraph: bool,
    /// Graph-level attributes. Always empty here, kept for format compatibility.
    pub graph: serde_json::Map<String, serde_json::Value>,
    pub nodes: Vec<NodeEntry>,
    pub links: Vec<LinkEntry>,
}

/// A node entry, identified by its normalized phrase.
#[derive(Debug, Serialize, Deserialize)]
pub struct NodeEntry {
    pub id: String,
}

/// A directed link between two phrases.
#[derive(Debug, Serialize, Deserialize)]
pub struct LinkEntry {
    pub source: String,
    pub target: String,
}
