pub mod expand;

use std::collections::HashMap;

use petgraph::Directed;
use petgraph::stable_graph::{NodeIndex, StableGraph};

/// The in-memory phrase graph: a directed petgraph StableGraph with an O(1)
/// phrase lookup index. Node weights are the normalized (Title Case) phrases;
/// an edge A -> B means B was discovered as an edit-distance-1 neighbor of A.
pub struct PhraseGraph {
    /// The underlying directed graph, with phrase strings as node weights.
    pub graph: StableGraph<String, (), Directed>,
    /// Maps normalized phrases to their node indices.
    pub phrase_index: HashMap<String, NodeIndex>,
}

impl PhraseGraph {
    /// Create an empty phrase graph.
    pub fn new() -> Self {
        Self {
            graph: StableGraph::new(),
            phrase_index: HashMap::new(),
        }
    }

    /// Add a phrase node. Returns the new node's index, or the existing index
    /// if the phrase is already present.
    pub fn add_phrase(&mut self, phrase: &str) -> NodeIndex {
        if let Some(&existing) = self.phrase_index.get(phrase) {
            return existing;
        }
        let idx = self.graph.add_node(phrase.to_owned());
        self.phrase_index.insert(phrase.to_owned(), idx);
        idx
    }

    /// Add a discovery edge between two phrases, inserting either node if absent.
    pub fn add_edge(&mut self, from: &str, to: &str) {
        let a = self.add_phrase(from);
        let b = self.add_phrase(to);
        self.graph.add_edge(a, b, ());
    }

    /// Whether a discovery edge exists from one phrase to another.
    pub fn contains_edge(&self, from: &str, to: &str) -> bool {
        match (self.phrase_index.get(from), self.phrase_index.get(to)) {
            (Some(&a), Some(&b)) => self.graph.contains_edge(a, b),
            _ => false,
        }
    }

    /// Number of phrase nodes in the graph.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of discovery edges in the graph.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Phrases in insertion (BFS discovery) order.
    pub fn phrases(&self) -> impl Iterator<Item = &str> {
        self.graph.node_indices().map(|i| self.graph[i].as_str())
    }
}

impl Default for PhraseGraph {
    fn default() -> Self {
        Self::new()
    }
}
