//! petgraph wrapper: one node per team, one edge per pair of teams sharing
//! at least one style tag, weighted by the number of shared tags.

use std::collections::HashMap;

use fanmatch_core::Corpus;
use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;
use tracing::info;

/// The underlying undirected graph type. Edge weight = shared tag count.
pub type TagGraph = UnGraph<String, u32>;

/// Weighted tag-overlap graph with name lookup.
///
/// Nodes are created by edges, so a team sharing no tag with any other team
/// is not a node.
#[derive(Debug, Clone, Default)]
pub struct RelationalGraph {
    /// The petgraph graph.
    pub graph: TagGraph,
    /// Map from team name → NodeIndex for O(1) lookup.
    pub node_index: HashMap<String, NodeIndex>,
}

impl RelationalGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the graph over every unordered pair of distinct entities.
    ///
    /// Pairs are visited in corpus order (i < j), so node indices are
    /// deterministic for a given corpus.
    pub fn build(corpus: &Corpus) -> Self {
        let mut graph = Self::new();
        let entities = corpus.entities();

        for (i, a) in entities.iter().enumerate() {
            for b in &entities[i + 1..] {
                let shared = a.shared_tag_count(b);
                if shared > 0 {
                    graph.add_edge(&a.name, &b.name, shared as u32);
                }
            }
        }

        info!(
            entities = corpus.len(),
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "relational graph built"
        );
        graph
    }

    /// Get or create a node.
    pub fn ensure_node(&mut self, name: &str) -> NodeIndex {
        if let Some(&idx) = self.node_index.get(name) {
            return idx;
        }
        let idx = self.graph.add_node(name.to_string());
        self.node_index.insert(name.to_string(), idx);
        idx
    }

    /// Add (or overwrite) the edge between two names. Zero weights are ignored.
    pub fn add_edge(&mut self, a: &str, b: &str, weight: u32) {
        if weight == 0 || a == b {
            return;
        }
        let ia = self.ensure_node(a);
        let ib = self.ensure_node(b);
        self.graph.update_edge(ia, ib, weight);
    }

    /// Look up a node index by name.
    pub fn get_node(&self, name: &str) -> Option<NodeIndex> {
        self.node_index.get(name).copied()
    }

    /// Edge weight between two names, if they are connected.
    pub fn weight(&self, a: &str, b: &str) -> Option<u32> {
        let (ia, ib) = (self.get_node(a)?, self.get_node(b)?);
        self.graph
            .find_edge(ia, ib)
            .and_then(|e| self.graph.edge_weight(e))
            .copied()
    }

    /// Node names in index order.
    pub fn node_names(&self) -> Vec<&str> {
        self.graph
            .node_indices()
            .map(|i| self.graph[i].as_str())
            .collect()
    }

    /// Weighted adjacency lists indexed by `NodeIndex::index()`.
    ///
    /// Neighbour order follows edge insertion order.
    pub fn adjacency(&self) -> Vec<Vec<(usize, f64)>> {
        let mut adj = vec![Vec::new(); self.graph.node_count()];
        for edge in self.graph.edge_references() {
            let (s, t, w) = (edge.source().index(), edge.target().index(), *edge.weight());
            adj[s].push((t, w as f64));
            adj[t].push((s, w as f64));
        }
        adj
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn is_empty(&self) -> bool {
        self.node_count() == 0
    }
}
