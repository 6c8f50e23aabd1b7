//! Crawl graph and the combined exploration result.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::{CollaboratorCandidate, PaperRecord};

/// Directed "related-to" edge between two identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Link {
    /// Identifier of the expanded paper.
    pub source: String,

    /// Identifier of the related paper.
    pub target: String,
}

impl Link {
    /// Create a link.
    #[must_use]
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self { source: source.into(), target: target.into() }
    }
}

/// Node and link lists grown append-only during one crawl.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Graph {
    /// Materialized papers, unique by identifier, in insertion order.
    pub nodes: Vec<PaperRecord>,

    /// Links in insertion order.
    pub links: Vec<Link>,

    #[serde(skip)]
    node_ids: HashSet<String>,
}

impl Graph {
    /// Create an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a node unless one with the same identifier exists.
    ///
    /// Returns false when the node was already present.
    pub fn add_node(&mut self, record: PaperRecord) -> bool {
        if !self.node_ids.insert(record.id.clone()) {
            return false;
        }
        self.nodes.push(record);
        true
    }

    /// Append a link.
    pub fn add_link(&mut self, source: &str, target: &str) {
        self.links.push(Link::new(source, target));
    }

    /// Check whether a node with this identifier exists.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.node_ids.contains(id)
    }

    /// Look up a node by identifier.
    #[must_use]
    pub fn node(&self, id: &str) -> Option<&PaperRecord> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Links leaving the given identifier.
    pub fn links_from<'a>(&'a self, id: &'a str) -> impl Iterator<Item = &'a Link> + 'a {
        self.links.iter().filter(move |l| l.source == id)
    }

    /// Number of nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
}

/// What the endpoint returns: the graph plus collaborator suggestions.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exploration {
    /// Graph nodes.
    pub nodes: Vec<PaperRecord>,

    /// Graph links.
    pub links: Vec<Link>,

    /// Ranked collaborator shortlist.
    pub collaborator_suggestions: Vec<CollaboratorCandidate>,
}

impl Exploration {
    /// Combine a finished graph with its ranking.
    #[must_use]
    pub fn new(graph: Graph, collaborator_suggestions: Vec<CollaboratorCandidate>) -> Self {
        Self { nodes: graph.nodes, links: graph.links, collaborator_suggestions }
    }
}
