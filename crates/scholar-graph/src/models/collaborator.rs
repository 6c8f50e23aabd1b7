//! Collaborator suggestion model.

use serde::{Deserialize, Serialize};

/// A suggested collaborator and why they were picked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollaboratorCandidate {
    /// Author name as first seen in the crawl.
    pub name: String,

    /// Accumulated similarity across the author's papers (non-negative).
    pub score: f64,

    /// Human-readable reason.
    pub justification: String,
}
