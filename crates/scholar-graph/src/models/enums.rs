//! Enumeration types for CLI and request parameters.

use serde::{Deserialize, Serialize};

/// Output format for crawl results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Machine-readable JSON format.
    #[default]
    Json,
    /// Human-readable Markdown format.
    Markdown,
}
