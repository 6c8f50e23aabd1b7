//! Output formatters for the CLI.

mod markdown;

pub use markdown::*;

use crate::models::{Exploration, OutputFormat};

/// Render an exploration in the requested format.
///
/// # Errors
///
/// Returns error if JSON serialization fails.
pub fn render(exploration: &Exploration, format: OutputFormat) -> serde_json::Result<String> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(exploration),
        OutputFormat::Markdown => Ok(format_exploration_markdown(exploration)),
    }
}
