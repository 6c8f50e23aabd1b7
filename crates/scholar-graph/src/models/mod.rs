//! Data models for papers, crawl graphs and collaborator suggestions.
//!
//! Wire-facing models use `#[serde(rename_all = "camelCase")]` to match the
//! JSON the HTTP endpoint returns.

mod collaborator;
mod enums;
mod graph;
mod inputs;
mod paper;

pub use collaborator::CollaboratorCandidate;
pub use enums::OutputFormat;
pub use graph::{Exploration, Graph, Link};
pub use inputs::CrawlQuery;
pub use paper::{PaperRecord, RelatedSummary};
