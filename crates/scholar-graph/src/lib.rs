//! scholar-graph
//!
//! Builds a bounded related-work graph around a seed arXiv paper and suggests
//! collaborators whose papers have abstracts similar to the seed's.
//!
//! # Features
//!
//! - **Bounded crawl**: depth and fan-out limits, cycle-safe, failed branches pruned
//! - **Cache-first lookups**: in-memory or Redis paper store, degrading to no cache
//! - **TF-IDF ranking**: abstract term overlap credited to co-authors
//! - **HTTP + CLI**: `GET /api/paper/{id}` or `scholar-graph crawl <id>`
//!
//! # Example
//!
//! ```no_run
//! use scholar_graph::{config::Config, service::PaperGraphService};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env()?;
//!     let service = PaperGraphService::from_config(&config).await?;
//!
//!     let exploration = service.explore("2101.00001").await?;
//!     println!("{} papers", exploration.nodes.len());
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod crawler;
pub mod error;
pub mod fetch;
pub mod formatters;
pub mod models;
pub mod normalize;
pub mod ranker;
pub mod server;
pub mod service;
pub mod store;

pub use client::ArxivClient;
pub use config::Config;
pub use crawler::{CrawlLimits, GraphCrawler};
pub use error::{ApiError, ClientError, CrawlError, StoreError};
pub use ranker::SimilarityRanker;
pub use service::PaperGraphService;
