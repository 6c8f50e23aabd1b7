//! Fetcher seams used by the crawler.
//!
//! `ArxivClient` implements both traits directly; `CachedPaperFetcher` wraps
//! any record fetcher with a cache-first store lookup.

mod cached;

use async_trait::async_trait;

use crate::error::ClientResult;
use crate::models::{PaperRecord, RelatedSummary};

pub use cached::CachedPaperFetcher;

/// Resolves one identifier to a full paper record.
#[async_trait]
pub trait PaperFetcher: Send + Sync {
    /// Fetch the record for `id`.
    ///
    /// Fails with `ClientError::NotFound` when the source has no entry and
    /// with any other variant on transport failure.
    async fn fetch(&self, id: &str) -> ClientResult<PaperRecord>;
}

/// Lists related papers for a subject category.
#[async_trait]
pub trait RelatedFetcher: Send + Sync {
    /// Return at most `max_results` summaries in source order, never
    /// including `exclude_id`.
    async fn fetch_related(
        &self,
        category: &str,
        exclude_id: &str,
        max_results: usize,
    ) -> ClientResult<Vec<RelatedSummary>>;
}
