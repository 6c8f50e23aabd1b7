//! Crawl-then-rank pipeline shared by the HTTP endpoint and the CLI.

use std::sync::Arc;

use crate::client::ArxivClient;
use crate::config::Config;
use crate::crawler::{CrawlLimits, CrawlOutcome, GraphCrawler};
use crate::error::ApiError;
use crate::fetch::{CachedPaperFetcher, PaperFetcher, RelatedFetcher};
use crate::models::{CollaboratorCandidate, Exploration};
use crate::ranker::SimilarityRanker;
use crate::store::{self, PaperStore};

/// Builds a seed paper's graph and collaborator shortlist.
#[derive(Clone)]
pub struct PaperGraphService {
    crawler: GraphCrawler,
    ranker: SimilarityRanker,
    limits: CrawlLimits,
    store_backend: &'static str,
}

impl PaperGraphService {
    /// Assemble a service from already-built parts.
    #[must_use]
    pub fn new(
        papers: Arc<dyn PaperFetcher>,
        related: Arc<dyn RelatedFetcher>,
        ranker: SimilarityRanker,
        limits: CrawlLimits,
    ) -> Self {
        Self { crawler: GraphCrawler::new(papers, related), ranker, limits, store_backend: "none" }
    }

    /// Wire the arXiv client, the configured store and the ranker together.
    ///
    /// The store connection is opened here, once, and shared by every crawl.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be built.
    pub async fn from_config(config: &Config) -> anyhow::Result<Self> {
        let client = Arc::new(ArxivClient::new(config)?);
        let store: Option<Arc<dyn PaperStore>> = store::open(&config.store).await;
        let papers = CachedPaperFetcher::new(client.clone(), store);
        let store_backend = papers.store_backend();

        let mut service = Self::new(
            Arc::new(papers),
            client,
            SimilarityRanker::new(config.ranking),
            config.crawl,
        );
        service.store_backend = store_backend;
        Ok(service)
    }

    /// Configured crawl ceiling.
    #[must_use]
    pub const fn limits(&self) -> CrawlLimits {
        self.limits
    }

    /// Backend behind the record fetcher ("memory", "redis" or "none").
    #[must_use]
    pub const fn store_backend(&self) -> &'static str {
        self.store_backend
    }

    /// Crawl with the configured limits, then rank.
    pub async fn explore(&self, seed_id: &str) -> Result<Exploration, ApiError> {
        self.explore_with(seed_id, self.limits).await
    }

    /// Crawl with explicit limits, then rank.
    pub async fn explore_with(
        &self,
        seed_id: &str,
        limits: CrawlLimits,
    ) -> Result<Exploration, ApiError> {
        let outcome = self.crawler.crawl(seed_id, limits).await?;
        let suggestions = self.suggest(&outcome)?;
        Ok(Exploration::new(outcome.graph, suggestions))
    }

    /// Rank the non-seed nodes of a finished crawl against its seed.
    pub fn suggest(&self, outcome: &CrawlOutcome) -> Result<Vec<CollaboratorCandidate>, ApiError> {
        let seed = outcome.graph.node(&outcome.seed_id).ok_or_else(|| {
            ApiError::Ranking(format!("seed '{}' is missing from the crawl graph", outcome.seed_id))
        })?;

        let candidates: Vec<_> =
            outcome.graph.nodes.iter().filter(|n| n.id != outcome.seed_id).cloned().collect();

        Ok(self.ranker.rank(seed, &candidates))
    }
}

impl std::fmt::Debug for PaperGraphService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PaperGraphService")
            .field("limits", &self.limits)
            .field("store", &self.store_backend)
            .finish_non_exhaustive()
    }
}
