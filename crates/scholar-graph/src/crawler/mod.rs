//! Bounded depth-first expansion of a paper's related-work neighborhood.
//!
//! The crawl is driven by an explicit LIFO stack instead of recursion. Each
//! step carries the identifier that discovered it, so links are recorded in
//! exactly the order a recursive walk would record them: the link to a
//! related paper is appended immediately before that paper is expanded, and a
//! whole branch finishes before its next sibling starts.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use crate::config::defaults;
use crate::error::{CrawlError, CrawlResult};
use crate::fetch::{PaperFetcher, RelatedFetcher};
use crate::models::Graph;
use crate::normalize;

/// Depth and breadth bounds for one crawl.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CrawlLimits {
    /// Nodes at this depth are materialized but not expanded.
    pub max_depth: u32,

    /// Related papers requested per expanded node.
    pub max_fan_out: usize,
}

impl CrawlLimits {
    /// Create limits.
    #[must_use]
    pub const fn new(max_depth: u32, max_fan_out: usize) -> Self {
        Self { max_depth, max_fan_out }
    }

    /// Reject limits the crawler cannot honor.
    pub fn validate(&self) -> CrawlResult<()> {
        if self.max_fan_out == 0 {
            return Err(CrawlError::InvalidLimits(
                "max_fan_out must be at least 1; use max_depth = 0 for a seed-only crawl".into(),
            ));
        }
        Ok(())
    }

    /// Upper bound on external lookups (record plus related) for one crawl.
    ///
    /// A full tree has `sum(F^d, d = 0..=D)` record lookups and one related
    /// lookup per interior node. Saturates instead of overflowing.
    #[must_use]
    pub fn worst_case_lookups(&self) -> u64 {
        let fan_out = self.max_fan_out as u64;
        if fan_out <= 1 {
            // A chain: one record per level, one related lookup per interior node.
            return u64::from(self.max_depth).saturating_mul(2).saturating_add(1);
        }

        let mut level = 1u64;
        let mut records = 0u64;
        let mut related = 0u64;

        for depth in 0..=self.max_depth {
            records = records.saturating_add(level);
            if depth < self.max_depth {
                related = related.saturating_add(level);
            }
            level = level.saturating_mul(fan_out);
            if records == u64::MAX {
                break;
            }
        }

        records.saturating_add(related)
    }
}

impl Default for CrawlLimits {
    fn default() -> Self {
        Self::new(defaults::MAX_DEPTH, defaults::MAX_FAN_OUT)
    }
}

/// Counters collected during one crawl.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CrawlStats {
    /// Record lookups issued.
    pub record_lookups: usize,

    /// Related-set lookups issued.
    pub related_lookups: usize,

    /// Branches abandoned after a failed lookup.
    pub pruned_branches: usize,
}

/// Result of a successful crawl.
#[derive(Debug, Clone)]
pub struct CrawlOutcome {
    /// Normalized seed identifier.
    pub seed_id: String,

    /// The finished graph.
    pub graph: Graph,

    /// Depth at which each materialized node was expanded.
    pub depths: HashMap<String, u32>,

    /// Lookup counters.
    pub stats: CrawlStats,
}

/// One pending unit of work: record the link from `parent`, then expand `id`.
struct Step {
    parent: Option<String>,
    id: String,
    depth: u32,
}

/// Graph crawler over injected fetchers.
#[derive(Clone)]
pub struct GraphCrawler {
    papers: Arc<dyn PaperFetcher>,
    related: Arc<dyn RelatedFetcher>,
}

impl GraphCrawler {
    /// Create a crawler.
    #[must_use]
    pub fn new(papers: Arc<dyn PaperFetcher>, related: Arc<dyn RelatedFetcher>) -> Self {
        Self { papers, related }
    }

    /// Crawl the neighborhood of `seed_id`.
    ///
    /// # Errors
    ///
    /// Fails only when the limits are invalid or the seed itself cannot be
    /// fetched. Failures below the seed prune their branch and are logged.
    pub async fn crawl(&self, seed_id: &str, limits: CrawlLimits) -> CrawlResult<CrawlOutcome> {
        limits.validate()?;

        let seed_id = normalize::paper_id(seed_id);
        tracing::info!(
            seed = %seed_id,
            max_depth = limits.max_depth,
            max_fan_out = limits.max_fan_out,
            worst_case_lookups = limits.worst_case_lookups(),
            "Starting crawl"
        );

        let mut graph = Graph::new();
        let mut visited: HashSet<String> = HashSet::new();
        let mut abandoned: HashSet<String> = HashSet::new();
        let mut depths = HashMap::new();
        let mut stats = CrawlStats::default();

        let mut stack = vec![Step { parent: None, id: seed_id.clone(), depth: 0 }];

        while let Some(step) = stack.pop() {
            if let Some(parent) = &step.parent {
                graph.add_link(parent, &step.id);
            }

            if visited.contains(&step.id)
                || abandoned.contains(&step.id)
                || step.depth > limits.max_depth
            {
                continue;
            }
            visited.insert(step.id.clone());

            stats.record_lookups += 1;
            let record = match self.papers.fetch(&step.id).await {
                Ok(record) => record,
                Err(e) if step.parent.is_none() => {
                    tracing::warn!(seed = %step.id, error = %e, "Seed lookup failed");
                    return Err(CrawlError::seed(&step.id, e));
                }
                Err(e) => {
                    tracing::warn!(id = %step.id, depth = step.depth, error = %e, "Pruning branch");
                    visited.remove(&step.id);
                    abandoned.insert(step.id);
                    stats.pruned_branches += 1;
                    continue;
                }
            };

            let category = record.primary_category().map(str::to_owned);
            graph.add_node(record);
            depths.insert(step.id.clone(), step.depth);

            if step.depth >= limits.max_depth {
                continue;
            }
            let Some(category) = category else {
                tracing::debug!(id = %step.id, "No primary category, leaving as leaf");
                continue;
            };

            stats.related_lookups += 1;
            let related =
                match self.related.fetch_related(&category, &step.id, limits.max_fan_out).await {
                    Ok(related) => related,
                    Err(e) => {
                        tracing::warn!(
                            id = %step.id,
                            category = %category,
                            error = %e,
                            "Related lookup failed, leaving as leaf"
                        );
                        stats.pruned_branches += 1;
                        continue;
                    }
                };

            // Reversed so the first related paper is popped first.
            for summary in related.into_iter().take(limits.max_fan_out).rev() {
                stack.push(Step {
                    parent: Some(step.id.clone()),
                    id: normalize::paper_id(&summary.id),
                    depth: step.depth + 1,
                });
            }
        }

        tracing::info!(
            seed = %seed_id,
            nodes = graph.node_count(),
            links = graph.links.len(),
            record_lookups = stats.record_lookups,
            related_lookups = stats.related_lookups,
            pruned = stats.pruned_branches,
            "Crawl finished"
        );

        Ok(CrawlOutcome { seed_id, graph, depths, stats })
    }
}

impl std::fmt::Debug for GraphCrawler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GraphCrawler").finish_non_exhaustive()
    }
}
