//! Configuration for the paper graph service.

use std::time::Duration;

use anyhow::Context;

use crate::crawler::CrawlLimits;

/// API configuration constants.
pub mod api {
    use std::time::Duration;

    /// arXiv export API query endpoint.
    pub const ARXIV_API: &str = "http://export.arxiv.org/api/query";

    /// Request timeout.
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

    /// Connection timeout.
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Delay before each outbound request.
    pub const RATE_LIMIT_DELAY: Duration = Duration::from_millis(100);

    /// Transient-failure retries at the HTTP layer (crawls never retry branches).
    pub const HTTP_RETRIES: u32 = 0;

    /// Maximum in-memory store size (records).
    pub const CACHE_MAX_SIZE: u64 = 10_000;

    /// Maximum keepalive connections.
    pub const MAX_KEEPALIVE: usize = 10;

    /// Keepalive expiry.
    pub const KEEPALIVE_EXPIRY: Duration = Duration::from_secs(30);

    /// User agent sent to arXiv.
    pub const USER_AGENT: &str = concat!("scholar-graph/", env!("CARGO_PKG_VERSION"));
}

/// Crawl and ranking defaults.
pub mod defaults {
    /// Maximum expansion depth below the seed.
    pub const MAX_DEPTH: u32 = 4;

    /// Maximum related papers expanded per node.
    pub const MAX_FAN_OUT: usize = 8;

    /// Size of each abstract's top-weighted term set.
    pub const TOP_TERMS: usize = 20;

    /// Collaborators returned per seed.
    pub const MAX_SUGGESTIONS: usize = 5;

    /// Key prefix for Redis-backed records.
    pub const REDIS_KEY_PREFIX: &str = "scholar-graph:paper";
}

/// Which paper store backs the record fetcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreBackend {
    /// Process-local bounded cache.
    Memory {
        /// Maximum number of records kept.
        capacity: u64,
    },
    /// Shared Redis instance.
    Redis {
        /// Connection URL (redis://host:port)
        url: String,
        /// Key namespace
        key_prefix: String,
    },
    /// Always fetch from the source.
    Disabled,
}

/// Similarity ranking settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankingConfig {
    /// Size of each document's top-weighted term set.
    pub top_terms: usize,

    /// Number of collaborators to return.
    pub max_suggestions: usize,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self { top_terms: defaults::TOP_TERMS, max_suggestions: defaults::MAX_SUGGESTIONS }
    }
}

/// Server configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// arXiv query endpoint (overridable for mock servers).
    pub arxiv_api_url: String,

    /// Request timeout.
    pub request_timeout: Duration,

    /// Connection timeout.
    pub connect_timeout: Duration,

    /// Delay before each outbound request.
    pub rate_limit_delay: Duration,

    /// Retries for transient HTTP failures.
    pub http_retries: u32,

    /// Crawl bounds.
    pub crawl: CrawlLimits,

    /// Ranking settings.
    pub ranking: RankingConfig,

    /// Paper store selection.
    pub store: StoreBackend,
}

impl Config {
    /// Create a configuration with production defaults and an in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            arxiv_api_url: api::ARXIV_API.to_string(),
            request_timeout: api::REQUEST_TIMEOUT,
            connect_timeout: api::CONNECT_TIMEOUT,
            rate_limit_delay: api::RATE_LIMIT_DELAY,
            http_retries: api::HTTP_RETRIES,
            crawl: CrawlLimits::default(),
            ranking: RankingConfig::default(),
            store: StoreBackend::Memory { capacity: api::CACHE_MAX_SIZE },
        }
    }

    /// Create a test configuration pointing at a mock server.
    #[must_use]
    pub fn for_testing(base_url: &str) -> Self {
        Self {
            arxiv_api_url: format!("{}/api/query", base_url),
            request_timeout: Duration::from_secs(5),
            connect_timeout: Duration::from_secs(2),
            rate_limit_delay: Duration::from_millis(0), // No delay in tests
            http_retries: 0,
            crawl: CrawlLimits::default(),
            ranking: RankingConfig::default(),
            store: StoreBackend::Disabled,
        }
    }

    /// Create configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns error if a numeric variable does not parse, the API URL is
    /// invalid or the resulting crawl limits are unusable.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Create configuration from an arbitrary variable source.
    ///
    /// `lookup` returns the raw value of a variable, or `None` when unset.
    ///
    /// # Errors
    ///
    /// Same as [`Config::from_env`].
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::new();
        let number = |name: &str| lookup(name).map(|raw| (name.to_string(), raw));

        if let Some(raw) = lookup("ARXIV_API_URL") {
            let url = url::Url::parse(raw.trim())
                .with_context(|| format!("ARXIV_API_URL is not a valid URL: '{raw}'"))?;
            config.arxiv_api_url = url.to_string();
        }
        if let Some(depth) = parse_number::<u32>(number("CRAWL_MAX_DEPTH"))? {
            config.crawl.max_depth = depth;
        }
        if let Some(fan_out) = parse_number::<usize>(number("CRAWL_MAX_FAN_OUT"))? {
            config.crawl.max_fan_out = fan_out;
        }
        if let Some(top_terms) = parse_number::<usize>(number("RANK_TOP_TERMS"))? {
            config.ranking.top_terms = top_terms;
        }
        if let Some(max) = parse_number::<usize>(number("RANK_MAX_SUGGESTIONS"))? {
            config.ranking.max_suggestions = max;
        }
        if let Some(retries) = parse_number::<u32>(number("HTTP_RETRIES"))? {
            config.http_retries = retries;
        }
        if let Some(delay) = parse_number::<u64>(number("RATE_LIMIT_DELAY_MS"))? {
            config.rate_limit_delay = Duration::from_millis(delay);
        }

        if let Some(url) = lookup("REDIS_URL") {
            config.store = StoreBackend::Redis {
                url,
                key_prefix: defaults::REDIS_KEY_PREFIX.to_string(),
            };
        } else if let Some(capacity) = parse_number::<u64>(number("PAPER_CACHE_SIZE"))? {
            config.store = if capacity == 0 {
                StoreBackend::Disabled
            } else {
                StoreBackend::Memory { capacity }
            };
        }

        config.crawl.validate().context("invalid crawl limits in environment")?;
        Ok(config)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_number<T>(var: Option<(String, String)>) -> anyhow::Result<Option<T>>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match var {
        Some((name, raw)) => raw
            .trim()
            .parse()
            .map(Some)
            .with_context(|| format!("{name} must be a non-negative integer, got '{raw}'")),
        None => Ok(None),
    }
}
