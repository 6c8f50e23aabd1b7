//! arXiv API client.
//!
//! Provides async HTTP client with:
//! - Connection pooling via reqwest
//! - Optional retry middleware with exponential backoff (off by default)
//! - A fixed politeness delay before every request
//! - Atom feed parsing into normalized paper models

mod atom;

use std::time::Duration;

use async_trait::async_trait;
use feed_rs::model::Feed;
use reqwest::Client;
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_retry::{RetryTransientMiddleware, policies::ExponentialBackoff};

use crate::config::{Config, api};
use crate::error::{ClientError, ClientResult};
use crate::fetch::{PaperFetcher, RelatedFetcher};
use crate::models::{PaperRecord, RelatedSummary};
use crate::normalize;

/// arXiv export API client.
#[derive(Clone)]
pub struct ArxivClient {
    /// HTTP client with middleware.
    client: ClientWithMiddleware,

    /// Query endpoint.
    api_url: String,

    /// Rate limit delay.
    rate_limit_delay: Duration,

    /// Request timeout, reported on timeouts.
    request_timeout: Duration,
}

impl ArxivClient {
    /// Create a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns error if HTTP client initialization fails.
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let client = Client::builder()
            .user_agent(api::USER_AGENT)
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .pool_max_idle_per_host(api::MAX_KEEPALIVE)
            .pool_idle_timeout(api::KEEPALIVE_EXPIRY)
            .gzip(true)
            .build()?;

        let mut builder = ClientBuilder::new(client);
        if config.http_retries > 0 {
            let retry_policy = ExponentialBackoff::builder()
                .retry_bounds(Duration::from_secs(1), Duration::from_secs(30))
                .build_with_max_retries(config.http_retries);
            builder = builder.with(RetryTransientMiddleware::new_with_policy(retry_policy));
        }

        Ok(Self {
            client: builder.build(),
            api_url: config.arxiv_api_url.clone(),
            rate_limit_delay: config.rate_limit_delay,
            request_timeout: config.request_timeout,
        })
    }

    /// Get a single paper by identifier.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::NotFound` when arXiv has no such entry, and a
    /// transport error on network or parse failure.
    pub async fn get_paper(&self, paper_id: &str) -> ClientResult<PaperRecord> {
        let id = normalize::paper_id(paper_id);
        let params = vec![("id_list".to_string(), id.clone())];

        let feed = self.query(&params).await?;
        let entry = feed.entries.first().ok_or_else(|| ClientError::not_found(id.clone()))?;

        if atom::is_error_entry(entry) {
            return Err(ClientError::not_found(format!("{id}: {}", atom::error_message(entry))));
        }
        if atom::is_empty_entry(entry) {
            return Err(ClientError::not_found(id));
        }

        let mut record = atom::to_record(entry);
        // Keep the caller's key even if arXiv answers with a different URL form.
        record.id = id;
        Ok(record)
    }

    /// List recent papers in a subject category.
    ///
    /// # Errors
    ///
    /// Returns error on API failure.
    pub async fn search_category(
        &self,
        category: &str,
        max_results: usize,
    ) -> ClientResult<Vec<RelatedSummary>> {
        let params = vec![
            ("search_query".to_string(), format!("cat:{category}")),
            ("max_results".to_string(), max_results.to_string()),
        ];

        let feed = self.query(&params).await?;
        if let Some(entry) = feed.entries.first().filter(|e| atom::is_error_entry(e)) {
            return Err(ClientError::UnexpectedStatus {
                status: 200,
                message: atom::error_message(entry),
            });
        }

        Ok(feed.entries.iter().map(atom::to_summary).collect())
    }

    /// Run one query against the export API and parse the Atom response.
    async fn query(&self, params: &[(String, String)]) -> ClientResult<Feed> {
        // Rate limit
        tokio::time::sleep(self.rate_limit_delay).await;

        let response = self
            .client
            .get(&self.api_url)
            .query(params)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let response = self.handle_response(response).await?;
        let body = response.bytes().await?;

        Ok(feed_rs::parser::parse(&body[..])?)
    }

    /// Handle API response status codes.
    async fn handle_response(
        &self,
        response: reqwest::Response,
    ) -> ClientResult<reqwest::Response> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let text = response.text().await.unwrap_or_default();
        match status.as_u16() {
            404 => Err(ClientError::not_found(text)),
            500..=599 => Err(ClientError::server(status.as_u16(), text)),
            _ => Err(ClientError::UnexpectedStatus { status: status.as_u16(), message: text }),
        }
    }

    fn transport_error(&self, err: reqwest_middleware::Error) -> ClientError {
        match &err {
            reqwest_middleware::Error::Reqwest(e) if e.is_timeout() => {
                ClientError::Timeout(self.request_timeout)
            }
            _ => ClientError::from(err),
        }
    }
}

#[async_trait]
impl PaperFetcher for ArxivClient {
    async fn fetch(&self, id: &str) -> ClientResult<PaperRecord> {
        self.get_paper(id).await
    }
}

#[async_trait]
impl RelatedFetcher for ArxivClient {
    async fn fetch_related(
        &self,
        category: &str,
        exclude_id: &str,
        max_results: usize,
    ) -> ClientResult<Vec<RelatedSummary>> {
        if max_results == 0 {
            return Ok(Vec::new());
        }

        let excluded = normalize::paper_id(exclude_id);
        // One extra so that dropping the excluded paper still fills the quota.
        let mut related = self.search_category(category, max_results + 1).await?;
        related.retain(|summary| summary.id != excluded);
        related.truncate(max_results);
        Ok(related)
    }
}

impl std::fmt::Debug for ArxivClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArxivClient").field("api_url", &self.api_url).finish()
    }
}
