//! Error types for the paper graph service.
//!
//! Uses `thiserror` for structured error handling with automatic `From` implementations.
//! Each layer has its own enum; the crawler decides which failures are fatal.

use std::time::Duration;

/// Errors from the arXiv HTTP client layer.
#[derive(thiserror::Error, Debug)]
pub enum ClientError {
    /// HTTP transport error (connection, DNS, TLS, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Middleware error
    #[error("Middleware error: {0}")]
    Middleware(#[from] reqwest_middleware::Error),

    /// The Atom feed could not be parsed.
    #[error("Failed to parse feed: {0}")]
    Feed(#[from] feed_rs::parser::ParseFeedError),

    /// The source has no entry for the identifier.
    #[error("Paper not found: {resource}")]
    NotFound {
        /// Identifier or query that produced no entry
        resource: String,
    },

    /// Request timeout
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    /// Server error (5xx response)
    #[error("Server error ({status}): {message}")]
    Server {
        /// HTTP status code
        status: u16,
        /// Error message
        message: String,
    },

    /// Unexpected HTTP status
    #[error("Unexpected status {status}: {message}")]
    UnexpectedStatus {
        /// HTTP status code
        status: u16,
        /// Response body or message
        message: String,
    },
}

impl ClientError {
    /// Create a not found error.
    #[must_use]
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound { resource: resource.into() }
    }

    /// Create a server error.
    #[must_use]
    pub fn server(status: u16, message: impl Into<String>) -> Self {
        Self::Server { status, message: message.into() }
    }

    /// Returns true when the source answered but had no such paper.
    ///
    /// Everything else is a transport failure.
    #[must_use]
    pub const fn is_lookup(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Errors from the paper store.
///
/// Never crosses the fetcher boundary: callers log it and fall back to the source.
#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    /// Redis command or connection failure
    #[error("Redis error: {0}")]
    Redis(#[from] redis::RedisError),

    /// Stored document could not be encoded or decoded
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Errors that abort a whole crawl.
#[derive(thiserror::Error, Debug)]
pub enum CrawlError {
    /// The seed identifier does not exist at the source.
    #[error("Seed paper '{id}' could not be found: {reason}")]
    Lookup {
        /// Seed identifier
        id: String,
        /// Message from the source
        reason: String,
    },

    /// The seed lookup failed in transit.
    #[error("Seed paper '{id}' could not be fetched: {source}")]
    Transport {
        /// Seed identifier
        id: String,
        /// Underlying client failure
        #[source]
        source: ClientError,
    },

    /// Crawl limits are unusable.
    #[error("Invalid crawl limits: {0}")]
    InvalidLimits(String),
}

impl CrawlError {
    /// Classify a failed seed lookup.
    #[must_use]
    pub fn seed(id: &str, error: ClientError) -> Self {
        match error {
            ClientError::NotFound { resource } => {
                Self::Lookup { id: id.to_string(), reason: resource }
            }
            other => Self::Transport { id: id.to_string(), source: other },
        }
    }

    /// Machine-readable error code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Lookup { .. } => "lookup_error",
            Self::Transport { .. } => "transport_error",
            Self::InvalidLimits(_) => "invalid_limits",
        }
    }
}

/// Errors surfaced at the HTTP boundary.
#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    /// The crawl itself failed.
    #[error(transparent)]
    Crawl(#[from] CrawlError),

    /// Ranker input could not be assembled from the crawl result.
    #[error("Ranking failed: {0}")]
    Ranking(String),

    /// Request parameters were rejected.
    #[error("Validation error: {message}")]
    Validation {
        /// Offending parameter
        field: String,
        /// Validation error message
        message: String,
    },
}

impl ApiError {
    /// Create a validation error.
    #[must_use]
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation { field: field.into(), message: message.into() }
    }

    /// Machine-readable error code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Crawl(err) => err.code(),
            Self::Ranking(_) => "ranking_error",
            Self::Validation { .. } => "validation_error",
        }
    }

    /// Returns true if the caller sent a bad request rather than the server failing.
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    /// Human-readable detail for the response body.
    #[must_use]
    pub fn to_user_message(&self) -> String {
        match self {
            Self::Crawl(CrawlError::Lookup { id, .. }) => {
                format!("Paper '{id}' was not found. Please check the identifier is correct.")
            }
            Self::Validation { field, message } => {
                format!("Invalid value for '{field}': {message}")
            }
            _ => self.to_string(),
        }
    }
}

/// Result type alias for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Result type alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Result type alias for crawl operations.
pub type CrawlResult<T> = Result<T, CrawlError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_error_classification() {
        assert!(ClientError::not_found("2101.00001").is_lookup());
        assert!(!ClientError::server(503, "unavailable").is_lookup());
        assert!(!ClientError::Timeout(Duration::from_secs(30)).is_lookup());
    }

    #[test]
    fn test_seed_error_mapping() {
        let err = CrawlError::seed("A", ClientError::not_found("no entry"));
        assert!(matches!(err, CrawlError::Lookup { ref id, .. } if id == "A"));
        assert_eq!(err.code(), "lookup_error");

        let err = CrawlError::seed("A", ClientError::server(502, "bad gateway"));
        assert!(matches!(err, CrawlError::Transport { .. }));
        assert_eq!(err.code(), "transport_error");
    }

    #[test]
    fn test_api_error_user_message() {
        let err = ApiError::validation("depth", "must not exceed 4");
        assert!(err.is_client_error());
        assert!(err.to_user_message().contains("depth"));
        assert_eq!(err.code(), "validation_error");

        let err = ApiError::from(CrawlError::seed("9999.99999", ClientError::not_found("x")));
        assert!(!err.is_client_error());
        assert!(err.to_user_message().contains("9999.99999"));
    }
}
