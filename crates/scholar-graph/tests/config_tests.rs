//! Configuration loading tests.
//!
//! Variables are supplied through `Config::from_lookup` so tests never touch
//! the process environment.

use std::collections::HashMap;
use std::time::Duration;

use scholar_graph::config::{Config, StoreBackend};

fn load(vars: &[(&str, &str)]) -> anyhow::Result<Config> {
    let vars: HashMap<String, String> =
        vars.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect();
    Config::from_lookup(|name| vars.get(name).cloned())
}

// =============================================================================
// Defaults and overrides
// =============================================================================

#[test]
fn test_empty_environment_uses_defaults() {
    let config = load(&[]).unwrap();
    let defaults = Config::default();

    assert_eq!(config.arxiv_api_url, defaults.arxiv_api_url);
    assert_eq!(config.crawl, defaults.crawl);
    assert_eq!(config.store, defaults.store);
}

#[test]
fn test_numeric_overrides_apply() {
    let config = load(&[
        ("CRAWL_MAX_DEPTH", "2"),
        ("CRAWL_MAX_FAN_OUT", " 3 "),
        ("RANK_TOP_TERMS", "10"),
        ("RANK_MAX_SUGGESTIONS", "7"),
        ("HTTP_RETRIES", "2"),
        ("RATE_LIMIT_DELAY_MS", "250"),
    ])
    .unwrap();

    assert_eq!(config.crawl.max_depth, 2);
    assert_eq!(config.crawl.max_fan_out, 3);
    assert_eq!(config.ranking.top_terms, 10);
    assert_eq!(config.ranking.max_suggestions, 7);
    assert_eq!(config.http_retries, 2);
    assert_eq!(config.rate_limit_delay, Duration::from_millis(250));
}

#[test]
fn test_api_url_override() {
    let config = load(&[("ARXIV_API_URL", "http://localhost:8080/api/query")]).unwrap();
    assert_eq!(config.arxiv_api_url, "http://localhost:8080/api/query");
}

// =============================================================================
// Store selection
// =============================================================================

#[test]
fn test_zero_cache_size_disables_store() {
    let config = load(&[("PAPER_CACHE_SIZE", "0")]).unwrap();
    assert_eq!(config.store, StoreBackend::Disabled);
}

#[test]
fn test_cache_size_sets_memory_capacity() {
    let config = load(&[("PAPER_CACHE_SIZE", "42")]).unwrap();
    assert_eq!(config.store, StoreBackend::Memory { capacity: 42 });
}

#[test]
fn test_redis_url_takes_precedence() {
    let config =
        load(&[("REDIS_URL", "redis://127.0.0.1:6379/"), ("PAPER_CACHE_SIZE", "0")]).unwrap();
    assert!(matches!(config.store, StoreBackend::Redis { ref url, .. } if url == "redis://127.0.0.1:6379/"));
}

// =============================================================================
// Rejections
// =============================================================================

#[test]
fn test_zero_fan_out_is_rejected() {
    let err = load(&[("CRAWL_MAX_FAN_OUT", "0")]).unwrap_err();
    assert!(format!("{err:#}").contains("max_fan_out"));
}

#[test]
fn test_invalid_api_url_is_rejected() {
    let err = load(&[("ARXIV_API_URL", "not a url")]).unwrap_err();
    assert!(err.to_string().contains("ARXIV_API_URL"));
}

#[test]
fn test_non_numeric_value_is_rejected() {
    let err = load(&[("CRAWL_MAX_DEPTH", "four")]).unwrap_err();
    assert!(err.to_string().contains("CRAWL_MAX_DEPTH"));
}

#[test]
fn test_negative_value_is_rejected() {
    assert!(load(&[("PAPER_CACHE_SIZE", "-1")]).is_err());
}
