//! Paper store used as a read-through cache by the record fetcher.
//!
//! Stores are pure caches: a hit is authoritative and never refreshed, and any
//! failure is reported as a `StoreError` for the caller to treat as a miss.

mod memory;
mod redis_store;

use std::sync::Arc;

use async_trait::async_trait;

use crate::config::StoreBackend;
use crate::error::StoreResult;
use crate::models::PaperRecord;

pub use memory::MemoryStore;
pub use redis_store::RedisStore;

/// Keyed document collection of paper records.
#[async_trait]
pub trait PaperStore: Send + Sync {
    /// Point lookup by identifier.
    async fn get(&self, id: &str) -> StoreResult<Option<PaperRecord>>;

    /// Insert unless a record with the same identifier exists.
    ///
    /// Returns false when another writer got there first; that is not an error.
    async fn insert(&self, record: &PaperRecord) -> StoreResult<bool>;

    /// Short backend name for logs and readiness output.
    fn backend(&self) -> &'static str;
}

/// Open the configured store once at startup.
///
/// An unreachable Redis degrades to no store at all, so every lookup goes to
/// the source instead of failing.
pub async fn open(backend: &StoreBackend) -> Option<Arc<dyn PaperStore>> {
    match backend {
        StoreBackend::Memory { capacity } => Some(Arc::new(MemoryStore::new(*capacity))),
        StoreBackend::Redis { url, key_prefix } => {
            match RedisStore::connect(url, key_prefix.clone()).await {
                Ok(store) => Some(Arc::new(store)),
                Err(e) => {
                    tracing::warn!(error = %e, "Paper store unavailable, fetching every record from arXiv");
                    None
                }
            }
        }
        StoreBackend::Disabled => None,
    }
}
