//! Process-local store backed by a bounded moka cache.

use async_trait::async_trait;
use moka::future::Cache;

use super::PaperStore;
use crate::error::StoreResult;
use crate::models::PaperRecord;

/// In-memory paper store.
///
/// Bounded by capacity only; entries never expire.
#[derive(Clone)]
pub struct MemoryStore {
    cache: Cache<String, PaperRecord>,
}

impl MemoryStore {
    /// Create a store holding at most `capacity` records.
    #[must_use]
    pub fn new(capacity: u64) -> Self {
        Self { cache: Cache::builder().max_capacity(capacity).build() }
    }

    /// Number of records currently held (approximate until pending tasks run).
    #[must_use]
    pub fn len(&self) -> u64 {
        self.cache.entry_count()
    }

    /// Check if the store is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl PaperStore for MemoryStore {
    async fn get(&self, id: &str) -> StoreResult<Option<PaperRecord>> {
        Ok(self.cache.get(id).await)
    }

    async fn insert(&self, record: &PaperRecord) -> StoreResult<bool> {
        let entry = self.cache.entry(record.id.clone()).or_insert(record.clone()).await;
        Ok(entry.is_fresh())
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}

impl std::fmt::Debug for MemoryStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryStore").field("entries", &self.len()).finish()
    }
}
