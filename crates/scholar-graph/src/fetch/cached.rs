//! Cache-first record fetcher.

use std::sync::Arc;

use async_trait::async_trait;

use super::PaperFetcher;
use crate::error::ClientResult;
use crate::models::PaperRecord;
use crate::normalize;
use crate::store::PaperStore;

/// Record fetcher that consults the paper store before the source.
///
/// On a miss the fetched record is written back with insert-if-absent, so
/// concurrent crawls racing on the same identifier keep whichever landed first.
/// Store failures are logged and treated as misses.
#[derive(Clone)]
pub struct CachedPaperFetcher {
    source: Arc<dyn PaperFetcher>,
    store: Option<Arc<dyn PaperStore>>,
}

impl CachedPaperFetcher {
    /// Wrap a source with an optional store.
    #[must_use]
    pub fn new(source: Arc<dyn PaperFetcher>, store: Option<Arc<dyn PaperStore>>) -> Self {
        Self { source, store }
    }

    /// Name of the backing store, or "none".
    #[must_use]
    pub fn store_backend(&self) -> &'static str {
        self.store.as_ref().map_or("none", |s| s.backend())
    }

    async fn lookup(&self, store: &dyn PaperStore, id: &str) -> Option<PaperRecord> {
        match store.get(id).await {
            Ok(Some(record)) => {
                tracing::debug!(id, backend = store.backend(), "Paper store hit");
                Some(record)
            }
            Ok(None) => {
                tracing::debug!(id, backend = store.backend(), "Paper store miss");
                None
            }
            Err(e) => {
                tracing::warn!(id, error = %e, "Paper store read failed, treating as miss");
                None
            }
        }
    }
}

#[async_trait]
impl PaperFetcher for CachedPaperFetcher {
    async fn fetch(&self, id: &str) -> ClientResult<PaperRecord> {
        let id = normalize::paper_id(id);

        let Some(store) = self.store.as_deref() else {
            return self.source.fetch(&id).await;
        };

        if let Some(record) = self.lookup(store, &id).await {
            return Ok(record);
        }

        let record = self.source.fetch(&id).await?;

        match store.insert(&record).await {
            Ok(true) => {}
            Ok(false) => tracing::debug!(id = %record.id, "Paper already stored by a concurrent fetch"),
            Err(e) => tracing::warn!(id = %record.id, error = %e, "Paper store write failed"),
        }

        Ok(record)
    }
}

impl std::fmt::Debug for CachedPaperFetcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CachedPaperFetcher").field("store", &self.store_backend()).finish()
    }
}
