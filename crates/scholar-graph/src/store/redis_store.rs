//! Shared store backed by Redis.

use async_trait::async_trait;
use redis::AsyncCommands;
use redis::aio::ConnectionManager;

use super::PaperStore;
use crate::error::StoreResult;
use crate::models::PaperRecord;

/// Redis paper store.
///
/// One multiplexed connection is opened at startup and cloned per call.
/// Records are JSON strings under `{prefix}:{id}`.
#[derive(Clone)]
pub struct RedisStore {
    connection: ConnectionManager,
    key_prefix: String,
}

impl RedisStore {
    /// Connect to Redis.
    ///
    /// # Errors
    ///
    /// Returns error if the URL is invalid or the server is unreachable.
    pub async fn connect(url: &str, key_prefix: String) -> StoreResult<Self> {
        let client = redis::Client::open(url)?;
        let connection = ConnectionManager::new(client).await?;
        tracing::info!(prefix = %key_prefix, "Connected to Redis paper store");
        Ok(Self { connection, key_prefix })
    }

    fn key(&self, id: &str) -> String {
        format!("{}:{}", self.key_prefix, id)
    }
}

#[async_trait]
impl PaperStore for RedisStore {
    async fn get(&self, id: &str) -> StoreResult<Option<PaperRecord>> {
        let mut conn = self.connection.clone();
        let value: Option<String> = conn.get(self.key(id)).await?;

        match value {
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
            None => Ok(None),
        }
    }

    async fn insert(&self, record: &PaperRecord) -> StoreResult<bool> {
        let json = serde_json::to_string(record)?;
        let mut conn = self.connection.clone();

        // SET NX replies nil when the key already exists.
        let reply: Option<String> = redis::cmd("SET")
            .arg(self.key(&record.id))
            .arg(json)
            .arg("NX")
            .query_async(&mut conn)
            .await?;

        Ok(reply.is_some())
    }

    fn backend(&self) -> &'static str {
        "redis"
    }
}

impl std::fmt::Debug for RedisStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisStore").field("key_prefix", &self.key_prefix).finish()
    }
}
