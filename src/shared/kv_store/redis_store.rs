use async_trait::async_trait;
use deadpool_redis::{redis::AsyncCommands, Pool};
use std::sync::Arc;

use super::{KeyValueStore, KeyValueStoreError};

/// Redis-backed [`KeyValueStore`].
///
/// Keys are written as plain strings; TTLs map to `SET ... EX`, so Redis is
/// the only thing that cleans up expired lockout and submission records.
#[derive(Clone)]
pub struct RedisKeyValueStore {
    pool: Arc<Pool>,
}

impl RedisKeyValueStore {
    pub fn new(pool: Arc<Pool>) -> Self {
        Self { pool }
    }

    async fn get_conn(&self) -> Result<deadpool_redis::Connection, KeyValueStoreError> {
        self.pool
            .get()
            .await
            .map_err(|e| KeyValueStoreError::Unavailable(format!("Pool error: {}", e)))
    }
}

#[async_trait]
impl KeyValueStore for RedisKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>, KeyValueStoreError> {
        let mut conn = self.get_conn().await?;

        let value: Option<String> = conn
            .get(key)
            .await
            .map_err(|e| KeyValueStoreError::OperationFailed(e.to_string()))?;

        Ok(value)
    }

    async fn set(
        &self,
        key: &str,
        value: &str,
        ttl_seconds: Option<u64>,
    ) -> Result<(), KeyValueStoreError> {
        let mut conn = self.get_conn().await?;

        let result: Result<(), _> = match ttl_seconds {
            Some(ttl) => conn.set_ex(key, value, ttl.max(1)).await,
            None => conn.set(key, value).await,
        };

        result.map_err(|e| KeyValueStoreError::OperationFailed(e.to_string()))
    }

    async fn delete(&self, key: &str) -> Result<(), KeyValueStoreError> {
        let mut conn = self.get_conn().await?;

        let _: () = conn
            .del(key)
            .await
            .map_err(|e| KeyValueStoreError::OperationFailed(e.to_string()))?;

        Ok(())
    }

    async fn ping(&self) -> Result<(), KeyValueStoreError> {
        let mut conn = self.get_conn().await?;

        deadpool_redis::redis::cmd("PING")
            .query_async::<String>(&mut *conn)
            .await
            .map(|_| ())
            .map_err(|e| KeyValueStoreError::Unavailable(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use deadpool_redis::{Config, Runtime};

    fn unreachable_store() -> RedisKeyValueStore {
        // Nothing listens on port 1; pool creation is lazy so this succeeds.
        let pool = Config::from_url("redis://127.0.0.1:1")
            .create_pool(Some(Runtime::Tokio1))
            .unwrap();
        RedisKeyValueStore::new(Arc::new(pool))
    }

    #[tokio::test]
    async fn unreachable_redis_reports_unavailable() {
        let store = unreachable_store();

        let result = store.get("anything").await;

        assert!(
            matches!(result, Err(KeyValueStoreError::Unavailable(_))),
            "Expected Unavailable, got {:?}",
            result
        );
    }

    #[tokio::test]
    async fn ping_fails_without_server() {
        let store = unreachable_store();

        assert!(store.ping().await.is_err());
    }

    #[test]
    fn store_is_cloneable() {
        let store = unreachable_store();
        let _clone = store.clone();
    }
}
