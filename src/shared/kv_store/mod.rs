//! Small key-value store used for per-client records that outlive a request
//! (login lockout, contact submission log).
//!
//! Production runs on Redis; the in-memory store serves development setups
//! without Redis and the test suite.

mod memory_store;
mod redis_store;

use async_trait::async_trait;

pub use memory_store::InMemoryKeyValueStore;
pub use redis_store::RedisKeyValueStore;

#[derive(Debug, Clone, thiserror::Error)]
pub enum KeyValueStoreError {
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    #[error("Store operation failed: {0}")]
    OperationFailed(String),
}

#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, KeyValueStoreError>;

    /// Store `value`; with `ttl_seconds` the key disappears on its own.
    async fn set(
        &self,
        key: &str,
        value: &str,
        ttl_seconds: Option<u64>,
    ) -> Result<(), KeyValueStoreError>;

    async fn delete(&self, key: &str) -> Result<(), KeyValueStoreError>;

    async fn ping(&self) -> Result<(), KeyValueStoreError>;
}
