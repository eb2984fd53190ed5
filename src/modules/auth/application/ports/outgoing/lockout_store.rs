use async_trait::async_trait;

use crate::auth::application::domain::lockout::LockoutRecord;

#[derive(Debug, Clone, thiserror::Error)]
pub enum LockoutStoreError {
    #[error("Lockout store error: {0}")]
    StoreError(String),
}

#[async_trait]
pub trait LockoutStore: Send + Sync {
    /// Missing records load as `LockoutRecord::default()`.
    async fn load(&self, client: &str) -> Result<LockoutRecord, LockoutStoreError>;

    async fn save(&self, client: &str, record: &LockoutRecord) -> Result<(), LockoutStoreError>;

    async fn clear(&self, client: &str) -> Result<(), LockoutStoreError>;
}
