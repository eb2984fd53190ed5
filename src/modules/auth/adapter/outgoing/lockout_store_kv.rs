use async_trait::async_trait;
use std::sync::Arc;

use crate::auth::application::domain::lockout::LockoutRecord;
use crate::auth::application::ports::outgoing::{LockoutStore, LockoutStoreError};
use crate::shared::kv_store::KeyValueStore;

/// Records outlive any lock by a comfortable margin and then expire on
/// their own.
const RECORD_TTL_SECONDS: u64 = 24 * 60 * 60;

/// [`LockoutStore`] on top of the shared key-value store.
///
/// ```text
/// auth:lockout:{client} -> {"attempts":2,"lockUntil":null}
/// ```
#[derive(Clone)]
pub struct KvLockoutStore {
    store: Arc<dyn KeyValueStore>,
}

impl KvLockoutStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    fn key(client: &str) -> String {
        format!("auth:lockout:{client}")
    }
}

#[async_trait]
impl LockoutStore for KvLockoutStore {
    async fn load(&self, client: &str) -> Result<LockoutRecord, LockoutStoreError> {
        let raw = self
            .store
            .get(&Self::key(client))
            .await
            .map_err(|e| LockoutStoreError::StoreError(e.to_string()))?;

        match raw {
            None => Ok(LockoutRecord::default()),
            Some(raw) => match serde_json::from_str(&raw) {
                Ok(record) => Ok(record),
                Err(e) => {
                    // Unreadable records are treated as absent.
                    tracing::warn!(client, error = %e, "Discarding corrupt lockout record");
                    Ok(LockoutRecord::default())
                }
            },
        }
    }

    async fn save(&self, client: &str, record: &LockoutRecord) -> Result<(), LockoutStoreError> {
        let raw = serde_json::to_string(record)
            .map_err(|e| LockoutStoreError::StoreError(e.to_string()))?;

        self.store
            .set(&Self::key(client), &raw, Some(RECORD_TTL_SECONDS))
            .await
            .map_err(|e| LockoutStoreError::StoreError(e.to_string()))
    }

    async fn clear(&self, client: &str) -> Result<(), LockoutStoreError> {
        self.store
            .delete(&Self::key(client))
            .await
            .map_err(|e| LockoutStoreError::StoreError(e.to_string()))
    }
}
