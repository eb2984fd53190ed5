use async_trait::async_trait;
use std::sync::Arc;
use tracing::warn;

use crate::modules::message::application::domain::rate_limit::SubmissionLog;
use crate::modules::message::application::ports::outgoing::{
    SubmissionLogStore, SubmissionLogStoreError,
};
use crate::shared::kv_store::KeyValueStore;

/// Nothing older than the day window is ever needed.
const LOG_TTL_SECONDS: u64 = 24 * 60 * 60;

/// ```text
/// contact:submissions:{client} -> ["2026-01-01T10:00:00Z", ...]
/// ```
#[derive(Clone)]
pub struct KvSubmissionLogStore {
    store: Arc<dyn KeyValueStore>,
}

impl KvSubmissionLogStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    fn key(client: &str) -> String {
        format!("contact:submissions:{client}")
    }
}

#[async_trait]
impl SubmissionLogStore for KvSubmissionLogStore {
    async fn load(&self, client: &str) -> Result<SubmissionLog, SubmissionLogStoreError> {
        let raw = self
            .store
            .get(&Self::key(client))
            .await
            .map_err(|e| SubmissionLogStoreError::StoreError(e.to_string()))?;

        let Some(raw) = raw else {
            return Ok(SubmissionLog::default());
        };

        match serde_json::from_str::<SubmissionLog>(&raw) {
            Ok(log) => Ok(SubmissionLog::new(log.timestamps().to_vec())),
            Err(e) => {
                warn!(client, error = %e, "Discarding corrupt contact submission log");
                Ok(SubmissionLog::default())
            }
        }
    }

    async fn save(
        &self,
        client: &str,
        log: &SubmissionLog,
    ) -> Result<(), SubmissionLogStoreError> {
        let raw = serde_json::to_string(log)
            .map_err(|e| SubmissionLogStoreError::StoreError(e.to_string()))?;

        self.store
            .set(&Self::key(client), &raw, Some(LOG_TTL_SECONDS))
            .await
            .map_err(|e| SubmissionLogStoreError::StoreError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::kv_store::InMemoryKeyValueStore;
    use chrono::{Duration, TimeZone, Utc};

    #[tokio::test]
    async fn round_trip_sorted() {
        let kv = Arc::new(InMemoryKeyValueStore::new());
        let logs = KvSubmissionLogStore::new(kv.clone());
        let t = Utc.with_ymd_and_hms(2026, 1, 1, 10, 0, 0).unwrap();

        kv.set(
            "contact:submissions:c",
            &serde_json::to_string(&vec![t + Duration::seconds(9), t]).unwrap(),
            None,
        )
        .await
        .unwrap();

        let log = logs.load("c").await.unwrap();
        assert_eq!(log.timestamps(), &[t, t + Duration::seconds(9)]);

        logs.save("other", &log).await.unwrap();
        assert_eq!(logs.load("other").await.unwrap(), log);
    }

    #[tokio::test]
    async fn corrupt_log_is_discarded() {
        let kv = Arc::new(InMemoryKeyValueStore::new());
        kv.set("contact:submissions:c", "not json", None).await.unwrap();

        let log = KvSubmissionLogStore::new(kv).load("c").await.unwrap();

        assert_eq!(log, SubmissionLog::default());
    }

    #[tokio::test]
    async fn missing_log_is_empty() {
        let logs = KvSubmissionLogStore::new(Arc::new(InMemoryKeyValueStore::new()));

        assert!(logs.load("nobody").await.unwrap().timestamps().is_empty());
    }
}
