use async_trait::async_trait;

use crate::modules::message::application::domain::rate_limit::SubmissionLog;

#[derive(Debug, Clone, thiserror::Error)]
pub enum SubmissionLogStoreError {
    #[error("Submission log store error: {0}")]
    StoreError(String),
}

/// Per-client contact submission timestamps.
#[async_trait]
pub trait SubmissionLogStore: Send + Sync {
    async fn load(&self, client: &str) -> Result<SubmissionLog, SubmissionLogStoreError>;

    async fn save(&self, client: &str, log: &SubmissionLog)
        -> Result<(), SubmissionLogStoreError>;
}
