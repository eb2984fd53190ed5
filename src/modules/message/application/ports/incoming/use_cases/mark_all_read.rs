use async_trait::async_trait;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkAllReadReport {
    pub succeeded: usize,
    pub failed: usize,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum MarkAllReadError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// One update per unread message. Not transactional: a partial failure
/// leaves some messages read and others unread.
#[async_trait]
pub trait MarkAllReadUseCase: Send + Sync {
    async fn execute(&self) -> Result<MarkAllReadReport, MarkAllReadError>;
}
