use async_trait::async_trait;

use crate::modules::content::application::domain::entities::{ExperienceEntry, ExperienceList};
use crate::shared::validation::FieldError;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ExperienceEntriesError {
    #[error("No experience entry at index {0}")]
    IndexOutOfRange(usize),

    #[error(transparent)]
    Validation(#[from] FieldError),

    #[error("repository error: {0}")]
    RepositoryError(String),
}

/// Entry-level edits of the experience list. Each returns the list as stored.
#[async_trait]
pub trait ExperienceEntriesUseCase: Send + Sync {
    async fn add(&self, entry: ExperienceEntry) -> Result<ExperienceList, ExperienceEntriesError>;

    async fn update(
        &self,
        index: usize,
        entry: ExperienceEntry,
    ) -> Result<ExperienceList, ExperienceEntriesError>;

    async fn remove(&self, index: usize) -> Result<ExperienceList, ExperienceEntriesError>;
}
