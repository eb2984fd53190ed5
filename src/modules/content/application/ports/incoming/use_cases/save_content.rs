use async_trait::async_trait;

use crate::modules::content::application::domain::document::ContentDocument;
use crate::shared::validation::FieldError;

#[derive(Debug, Clone, thiserror::Error)]
pub enum SaveContentError {
    #[error(transparent)]
    Validation(#[from] FieldError),

    #[error("repository error: {0}")]
    RepositoryError(String),
}

/// Replace the whole document and return what was stored.
#[async_trait]
pub trait SaveContentUseCase<T: ContentDocument>: Send + Sync {
    async fn execute(&self, document: T) -> Result<T, SaveContentError>;
}
