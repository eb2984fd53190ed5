use async_trait::async_trait;

use crate::modules::content::application::domain::document::ContentDocument;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetContentError {
    #[error("repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetContentUseCase<T: ContentDocument>: Send + Sync {
    async fn execute(&self) -> Result<T, GetContentError>;
}
