use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteBlogPostError {
    #[error("blog post not found")]
    NotFound,

    #[error("repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait DeleteBlogPostUseCase: Send + Sync {
    async fn execute(&self, post_id: Uuid) -> Result<(), DeleteBlogPostError>;
}
