use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::blog::application::ports::outgoing::blog_post_repository::BlogPostResult;

#[derive(Debug, Clone, thiserror::Error)]
pub enum BlogPostQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

#[async_trait]
pub trait BlogPostQuery: Send + Sync {
    /// Newest first.
    async fn list_posts(&self) -> Result<Vec<BlogPostResult>, BlogPostQueryError>;

    async fn find_by_id(&self, post_id: Uuid) -> Result<Option<BlogPostResult>, BlogPostQueryError>;
}
