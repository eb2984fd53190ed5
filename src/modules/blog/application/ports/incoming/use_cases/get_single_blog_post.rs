use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::blog::application::ports::outgoing::blog_post_repository::BlogPostResult;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetSingleBlogPostError {
    #[error("blog post not found")]
    NotFound,

    #[error("repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetSingleBlogPostUseCase: Send + Sync {
    async fn execute(&self, post_id: Uuid) -> Result<BlogPostResult, GetSingleBlogPostError>;
}
