use async_trait::async_trait;

use crate::modules::blog::application::ports::outgoing::blog_post_repository::BlogPostResult;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetBlogPostsError {
    #[error("repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetBlogPostsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<BlogPostResult>, GetBlogPostsError>;
}
