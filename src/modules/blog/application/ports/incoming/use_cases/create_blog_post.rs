use async_trait::async_trait;

use crate::modules::blog::application::ports::outgoing::blog_post_repository::{
    BlogPostData, BlogPostResult,
};
use crate::shared::validation::FieldError;

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateBlogPostError {
    #[error(transparent)]
    Validation(#[from] FieldError),

    #[error("repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreateBlogPostUseCase: Send + Sync {
    async fn execute(&self, data: BlogPostData) -> Result<BlogPostResult, CreateBlogPostError>;
}
