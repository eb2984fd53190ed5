use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::blog::application::ports::outgoing::blog_post_repository::{
    BlogPostData, BlogPostResult,
};
use crate::shared::validation::FieldError;

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateBlogPostError {
    #[error("blog post not found")]
    NotFound,

    #[error(transparent)]
    Validation(#[from] FieldError),

    #[error("repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UpdateBlogPostUseCase: Send + Sync {
    async fn execute(
        &self,
        post_id: Uuid,
        data: BlogPostData,
    ) -> Result<BlogPostResult, UpdateBlogPostError>;
}
