use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use crate::modules::blog::application::ports::incoming::use_cases::{
    CreateBlogPostError, CreateBlogPostUseCase, DeleteBlogPostError, DeleteBlogPostUseCase,
    UpdateBlogPostError, UpdateBlogPostUseCase,
};
use crate::modules::blog::application::ports::outgoing::blog_post_repository::{
    BlogPostData, BlogPostRepository, BlogPostRepositoryError, BlogPostResult,
};

/// Create, update and delete of `blog/*` in one service.
pub struct BlogPostCommandService<R>
where
    R: BlogPostRepository,
{
    repository: R,
}

impl<R> BlogPostCommandService<R>
where
    R: BlogPostRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> CreateBlogPostUseCase for BlogPostCommandService<R>
where
    R: BlogPostRepository + Send + Sync,
{
    async fn execute(&self, data: BlogPostData) -> Result<BlogPostResult, CreateBlogPostError> {
        let data = data.validated()?;

        let post = self.repository.create_post(data).await.map_err(|e| match e {
            BlogPostRepositoryError::DatabaseError(msg)
            | BlogPostRepositoryError::SerializationError(msg) => {
                CreateBlogPostError::RepositoryError(msg)
            }
            BlogPostRepositoryError::NotFound => CreateBlogPostError::RepositoryError(
                "unexpected not found while creating blog post".to_string(),
            ),
        })?;

        info!(post_id = %post.id, "Blog post created");
        Ok(post)
    }
}

#[async_trait]
impl<R> UpdateBlogPostUseCase for BlogPostCommandService<R>
where
    R: BlogPostRepository + Send + Sync,
{
    async fn execute(
        &self,
        post_id: Uuid,
        data: BlogPostData,
    ) -> Result<BlogPostResult, UpdateBlogPostError> {
        let data = data.validated()?;

        self.repository
            .update_post(post_id, data)
            .await
            .map_err(|e| match e {
                BlogPostRepositoryError::NotFound => UpdateBlogPostError::NotFound,
                BlogPostRepositoryError::DatabaseError(msg)
                | BlogPostRepositoryError::SerializationError(msg) => {
                    UpdateBlogPostError::RepositoryError(msg)
                }
            })
    }
}

#[async_trait]
impl<R> DeleteBlogPostUseCase for BlogPostCommandService<R>
where
    R: BlogPostRepository + Send + Sync,
{
    async fn execute(&self, post_id: Uuid) -> Result<(), DeleteBlogPostError> {
        self.repository
            .delete_post(post_id)
            .await
            .map_err(|e| match e {
                BlogPostRepositoryError::NotFound => DeleteBlogPostError::NotFound,
                BlogPostRepositoryError::DatabaseError(msg)
                | BlogPostRepositoryError::SerializationError(msg) => {
                    DeleteBlogPostError::RepositoryError(msg)
                }
            })?;

        info!(post_id = %post_id, "Blog post deleted");
        Ok(())
    }
}
