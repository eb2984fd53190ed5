use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::blog::application::ports::incoming::use_cases::{
    GetBlogPostsError, GetBlogPostsUseCase, GetSingleBlogPostError, GetSingleBlogPostUseCase,
};
use crate::modules::blog::application::ports::outgoing::blog_post_query::BlogPostQuery;
use crate::modules::blog::application::ports::outgoing::blog_post_repository::BlogPostResult;

pub struct BlogPostQueryService<Q>
where
    Q: BlogPostQuery,
{
    query: Q,
}

impl<Q> BlogPostQueryService<Q>
where
    Q: BlogPostQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetBlogPostsUseCase for BlogPostQueryService<Q>
where
    Q: BlogPostQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<BlogPostResult>, GetBlogPostsError> {
        self.query
            .list_posts()
            .await
            .map_err(|e| GetBlogPostsError::RepositoryError(e.to_string()))
    }
}

#[async_trait]
impl<Q> GetSingleBlogPostUseCase for BlogPostQueryService<Q>
where
    Q: BlogPostQuery + Send + Sync,
{
    async fn execute(&self, post_id: Uuid) -> Result<BlogPostResult, GetSingleBlogPostError> {
        self.query
            .find_by_id(post_id)
            .await
            .map_err(|e| GetSingleBlogPostError::RepositoryError(e.to_string()))?
            .ok_or(GetSingleBlogPostError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::blog::application::ports::outgoing::BlogPostQueryError;

    struct StubQuery {
        posts: Vec<BlogPostResult>,
        fail: bool,
    }

    #[async_trait]
    impl BlogPostQuery for StubQuery {
        async fn list_posts(&self) -> Result<Vec<BlogPostResult>, BlogPostQueryError> {
            if self.fail {
                return Err(BlogPostQueryError::DatabaseError("down".to_string()));
            }
            Ok(self.posts.clone())
        }

        async fn find_by_id(
            &self,
            post_id: Uuid,
        ) -> Result<Option<BlogPostResult>, BlogPostQueryError> {
            Ok(self.posts.iter().find(|p| p.id == post_id).cloned())
        }
    }

    fn post(title: &str) -> BlogPostResult {
        BlogPostResult {
            id: Uuid::new_v4(),
            title: title.to_string(),
            content: String::new(),
            tags: vec![],
            image: None,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        }
    }

    #[tokio::test]
    async fn lists_posts() {
        let service = BlogPostQueryService::new(StubQuery {
            posts: vec![post("a"), post("b")],
            fail: false,
        });

        let posts = GetBlogPostsUseCase::execute(&service).await.unwrap();

        assert_eq!(posts.len(), 2);
    }

    #[tokio::test]
    async fn list_failure_is_repository_error() {
        let service = BlogPostQueryService::new(StubQuery {
            posts: vec![],
            fail: true,
        });

        assert!(matches!(
            GetBlogPostsUseCase::execute(&service).await,
            Err(GetBlogPostsError::RepositoryError(_))
        ));
    }

    #[tokio::test]
    async fn finds_single_post_or_not_found() {
        let wanted = post("wanted");
        let id = wanted.id;
        let service = BlogPostQueryService::new(StubQuery {
            posts: vec![post("other"), wanted],
            fail: false,
        });

        let found = GetSingleBlogPostUseCase::execute(&service, id).await.unwrap();
        assert_eq!(found.title, "wanted");

        assert!(matches!(
            GetSingleBlogPostUseCase::execute(&service, Uuid::new_v4()).await,
            Err(GetSingleBlogPostError::NotFound)
        ));
    }
}
