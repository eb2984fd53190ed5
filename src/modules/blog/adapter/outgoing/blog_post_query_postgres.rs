use async_trait::async_trait;
use sea_orm::{DatabaseConnection, DbErr, EntityTrait, QueryOrder};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::blog::adapter::outgoing::sea_orm_entity::blog_posts::{Column, Entity};
use crate::modules::blog::application::ports::outgoing::blog_post_query::{
    BlogPostQuery, BlogPostQueryError,
};
use crate::modules::blog::application::ports::outgoing::blog_post_repository::BlogPostResult;

#[derive(Clone)]
pub struct BlogPostQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl BlogPostQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_err(e: DbErr) -> BlogPostQueryError {
    BlogPostQueryError::DatabaseError(e.to_string())
}

#[async_trait]
impl BlogPostQuery for BlogPostQueryPostgres {
    async fn list_posts(&self) -> Result<Vec<BlogPostResult>, BlogPostQueryError> {
        Entity::find()
            .order_by_desc(Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?
            .into_iter()
            .map(|m| {
                m.to_repository_result()
                    .map_err(|e| BlogPostQueryError::SerializationError(e.to_string()))
            })
            .collect()
    }

    async fn find_by_id(
        &self,
        post_id: Uuid,
    ) -> Result<Option<BlogPostResult>, BlogPostQueryError> {
        let Some(model) = Entity::find_by_id(post_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
        else {
            return Ok(None);
        };

        model
            .to_repository_result()
            .map(Some)
            .map_err(|e| BlogPostQueryError::SerializationError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::blog::adapter::outgoing::sea_orm_entity::blog_posts;
    use chrono::Utc;
    use sea_orm::{DatabaseBackend, MockDatabase};

    fn model(title: &str, tags: serde_json::Value) -> blog_posts::Model {
        let now = Utc::now().fixed_offset();
        blog_posts::Model {
            id: Uuid::new_v4(),
            title: title.to_string(),
            content: String::new(),
            tags,
            image: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn test_list_posts() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![
                model("first", serde_json::json!(["a"])),
                model("second", serde_json::json!([])),
            ]])
            .into_connection();

        let query = BlogPostQueryPostgres::new(Arc::new(db));
        let posts = query.list_posts().await.unwrap();

        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].tags, vec!["a".to_string()]);
    }

    #[tokio::test]
    async fn test_list_posts_corrupt_tags() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model("bad", serde_json::json!("rust"))]])
            .into_connection();

        let query = BlogPostQueryPostgres::new(Arc::new(db));

        assert!(matches!(
            query.list_posts().await,
            Err(BlogPostQueryError::SerializationError(_))
        ));
    }

    #[tokio::test]
    async fn test_find_by_id() {
        let row = model("found", serde_json::json!([]));
        let id = row.id;
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![row], Vec::<blog_posts::Model>::new()])
            .into_connection();

        let query = BlogPostQueryPostgres::new(Arc::new(db));

        assert_eq!(query.find_by_id(id).await.unwrap().unwrap().title, "found");
        assert!(query.find_by_id(Uuid::new_v4()).await.unwrap().is_none());
    }
}
