use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::blog::adapter::outgoing::sea_orm_entity::blog_posts::{
    ActiveModel, Column, Entity,
};
use crate::modules::blog::application::ports::outgoing::blog_post_repository::{
    BlogPostData, BlogPostRepository, BlogPostRepositoryError, BlogPostResult,
};

#[derive(Clone)]
pub struct BlogPostRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl BlogPostRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_err(e: DbErr) -> BlogPostRepositoryError {
    BlogPostRepositoryError::DatabaseError(e.to_string())
}

fn tags_json(tags: &[String]) -> Result<serde_json::Value, BlogPostRepositoryError> {
    serde_json::to_value(tags)
        .map_err(|e| BlogPostRepositoryError::SerializationError(e.to_string()))
}

#[async_trait]
impl BlogPostRepository for BlogPostRepositoryPostgres {
    async fn create_post(
        &self,
        data: BlogPostData,
    ) -> Result<BlogPostResult, BlogPostRepositoryError> {
        let now = Utc::now().fixed_offset();

        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            title: Set(data.title),
            content: Set(data.content),
            tags: Set(tags_json(&data.tags)?),
            image: Set(data.image),
            created_at: Set(now),
            updated_at: Set(now),
        };

        model
            .insert(&*self.db)
            .await
            .map_err(map_db_err)?
            .to_repository_result()
    }

    async fn update_post(
        &self,
        post_id: Uuid,
        data: BlogPostData,
    ) -> Result<BlogPostResult, BlogPostRepositoryError> {
        let model = ActiveModel {
            title: Set(data.title),
            content: Set(data.content),
            tags: Set(tags_json(&data.tags)?),
            image: Set(data.image),
            updated_at: Set(Utc::now().fixed_offset()),
            ..Default::default()
        };

        Entity::update_many()
            .set(model)
            .filter(Column::Id.eq(post_id))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?
            .into_iter()
            .next()
            .ok_or(BlogPostRepositoryError::NotFound)?
            .to_repository_result()
    }

    async fn delete_post(&self, post_id: Uuid) -> Result<(), BlogPostRepositoryError> {
        let result = Entity::delete_by_id(post_id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        match result.rows_affected {
            0 => Err(BlogPostRepositoryError::NotFound),
            _ => Ok(()),
        }
    }
}
