use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{sea_query::OnConflict, DatabaseConnection, DbErr, EntityTrait, Set};
use serde_json::Value as JsonValue;
use std::sync::Arc;

use crate::modules::content::adapter::outgoing::sea_orm_entity::content_documents::{
    ActiveModel, Column, Entity,
};
use crate::modules::content::application::domain::document::ContentKey;
use crate::modules::content::application::ports::outgoing::{
    ContentRepository, ContentRepositoryError,
};

#[derive(Clone)]
pub struct ContentRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ContentRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ContentRepository for ContentRepositoryPostgres {
    async fn get_document(
        &self,
        key: ContentKey,
    ) -> Result<Option<JsonValue>, ContentRepositoryError> {
        let model = Entity::find_by_id(key.as_str().to_string())
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(model.map(|m| m.data))
    }

    async fn put_document(
        &self,
        key: ContentKey,
        data: JsonValue,
    ) -> Result<(), ContentRepositoryError> {
        let model = ActiveModel {
            key: Set(key.as_str().to_string()),
            data: Set(data),
            updated_at: Set(Utc::now().fixed_offset()),
        };

        Entity::insert(model)
            .on_conflict(
                OnConflict::column(Column::Key)
                    .update_columns([Column::Data, Column::UpdatedAt])
                    .to_owned(),
            )
            .exec_without_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(())
    }
}

fn map_db_err(e: DbErr) -> ContentRepositoryError {
    ContentRepositoryError::DatabaseError(e.to_string())
}
