use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::message::adapter::outgoing::sea_orm_entity::messages::{
    ActiveModel, Column, Entity,
};
use crate::modules::message::application::domain::message::{Message, NewMessage};
use crate::modules::message::application::ports::outgoing::{
    MessageRepository, MessageRepositoryError,
};

#[derive(Clone)]
pub struct MessageRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl MessageRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_err(e: DbErr) -> MessageRepositoryError {
    MessageRepositoryError::DatabaseError(e.to_string())
}

#[async_trait]
impl MessageRepository for MessageRepositoryPostgres {
    async fn create_message(&self, message: NewMessage) -> Result<Message, MessageRepositoryError> {
        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(message.name),
            email: Set(message.email),
            message: Set(message.message),
            read: Set(false),
            read_at: Set(None),
            created_at: Set(message.created_at.fixed_offset()),
        };

        let saved = model.insert(&*self.db).await.map_err(map_db_err)?;
        Ok(saved.into())
    }

    async fn list_messages(&self) -> Result<Vec<Message>, MessageRepositoryError> {
        let rows = Entity::find()
            .order_by_desc(Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows.into_iter().map(Message::from).collect())
    }

    async fn list_unread(&self) -> Result<Vec<Message>, MessageRepositoryError> {
        let rows = Entity::find()
            .filter(Column::Read.eq(false))
            .order_by_desc(Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows.into_iter().map(Message::from).collect())
    }

    async fn set_read_state(
        &self,
        message_id: Uuid,
        read_at: Option<DateTime<Utc>>,
    ) -> Result<Message, MessageRepositoryError> {
        // Only the two read columns are set; the rest of the row is untouched.
        let model = ActiveModel {
            read: Set(read_at.is_some()),
            read_at: Set(read_at.map(|at| at.fixed_offset())),
            ..Default::default()
        };

        Entity::update_many()
            .set(model)
            .filter(Column::Id.eq(message_id))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?
            .into_iter()
            .next()
            .map(Message::from)
            .ok_or(MessageRepositoryError::NotFound)
    }

    async fn delete_message(&self, message_id: Uuid) -> Result<(), MessageRepositoryError> {
        let result = Entity::delete_by_id(message_id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(MessageRepositoryError::NotFound);
        }
        Ok(())
    }
}
