use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::modules::message::application::domain::message::{Message, NewMessage};

#[derive(Debug, Clone, thiserror::Error)]
pub enum MessageRepositoryError {
    #[error("Message not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait MessageRepository: Send + Sync {
    async fn create_message(&self, message: NewMessage) -> Result<Message, MessageRepositoryError>;

    /// All messages, newest first.
    async fn list_messages(&self) -> Result<Vec<Message>, MessageRepositoryError>;

    /// Unread messages, newest first.
    async fn list_unread(&self) -> Result<Vec<Message>, MessageRepositoryError>;

    /// `Some(at)` marks the message read at `at`, `None` marks it unread.
    /// Only this message's `read` and `readAt` change.
    async fn set_read_state(
        &self,
        message_id: Uuid,
        read_at: Option<DateTime<Utc>>,
    ) -> Result<Message, MessageRepositoryError>;

    async fn delete_message(&self, message_id: Uuid) -> Result<(), MessageRepositoryError>;
}
