use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::message::application::domain::message::Message;

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateReadStateError {
    #[error("Message not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UpdateReadStateUseCase: Send + Sync {
    async fn mark_read(&self, message_id: Uuid) -> Result<Message, UpdateReadStateError>;

    async fn mark_unread(&self, message_id: Uuid) -> Result<Message, UpdateReadStateError>;
}
