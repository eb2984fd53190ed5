use async_trait::async_trait;

use crate::modules::message::application::domain::message::Message;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetMessagesError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetMessagesUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<Message>, GetMessagesError>;
}
