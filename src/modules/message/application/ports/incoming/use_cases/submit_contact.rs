use async_trait::async_trait;

use crate::modules::message::application::domain::contact::{ContactForm, ContactRejection};
use crate::modules::message::application::domain::message::Message;

#[derive(Debug, Clone, thiserror::Error)]
pub enum SubmitContactError {
    #[error(transparent)]
    Rejected(#[from] ContactRejection),

    #[error("Submission log unavailable: {0}")]
    StoreError(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait SubmitContactUseCase: Send + Sync {
    /// `client` identifies whose submission log is checked and extended.
    async fn execute(&self, client: &str, form: ContactForm) -> Result<Message, SubmitContactError>;
}
