use async_trait::async_trait;
use serde_json::Value as JsonValue;

use crate::modules::content::application::domain::document::{ContentDocument, ContentKey};

#[derive(Debug, Clone, thiserror::Error)]
pub enum ContentRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// Whole-document reads and writes; last writer wins.
#[async_trait]
pub trait ContentRepository: Send + Sync {
    async fn get_document(
        &self,
        key: ContentKey,
    ) -> Result<Option<JsonValue>, ContentRepositoryError>;

    /// Insert or replace.
    async fn put_document(
        &self,
        key: ContentKey,
        data: JsonValue,
    ) -> Result<(), ContentRepositoryError>;
}

/// Typed read; a missing document is the empty default.
pub async fn load_document<T, R>(repository: &R) -> Result<T, ContentRepositoryError>
where
    T: ContentDocument,
    R: ContentRepository + ?Sized,
{
    match repository.get_document(T::KEY).await? {
        Some(value) => serde_json::from_value(value)
            .map_err(|e| ContentRepositoryError::SerializationError(e.to_string())),
        None => Ok(T::default()),
    }
}

pub async fn store_document<T, R>(
    repository: &R,
    document: &T,
) -> Result<(), ContentRepositoryError>
where
    T: ContentDocument,
    R: ContentRepository + ?Sized,
{
    let value = serde_json::to_value(document)
        .map_err(|e| ContentRepositoryError::SerializationError(e.to_string()))?;

    repository.put_document(T::KEY, value).await
}
