use async_trait::async_trait;
use std::marker::PhantomData;
use tracing::error;

use crate::modules::content::application::domain::document::ContentDocument;
use crate::modules::content::application::ports::incoming::use_cases::{
    GetContentError, GetContentUseCase, SaveContentError, SaveContentUseCase,
};
use crate::modules::content::application::ports::outgoing::content_repository::{
    load_document, store_document, ContentRepository,
};

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//

/// Get and replace for one singleton document type.
pub struct ContentDocumentService<R, T>
where
    R: ContentRepository,
{
    repository: R,
    _document: PhantomData<fn() -> T>,
}

impl<R, T> ContentDocumentService<R, T>
where
    R: ContentRepository,
{
    pub fn new(repository: R) -> Self {
        Self {
            repository,
            _document: PhantomData,
        }
    }
}

#[async_trait]
impl<R, T> GetContentUseCase<T> for ContentDocumentService<R, T>
where
    R: ContentRepository + Send + Sync,
    T: ContentDocument,
{
    async fn execute(&self) -> Result<T, GetContentError> {
        load_document::<T, _>(&self.repository).await.map_err(|e| {
            error!(document = %T::KEY, "Failed to load document: {}", e);
            GetContentError::RepositoryError(e.to_string())
        })
    }
}

#[async_trait]
impl<R, T> SaveContentUseCase<T> for ContentDocumentService<R, T>
where
    R: ContentRepository + Send + Sync,
    T: ContentDocument,
{
    async fn execute(&self, document: T) -> Result<T, SaveContentError> {
        let document = document.validate()?;

        store_document(&self.repository, &document)
            .await
            .map_err(|e| SaveContentError::RepositoryError(e.to_string()))?;

        Ok(document)
    }
}
