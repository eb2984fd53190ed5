use async_trait::async_trait;

use crate::modules::content::application::domain::entities::Certification;
use crate::shared::validation::FieldError;

#[derive(Debug, Clone, thiserror::Error)]
pub enum CertificationsError {
    #[error("Certification not found")]
    NotFound,

    #[error(transparent)]
    Validation(#[from] FieldError),

    #[error("repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CertificationsUseCase: Send + Sync {
    /// Stores the certification under a fresh id.
    async fn add(&self, certification: Certification) -> Result<Certification, CertificationsError>;

    async fn update(
        &self,
        id: &str,
        certification: Certification,
    ) -> Result<Certification, CertificationsError>;

    async fn remove(&self, id: &str) -> Result<(), CertificationsError>;
}
