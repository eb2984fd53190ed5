use async_trait::async_trait;

use crate::modules::portfolio::application::domain::PublicPortfolio;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetPublicPortfolioError {
    #[error("Failed to load {section}: {message}")]
    SectionUnavailable {
        section: &'static str,
        message: String,
    },
}

#[async_trait]
pub trait GetPublicPortfolioUseCase: Send + Sync {
    async fn execute(&self) -> Result<PublicPortfolio, GetPublicPortfolioError>;
}
