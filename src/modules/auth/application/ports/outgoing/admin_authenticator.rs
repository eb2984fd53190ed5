use async_trait::async_trait;

use crate::auth::application::domain::entities::AdminIdentity;

#[derive(Debug, Clone, thiserror::Error)]
pub enum AuthenticatorError {
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// The backend throttled us; the message may carry "Try again in N seconds".
    #[error("{0}")]
    RateLimited(String),

    #[error("Authentication backend unavailable: {0}")]
    Unavailable(String),
}

/// Credential check against whatever holds the admin account.
#[async_trait]
pub trait AdminAuthenticator: Send + Sync {
    async fn authenticate(
        &self,
        email: &str,
        password: &str,
    ) -> Result<AdminIdentity, AuthenticatorError>;
}
