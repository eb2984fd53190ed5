use actix_web::web;
use chrono::Utc;
use std::sync::Arc;

use crate::auth::application::ports::outgoing::token_provider::{
    TokenClaims, TokenError, TokenProvider,
};

/// Accepts any token as the given admin, or rejects every token.
pub struct StubTokenProvider {
    subject: Option<String>,
}

impl StubTokenProvider {
    pub fn valid(email: &str) -> Self {
        Self {
            subject: Some(email.to_string()),
        }
    }

    pub fn rejecting() -> Self {
        Self { subject: None }
    }
}

impl TokenProvider for StubTokenProvider {
    fn generate_access_token(&self, subject: &str) -> Result<String, TokenError> {
        Ok(format!("token-for-{}", subject))
    }

    fn verify_token(&self, _token: &str) -> Result<TokenClaims, TokenError> {
        let subject = self.subject.clone().ok_or(TokenError::InvalidSignature)?;
        let now = Utc::now().timestamp();

        Ok(TokenClaims {
            sub: subject,
            exp: now + 1800,
            iat: now,
            nbf: now,
            iss: "portfolio".to_string(),
            token_type: "access".to_string(),
        })
    }

    fn access_token_ttl_seconds(&self) -> i64 {
        1800
    }
}

pub fn token_provider_data(
    provider: StubTokenProvider,
) -> web::Data<Arc<dyn TokenProvider + Send + Sync>> {
    let provider: Arc<dyn TokenProvider + Send + Sync> = Arc::new(provider);
    web::Data::new(provider)
}

/// Token provider data for the default admin used across handler tests.
pub fn admin_token_provider() -> web::Data<Arc<dyn TokenProvider + Send + Sync>> {
    token_provider_data(StubTokenProvider::valid("owner@example.com"))
}

pub fn bearer() -> (&'static str, &'static str) {
    ("Authorization", "Bearer test-token")
}
