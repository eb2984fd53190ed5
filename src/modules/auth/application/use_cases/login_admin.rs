use async_trait::async_trait;
use email_address::EmailAddress;
use serde::Serialize;
use std::sync::Arc;
use tracing::{info, warn};

use crate::auth::application::domain::lockout::{
    parse_rate_limit_wait, seconds_until, LockoutRecord, LockoutState,
};
use crate::auth::application::ports::outgoing::{
    AdminAuthenticator, AuthenticatorError, LockoutStore, TokenProvider,
};
use crate::shared::clock::Clock;
use crate::shared::keyed_mutex::KeyedMutex;

// ========================= Login Request =========================
/// Validated login request
#[derive(Debug, Clone)]
pub struct LoginRequest {
    email: String,    // Private - guaranteed valid
    password: String, // Private - guaranteed non-empty
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoginRequestError {
    #[error("Email cannot be empty")]
    EmptyEmail,
    #[error("Invalid email format")]
    InvalidEmailFormat,
    #[error("Password cannot be empty")]
    EmptyPassword,
}

impl LoginRequest {
    pub fn new(email: String, password: String) -> Result<Self, LoginRequestError> {
        let email = email.trim();

        if email.is_empty() {
            return Err(LoginRequestError::EmptyEmail);
        }

        if !EmailAddress::is_valid(email) {
            return Err(LoginRequestError::InvalidEmailFormat);
        }

        if password.trim().is_empty() {
            return Err(LoginRequestError::EmptyPassword);
        }

        Ok(Self {
            email: email.to_lowercase(),
            password,
        })
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

// ====================== Login Error =============================
#[derive(Debug, Clone, thiserror::Error)]
pub enum LoginError {
    #[error("Invalid email or password")]
    InvalidCredentials { remaining_attempts: u32 },

    #[error("Too many login attempts. Try again in {retry_after_secs} seconds")]
    Locked { retry_after_secs: i64 },

    #[error("Authentication backend unavailable: {0}")]
    BackendUnavailable(String),

    #[error("Lockout store error: {0}")]
    StoreError(String),

    #[error("Token generation failed: {0}")]
    TokenGenerationFailed(String),
}

// ============================ Login Response =================================
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginAdminResponse {
    pub access_token: String,
    pub expires_in: i64,
    pub email: String,
}

// ============================ Login Admin Use Case =============================
#[async_trait]
pub trait ILoginAdminUseCase: Send + Sync {
    /// `client` identifies whose lockout record applies.
    async fn execute(
        &self,
        client: &str,
        request: LoginRequest,
    ) -> Result<LoginAdminResponse, LoginError>;
}

/// Login gate: lockout check, credential check, then record bookkeeping.
///
/// Every submission loads, updates and persists the lockout record while
/// holding the client's lock in `client_locks`, so concurrent submissions from
/// one client never work from a stale copy. Other clients are not held up.
#[derive(Clone)]
pub struct LoginAdminUseCase<S>
where
    S: LockoutStore,
{
    lockout_store: S,
    authenticator: Arc<dyn AdminAuthenticator>,
    token_provider: Arc<dyn TokenProvider + Send + Sync>,
    clock: Arc<dyn Clock>,
    client_locks: Arc<KeyedMutex>,
}

impl<S> LoginAdminUseCase<S>
where
    S: LockoutStore,
{
    pub fn new(
        lockout_store: S,
        authenticator: Arc<dyn AdminAuthenticator>,
        token_provider: Arc<dyn TokenProvider + Send + Sync>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            lockout_store,
            authenticator,
            token_provider,
            clock,
            client_locks: Arc::new(KeyedMutex::new()),
        }
    }

    async fn save(&self, client: &str, record: &LockoutRecord) -> Result<(), LoginError> {
        self.lockout_store
            .save(client, record)
            .await
            .map_err(|e| LoginError::StoreError(e.to_string()))
    }
}

#[async_trait]
impl<S> ILoginAdminUseCase for LoginAdminUseCase<S>
where
    S: LockoutStore,
{
    async fn execute(
        &self,
        client: &str,
        request: LoginRequest,
    ) -> Result<LoginAdminResponse, LoginError> {
        let _guard = self.client_locks.lock(client).await;
        let now = self.clock.now();

        let record = self
            .lockout_store
            .load(client)
            .await
            .map_err(|e| LoginError::StoreError(e.to_string()))?;

        // 1️⃣ Locked clients never reach the credential check
        if let LockoutState::Locked { until } = record.state_at(now) {
            let retry_after_secs = seconds_until(until, now);
            warn!(client, retry_after_secs, "Login rejected: client is locked out");
            return Err(LoginError::Locked { retry_after_secs });
        }
        let record = record.refreshed(now);

        // 2️⃣ Credential check
        match self
            .authenticator
            .authenticate(request.email(), request.password())
            .await
        {
            Ok(identity) => {
                self.lockout_store
                    .clear(client)
                    .await
                    .map_err(|e| LoginError::StoreError(e.to_string()))?;

                let access_token = self
                    .token_provider
                    .generate_access_token(&identity.email)
                    .map_err(|e| LoginError::TokenGenerationFailed(e.to_string()))?;

                info!(email = %identity.email, "Admin logged in");

                Ok(LoginAdminResponse {
                    access_token,
                    expires_in: self.token_provider.access_token_ttl_seconds(),
                    email: identity.email,
                })
            }

            Err(AuthenticatorError::InvalidCredentials) => {
                let record = record.record_failure(now);
                self.save(client, &record).await?;

                match record.state_at(now) {
                    LockoutState::Locked { until } => {
                        warn!(client, "Too many failed logins, client locked out");
                        Err(LoginError::Locked {
                            retry_after_secs: seconds_until(until, now),
                        })
                    }
                    LockoutState::Normal { .. } => {
                        info!(client, attempts = record.attempts, "Failed login attempt");
                        Err(LoginError::InvalidCredentials {
                            remaining_attempts: record.remaining_attempts(now),
                        })
                    }
                }
            }

            Err(AuthenticatorError::RateLimited(message)) => {
                let wait = parse_rate_limit_wait(&message);
                let record = LockoutRecord::locked_for(now, wait);
                self.save(client, &record).await?;

                warn!(client, wait, "Auth backend rate-limited the login");
                Err(LoginError::Locked {
                    retry_after_secs: wait,
                })
            }

            Err(AuthenticatorError::Unavailable(msg)) => Err(LoginError::BackendUnavailable(msg)),
        }
    }
}
