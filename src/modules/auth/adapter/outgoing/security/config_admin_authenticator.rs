use async_trait::async_trait;
use std::sync::Arc;

use crate::auth::application::domain::entities::AdminIdentity;
use crate::auth::application::ports::outgoing::{
    AdminAuthenticator, AuthenticatorError, PasswordHasher,
};

/// Authenticates the single site owner configured through
/// `ADMIN_EMAIL` / `ADMIN_PASSWORD_HASH`.
#[derive(Clone)]
pub struct ConfigAdminAuthenticator {
    email: String,
    password_hash: String,
    hasher: Arc<dyn PasswordHasher>,
}

impl ConfigAdminAuthenticator {
    pub fn new(email: String, password_hash: String, hasher: Arc<dyn PasswordHasher>) -> Self {
        Self {
            email: email.trim().to_lowercase(),
            password_hash,
            hasher,
        }
    }
}

#[async_trait]
impl AdminAuthenticator for ConfigAdminAuthenticator {
    async fn authenticate(
        &self,
        email: &str,
        password: &str,
    ) -> Result<AdminIdentity, AuthenticatorError> {
        // Verify even on an email mismatch so both failures cost the same.
        let password_ok = self
            .hasher
            .verify_password(password, &self.password_hash)
            .await
            .map_err(|e| AuthenticatorError::Unavailable(e.to_string()))?;

        if password_ok && email.trim().eq_ignore_ascii_case(&self.email) {
            Ok(AdminIdentity {
                email: self.email.clone(),
            })
        } else {
            Err(AuthenticatorError::InvalidCredentials)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::ports::outgoing::HashError;
    use mockall::mock;

    mock! {
        Hasher {}

        #[async_trait]
        impl PasswordHasher for Hasher {
            async fn hash_password(&self, password: &str) -> Result<String, HashError>;
            async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError>;
        }
    }

    fn authenticator(hasher: MockHasher) -> ConfigAdminAuthenticator {
        ConfigAdminAuthenticator::new(
            "Admin@Example.com".to_string(),
            "$argon2id$stored".to_string(),
            Arc::new(hasher),
        )
    }

    #[tokio::test]
    async fn accepts_matching_email_and_password() {
        let mut hasher = MockHasher::new();
        hasher
            .expect_verify_password()
            .withf(|password, hash| {
                password.to_string() == "secret" && hash.to_string() == "$argon2id$stored"
            })
            .times(1)
            .returning(|_, _| Ok(true));

        let identity = authenticator(hasher)
            .authenticate("admin@example.com", "secret")
            .await
            .unwrap();

        assert_eq!(identity.email, "admin@example.com");
    }

    #[tokio::test]
    async fn wrong_password_is_invalid_credentials() {
        let mut hasher = MockHasher::new();
        hasher
            .expect_verify_password()
            .times(1)
            .returning(|_, _| Ok(false));

        let result = authenticator(hasher)
            .authenticate("admin@example.com", "nope")
            .await;

        assert!(matches!(result, Err(AuthenticatorError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn unknown_email_still_verifies_and_fails() {
        let mut hasher = MockHasher::new();
        hasher
            .expect_verify_password()
            .times(1)
            .returning(|_, _| Ok(true));

        let result = authenticator(hasher)
            .authenticate("intruder@example.com", "secret")
            .await;

        assert!(matches!(result, Err(AuthenticatorError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn hasher_failure_is_unavailable() {
        let mut hasher = MockHasher::new();
        hasher
            .expect_verify_password()
            .returning(|_, _| Err(HashError::VerifyFailed));

        let result = authenticator(hasher)
            .authenticate("admin@example.com", "secret")
            .await;

        assert!(matches!(result, Err(AuthenticatorError::Unavailable(_))));
    }
}
