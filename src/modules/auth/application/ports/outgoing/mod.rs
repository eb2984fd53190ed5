pub mod admin_authenticator;
pub mod lockout_store;
pub mod password_hasher;
pub mod token_provider;

pub use admin_authenticator::{AdminAuthenticator, AuthenticatorError};
pub use lockout_store::{LockoutStore, LockoutStoreError};
pub use password_hasher::{HashError, PasswordHasher};
pub use token_provider::{TokenClaims, TokenError, TokenProvider};
