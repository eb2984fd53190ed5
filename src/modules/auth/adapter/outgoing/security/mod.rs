pub mod argon2_hasher;
pub mod config_admin_authenticator;

pub use argon2_hasher::Argon2Hasher;
pub use config_admin_authenticator::ConfigAdminAuthenticator;
