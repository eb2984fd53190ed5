use std::env;
use std::net::IpAddr;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("Invalid {key} value: {reason}")]
    Invalid {
        key: &'static str,
        reason: String,
    },
}

/// Runtime settings read from the environment.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    /// `None` selects the in-memory key-value store
    pub redis_url: Option<String>,
    pub admin_email: String,
    pub admin_password_hash: String,
    /// Peers allowed to supply the client address via forwarding headers
    pub trusted_proxies: Vec<IpAddr>,
}

impl AppConfig {
    /// Load `.env.{RUST_ENV}` (falling back to `.env`) and read the settings.
    pub fn from_env() -> Result<Self, ConfigError> {
        let environment = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
        let env_file = format!(".env.{}", environment);
        if dotenvy::from_filename(&env_file).is_err() {
            dotenvy::dotenv().ok();
        }

        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &'static str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .ok_or(ConfigError::Missing(key))
        };

        let port = match lookup("PORT") {
            Some(raw) => raw.parse::<u16>().map_err(|e| ConfigError::Invalid {
                key: "PORT",
                reason: e.to_string(),
            })?,
            None => 8080,
        };

        let admin_email = required("ADMIN_EMAIL")?.trim().to_lowercase();
        if !email_address::EmailAddress::is_valid(&admin_email) {
            return Err(ConfigError::Invalid {
                key: "ADMIN_EMAIL",
                reason: "not a valid email address".to_string(),
            });
        }

        let admin_password_hash = required("ADMIN_PASSWORD_HASH")?;
        if !admin_password_hash.starts_with("$argon2") {
            return Err(ConfigError::Invalid {
                key: "ADMIN_PASSWORD_HASH",
                reason: "expected an argon2 PHC string".to_string(),
            });
        }

        let trusted_proxies = lookup("TRUSTED_PROXIES")
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|ip| !ip.is_empty())
            .map(|ip| {
                ip.parse::<IpAddr>().map_err(|e| ConfigError::Invalid {
                    key: "TRUSTED_PROXIES",
                    reason: format!("{ip}: {e}"),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            host: lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port,
            redis_url: lookup("REDIS_URL").filter(|v| !v.trim().is_empty()),
            admin_email,
            admin_password_hash,
            trusted_proxies,
        })
    }

    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
