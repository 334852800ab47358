use std::env;

/// Default SQLite database the service opens when `TELLER_DATABASE_URL` is
/// not set. Created on first start if missing.
pub const DEFAULT_DATABASE_URL: &str = "sqlite:teller.db";

/// Default listen address.
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

/// Default access-token lifetime.
pub const DEFAULT_TOKEN_TTL_SECS: i64 = 86_400;

/// Runtime configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub bind_addr: String,
    pub jwt_secret: String,
    pub token_ttl_secs: i64,
}

impl Config {
    /// Reads configuration from `TELLER_*` environment variables, falling
    /// back to the defaults above. The JWT secret has a development-only
    /// fallback; deployments must set `TELLER_JWT_SECRET`.
    pub fn from_env() -> Self {
        Self {
            database_url: env::var("TELLER_DATABASE_URL")
                .unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_owned()),
            bind_addr: env::var("TELLER_BIND").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_owned()),
            jwt_secret: env::var("TELLER_JWT_SECRET")
                .unwrap_or_else(|_| "teller-dev-secret".to_owned()),
            token_ttl_secs: env::var("TELLER_TOKEN_TTL_SECS")
                .ok()
                .and_then(|value| value.parse().ok())
                .unwrap_or(DEFAULT_TOKEN_TTL_SECS),
        }
    }
}
