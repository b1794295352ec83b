//! Application settings from environment variables, with defaults.

use std::env;

/// Settings read once at startup. A `.env` file is honored when present
/// (loaded in main before this is constructed).
#[derive(Clone, Debug)]
pub struct AppConfig {
    /// sqlx connection string, e.g. `sqlite:person.db` or `sqlite::memory:`.
    pub database_url: String,
    pub host: String,
    pub port: u16,
    /// Connection pool size.
    pub max_connections: u32,
}

impl AppConfig {
    /// Load from `DATABASE_URL`, `HOST`, `PORT`, `MAX_CONNECTIONS`.
    /// Unset or unparseable values fall back to defaults.
    pub fn from_env() -> Self {
        AppConfig {
            database_url: env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite:person.db".into()),
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            max_connections: env::var("MAX_CONNECTIONS")
                .ok()
                .and_then(|n| n.parse().ok())
                .unwrap_or(5),
        }
    }

    /// Bind address for the HTTP listener.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
