use std::str::FromStr;
use std::time::Duration;

use setlist_db::PoolConfig;

/// A configuration variable that is set but cannot be parsed.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} has invalid value '{value}'")]
    Invalid { var: &'static str, value: String },
}

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// SQLite connection URL (default: `sqlite://setlist.db`).
    pub database_url: String,
    /// Pool size for file databases (default: `5`).
    pub db_max_connections: u32,
    /// Bound on waiting for a connection or a write lock (default: `5`).
    pub db_acquire_timeout_secs: u64,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Bound on draining the pool after the listener stops (default: `30`).
    pub shutdown_timeout_secs: u64,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                   | Default                    |
    /// |---------------------------|----------------------------|
    /// | `HOST`                    | `0.0.0.0`                  |
    /// | `PORT`                    | `3000`                     |
    /// | `DATABASE_URL`            | `sqlite://setlist.db`      |
    /// | `DB_MAX_CONNECTIONS`      | `5`                        |
    /// | `DB_ACQUIRE_TIMEOUT_SECS` | `5`                        |
    /// | `CORS_ORIGINS`            | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS`    | `30`                       |
    /// | `SHUTDOWN_TIMEOUT_SECS`   | `30`                       |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build the configuration from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let text = |var: &str, default: &str| lookup(var).unwrap_or_else(|| default.to_string());

        let cors_origins = text("CORS_ORIGINS", "http://localhost:5173")
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        Ok(Self {
            host: text("HOST", "0.0.0.0"),
            port: parse_var(&lookup, "PORT", 3000)?,
            database_url: text("DATABASE_URL", "sqlite://setlist.db"),
            db_max_connections: parse_var(&lookup, "DB_MAX_CONNECTIONS", 5)?,
            db_acquire_timeout_secs: parse_var(&lookup, "DB_ACQUIRE_TIMEOUT_SECS", 5)?,
            cors_origins,
            request_timeout_secs: parse_var(&lookup, "REQUEST_TIMEOUT_SECS", 30)?,
            shutdown_timeout_secs: parse_var(&lookup, "SHUTDOWN_TIMEOUT_SECS", 30)?,
        })
    }

    /// Pool tuning derived from the `DB_*` settings.
    pub fn pool_config(&self) -> PoolConfig {
        PoolConfig {
            max_connections: self.db_max_connections,
            acquire_timeout: Duration::from_secs(self.db_acquire_timeout_secs),
        }
    }
}

fn parse_var<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(var) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { var, value }),
    }
}
