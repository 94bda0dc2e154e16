//! Persistence layer for the setlist catalog.
//!
//! Owns the SQLite pool, the embedded migrations, the row models and the
//! repositories. Every repository call takes the pool explicitly; there is no
//! process-wide session.

use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};

pub mod models;
pub mod repositories;

pub type DbPool = sqlx::SqlitePool;

/// Connection pool tuning.
#[derive(Debug, Clone)]
pub struct PoolConfig {
    pub max_connections: u32,
    /// Upper bound on waiting for a free connection, and on waiting for a
    /// SQLite write lock once connected.
    pub acquire_timeout: Duration,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            max_connections: 5,
            acquire_timeout: Duration::from_secs(5),
        }
    }
}

/// Create a connection pool from a database URL.
///
/// File databases are created on first use and run in WAL mode. In-memory
/// databases live only as long as their connection, so they get exactly one
/// connection that is never reaped.
pub async fn create_pool(database_url: &str, config: &PoolConfig) -> Result<DbPool, sqlx::Error> {
    let in_memory = is_in_memory(database_url);

    let mut options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true)
        .busy_timeout(config.acquire_timeout);
    if !in_memory {
        options = options.journal_mode(SqliteJournalMode::Wal);
    }

    let pool_options = SqlitePoolOptions::new().acquire_timeout(config.acquire_timeout);
    let pool_options = if in_memory {
        pool_options
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        pool_options.max_connections(config.max_connections)
    };

    tracing::debug!(in_memory, "Opening SQLite pool");
    pool_options.connect_with(options).await
}

/// Verify the database answers a trivial query.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply all pending migrations embedded from `crates/db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}

fn is_in_memory(database_url: &str) -> bool {
    database_url.contains(":memory:") || database_url.contains("mode=memory")
}
