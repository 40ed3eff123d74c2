//! Postgres pool for the catalog
//!
//! Requests share one pool; each listing request holds a connection only for
//! its single statement, so a small pool with a short acquire timeout keeps a
//! stalled database from piling up waiting handlers.

use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

/// Default maximum connections for the pool.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Default wait for a free connection before a request fails with 500.
pub const DEFAULT_ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);

/// Pool sizing for the catalog database
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolConfig {
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            max_connections: DEFAULT_MAX_CONNECTIONS,
            acquire_timeout: DEFAULT_ACQUIRE_TIMEOUT,
        }
    }
}

impl PoolConfig {
    fn options(&self) -> PgPoolOptions {
        PgPoolOptions::new()
            .max_connections(self.max_connections)
            .acquire_timeout(self.acquire_timeout)
    }

    /// Connect eagerly, failing if the database is unreachable.
    pub async fn connect(&self, database_url: &str) -> Result<PgPool, sqlx::Error> {
        tracing::debug!(
            max_connections = self.max_connections,
            acquire_timeout_ms = self.acquire_timeout.as_millis() as u64,
            "connecting to inventory database"
        );
        self.options().connect(database_url).await
    }

    /// Build the pool without connecting; the first query opens a connection.
    pub fn connect_lazy(&self, database_url: &str) -> Result<PgPool, sqlx::Error> {
        self.options().connect_lazy(database_url)
    }
}

/// Connect with [`PoolConfig::default`].
pub async fn create_pool(database_url: &str) -> Result<PgPool, sqlx::Error> {
    PoolConfig::default().connect(database_url).await
}
