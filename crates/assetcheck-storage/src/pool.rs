//! SQLite pool creation.
//!
//! Every connection is opened with foreign keys on, WAL journaling and a busy
//! timeout, so a request that races another writer waits instead of failing.

use std::path::{Path, PathBuf};
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use tracing::info;

use crate::Result;

/// Pool type used throughout the crate.
pub type DbPool = sqlx::SqlitePool;

/// Database configuration.
#[derive(Debug, Clone)]
pub struct DbConfig {
    /// Database file path
    pub path: PathBuf,
    /// Maximum connections in the pool
    pub max_connections: u32,
    /// How long a connection waits on a locked database
    pub busy_timeout: Duration,
}

impl DbConfig {
    /// SQLite configuration for the given database file.
    pub fn sqlite(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            max_connections: 5,
            busy_timeout: Duration::from_secs(5),
        }
    }

    /// Set maximum connections.
    pub fn with_max_connections(mut self, max: u32) -> Self {
        self.max_connections = max;
        self
    }

    fn connect_options(&self) -> SqliteConnectOptions {
        SqliteConnectOptions::new()
            .filename(&self.path)
            .create_if_missing(true)
            .foreign_keys(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(self.busy_timeout)
    }
}

/// Create a database pool from configuration.
///
/// The file is created when missing. Connections are acquired lazily per
/// operation and returned to the pool when dropped.
pub async fn create_pool(config: &DbConfig) -> Result<DbPool> {
    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(config.connect_options())
        .await?;

    info!(path = %config.path.display(), "Connected to SQLite database");
    Ok(pool)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_sqlite_pool_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested.db");
        let pool = create_pool(&DbConfig::sqlite(&path)).await.unwrap();

        let (fk,): (i64,) = sqlx::query_as("PRAGMA foreign_keys")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(fk, 1);
        assert!(path.exists());
    }

    #[test]
    fn test_with_max_connections() {
        let config = DbConfig::sqlite("x.db").with_max_connections(1);
        assert_eq!(config.max_connections, 1);
        assert_eq!(config.path, PathBuf::from("x.db"));
    }
}
