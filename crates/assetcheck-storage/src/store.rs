//! The store handle shared by all request handlers.

use std::path::PathBuf;

use tracing::info;

use crate::photos::PhotoStore;
use crate::pool::{create_pool, DbConfig, DbPool};
use crate::roster::RosterSource;
use crate::schema;
use crate::Result;

/// Locations the store works with, fixed at startup.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Database settings
    pub db: DbConfig,
    /// Directory for uploaded photos
    pub upload_dir: PathBuf,
}

impl StoreConfig {
    /// Config for a database file and upload directory.
    pub fn new(database: impl Into<PathBuf>, upload_dir: impl Into<PathBuf>) -> Self {
        Self {
            db: DbConfig::sqlite(database.into()),
            upload_dir: upload_dir.into(),
        }
    }
}

/// Outcome of [`Store::init`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InitReport {
    /// Roster rows inserted by this call
    pub seeded: usize,
}

/// Asset registry, inspection store and photo store behind one handle.
///
/// Cheap to clone. Every operation acquires its own pooled connection and
/// returns it when the operation finishes, on success or error.
#[derive(Debug, Clone)]
pub struct Store {
    pub(crate) pool: DbPool,
    pub(crate) photos: PhotoStore,
}

impl Store {
    /// Opens the database (creating the file if needed).
    ///
    /// Does not touch the schema; call [`Store::init`] once at startup.
    pub async fn open(config: &StoreConfig) -> Result<Self> {
        let pool = create_pool(&config.db).await?;
        Ok(Self {
            pool,
            photos: PhotoStore::new(&config.upload_dir),
        })
    }

    /// Creates tables, seeds the roster into an empty registry and creates
    /// the upload directory. Safe to call repeatedly.
    pub async fn init(&self, roster: &RosterSource) -> Result<InitReport> {
        self.photos.ensure_dir().await?;

        let mut tx = self.pool.begin_with("BEGIN IMMEDIATE").await?;
        schema::create_tables(&mut *tx).await?;

        let (existing,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users")
            .fetch_one(&mut *tx)
            .await?;
        let seeded = if existing == 0 {
            let assets = roster.load()?;
            schema::seed_roster(&mut *tx, &assets).await?
        } else {
            0
        };
        tx.commit().await?;

        info!(seeded, "Store initialized");
        Ok(InitReport { seeded })
    }

    /// Photo storage.
    pub fn photos(&self) -> &PhotoStore {
        &self.photos
    }

    /// Underlying pool, for administration and tests.
    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    /// Closes all pooled connections.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}
