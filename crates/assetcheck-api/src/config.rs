//! Runtime configuration.
//!
//! Values are layered: built-in defaults, then an optional TOML file, then
//! command-line flags and `ASSETCHECK_*` environment variables. Everything is
//! fixed once the server starts.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use assetcheck_storage::{RosterSource, StoreConfig};
use clap::Args;
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Default upload limit for a single request body (10 MiB).
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Resolved server configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Listen address
    pub bind: SocketAddr,
    /// SQLite database file
    pub database: PathBuf,
    /// Directory for uploaded photos
    pub upload_dir: PathBuf,
    /// Directory for exported spreadsheets
    pub results_dir: PathBuf,
    /// Roster CSV used to seed an empty registry; the demo roster otherwise
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roster: Option<PathBuf>,
    /// Largest accepted request body
    pub max_upload_bytes: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([127, 0, 0, 1], 8080)),
            database: PathBuf::from("assetcheck.db"),
            upload_dir: PathBuf::from("uploads"),
            results_dir: PathBuf::from("results"),
            roster: None,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}

/// Flag and environment overrides, applied on top of the file.
#[derive(Debug, Clone, Default, Args)]
pub struct ConfigOverrides {
    /// Listen address
    #[arg(long, env = "ASSETCHECK_BIND")]
    pub bind: Option<SocketAddr>,

    /// SQLite database file
    #[arg(long, env = "ASSETCHECK_DATABASE")]
    pub database: Option<PathBuf>,

    /// Directory for uploaded photos
    #[arg(long, env = "ASSETCHECK_UPLOAD_DIR")]
    pub upload_dir: Option<PathBuf>,

    /// Directory for exported spreadsheets
    #[arg(long, env = "ASSETCHECK_RESULTS_DIR")]
    pub results_dir: Option<PathBuf>,

    /// Roster CSV with header name,department,asset_no,sticker_no
    #[arg(long, env = "ASSETCHECK_ROSTER")]
    pub roster: Option<PathBuf>,

    /// Largest accepted request body, in bytes
    #[arg(long, env = "ASSETCHECK_MAX_UPLOAD_BYTES")]
    pub max_upload_bytes: Option<usize>,
}

impl AppConfig {
    /// Loads the config file at `path`, or the defaults when there is none.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let content = std::fs::read_to_string(path).map_err(|e| Error::io_with_path(e, path))?;
        Self::from_toml_str(&content)
            .map_err(|e| Error::config(format!("Failed to parse {}: {e}", path.display())))
    }

    /// Parses a TOML document. Missing keys keep their defaults.
    pub fn from_toml_str(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Applies flag and environment overrides.
    pub fn apply(&mut self, overrides: &ConfigOverrides) {
        if let Some(bind) = overrides.bind {
            self.bind = bind;
        }
        if let Some(database) = &overrides.database {
            self.database = database.clone();
        }
        if let Some(dir) = &overrides.upload_dir {
            self.upload_dir = dir.clone();
        }
        if let Some(dir) = &overrides.results_dir {
            self.results_dir = dir.clone();
        }
        if let Some(roster) = &overrides.roster {
            self.roster = Some(roster.clone());
        }
        if let Some(limit) = overrides.max_upload_bytes {
            self.max_upload_bytes = limit;
        }
    }

    /// Serializes the resolved config as TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::config(e.to_string()))
    }

    /// Storage settings derived from this config.
    pub fn store_config(&self) -> StoreConfig {
        StoreConfig::new(&self.database, &self.upload_dir)
    }

    /// Where the registry is seeded from.
    pub fn roster_source(&self) -> RosterSource {
        RosterSource::from_path(self.roster.as_deref())
    }
}
