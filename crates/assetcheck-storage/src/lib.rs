//! # assetcheck-storage
//!
//! SQLite storage for assetcheck:
//! - Asset registry (seeded once, read-only afterwards)
//! - Inspection store (one row per asset, upserted)
//! - Report join for the spreadsheet export
//! - Photo files under the upload directory
//!
//! All operations hang off [`Store`]; each one acquires a pooled connection
//! for its own duration.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod photos;
pub mod pool;
pub mod roster;
pub mod schema;

mod inspections;
mod registry;
mod report;
mod rows;
mod store;

pub use error::{Error, Result};
pub use photos::{photo_file_name, PhotoStore};
pub use pool::{create_pool, DbConfig, DbPool};
pub use roster::RosterSource;
pub use store::{InitReport, Store, StoreConfig};
