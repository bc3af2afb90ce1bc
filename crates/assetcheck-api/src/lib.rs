//! # assetcheck-api
//!
//! HTTP front end for the asset inspection tracker:
//! - Roster listing and search (`GET /`)
//! - Inspection form and submission (`GET|POST /detail/{asset_no}`)
//! - Spreadsheet export (`GET /export`)
//! - Compliance dashboard and owner lookup
//!
//! The `assetcheck` binary wires [`AppConfig`] into a [`Server`].

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod extract;
pub mod routes;
pub mod server;
pub mod state;
pub mod views;

pub use config::{AppConfig, ConfigOverrides};
pub use error::{Error, Result};
pub use extract::InspectionPayload;
pub use server::{build_router, Server};
pub use state::AppState;
