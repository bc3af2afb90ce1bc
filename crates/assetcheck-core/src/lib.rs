//! assetcheck core: shared types, typed forms, errors, and utilities.
//!
//! This crate has no internal assetcheck dependencies and performs no I/O.
//!
//! # Modules
//!
//! - [`error`]: Error types and Result alias
//! - [`types`]: Assets, inspections, the typed inspection form, report rows
//! - [`search`]: Roster search filter
//! - [`util`]: Filename sanitizing

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod search;
pub mod types;
pub mod util;

// Re-exports for convenience
pub use error::{Error, Result};
pub use search::SearchFilter;
pub use types::{
    demo_roster, first_inspector, Asset, AssetListing, AssetNo, ComplianceSummary, Inspection,
    InspectionForm, InspectionStatus, ItemResult, ItemResults, PhotoUpload, ReportRow,
    Submission, DATE_FORMAT, ITEM_COUNT,
};
