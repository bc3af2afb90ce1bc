//! Core types for assets, inspections, forms and reports.

mod asset;
mod form;
mod inspection;
mod report;

pub use asset::{demo_roster, Asset, AssetListing, AssetNo};
pub use form::{InspectionForm, PhotoUpload, DATE_FORMAT};
pub use inspection::{
    Inspection, InspectionStatus, ItemResult, ItemResults, Submission, ITEM_COUNT,
};
pub use report::{first_inspector, ComplianceSummary, ReportRow};
