//! Shared handler state.

use assetcheck_report::ReportBuilder;
use assetcheck_storage::Store;

/// State cloned into every handler.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Registry, inspections and photos
    pub store: Store,
    /// Spreadsheet writer
    pub reports: ReportBuilder,
}

impl AppState {
    /// Bundles the store and report writer.
    pub fn new(store: Store, reports: ReportBuilder) -> Self {
        Self { store, reports }
    }
}
