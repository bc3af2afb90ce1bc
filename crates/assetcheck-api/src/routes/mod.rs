//! Request handlers, grouped by page.

pub mod assets;
pub mod dashboard;
pub mod export;
pub mod photos;

/// Liveness probe.
pub async fn healthz() -> &'static str {
    "ok"
}
