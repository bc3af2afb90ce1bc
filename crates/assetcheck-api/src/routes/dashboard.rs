//! Compliance dashboard and the owner lookup endpoint.

use axum::extract::{Query, State};
use axum::response::Html;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::state::AppState;
use crate::views;
use crate::Result;

/// `GET /dashboard`
pub async fn dashboard(State(state): State<AppState>) -> Result<Html<String>> {
    let summary = state.store.summary().await?;
    Ok(Html(views::dashboard_page(&summary)))
}

/// Query string of `GET /api/owner`.
#[derive(Debug, Default, Deserialize)]
pub struct OwnerParams {
    /// Exact owner name
    pub name: Option<String>,
}

/// Asset details for an owner; serializes as `{}` when nothing matched.
#[derive(Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnerInfo {
    /// Owner's department
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    /// Asset held by the owner
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset_no: Option<String>,
    /// Registered sticker of that asset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sticker_no: Option<String>,
}

/// `GET /api/owner?name=`
pub async fn owner(
    State(state): State<AppState>,
    Query(params): Query<OwnerParams>,
) -> Result<Json<OwnerInfo>> {
    let Some(name) = params.name.as_deref().map(str::trim).filter(|n| !n.is_empty()) else {
        return Ok(Json(OwnerInfo::default()));
    };

    let info = match state.store.find_by_owner(name).await? {
        Some(asset) => OwnerInfo {
            department: Some(asset.department),
            asset_no: Some(asset.asset_no.as_str().to_string()),
            sticker_no: Some(asset.sticker_no),
        },
        None => OwnerInfo::default(),
    };
    debug!(name, found = info.asset_no.is_some(), "Owner lookup");
    Ok(Json(info))
}
