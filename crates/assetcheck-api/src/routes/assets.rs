//! Roster listing and the per-asset inspection form.

use assetcheck_core::{AssetNo, SearchFilter};
use axum::extract::{Path, Query, State};
use axum::response::{Html, Redirect};
use chrono::Local;
use serde::Deserialize;

use crate::extract::InspectionPayload;
use crate::state::AppState;
use crate::views;
use crate::Result;

/// Query string of `GET /`.
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    /// Substring to search for
    pub q: Option<String>,
}

/// `GET /`
pub async fn index(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Html<String>> {
    let filter = SearchFilter::new(params.q.as_deref());
    let listings = state.store.list(&filter).await?;
    Ok(Html(views::index_page(&listings, &filter)))
}

/// `GET /detail/{asset_no}`
pub async fn detail(
    State(state): State<AppState>,
    Path(asset_no): Path<AssetNo>,
) -> Result<Html<String>> {
    let asset = state.store.lookup(&asset_no).await?;
    let inspection = state.store.inspection(&asset_no).await?;
    let today = Local::now().date_naive();
    Ok(Html(views::detail_page(&asset, inspection.as_ref(), today)))
}

/// `POST /detail/{asset_no}`; redirects back to the form on success.
pub async fn submit(
    State(state): State<AppState>,
    Path(asset_no): Path<AssetNo>,
    payload: InspectionPayload,
) -> Result<Redirect> {
    state
        .store
        .submit(&asset_no, payload.form, payload.photo)
        .await?;
    let location = format!("/detail/{}", views::path_segment(asset_no.as_str()));
    Ok(Redirect::to(&location))
}
