//! Handlers for the statistics endpoints.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde_json::json;

use crate::api::dto::stats::{StatEventResponse, SummaryResponse, ViewQuery};
use crate::domain::entities::AdCategory;
use crate::error::AppError;
use crate::state::AppState;

/// Records one click for an ad.
///
/// # Endpoint
///
/// `POST /ad_sdk/{package_name}/{ad_id}/click`
///
/// Creates the stat row on the first event; tolerant of dangling ad
/// references (the snapshot falls back to placeholder values).
pub async fn click_handler(
    Path((package_name, ad_id)): Path<(String, String)>,
    State(state): State<AppState>,
) -> Result<Json<StatEventResponse>, AppError> {
    let outcome = state.stats_service.record_click(&package_name, &ad_id).await?;

    Ok(Json(outcome.into()))
}

/// Records one view for an ad.
///
/// # Endpoint
///
/// `POST /ad_sdk/{package_name}/{ad_id}/view?category=`
///
/// The optional `category` overrides the snapshot category; the stat key is
/// always `(ad_id, package_name)`.
///
/// # Errors
///
/// Returns 400 Bad Request on an unknown category.
pub async fn view_handler(
    Path((package_name, ad_id)): Path<(String, String)>,
    Query(query): Query<ViewQuery>,
    State(state): State<AppState>,
) -> Result<Json<StatEventResponse>, AppError> {
    let category = query
        .category
        .map(|c| {
            AdCategory::parse(&c).ok_or_else(|| {
                AppError::bad_request(
                    "Unknown category",
                    json!({ "category": c, "allowed": AdCategory::ALL }),
                )
            })
        })
        .transpose()?;

    let outcome = state
        .stats_service
        .record_view(&package_name, &ad_id, category)
        .await?;

    Ok(Json(outcome.into()))
}

/// Records one completed view for an ad.
///
/// # Endpoint
///
/// `POST /ad_sdk/{package_name}/{ad_id}/view/completed`
pub async fn completed_view_handler(
    Path((package_name, ad_id)): Path<(String, String)>,
    State(state): State<AppState>,
) -> Result<Json<StatEventResponse>, AppError> {
    let outcome = state
        .stats_service
        .record_completed_view(&package_name, &ad_id)
        .await?;

    Ok(Json(outcome.into()))
}

/// Aggregate click/view/completed-view totals across all packages.
///
/// # Endpoint
///
/// `GET /ad_sdk/stats/summary`
///
/// All totals are zero when no stat rows exist.
pub async fn summary_handler(
    State(state): State<AppState>,
) -> Result<Json<SummaryResponse>, AppError> {
    let summary = state.stats_service.summary().await?;

    Ok(Json(summary.into()))
}
