//! Handlers for ad management endpoints.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::api::dto::ad::{ActiveAdsQuery, AdResponse, DeleteAllResponse};
use crate::api::dto::create_ad::CreateAdRequest;
use crate::api::dto::update_ad::UpdateAdRequest;
use crate::error::AppError;
use crate::state::AppState;

/// Welcome banner at the service root.
pub async fn index_handler() -> &'static str {
    "Welcome to the Ad SDK API!"
}

/// Creates a new ad.
///
/// # Endpoint
///
/// `POST /ad_sdk`
///
/// # Request Body
///
/// ```json
/// {
///   "package_name": "com.example.app",
///   "name": "Summer Sale",
///   "description": "Half price on everything",
///   "ad_type": "banner",
///   "category": "Shop",
///   "beginning_date": "2024-01-01 00:00:00",
///   "expiration_date": "2024-12-31 23:59:59",
///   "ad_location": "NYC",
///   "ad_link": "https://example.com/sale",
///   "ad_image_link": "https://example.com/banner.png"
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request on missing fields, unparseable dates, an
/// inverted date window, an unknown category or a non-HTTP(S) image link.
pub async fn create_ad_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateAdRequest>,
) -> Result<(StatusCode, Json<AdResponse>), AppError> {
    payload.validate()?;

    let new_ad = payload.into_new_ad()?;
    let ad = state.ad_service.create_ad(new_ad).await?;

    Ok((StatusCode::CREATED, Json(ad.into())))
}

/// Lists every ad for a package.
///
/// # Endpoint
///
/// `GET /ad_sdk/{package_name}/all`
///
/// An unknown package yields `200` with an empty array.
pub async fn list_ads_handler(
    Path(package_name): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Vec<AdResponse>>, AppError> {
    let ads = state.ad_service.list_ads(&package_name).await?;

    Ok(Json(ads.into_iter().map(AdResponse::from).collect()))
}

/// Retrieves a single ad.
///
/// # Endpoint
///
/// `GET /ad_sdk/{package_name}/{ad_id}`
///
/// # Errors
///
/// Returns 404 Not Found if no ad matches.
pub async fn get_ad_handler(
    Path((package_name, ad_id)): Path<(String, String)>,
    State(state): State<AppState>,
) -> Result<Json<AdResponse>, AppError> {
    let ad = state.ad_service.get_ad(&package_name, &ad_id).await?;

    Ok(Json(ad.into()))
}

/// Partially updates an ad.
///
/// # Endpoint
///
/// `PUT /ad_sdk/{package_name}/{ad_id}`
///
/// Only provided fields are changed; `updated_at` is always refreshed. The
/// effective date window is validated against the stored ad.
///
/// # Errors
///
/// Returns 400 Bad Request on an empty body, bad dates, an unknown
/// category or a non-HTTP(S) image link; 404 Not Found if no ad matches.
pub async fn update_ad_handler(
    Path((package_name, ad_id)): Path<(String, String)>,
    State(state): State<AppState>,
    Json(payload): Json<UpdateAdRequest>,
) -> Result<Json<AdResponse>, AppError> {
    payload.validate()?;

    let patch = payload.into_patch()?;
    let ad = state
        .ad_service
        .update_ad(&package_name, &ad_id, patch)
        .await?;

    Ok(Json(ad.into()))
}

/// Returns the ads active at a given date.
///
/// # Endpoint
///
/// `GET /ad_sdk/{package_name}?date=YYYY-MM-DD&location=&category=`
///
/// Without a `date` the current instant is used. The window check is
/// boundary-inclusive on both ends.
///
/// # Errors
///
/// Returns 400 Bad Request on an unparseable date or unknown category.
pub async fn active_ads_handler(
    Path(package_name): Path<String>,
    Query(query): Query<ActiveAdsQuery>,
    State(state): State<AppState>,
) -> Result<Json<Vec<AdResponse>>, AppError> {
    let (at, location, category) = query.parse_filters()?;

    let ads = state
        .ad_service
        .find_active_ads(&package_name, at, location, category)
        .await?;

    Ok(Json(ads.into_iter().map(AdResponse::from).collect()))
}

/// Deletes every ad and every stat row across all packages.
///
/// # Endpoint
///
/// `DELETE /ad_sdk`
///
/// Irreversible; intended for test/reset use.
pub async fn delete_all_handler(
    State(state): State<AppState>,
) -> Result<Json<DeleteAllResponse>, AppError> {
    let deleted_ads = state.ad_service.delete_all_ads().await?;
    let deleted_stats = state.stats_service.reset_all().await?;

    Ok(Json(DeleteAllResponse {
        deleted_ads,
        deleted_stats,
    }))
}
