//! Ad SDK route configuration.

use crate::api::handlers::{
    active_ads_handler, click_handler, completed_view_handler, create_ad_handler,
    delete_all_handler, get_ad_handler, list_ads_handler, summary_handler, update_ad_handler,
    view_handler,
};
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};

/// All `/ad_sdk` routes.
///
/// # Endpoints
///
/// - `POST   /ad_sdk`                                      - create ad
/// - `DELETE /ad_sdk`                                      - delete all ads + stats
/// - `GET    /ad_sdk/stats/summary`                        - aggregate totals
/// - `GET    /ad_sdk/{package_name}`                       - filtered active-ads query
/// - `GET    /ad_sdk/{package_name}/all`                   - list all ads for package
/// - `GET    /ad_sdk/{package_name}/{ad_id}`               - get one ad
/// - `PUT    /ad_sdk/{package_name}/{ad_id}`               - partial update
/// - `POST   /ad_sdk/{package_name}/{ad_id}/click`         - record click
/// - `POST   /ad_sdk/{package_name}/{ad_id}/view`          - record view
/// - `POST   /ad_sdk/{package_name}/{ad_id}/view/completed` - record completed view
pub fn ad_sdk_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/ad_sdk",
            post(create_ad_handler).delete(delete_all_handler),
        )
        .route("/ad_sdk/stats/summary", get(summary_handler))
        .route("/ad_sdk/{package_name}", get(active_ads_handler))
        .route("/ad_sdk/{package_name}/all", get(list_ads_handler))
        .route(
            "/ad_sdk/{package_name}/{ad_id}",
            get(get_ad_handler).put(update_ad_handler),
        )
        .route("/ad_sdk/{package_name}/{ad_id}/click", post(click_handler))
        .route("/ad_sdk/{package_name}/{ad_id}/view", post(view_handler))
        .route(
            "/ad_sdk/{package_name}/{ad_id}/view/completed",
            post(completed_view_handler),
        )
}
