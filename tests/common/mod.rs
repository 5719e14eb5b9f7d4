#![allow(dead_code)]

use ad_sdk::api::routes::ad_sdk_routes;
use ad_sdk::application::services::{AdService, StatsService};
use ad_sdk::infrastructure::persistence::{PgAdRepository, PgStatsRepository};
use ad_sdk::state::AppState;
use axum::Router;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

pub fn create_test_state(pool: PgPool) -> AppState {
    let pool = Arc::new(pool);

    let ad_repo = Arc::new(PgAdRepository::new(pool.clone()));
    let stats_repo = Arc::new(PgStatsRepository::new(pool.clone()));

    AppState {
        ad_service: Arc::new(AdService::new(ad_repo.clone())),
        stats_service: Arc::new(StatsService::new(stats_repo, ad_repo)),
    }
}

pub fn test_app(state: AppState) -> Router {
    Router::new().merge(ad_sdk_routes()).with_state(state)
}

pub async fn insert_test_ad(
    pool: &PgPool,
    id: &str,
    package_name: &str,
    name: &str,
    category: &str,
    location: &str,
    beginning_date: DateTime<Utc>,
    expiration_date: DateTime<Utc>,
) {
    sqlx::query(
        r#"
        INSERT INTO ads (id, package_name, name, description, ad_type, category,
                         beginning_date, expiration_date, ad_location, ad_link, ad_image_link)
        VALUES ($1, $2, $3, 'test ad', 'banner', $4, $5, $6, $7,
                'https://example.com', 'https://example.com/banner.png')
        "#,
    )
    .bind(id)
    .bind(package_name)
    .bind(name)
    .bind(category)
    .bind(beginning_date)
    .bind(expiration_date)
    .bind(location)
    .execute(pool)
    .await
    .unwrap();
}

pub async fn count_stat_rows(pool: &PgPool, ad_id: &str, package_name: &str) -> i64 {
    sqlx::query_scalar(
        "SELECT COUNT(*) FROM ad_click_stats WHERE ad_id = $1 AND package_name = $2",
    )
    .bind(ad_id)
    .bind(package_name)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn count_ads(pool: &PgPool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM ads")
        .fetch_one(pool)
        .await
        .unwrap()
}
