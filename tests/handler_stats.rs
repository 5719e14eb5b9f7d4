mod common;

use axum_test::TestServer;
use chrono::{Duration, Utc};
use sqlx::PgPool;

async fn seed_ad(pool: &PgPool, id: &str, package_name: &str, name: &str, category: &str) {
    let now = Utc::now();
    common::insert_test_ad(
        pool,
        id,
        package_name,
        name,
        category,
        "NYC",
        now - Duration::days(1),
        now + Duration::days(1),
    )
    .await;
}

#[sqlx::test]
async fn test_click_creates_then_increments(pool: PgPool) {
    seed_ad(&pool, "ad1", "pkgA", "Summer Sale", "Shop").await;
    let server =
        TestServer::new(common::test_app(common::create_test_state(pool.clone()))).unwrap();

    let first = server.post("/ad_sdk/pkgA/ad1/click").await;
    first.assert_status_ok();
    let json = first.json::<serde_json::Value>();
    assert_eq!(json["clicks_count"], 1);
    assert_eq!(json["views_count"], 0);
    assert_eq!(json["created"], true);
    assert_eq!(json["ad_name"], "Summer Sale");
    assert!(json["last_clicked_at"].is_string());

    let second = server.post("/ad_sdk/pkgA/ad1/click").await;
    second.assert_status_ok();
    let json = second.json::<serde_json::Value>();
    assert_eq!(json["clicks_count"], 2);
    assert_eq!(json["views_count"], 0);
    assert_eq!(json["created"], false);

    // Both events land on the same row.
    assert_eq!(common::count_stat_rows(&pool, "ad1", "pkgA").await, 1);
}

#[sqlx::test]
async fn test_view_does_not_touch_click_fields(pool: PgPool) {
    seed_ad(&pool, "ad1", "pkgA", "Summer Sale", "Shop").await;
    let server = TestServer::new(common::test_app(common::create_test_state(pool))).unwrap();

    let response = server.post("/ad_sdk/pkgA/ad1/view").await;
    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["views_count"], 1);
    assert_eq!(json["clicks_count"], 0);
    assert!(json["last_clicked_at"].is_null());
}

#[sqlx::test]
async fn test_view_category_override(pool: PgPool) {
    seed_ad(&pool, "ad1", "pkgA", "Summer Sale", "Shop").await;
    let server = TestServer::new(common::test_app(common::create_test_state(pool))).unwrap();

    let response = server
        .post("/ad_sdk/pkgA/ad1/view")
        .add_query_param("category", "Hotel")
        .await;

    response.assert_status_ok();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["category"], "Hotel");
    assert_eq!(json["ad_name"], "Summer Sale");
}

#[sqlx::test]
async fn test_view_bad_category_override(pool: PgPool) {
    seed_ad(&pool, "ad1", "pkgA", "Summer Sale", "Shop").await;
    let server = TestServer::new(common::test_app(common::create_test_state(pool))).unwrap();

    let response = server
        .post("/ad_sdk/pkgA/ad1/view")
        .add_query_param("category", "Car")
        .await;

    response.assert_status_bad_request();
}

#[sqlx::test]
async fn test_completed_view_counter(pool: PgPool) {
    seed_ad(&pool, "ad1", "pkgA", "Summer Sale", "Shop").await;
    let server = TestServer::new(common::test_app(common::create_test_state(pool))).unwrap();

    server.post("/ad_sdk/pkgA/ad1/view").await.assert_status_ok();
    let response = server.post("/ad_sdk/pkgA/ad1/view/completed").await;

    response.assert_status_ok();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["views_count"], 1);
    assert_eq!(json["completed_views_count"], 1);
    assert_eq!(json["clicks_count"], 0);
}

#[sqlx::test]
async fn test_click_on_unknown_ad_uses_placeholder_snapshot(pool: PgPool) {
    let server = TestServer::new(common::test_app(common::create_test_state(pool))).unwrap();

    let response = server.post("/ad_sdk/pkgA/ghost/click").await;

    response.assert_status_ok();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["ad_name"], "Unknown Ad");
    assert_eq!(json["category"], "Unknown");
    assert_eq!(json["clicks_count"], 1);
}

#[sqlx::test]
async fn test_stats_are_keyed_per_package(pool: PgPool) {
    seed_ad(&pool, "ad1", "pkgA", "Summer Sale", "Shop").await;
    seed_ad(&pool, "ad1", "pkgB", "Summer Sale", "Shop").await;
    let server =
        TestServer::new(common::test_app(common::create_test_state(pool.clone()))).unwrap();

    server.post("/ad_sdk/pkgA/ad1/click").await.assert_status_ok();
    server.post("/ad_sdk/pkgA/ad1/click").await.assert_status_ok();
    let response = server.post("/ad_sdk/pkgB/ad1/click").await;

    response.assert_status_ok();
    assert_eq!(response.json::<serde_json::Value>()["clicks_count"], 1);
    assert_eq!(common::count_stat_rows(&pool, "ad1", "pkgA").await, 1);
    assert_eq!(common::count_stat_rows(&pool, "ad1", "pkgB").await, 1);
}

#[sqlx::test]
async fn test_summary_empty(pool: PgPool) {
    let server = TestServer::new(common::test_app(common::create_test_state(pool))).unwrap();

    let response = server.get("/ad_sdk/stats/summary").await;

    response.assert_status_ok();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["total_clicks"], 0);
    assert_eq!(json["total_views"], 0);
    assert_eq!(json["total_completed_views"], 0);
}

#[sqlx::test]
async fn test_summary_totals_across_keys(pool: PgPool) {
    seed_ad(&pool, "ad1", "pkgA", "Summer Sale", "Shop").await;
    seed_ad(&pool, "ad2", "pkgB", "Hotel Deal", "Hotel").await;
    let server = TestServer::new(common::test_app(common::create_test_state(pool))).unwrap();

    server.post("/ad_sdk/pkgA/ad1/click").await.assert_status_ok();
    server.post("/ad_sdk/pkgA/ad1/click").await.assert_status_ok();
    server.post("/ad_sdk/pkgB/ad2/click").await.assert_status_ok();
    server.post("/ad_sdk/pkgA/ad1/view").await.assert_status_ok();
    server
        .post("/ad_sdk/pkgB/ad2/view/completed")
        .await
        .assert_status_ok();

    let response = server.get("/ad_sdk/stats/summary").await;

    response.assert_status_ok();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["total_clicks"], 3);
    assert_eq!(json["total_views"], 1);
    assert_eq!(json["total_completed_views"], 1);
}
