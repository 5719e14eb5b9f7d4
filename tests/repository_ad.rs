mod common;

use ad_sdk::domain::entities::{Ad, AdActivityFilter, AdCategory, AdPatch};
use ad_sdk::domain::repositories::AdRepository;
use ad_sdk::infrastructure::persistence::PgAdRepository;
use chrono::{DateTime, Duration, Utc};
use sqlx::PgPool;
use std::sync::Arc;

fn repo(pool: PgPool) -> PgAdRepository {
    PgAdRepository::new(Arc::new(pool))
}

fn sample_ad(id: &str, package_name: &str) -> Ad {
    let now = Utc::now();
    Ad {
        id: id.to_string(),
        package_name: package_name.to_string(),
        name: "Summer Sale".to_string(),
        description: "Half price on everything".to_string(),
        ad_type: "banner".to_string(),
        category: AdCategory::Shop,
        beginning_date: now - Duration::days(1),
        expiration_date: now + Duration::days(30),
        ad_location: "NYC".to_string(),
        ad_link: "https://example.com/sale".to_string(),
        ad_image_link: "https://example.com/banner.png".to_string(),
        created_at: now,
        updated_at: now,
    }
}

#[sqlx::test]
async fn test_insert_and_find_roundtrip(pool: PgPool) {
    let repo = repo(pool);

    let stored = repo.insert(sample_ad("ad-1", "com.example.app")).await.unwrap();
    assert_eq!(stored.id, "ad-1");
    assert_eq!(stored.category, AdCategory::Shop);

    let found = repo
        .find_by_id("com.example.app", "ad-1")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found.name, "Summer Sale");
    assert_eq!(found.package_name, "com.example.app");
    assert_eq!(found.beginning_date, stored.beginning_date);
}

#[sqlx::test]
async fn test_insert_duplicate_id_conflicts(pool: PgPool) {
    let repo = repo(pool);

    repo.insert(sample_ad("ad-1", "com.example.app")).await.unwrap();
    let result = repo.insert(sample_ad("ad-1", "com.other.app")).await;

    assert!(result.is_err());
}

#[sqlx::test]
async fn test_find_by_id_wrong_package_is_none(pool: PgPool) {
    let repo = repo(pool);

    repo.insert(sample_ad("ad-1", "com.example.app")).await.unwrap();

    let found = repo.find_by_id("com.other.app", "ad-1").await.unwrap();
    assert!(found.is_none());
}

#[sqlx::test]
async fn test_list_by_package_newest_first(pool: PgPool) {
    let repo = repo(pool);

    let mut older = sample_ad("ad-old", "com.example.app");
    older.created_at = Utc::now() - Duration::hours(2);
    repo.insert(older).await.unwrap();

    let mut newer = sample_ad("ad-new", "com.example.app");
    newer.created_at = Utc::now();
    repo.insert(newer).await.unwrap();

    repo.insert(sample_ad("ad-other", "com.other.app")).await.unwrap();

    let ads = repo.list_by_package("com.example.app").await.unwrap();
    assert_eq!(ads.len(), 2);
    assert_eq!(ads[0].id, "ad-new");
    assert_eq!(ads[1].id, "ad-old");
}

#[sqlx::test]
async fn test_update_patches_only_staged_fields(pool: PgPool) {
    let repo = repo(pool);

    let original = repo.insert(sample_ad("ad-1", "com.example.app")).await.unwrap();

    let patch = AdPatch {
        name: Some("Winter Sale".to_string()),
        category: Some(AdCategory::Hotel),
        ..Default::default()
    };
    let updated = repo
        .update("com.example.app", "ad-1", patch)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.name, "Winter Sale");
    assert_eq!(updated.category, AdCategory::Hotel);
    assert_eq!(updated.description, original.description);
    assert_eq!(updated.beginning_date, original.beginning_date);
    assert!(updated.updated_at >= original.updated_at);
}

#[sqlx::test]
async fn test_update_missing_ad_returns_none(pool: PgPool) {
    let repo = repo(pool);

    let patch = AdPatch {
        name: Some("Winter Sale".to_string()),
        ..Default::default()
    };
    let result = repo.update("com.example.app", "ghost", patch).await.unwrap();

    assert!(result.is_none());
}

fn active_filter(at: DateTime<Utc>) -> AdActivityFilter {
    AdActivityFilter {
        at,
        location: None,
        category: None,
    }
}

#[sqlx::test]
async fn test_find_active_window_boundaries(pool: PgPool) {
    let repo = repo(pool);

    let mut ad = sample_ad("ad-1", "com.example.app");
    let begin = Utc::now();
    let expire = begin + Duration::days(7);
    ad.beginning_date = begin;
    ad.expiration_date = expire;
    repo.insert(ad).await.unwrap();

    let at_begin = repo
        .find_active("com.example.app", active_filter(begin))
        .await
        .unwrap();
    assert_eq!(at_begin.len(), 1);

    let at_expire = repo
        .find_active("com.example.app", active_filter(expire))
        .await
        .unwrap();
    assert_eq!(at_expire.len(), 1);

    let before = repo
        .find_active("com.example.app", active_filter(begin - Duration::seconds(1)))
        .await
        .unwrap();
    assert!(before.is_empty());

    let after = repo
        .find_active("com.example.app", active_filter(expire + Duration::seconds(1)))
        .await
        .unwrap();
    assert!(after.is_empty());
}

#[sqlx::test]
async fn test_find_active_location_and_category_filters(pool: PgPool) {
    let repo = repo(pool);

    repo.insert(sample_ad("shop-nyc", "com.example.app")).await.unwrap();

    let mut hotel_la = sample_ad("hotel-la", "com.example.app");
    hotel_la.category = AdCategory::Hotel;
    hotel_la.ad_location = "LA".to_string();
    repo.insert(hotel_la).await.unwrap();

    let now = Utc::now();

    let by_location = repo
        .find_active(
            "com.example.app",
            AdActivityFilter {
                at: now,
                location: Some("LA".to_string()),
                category: None,
            },
        )
        .await
        .unwrap();
    assert_eq!(by_location.len(), 1);
    assert_eq!(by_location[0].id, "hotel-la");

    let by_category = repo
        .find_active(
            "com.example.app",
            AdActivityFilter {
                at: now,
                location: None,
                category: Some(AdCategory::Shop),
            },
        )
        .await
        .unwrap();
    assert_eq!(by_category.len(), 1);
    assert_eq!(by_category[0].id, "shop-nyc");

    let both = repo
        .find_active(
            "com.example.app",
            AdActivityFilter {
                at: now,
                location: Some("LA".to_string()),
                category: Some(AdCategory::Shop),
            },
        )
        .await
        .unwrap();
    assert!(both.is_empty());
}

#[sqlx::test]
async fn test_delete_all_counts_rows(pool: PgPool) {
    let repo = repo(pool);

    repo.insert(sample_ad("ad-1", "com.example.app")).await.unwrap();
    repo.insert(sample_ad("ad-2", "com.other.app")).await.unwrap();

    let deleted = repo.delete_all().await.unwrap();
    assert_eq!(deleted, 2);

    let remaining = repo.list_by_package("com.example.app").await.unwrap();
    assert!(remaining.is_empty());
}
