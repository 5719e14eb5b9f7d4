//! PostgreSQL implementation of the ad repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Ad, AdActivityFilter, AdCategory, AdPatch};
use crate::domain::repositories::AdRepository;
use crate::error::AppError;

const AD_COLUMNS: &str = "id, package_name, name, description, ad_type, category, \
     beginning_date, expiration_date, ad_location, ad_link, ad_image_link, \
     created_at, updated_at";

/// Raw ads row; `category` stays textual until decoded into the enum.
#[derive(sqlx::FromRow)]
struct AdRow {
    id: String,
    package_name: String,
    name: String,
    description: String,
    ad_type: String,
    category: String,
    beginning_date: DateTime<Utc>,
    expiration_date: DateTime<Utc>,
    ad_location: String,
    ad_link: String,
    ad_image_link: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl AdRow {
    fn into_ad(self) -> Result<Ad, AppError> {
        let category = AdCategory::parse(&self.category).ok_or_else(|| {
            AppError::internal(
                "Stored category is not a known value",
                json!({ "ad_id": self.id, "category": self.category }),
            )
        })?;

        Ok(Ad {
            id: self.id,
            package_name: self.package_name,
            name: self.name,
            description: self.description,
            ad_type: self.ad_type,
            category,
            beginning_date: self.beginning_date,
            expiration_date: self.expiration_date,
            ad_location: self.ad_location,
            ad_link: self.ad_link,
            ad_image_link: self.ad_image_link,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

/// PostgreSQL repository for ad storage and retrieval.
///
/// Uses SQLx prepared statements for SQL injection protection and type safety.
pub struct PgAdRepository {
    pool: Arc<PgPool>,
}

impl PgAdRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AdRepository for PgAdRepository {
    async fn insert(&self, ad: Ad) -> Result<Ad, AppError> {
        let sql = format!(
            r#"
            INSERT INTO ads ({AD_COLUMNS})
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            RETURNING {AD_COLUMNS}
            "#
        );

        let row: AdRow = sqlx::query_as(&sql)
            .bind(&ad.id)
            .bind(&ad.package_name)
            .bind(&ad.name)
            .bind(&ad.description)
            .bind(&ad.ad_type)
            .bind(ad.category.as_str())
            .bind(ad.beginning_date)
            .bind(ad.expiration_date)
            .bind(&ad.ad_location)
            .bind(&ad.ad_link)
            .bind(&ad.ad_image_link)
            .bind(ad.created_at)
            .bind(ad.updated_at)
            .fetch_one(self.pool.as_ref())
            .await?;

        row.into_ad()
    }

    async fn list_by_package(&self, package_name: &str) -> Result<Vec<Ad>, AppError> {
        let sql = format!(
            r#"
            SELECT {AD_COLUMNS}
            FROM ads
            WHERE package_name = $1
            ORDER BY created_at DESC
            "#
        );

        let rows: Vec<AdRow> = sqlx::query_as(&sql)
            .bind(package_name)
            .fetch_all(self.pool.as_ref())
            .await?;

        rows.into_iter().map(AdRow::into_ad).collect()
    }

    async fn find_by_id(&self, package_name: &str, ad_id: &str) -> Result<Option<Ad>, AppError> {
        let sql = format!(
            r#"
            SELECT {AD_COLUMNS}
            FROM ads
            WHERE package_name = $1 AND id = $2
            "#
        );

        let row: Option<AdRow> = sqlx::query_as(&sql)
            .bind(package_name)
            .bind(ad_id)
            .fetch_optional(self.pool.as_ref())
            .await?;

        row.map(AdRow::into_ad).transpose()
    }

    async fn update(
        &self,
        package_name: &str,
        ad_id: &str,
        patch: AdPatch,
    ) -> Result<Option<Ad>, AppError> {
        let sql = format!(
            r#"
            UPDATE ads
            SET name            = COALESCE($3, name),
                description     = COALESCE($4, description),
                ad_type         = COALESCE($5, ad_type),
                category        = COALESCE($6, category),
                beginning_date  = COALESCE($7, beginning_date),
                expiration_date = COALESCE($8, expiration_date),
                ad_location     = COALESCE($9, ad_location),
                ad_link         = COALESCE($10, ad_link),
                ad_image_link   = COALESCE($11, ad_image_link),
                updated_at      = now()
            WHERE package_name = $1 AND id = $2
            RETURNING {AD_COLUMNS}
            "#
        );

        let row: Option<AdRow> = sqlx::query_as(&sql)
            .bind(package_name)
            .bind(ad_id)
            .bind(patch.name)
            .bind(patch.description)
            .bind(patch.ad_type)
            .bind(patch.category.map(|c| c.as_str().to_string()))
            .bind(patch.beginning_date)
            .bind(patch.expiration_date)
            .bind(patch.ad_location)
            .bind(patch.ad_link)
            .bind(patch.ad_image_link)
            .fetch_optional(self.pool.as_ref())
            .await?;

        row.map(AdRow::into_ad).transpose()
    }

    async fn find_active(
        &self,
        package_name: &str,
        filter: AdActivityFilter,
    ) -> Result<Vec<Ad>, AppError> {
        let sql = format!(
            r#"
            SELECT {AD_COLUMNS}
            FROM ads
            WHERE package_name = $1
              AND beginning_date <= $2
              AND expiration_date >= $2
              AND ($3::text IS NULL OR ad_location = $3)
              AND ($4::text IS NULL OR category = $4)
            ORDER BY created_at DESC
            "#
        );

        let rows: Vec<AdRow> = sqlx::query_as(&sql)
            .bind(package_name)
            .bind(filter.at)
            .bind(filter.location)
            .bind(filter.category.map(|c| c.as_str().to_string()))
            .fetch_all(self.pool.as_ref())
            .await?;

        rows.into_iter().map(AdRow::into_ad).collect()
    }

    async fn delete_all(&self) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM ads")
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected())
    }
}
