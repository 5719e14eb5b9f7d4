//! PostgreSQL implementation of the statistics repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{AdClickStat, AdSnapshot, StatUpsert, StatsSummary};
use crate::domain::repositories::StatsRepository;
use crate::error::AppError;

const STAT_COLUMNS: &str = "ad_id, package_name, ad_name, category, clicks_count, \
     views_count, completed_views_count, created_at, last_clicked_at";

#[derive(sqlx::FromRow)]
struct StatRow {
    ad_id: String,
    package_name: String,
    ad_name: String,
    category: String,
    clicks_count: i64,
    views_count: i64,
    completed_views_count: i64,
    created_at: DateTime<Utc>,
    last_clicked_at: Option<DateTime<Utc>>,
}

impl From<StatRow> for AdClickStat {
    fn from(row: StatRow) -> Self {
        AdClickStat {
            ad_id: row.ad_id,
            package_name: row.package_name,
            ad_name: row.ad_name,
            category: row.category,
            clicks_count: row.clicks_count,
            views_count: row.views_count,
            completed_views_count: row.completed_views_count,
            created_at: row.created_at,
            last_clicked_at: row.last_clicked_at,
        }
    }
}

/// Upsert result row; `created` comes from the `xmax = 0` system-column
/// check, true only when the statement inserted the row.
#[derive(sqlx::FromRow)]
struct StatUpsertRow {
    #[sqlx(flatten)]
    stat: StatRow,
    created: bool,
}

#[derive(sqlx::FromRow)]
struct SummaryRow {
    total_clicks: i64,
    total_views: i64,
    total_completed_views: i64,
}

/// PostgreSQL repository for click/view/completed-view counters.
///
/// All counter writes are single-statement `INSERT .. ON CONFLICT .. DO
/// UPDATE` upserts against the `(ad_id, package_name)` primary key, so
/// concurrent events never lose an increment and never create a duplicate
/// row.
pub struct PgStatsRepository {
    pool: Arc<PgPool>,
}

impl PgStatsRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    /// Shared upsert for the three counter columns.
    ///
    /// `touch_last_clicked` controls whether `last_clicked_at` is stamped;
    /// only click events set it.
    async fn bump_counter(
        &self,
        counter: &'static str,
        touch_last_clicked: bool,
        ad_id: &str,
        package_name: &str,
        snapshot: AdSnapshot,
    ) -> Result<StatUpsert, AppError> {
        let insert_clicked = if touch_last_clicked { "now()" } else { "NULL" };
        let update_clicked = if touch_last_clicked {
            "last_clicked_at = now(),"
        } else {
            ""
        };

        let sql = format!(
            r#"
            INSERT INTO ad_click_stats
                (ad_id, package_name, ad_name, category, {counter}, last_clicked_at)
            VALUES ($1, $2, $3, $4, 1, {insert_clicked})
            ON CONFLICT (ad_id, package_name) DO UPDATE
            SET {counter} = ad_click_stats.{counter} + 1,
                {update_clicked}
                ad_name  = EXCLUDED.ad_name,
                category = EXCLUDED.category
            RETURNING {STAT_COLUMNS}, (xmax = 0) AS created
            "#
        );

        let row: StatUpsertRow = sqlx::query_as(&sql)
            .bind(ad_id)
            .bind(package_name)
            .bind(&snapshot.ad_name)
            .bind(&snapshot.category)
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(StatUpsert {
            stat: row.stat.into(),
            created: row.created,
        })
    }
}

#[async_trait]
impl StatsRepository for PgStatsRepository {
    async fn record_click(
        &self,
        ad_id: &str,
        package_name: &str,
        snapshot: AdSnapshot,
    ) -> Result<StatUpsert, AppError> {
        self.bump_counter("clicks_count", true, ad_id, package_name, snapshot)
            .await
    }

    async fn record_view(
        &self,
        ad_id: &str,
        package_name: &str,
        snapshot: AdSnapshot,
    ) -> Result<StatUpsert, AppError> {
        self.bump_counter("views_count", false, ad_id, package_name, snapshot)
            .await
    }

    async fn record_completed_view(
        &self,
        ad_id: &str,
        package_name: &str,
        snapshot: AdSnapshot,
    ) -> Result<StatUpsert, AppError> {
        self.bump_counter("completed_views_count", false, ad_id, package_name, snapshot)
            .await
    }

    async fn find_by_key(
        &self,
        ad_id: &str,
        package_name: &str,
    ) -> Result<Option<AdClickStat>, AppError> {
        let sql = format!(
            r#"
            SELECT {STAT_COLUMNS}
            FROM ad_click_stats
            WHERE ad_id = $1 AND package_name = $2
            "#
        );

        let row: Option<StatRow> = sqlx::query_as(&sql)
            .bind(ad_id)
            .bind(package_name)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(row.map(AdClickStat::from))
    }

    async fn summary(&self) -> Result<StatsSummary, AppError> {
        // SUM over BIGINT widens to NUMERIC, hence the casts.
        let row: SummaryRow = sqlx::query_as(
            r#"
            SELECT
                COALESCE(SUM(clicks_count), 0)::BIGINT          AS total_clicks,
                COALESCE(SUM(views_count), 0)::BIGINT           AS total_views,
                COALESCE(SUM(completed_views_count), 0)::BIGINT AS total_completed_views
            FROM ad_click_stats
            "#,
        )
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(StatsSummary {
            total_clicks: row.total_clicks,
            total_views: row.total_views,
            total_completed_views: row.total_completed_views,
        })
    }

    async fn delete_all(&self) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM ad_click_stats")
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected())
    }
}
