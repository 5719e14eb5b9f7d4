//! Repository trait for per-ad counter records.

use crate::domain::entities::{AdClickStat, AdSnapshot, StatUpsert, StatsSummary};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for click/view/completed-view counters.
///
/// Every record operation is an atomic upsert keyed by
/// `(ad_id, package_name)`: concurrent events for the same key never lose
/// an increment and never create a second row. The supplied [`AdSnapshot`]
/// is written into the row on every event.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgStatsRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StatsRepository: Send + Sync {
    /// Increments `clicks_count` by one and refreshes `last_clicked_at`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn record_click(
        &self,
        ad_id: &str,
        package_name: &str,
        snapshot: AdSnapshot,
    ) -> Result<StatUpsert, AppError>;

    /// Increments `views_count` by one. `last_clicked_at` is untouched.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn record_view(
        &self,
        ad_id: &str,
        package_name: &str,
        snapshot: AdSnapshot,
    ) -> Result<StatUpsert, AppError>;

    /// Increments `completed_views_count` by one. `last_clicked_at` is
    /// untouched.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn record_completed_view(
        &self,
        ad_id: &str,
        package_name: &str,
        snapshot: AdSnapshot,
    ) -> Result<StatUpsert, AppError>;

    /// Fetches the counter row for one key, if any.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_key(
        &self,
        ad_id: &str,
        package_name: &str,
    ) -> Result<Option<AdClickStat>, AppError>;

    /// Sums the three counters across all rows. All-zero when the table is
    /// empty.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn summary(&self) -> Result<StatsSummary, AppError>;

    /// Deletes every stat row. Returns the number of rows removed.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete_all(&self) -> Result<u64, AppError>;
}
