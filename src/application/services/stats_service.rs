//! Click/view/completed-view tracking service.

use std::sync::Arc;

use crate::domain::entities::{AdCategory, AdSnapshot, StatUpsert, StatsSummary};
use crate::domain::repositories::{AdRepository, StatsRepository};
use crate::error::AppError;

/// Service recording counter events and computing aggregate totals.
///
/// Every event refreshes the denormalized ad snapshot in the stat row. A
/// dangling ad reference is tolerated: the snapshot falls back to
/// `"Unknown Ad"` / `"Unknown"` so events are never dropped.
pub struct StatsService<S: StatsRepository, A: AdRepository> {
    stats_repository: Arc<S>,
    ad_repository: Arc<A>,
}

impl<S: StatsRepository, A: AdRepository> StatsService<S, A> {
    /// Creates a new stats service.
    pub fn new(stats_repository: Arc<S>, ad_repository: Arc<A>) -> Self {
        Self {
            stats_repository,
            ad_repository,
        }
    }

    /// Records one click for `(ad_id, package_name)`.
    pub async fn record_click(
        &self,
        package_name: &str,
        ad_id: &str,
    ) -> Result<StatUpsert, AppError> {
        let snapshot = self.snapshot_for(package_name, ad_id, None).await?;
        let outcome = self
            .stats_repository
            .record_click(ad_id, package_name, snapshot)
            .await?;

        tracing::debug!(
            ad_id = %ad_id,
            package_name = %package_name,
            clicks = outcome.stat.clicks_count,
            "Click recorded"
        );
        Ok(outcome)
    }

    /// Records one view for `(ad_id, package_name)`.
    ///
    /// The optional `category` overrides the category written into the
    /// snapshot; the key is never affected by it.
    pub async fn record_view(
        &self,
        package_name: &str,
        ad_id: &str,
        category: Option<AdCategory>,
    ) -> Result<StatUpsert, AppError> {
        let snapshot = self.snapshot_for(package_name, ad_id, category).await?;
        self.stats_repository
            .record_view(ad_id, package_name, snapshot)
            .await
    }

    /// Records one completed view for `(ad_id, package_name)`.
    pub async fn record_completed_view(
        &self,
        package_name: &str,
        ad_id: &str,
    ) -> Result<StatUpsert, AppError> {
        let snapshot = self.snapshot_for(package_name, ad_id, None).await?;
        self.stats_repository
            .record_completed_view(ad_id, package_name, snapshot)
            .await
    }

    /// Aggregate totals across all stat rows; all-zero when none exist.
    pub async fn summary(&self) -> Result<StatsSummary, AppError> {
        self.stats_repository.summary().await
    }

    /// Deletes every stat row. Returns the number of rows removed.
    pub async fn reset_all(&self) -> Result<u64, AppError> {
        let deleted = self.stats_repository.delete_all().await?;
        tracing::warn!(deleted, "All ad stats deleted");
        Ok(deleted)
    }

    /// Builds the denormalized snapshot for an event, falling back to
    /// placeholder values when the ad cannot be found.
    async fn snapshot_for(
        &self,
        package_name: &str,
        ad_id: &str,
        category_override: Option<AdCategory>,
    ) -> Result<AdSnapshot, AppError> {
        let snapshot = match self.ad_repository.find_by_id(package_name, ad_id).await? {
            Some(ad) => AdSnapshot {
                ad_name: ad.name,
                category: category_override
                    .map(|c| c.as_str().to_string())
                    .unwrap_or_else(|| ad.category.as_str().to_string()),
            },
            None => {
                let mut snapshot = AdSnapshot::unknown();
                if let Some(category) = category_override {
                    snapshot.category = category.as_str().to_string();
                }
                snapshot
            }
        };

        Ok(snapshot)
    }
}
