//! Per-ad counter records and aggregate totals.

use chrono::{DateTime, Utc};

/// Placeholder snapshot name used when the referenced ad no longer exists.
pub const UNKNOWN_AD_NAME: &str = "Unknown Ad";

/// Placeholder snapshot category used when the referenced ad no longer exists.
pub const UNKNOWN_CATEGORY: &str = "Unknown";

/// Counter record for one `(ad_id, package_name)` pair.
///
/// Created implicitly on the first click/view/completed-view event and
/// updated atomically on every subsequent one. `ad_name` and `category` are
/// denormalized copies of the ad refreshed on every event; the stats system
/// tolerates dangling ad references.
#[derive(Debug, Clone)]
pub struct AdClickStat {
    pub ad_id: String,
    pub package_name: String,
    pub ad_name: String,
    pub category: String,
    pub clicks_count: i64,
    pub views_count: i64,
    pub completed_views_count: i64,
    pub created_at: DateTime<Utc>,
    /// Refreshed on click events only; `None` until the first click.
    pub last_clicked_at: Option<DateTime<Utc>>,
}

/// Denormalized ad fields written into the stat row on every event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdSnapshot {
    pub ad_name: String,
    pub category: String,
}

impl AdSnapshot {
    /// Snapshot recorded when the ad cannot be found.
    pub fn unknown() -> Self {
        Self {
            ad_name: UNKNOWN_AD_NAME.to_string(),
            category: UNKNOWN_CATEGORY.to_string(),
        }
    }
}

/// Result of a counter upsert: the row after the increment, plus whether the
/// event created the row.
#[derive(Debug, Clone)]
pub struct StatUpsert {
    pub stat: AdClickStat,
    pub created: bool,
}

/// Aggregate totals across all stat rows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatsSummary {
    pub total_clicks: i64,
    pub total_views: i64,
    pub total_completed_views: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_snapshot_placeholders() {
        let snapshot = AdSnapshot::unknown();
        assert_eq!(snapshot.ad_name, "Unknown Ad");
        assert_eq!(snapshot.category, "Unknown");
    }

    #[test]
    fn test_summary_default_is_zero() {
        let summary = StatsSummary::default();
        assert_eq!(summary.total_clicks, 0);
        assert_eq!(summary.total_views, 0);
        assert_eq!(summary.total_completed_views, 0);
    }
}
