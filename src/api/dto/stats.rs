//! DTOs for the statistics endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::entities::{StatUpsert, StatsSummary};
use crate::utils::datetime::format_datetime;

/// Stat row returned after a click/view/completed-view event.
#[derive(Debug, Serialize)]
pub struct StatEventResponse {
    pub ad_id: String,
    pub package_name: String,
    pub ad_name: String,
    pub category: String,
    pub clicks_count: i64,
    pub views_count: i64,
    pub completed_views_count: i64,
    pub created_at: String,
    pub last_clicked_at: Option<String>,
    /// True when this event created the stat row.
    pub created: bool,
}

impl From<StatUpsert> for StatEventResponse {
    fn from(outcome: StatUpsert) -> Self {
        let stat = outcome.stat;
        StatEventResponse {
            ad_id: stat.ad_id,
            package_name: stat.package_name,
            ad_name: stat.ad_name,
            category: stat.category,
            clicks_count: stat.clicks_count,
            views_count: stat.views_count,
            completed_views_count: stat.completed_views_count,
            created_at: format_datetime(stat.created_at),
            last_clicked_at: stat.last_clicked_at.map(format_datetime),
            created: outcome.created,
        }
    }
}

/// Query parameters for `POST /ad_sdk/{package_name}/{ad_id}/view`.
#[derive(Debug, Default, Deserialize)]
pub struct ViewQuery {
    /// Optional category override written into the snapshot.
    pub category: Option<String>,
}

/// Response for `GET /ad_sdk/stats/summary`.
#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    pub total_clicks: i64,
    pub total_views: i64,
    pub total_completed_views: i64,
}

impl From<StatsSummary> for SummaryResponse {
    fn from(summary: StatsSummary) -> Self {
        SummaryResponse {
            total_clicks: summary.total_clicks,
            total_views: summary.total_views,
            total_completed_views: summary.total_completed_views,
        }
    }
}
