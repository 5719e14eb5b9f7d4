//! Shared application state injected into all handlers.

use std::sync::Arc;

use crate::application::services::{AdService, StatsService};
use crate::infrastructure::persistence::{PgAdRepository, PgStatsRepository};

/// Application state carrying the `Arc`-wrapped services.
///
/// Cloned per request by Axum; all fields are cheap reference-counted
/// handles over the single shared connection pool.
#[derive(Clone)]
pub struct AppState {
    pub ad_service: Arc<AdService<PgAdRepository>>,
    pub stats_service: Arc<StatsService<PgStatsRepository, PgAdRepository>>,
}
