//! Application services.

pub mod ad_service;
pub mod stats_service;

pub use ad_service::AdService;
pub use stats_service::StatsService;
