//! Repository traits implemented by the infrastructure layer.

pub mod ad_repository;
pub mod stats_repository;

pub use ad_repository::AdRepository;
pub use stats_repository::StatsRepository;

#[cfg(test)]
pub use ad_repository::MockAdRepository;
#[cfg(test)]
pub use stats_repository::MockStatsRepository;
