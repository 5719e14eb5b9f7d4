//! PostgreSQL repository implementations.

pub mod pg_ad_repository;
pub mod pg_stats_repository;

pub use pg_ad_repository::PgAdRepository;
pub use pg_stats_repository::PgStatsRepository;
