//! HTTP server initialization and runtime setup.
//!
//! Handles the database connection pool, startup migrations, service wiring
//! and the Axum server lifecycle.

use crate::application::services::{AdService, StatsService};
use crate::config::Config;
use crate::infrastructure::persistence::{PgAdRepository, PgStatsRepository};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::extract::Request;
use axum::ServiceExt;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - PostgreSQL connection pool (created once, shared by all requests)
/// - Startup migrations
/// - Repositories and services
/// - Axum HTTP server
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime))
        .connect(&config.database_url)
        .await?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations").run(&pool).await?;
    tracing::info!("Migrations applied");

    let pool = Arc::new(pool);
    let ad_repository = Arc::new(PgAdRepository::new(pool.clone()));
    let stats_repository = Arc::new(PgStatsRepository::new(pool.clone()));

    let state = AppState {
        ad_service: Arc::new(AdService::new(ad_repository.clone())),
        stats_service: Arc::new(StatsService::new(stats_repository, ad_repository)),
    };

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app)).await?;

    Ok(())
}
