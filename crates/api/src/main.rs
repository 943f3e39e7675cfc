//! xStake API server binary entrypoint.

use std::net::SocketAddr;
use std::sync::Arc;

use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use xstake_common::config::AppConfig;
use xstake_common::db::{create_pool, run_migrations};
use xstake_engine::store::PgStakingStore;

use xstake_api::routes::create_router;
use xstake_api::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new("xstake_api=debug,xstake_engine=debug,tower_http=debug")
        }))
        .init();

    tracing::info!("Starting xStake API server...");

    let config = AppConfig::from_env()?;

    let pool = create_pool(&config.database_url, config.db_max_connections).await?;
    run_migrations(&pool).await?;

    let store = Arc::new(PgStakingStore::new(pool));
    let state = AppState::new(store, &config);

    if config.refresh_on_startup {
        match state.refresher.refresh_all().await {
            Ok(summary) => tracing::info!(
                count = summary.count,
                failed = summary.failed,
                "Startup refresh complete"
            ),
            Err(e) => tracing::warn!(error = %e, "Startup refresh failed, continuing"),
        }
    }

    let app = create_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("API server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "Failed to listen for shutdown signal");
            }
            tracing::info!("Received shutdown signal, stopping gracefully...");
        })
        .await?;

    tracing::info!("xStake API server stopped.");
    Ok(())
}
