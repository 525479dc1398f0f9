//! calldesk-gateway server entry point.
//!
//! Starts the Axum HTTP server over the read-only directory endpoints.
//! Pool lifecycle: constructed and pinged here at startup, passed down
//! through [`AppState`], drained after the server stops.

use std::sync::Arc;
use std::time::Duration;

use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use calldesk_gateway::api;
use calldesk_gateway::app_state::AppState;
use calldesk_gateway::config::GatewayConfig;
use calldesk_gateway::persistence::{PgStore, pool};
use calldesk_gateway::service::DirectoryService;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let config = GatewayConfig::from_env()?;
    tracing::info!(addr = %config.listen_addr, "starting calldesk-gateway");

    // Build the connection pool and verify the store is reachable
    let pg_pool = pool::connect(&config).await?;
    pool::ping(&pg_pool).await?;

    // Build service layer and application state
    let store = PgStore::new(
        pg_pool.clone(),
        Duration::from_secs(config.query_timeout_secs),
    );
    let app_state = AppState {
        directory: Arc::new(DirectoryService::new(store)),
    };

    // Build router
    let app = api::build_router()
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state);

    // Start server
    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    tracing::info!(addr = %config.listen_addr, "server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // Drain the pool once the server has stopped accepting requests
    pool::drain(pg_pool).await;

    Ok(())
}

/// Resolves on SIGINT (Ctrl-C), triggering graceful shutdown.
async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to install shutdown signal handler");
    }
}
