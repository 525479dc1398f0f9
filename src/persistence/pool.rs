//! Connection pool lifecycle: construct at startup, drain at shutdown.
//!
//! Connections are opened lazily up to `database_max_connections` and
//! reused across requests. Waiting for a free slot is bounded by
//! `database_acquire_timeout_secs`; when it elapses sqlx yields
//! [`sqlx::Error::PoolTimedOut`], which the gateway surfaces as
//! [`crate::error::ApiError::PoolExhausted`].

use std::time::Duration;

use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

use crate::config::GatewayConfig;
use crate::error::ApiError;

/// Builds the shared connection pool from the gateway configuration.
///
/// # Errors
///
/// Returns [`ApiError::StoreUnavailable`] if the pool cannot be
/// configured (the first physical connection is opened lazily, so most
/// connectivity problems surface on first use or in [`ping`]).
pub async fn connect(config: &GatewayConfig) -> Result<PgPool, ApiError> {
    let pool = PgPoolOptions::new()
        .max_connections(config.database_max_connections)
        .min_connections(config.database_min_connections)
        .acquire_timeout(Duration::from_secs(config.database_acquire_timeout_secs))
        .connect(&config.database_url())
        .await?;

    tracing::info!(
        max_connections = config.database_max_connections,
        "database connection pool established"
    );
    Ok(pool)
}

/// Verifies the backing store is reachable with a `SELECT 1` round trip.
///
/// # Errors
///
/// Returns [`ApiError::StoreUnavailable`] (or
/// [`ApiError::PoolExhausted`]) if the probe fails.
pub async fn ping(pool: &PgPool) -> Result<(), ApiError> {
    sqlx::query_scalar::<_, i32>("SELECT 1")
        .fetch_one(pool)
        .await?;
    Ok(())
}

/// Drains the pool, closing all connections. Called once at shutdown.
pub async fn drain(pool: PgPool) {
    pool.close().await;
    tracing::info!("database connection pool drained");
}
