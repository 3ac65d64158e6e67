//! HTTP server initialization and runtime setup.
//!
//! Builds the storage backend, wires the application state, and runs the
//! Axum server until a shutdown signal arrives.

use crate::config::Config;
use crate::infrastructure::persistence::new_storage;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};

/// Runs the HTTP server with the given configuration.
///
/// # Errors
///
/// Returns an error if:
/// - The storage backend cannot be opened
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let storage = new_storage(&config).await?;

    let state = AppState::from_config(storage, &config);
    let app = app_router(state);

    let listener = tokio::net::TcpListener::bind(&config.server_address)
        .await
        .with_context(|| format!("Failed to bind {}", config.server_address))?;
    tracing::info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
