//! API Server setup

use axum::Router;
use std::net::SocketAddr;
use tokio::net::TcpListener;

use crate::routes::create_router;
use crate::state::{ApiConfig, AppState};

/// Create the API server
pub async fn create_server(
    config: ApiConfig,
) -> Result<(Router, SocketAddr), Box<dyn std::error::Error + Send + Sync>> {
    let addr = config.socket_addr().await?;
    let state = AppState::new(config);

    Ok((create_router(state), addr))
}

/// Run the API server until Ctrl-C
pub async fn run_server(config: ApiConfig) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let (router, addr) = create_server(config).await?;

    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Receipt API server listening on {}", listener.local_addr()?);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Receipt API server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
