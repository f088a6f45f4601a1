//! Web server: routing, form decoding and page rendering

pub mod form;
pub mod handler;
pub mod views;

use std::net::SocketAddr;

use anyhow::Result;
use tracing::info;

pub use handler::{AppState, router};

/// Fixed listen address: all interfaces, port 8080.
pub const LISTEN_ADDR: ([u8; 4], u16) = ([0, 0, 0, 0], 8080);

/// Run the HTTP server until Ctrl-C.
pub async fn serve(state: AppState) -> Result<()> {
    let addr = SocketAddr::from(LISTEN_ADDR);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on http://{}", addr);

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
