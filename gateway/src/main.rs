//! ShareIt API gateway.
//!
//! Sits in front of the core server: checks the acting-user header, rejects
//! malformed payloads before they cross the network, forwards everything
//! else and relays the upstream status and body. Successful reads are kept
//! in an in-memory response cache that writes invalidate per region.

mod cache;
mod client;
mod config;
mod controller;
mod error;
mod identity;
mod router;
mod state;
mod validate;

use crate::{config::Config, error::GatewayError, state::AppState};

#[tokio::main]
async fn main() -> Result<(), GatewayError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "shareit_gateway=info,tower_http=info".into()),
        )
        .init();

    let config = Config::from_env()?;

    tracing::info!(
        "Starting gateway on {} for server {}",
        config.bind_addr,
        config.server_url
    );

    let app = router::router()
        .with_state(AppState::new(&config.server_url))
        .layer(tower_http::trace::TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .map_err(|e| {
            GatewayError::InternalError(format!("Failed to bind {}: {}", config.bind_addr, e))
        })?;

    axum::serve(listener, app)
        .await
        .map_err(|e| GatewayError::InternalError(format!("Server error: {}", e)))?;

    Ok(())
}
