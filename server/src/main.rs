//! QR generation service entry point.
//!
//! Loads configuration from the environment, then binds the axum server
//! and serves until ctrl-c.

mod config;
mod error;
mod server;

use tracing_subscriber::EnvFilter;

use config::{AppConfig, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = AppConfig::from_env();
    tracing::info!(port = config.server_port, "Starting QR service");

    let state = AppState::new(config);
    server::start_server(state).await
}
