//! numclass - Number classification microservice
//!
//! Classifies an integer over HTTP (prime / perfect / armstrong / parity /
//! digit sum) and attaches a fun fact fetched from the Numbers API.

use anyhow::Result;
use std::net::SocketAddr;
use tracing::info;

use numclass::services::FunFactClient;
use numclass::{build_router, config, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing subscriber
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    // Log build identification immediately after tracing init
    info!(
        "Starting numclass v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    let facts = FunFactClient::new()?;
    let state = AppState::new(facts);
    let app = build_router(state);

    // PORT env var selects the listen port, default 8000
    let port = config::resolve_port();
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("numclass listening on http://{}", addr);
    info!("Classify: http://{}/api/classify-number?number=42", addr);
    info!("Health check: http://{}/health", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
