//! Rental pricing server.
//!
//! Loads the fleet configuration and serves the quote API.

use std::env;

use anyhow::Context;
use rental_pricing::api::{AppState, create_router};
use rental_pricing::config::ConfigLoader;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize tracing/logging
fn init_tracing() {
    let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "rental_pricing={},tower_http=info,axum=info",
            log_level
        ))
    });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(true).with_line_number(true))
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let config_dir = env::var("FLEET_CONFIG_DIR").unwrap_or_else(|_| "./config/fleet".to_string());
    let addr = env::var("PRICING_SERVER_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

    info!(
        version = env!("CARGO_PKG_VERSION"),
        config_dir = %config_dir,
        "Starting rental pricing server"
    );

    let config = ConfigLoader::load(&config_dir)
        .with_context(|| format!("failed to load fleet configuration from {}", config_dir))?;
    let router = create_router(AppState::new(config));

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!(addr = %addr, "Listening");

    axum::serve(listener, router).await.context("server error")?;

    Ok(())
}
