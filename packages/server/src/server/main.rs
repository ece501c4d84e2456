// Main entry point for the marketing site server

use anyhow::{Context, Result};
use site_core::{kernel::ServerDeps, server::build_app, Config};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,site_core=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting ITLC India site server");

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!(model = %config.openai_model, "Configuration loaded");

    // Wire up remote capabilities
    let deps = ServerDeps::from_config(&config).context("Failed to create server dependencies")?;

    // Build application
    let addr = format!("0.0.0.0:{}", config.port);
    let port = config.port;
    let app = build_app(deps, config);

    // Start server
    tracing::info!("Starting server on {}", addr);
    tracing::info!("Site: http://localhost:{}/", port);
    tracing::info!("Health check: http://localhost:{}/health", port);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
