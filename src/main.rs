use anyhow::{Context, Result};
use std::sync::Arc;

use container_lookup::{
    api::{self, AppState},
    config::Config,
    provider::TrackingProviderClient,
};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("container_lookup=info")),
        )
        .init();

    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    if config.uses_dev_auth_code() {
        tracing::warn!("TRACKING_AUTH_CODE not set, using the trial authorization code");
    }

    let state = AppState {
        provider: Arc::new(TrackingProviderClient::new(&config)?),
    };
    let app = api::router(state);

    let listener = tokio::net::TcpListener::bind(&config.listen_addr)
        .await
        .with_context(|| format!("Failed to bind to {}", config.listen_addr))?;

    tracing::info!("Container lookup listening on {}", config.listen_addr);

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
