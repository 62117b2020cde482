use std::path::Path;
use std::sync::Arc;

use common::logger::{LogFormat, init_logger};
use goldfeed::{
    api::{ApiState, create_router},
    config::AppConfig,
    error::AppError,
    market::PriceFeed,
};
use tokio::net::TcpListener;

/// Binds the listener and serves until Ctrl+C.
async fn serve(cfg: &AppConfig, feed: Arc<PriceFeed>) -> Result<(), AppError> {
    let static_dir = Path::new(&cfg.static_dir)
        .is_dir()
        .then_some(cfg.static_dir.as_str());
    if static_dir.is_none() {
        tracing::warn!(dir = %cfg.static_dir, "static directory not found; serving API only");
    }

    let router = create_router(ApiState::new(feed), static_dir);

    let addr = cfg.bind_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|source| AppError::Bind {
            addr: addr.clone(),
            source,
        })?;

    tracing::info!(addr = %listener.local_addr()?, "server running");

    axum::serve(listener, router)
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = ?e, "failed to listen for shutdown signal");
            }
            tracing::info!("Shutdown signal received");
        })
        .await?;

    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env is normal outside local development.
    let _ = dotenvy::dotenv();

    let cfg = AppConfig::from_env()?;
    init_logger("goldfeed", LogFormat::from_app_env(&cfg.app_env));

    tracing::info!(
        symbol = %cfg.symbol,
        currency = %cfg.currency,
        refresh_interval_secs = cfg.refresh_interval.as_secs(),
        "Starting goldfeed (real baseline + simulated ticker)..."
    );
    if cfg.simulation_only() {
        tracing::info!("No API key set; running on the simulation baseline");
    }

    let feed = Arc::new(PriceFeed::from_config(&cfg)?);

    serve(&cfg, feed).await?;

    Ok(())
}
