// IFR 14 monitor for B3 stocks, terminal dashboard entry point
mod app;
mod components;
mod config;
mod services;

use config::AppConfig;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();

    tracing::info!("Starting IFR 14 monitor...");

    // Optional config path as the first argument; the embedded default otherwise.
    let app_config = match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => AppConfig::load_from_path(&path)?,
        None => AppConfig::load_default()?,
    };
    tracing::info!(
        version = %app_config.version,
        tickers = ?app_config.monitor.tickers,
        "Configuration loaded"
    );

    app::run(&app_config).await
}
