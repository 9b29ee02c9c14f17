mod api;
mod config;
mod error;

use std::{net::SocketAddr, path::PathBuf, sync::Arc};

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;
use wayfinder_core::{AirportModelConfig, create_airport_model};

use crate::api::{AppState, build_router};
use crate::config::Config;
use crate::error::ServerError;

/// HTTP API for the airport wayfinding engine
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Address to listen on, overrides `server.bind`
    #[arg(long)]
    bind: Option<SocketAddr>,
    /// Airport data file, overrides `data.path`
    #[arg(long)]
    data: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let mut config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    if let Some(bind) = cli.bind {
        config.server.bind = bind;
    }
    if let Some(data) = cli.data {
        config.data.path = data;
    }

    let model = create_airport_model(&AirportModelConfig::new(config.data.path.clone()))?;
    info!(
        pois = model.poi_count(),
        zones = model.zone_count(),
        "airport model loaded from {}",
        config.data.path.display()
    );

    let app = build_router(Arc::new(AppState { model }), &config.server);

    let listener = tokio::net::TcpListener::bind(config.server.bind).await?;
    info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
