//! Mirror network status daemon.
//!
//! Polls the registered mirror endpoints on a fixed cadence and serves the
//! aggregated per-node snapshot to the map front end.

use anyhow::Result;
use clap::Parser;
use mirrormap_core::{Aggregator, StatusFetcher};
use mirrormapd::config::Config;
use mirrormapd::publish::SnapshotStore;
use mirrormapd::{refresh, routes};
use std::path::PathBuf;
use tower_http::trace::TraceLayer;
use tracing::{info, Level};

#[derive(Parser, Debug)]
#[command(name = "mirrormapd", about = "Mirror network status daemon", version)]
struct Args {
    /// Path to config file (default: /etc/mirrormap/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the listen address from the config
    #[arg(long)]
    listen: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    let args = Args::parse();
    info!("mirrormapd v{} starting", env!("CARGO_PKG_VERSION"));

    let config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::load_or_default(),
    };

    let registry = config.registry()?;
    info!("Monitoring {} mirror nodes", registry.len());

    let node_count = registry.len();
    let fetcher = StatusFetcher::new(config.daemon.fetch_timeout())?;
    let aggregator = Aggregator::new(registry, fetcher);

    let store = SnapshotStore::new();
    let refresh_task = tokio::spawn(refresh::run(
        aggregator,
        config.daemon.refresh_interval(),
        store.clone(),
    ));

    let state = routes::AppState { store, node_count };
    let app = routes::router(state).layer(TraceLayer::new_for_http());

    let addr = args
        .listen
        .unwrap_or_else(|| config.daemon.listen_addr.clone());
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on http://{}", addr);

    tokio::select! {
        result = axum::serve(listener, app) => result?,
        _ = tokio::signal::ctrl_c() => info!("Shutting down gracefully"),
    }

    refresh_task.abort();
    Ok(())
}
