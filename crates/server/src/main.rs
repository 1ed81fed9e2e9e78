//! ethgate server entry point.

use anyhow::{Context, Result};
use clap::Parser;
use ethgate_chain::{ChainClient, RpcProvider};
use ethgate_server::{router, serve, shutdown_signal, AppState, Config};
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new("ethgate=info,ethgate_server=info,ethgate_chain=info,tower_http=info")
        }))
        .init();

    let config = Config::parse();

    if let Err(e) = run(config).await {
        error!("{:#}", e);
        std::process::exit(1);
    }
}

async fn run(config: Config) -> Result<()> {
    let provider = RpcProvider::connect(&config.rpc_config())
        .await
        .context("Failed to connect to Ethereum node")?;
    info!("  Upstream:     {}", provider.endpoint());
    info!("  Chain ID:     {}", provider.chain_id());

    let state = AppState::new(ChainClient::new(provider));

    let addr = config.listen_addr();
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Server running on {}", addr);

    serve(listener, router(state), shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server stopped");
    Ok(())
}
