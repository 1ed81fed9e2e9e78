//! HTTP front door for ethgate.
//!
//! Two read-only routes backed by a [`ChainClient`]:
//! - `GET /latest-block` → `{"latest_block": "<decimal>"}`
//! - `GET /balance?address=<hex>` → `{"balance": "<decimal>"}`
//!
//! Validation failures answer `400` and upstream failures `500`, both with the
//! error text as a plain body.

pub mod config;
pub mod error;
pub mod handlers;

use axum::routing::get;
use axum::Router;
use ethgate_chain::ChainClient;
use std::future::Future;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

pub use config::Config;
pub use error::ApiError;
pub use handlers::{BalanceQuery, BalanceResponse, LatestBlockResponse};

/// State shared by every request.
#[derive(Clone)]
pub struct AppState {
    /// Handle to the upstream node.
    pub client: ChainClient,
}

impl AppState {
    pub fn new(client: ChainClient) -> Self {
        Self { client }
    }
}

/// Build the gateway routes.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/latest-block", get(handlers::latest_block))
        .route("/balance", get(handlers::balance))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serve `app` on `listener` until `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, app: Router, shutdown: F) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
}

/// Resolves on Ctrl-C.
pub async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
