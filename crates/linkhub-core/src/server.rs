//! HTTP server for the hub page
//!
//! `GET /` re-renders the page on every request; `GET /health` reports
//! liveness and the catalog size. State is shared read-only.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Html;
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use crate::catalog::Catalog;
use crate::config::Config;
use crate::render::PageRenderer;
use crate::thumbnail::ThumbnailLoader;

/// Immutable state shared by all requests
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Config,
    pub catalog: Catalog,
    pub loader: ThumbnailLoader,
}

impl AppState {
    pub fn new(config: Config, catalog: Catalog) -> Self {
        let loader = ThumbnailLoader::new(config.assets.dir.clone());
        Self {
            config,
            catalog,
            loader,
        }
    }

    /// One full render pass
    pub fn render_page(&self) -> String {
        PageRenderer::new(&self.config.site, &self.catalog, &self.loader)
            .image_width(self.config.assets.image_width)
            .render()
    }
}

/// Body of `GET /health`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub projects: usize,
    pub timestamp: String,
}

/// Build the application router
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

async fn index(State(state): State<Arc<AppState>>) -> Result<Html<String>, (StatusCode, String)> {
    // Thumbnail reads are blocking file IO.
    tokio::task::spawn_blocking(move || state.render_page())
        .await
        .map(Html)
        .map_err(|e| {
            error!(error = %e, "Render task failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("render failed: {}", e),
            )
        })
}

async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        projects: state.catalog.len(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

/// Serve until Ctrl-C
pub async fn serve(state: AppState, addr: SocketAddr) -> anyhow::Result<()> {
    let app = router(Arc::new(state));

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    let local_addr = listener.local_addr().context("Failed to read local address")?;
    info!(addr = %local_addr, "Serving hub page");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for Ctrl-C");
    }
}
