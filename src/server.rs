use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{
    Router,
    routing::any,
};
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::github::GitHubClient;
use crate::handlers::{handle_not_found, handle_root, handle_webhook};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub github: GitHubClient,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let github = GitHubClient::new(reqwest::Client::new(), config.api_base.clone());

        Self {
            config: Arc::new(config),
            github,
        }
    }
}

/// Build the application router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", any(handle_root))
        .route("/webhook", any(handle_webhook))
        .fallback(handle_not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Run the HTTP server until the listener fails
pub async fn run(config: Config) -> Result<()> {
    let listen_addr = config.listen_addr;
    let app = router(AppState::new(config));

    let listener = tokio::net::TcpListener::bind(listen_addr)
        .await
        .with_context(|| format!("Failed to bind to {}", listen_addr))?;

    tracing::info!(addr = %listen_addr, "Server listening");

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
