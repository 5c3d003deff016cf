//! Support Agent - Triage API Server
//!
//! HTTP service and CLI over the `support-triage` pipeline.

pub mod cli;
pub mod http;

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use support_triage::{TicketPipeline, TriageConfig};

/// Shared application state
pub struct AppState {
    pub pipeline: TicketPipeline,
}

impl AppState {
    pub fn new(config: Arc<TriageConfig>) -> Self {
        Self {
            pipeline: TicketPipeline::new(config),
        }
    }

    pub fn config(&self) -> &TriageConfig {
        self.pipeline.config()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Arc::new(TriageConfig::default()))
    }
}

/// Build the effective configuration.
///
/// Starts from the built-in vocabulary or the TOML file at `path`, then
/// applies `TRIAGE_*` environment overrides and validates the result.
pub fn load_config(path: Option<&Path>) -> Result<TriageConfig> {
    let mut config = match path {
        Some(path) => TriageConfig::load(path)
            .with_context(|| format!("Failed to load triage config from {}", path.display()))?,
        None => TriageConfig::default(),
    };

    config.apply_env_overrides();
    config
        .validate()
        .context("Invalid triage config after environment overrides")?;

    info!(
        source = %path.map(|p| p.display().to_string()).unwrap_or_else(|| "built-in".to_string()),
        categories = config.categories.len(),
        repeated_contact_count = config.thresholds.repeated_contact_count,
        high_confidence = config.thresholds.high_confidence,
        "Triage config ready"
    );
    Ok(config)
}

/// Create the API router
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Info endpoints
        .route("/", get(http::root))
        .route("/health", get(http::health))
        .route("/categories", get(http::categories))
        // Triage endpoints
        .route("/classify", post(http::classify_email))
        .route("/process-ticket", post(http::process_ticket))
        .route("/webhook/process-email", post(http::process_ticket))
        .route("/batch-process", post(http::batch_process))
        .route("/evaluate", post(http::evaluate_escalation))
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Start the server
pub async fn serve(addr: &str, state: Arc<AppState>) -> Result<()> {
    let app = create_router(state);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Support agent listening on {}", addr);
    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}
