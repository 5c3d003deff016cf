//! HTTP endpoint handlers

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use support_triage::{
    resolve_contact_count, BatchReport, Classification, EmailInput, EscalationSummary,
    TicketError, TicketOutcome,
};

use crate::AppState;

/// Request-level failures, reported as `400 {"detail": ...}`
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Classification error: {0}")]
    Classification(#[source] TicketError),

    #[error("Processing error: {0}")]
    Processing(#[source] TicketError),

    #[error("Evaluation error: {0}")]
    Evaluation(#[source] TicketError),
}

/// Error body shared by every failing endpoint
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub detail: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        warn!(error = %self, "Rejecting request");
        let body = ErrorBody {
            detail: self.to_string(),
        };
        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}

/// Service banner
#[derive(Debug, Serialize)]
pub struct RootResponse {
    pub message: &'static str,
    pub health: &'static str,
    pub categories: &'static str,
}

pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "Support Triage Agent API",
        health: "/health",
        categories: "/categories",
    })
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
    pub timestamp: String,
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        message: "Support triage agent is running".to_string(),
        timestamp: Utc::now().to_rfc3339(),
    })
}

/// Category name → sub-category names
#[derive(Debug, Serialize, Deserialize)]
pub struct CategoriesResponse {
    pub categories: BTreeMap<String, Vec<String>>,
}

pub async fn categories(State(state): State<Arc<AppState>>) -> Json<CategoriesResponse> {
    let categories = state
        .config()
        .categories
        .iter()
        .map(|spec| {
            let subs = spec
                .sub_category_names()
                .into_iter()
                .map(str::to_string)
                .collect();
            (spec.category.to_string(), subs)
        })
        .collect();

    Json(CategoriesResponse { categories })
}

/// Classification labels tagged with the caller's email id
#[derive(Debug, Serialize, Deserialize)]
pub struct ClassificationResponse {
    pub email_id: String,
    #[serde(flatten)]
    pub classification: Classification,
}

/// Classify a single email without running escalation
pub async fn classify_email(
    State(state): State<Arc<AppState>>,
    Json(email): Json<EmailInput>,
) -> Result<Json<ClassificationResponse>, ApiError> {
    let classification = state
        .pipeline
        .classify(&email)
        .map_err(ApiError::Classification)?;

    Ok(Json(ClassificationResponse {
        email_id: email.email_id,
        classification,
    }))
}

/// Classify, evaluate escalation and draft a reply
pub async fn process_ticket(
    State(state): State<Arc<AppState>>,
    Json(email): Json<EmailInput>,
) -> Result<Json<TicketOutcome>, ApiError> {
    state
        .pipeline
        .process(&email)
        .map(Json)
        .map_err(ApiError::Processing)
}

#[derive(Debug, Serialize, Deserialize)]
pub struct BatchRequest {
    pub emails: Vec<EmailInput>,
}

/// Process a list of emails; invalid items become error entries
pub async fn batch_process(
    State(state): State<Arc<AppState>>,
    Json(request): Json<BatchRequest>,
) -> Json<BatchReport> {
    Json(state.pipeline.process_batch(&request.emails))
}

/// Escalation input with an externally supplied classification
#[derive(Debug, Serialize, Deserialize)]
pub struct EvaluateRequest {
    /// Absent, `null` or `{}` means the ticket could not be classified
    #[serde(
        default,
        deserialize_with = "support_triage::classify::deserialize_optional_classification"
    )]
    pub classification: Option<Classification>,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub contact_count: Option<i64>,
}

/// Run the escalation rules against a caller-provided classification
pub async fn evaluate_escalation(
    State(state): State<Arc<AppState>>,
    Json(request): Json<EvaluateRequest>,
) -> Result<Json<EscalationSummary>, ApiError> {
    let contact_count =
        resolve_contact_count(request.contact_count).map_err(ApiError::Evaluation)?;

    Ok(Json(state.pipeline.evaluator().summarize(
        request.classification.as_ref(),
        &request.body,
        contact_count,
    )))
}
