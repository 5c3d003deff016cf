//! Integration tests for the triage HTTP API
//!
//! Drives the router in-process with `tower::ServiceExt::oneshot`.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use support_agent::{create_router, load_config, AppState};

async fn send(method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let app = create_router(Arc::new(AppState::default()));

    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

/// Test: Health endpoint reports a timestamp
#[tokio::test]
async fn test_health() {
    let (status, body) = send(Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert!(body["timestamp"].as_str().is_some());

    let (status, body) = send(Method::GET, "/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["health"], "/health");
}

/// Test: Categories list every sub-category
#[tokio::test]
async fn test_categories() {
    let (status, body) = send(Method::GET, "/categories", None).await;
    assert_eq!(status, StatusCode::OK);

    let categories = body["categories"].as_object().unwrap();
    assert_eq!(categories.len(), 5);
    assert_eq!(categories["General Queries"][0], "Inquiry");
    assert_eq!(
        categories["Account Management"].as_array().unwrap().len(),
        5
    );
}

/// Test: Classification echoes the email id
#[tokio::test]
async fn test_classify() {
    let (status, body) = send(
        Method::POST,
        "/classify",
        Some(json!({
            "email_id": "c-1",
            "subject": "Video not working",
            "body": "The video playback stops after a minute"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["email_id"], "c-1");
    assert_eq!(body["category"], "Technical Issues");
    assert_eq!(body["sub_category"], "Video Playback");
    assert_eq!(body["urgency"], "High");
    assert_eq!(body["escalate_to_human"], true);
}

/// Test: Full ticket processing through both ticket routes
#[tokio::test]
async fn test_process_ticket_and_webhook() {
    for uri in ["/process-ticket", "/webhook/process-email"] {
        let (status, body) = send(
            Method::POST,
            uri,
            Some(json!({
                "email_id": "t-1",
                "subject": "Certificate",
                "body": "Where do I find my certificate?"
            })),
        )
        .await;

        assert_eq!(status, StatusCode::OK, "{uri}");
        assert_eq!(body["status"], "Auto-Drafted");
        assert_eq!(body["escalate"], false);
        assert_eq!(body["escalation_priority"], "None");
        assert!(body["draft_reply"]
            .as_str()
            .unwrap()
            .contains("My Certificates"));
        assert!(body["ticket_id"].as_str().is_some());
    }
}

/// Test: Validation failures map to 400 with a detail message
#[tokio::test]
async fn test_invalid_ticket_is_bad_request() {
    let (status, body) = send(
        Method::POST,
        "/process-ticket",
        Some(json!({
            "email_id": "t-2",
            "subject": "Hi",
            "body": "Hello",
            "contact_count": -1
        })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["detail"],
        "Processing error: contact_count must not be negative, got -1"
    );

    let (status, body) = send(
        Method::POST,
        "/classify",
        Some(json!({"email_id": "c-2", "subject": "Hi", "body": "Hello", "contact_count": -4})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["detail"],
        "Classification error: contact_count must not be negative, got -4"
    );
}

/// Test: An empty email id is accepted like any other text
#[tokio::test]
async fn test_empty_email_id_is_processed() {
    let (status, body) = send(
        Method::POST,
        "/process-ticket",
        Some(json!({"email_id": "", "subject": "Hi", "body": "hello"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["email_id"], "");
    assert_eq!(body["status"], "Auto-Drafted");
}

/// Test: Batch endpoint isolates failures and summarizes the rest
#[tokio::test]
async fn test_batch_process() {
    let (status, body) = send(
        Method::POST,
        "/batch-process",
        Some(json!({
            "emails": [
                {"email_id": "b-1", "subject": "Lawsuit", "body": "My lawyer will contact you"},
                {"email_id": "b-2", "subject": "Password", "body": "How do I reset my password?"},
                {"email_id": "b-3", "subject": "Hi", "body": "Hello", "contact_count": -1}
            ]
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "success");
    assert_eq!(body["tickets"].as_array().unwrap().len(), 3);
    assert_eq!(body["tickets"][2]["status"], "Error");

    let summary = &body["summary"];
    assert_eq!(summary["total_tickets"], 2);
    assert_eq!(summary["escalated"], 1);
    assert_eq!(summary["auto_drafted"], 1);
    assert_eq!(summary["failed"], 1);
    assert_eq!(summary["escalation_rate"], "50.0%");
}

/// Test: Escalation evaluation with and without a classification
#[tokio::test]
async fn test_evaluate() {
    let (status, body) = send(
        Method::POST,
        "/evaluate",
        Some(json!({
            "classification": {
                "category": "Technical Issues",
                "sub_category": "Platform Access",
                "urgency": "High",
                "sentiment": "Negative",
                "confidence": 0.95
            },
            "body": "Nothing loads at all",
            "contact_count": 1
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["should_escalate"], true);
    assert_eq!(body["priority"], "High");
    assert_eq!(body["details"]["matched_rule"], "high_urgency_negative");

    let (status, body) = send(
        Method::POST,
        "/evaluate",
        Some(json!({"body": "Nothing loads at all"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["should_escalate"], true);
    assert_eq!(body["reason"], "No classification provided");
    assert_eq!(body["priority"], "Low");

    let (status, _) = send(
        Method::POST,
        "/evaluate",
        Some(json!({"body": "x", "contact_count": -5})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

/// Test: An empty classification object counts as no classification
#[tokio::test]
async fn test_evaluate_empty_classification_object() {
    let (status, body) = send(
        Method::POST,
        "/evaluate",
        Some(json!({"classification": {}, "body": "hello"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["should_escalate"], true);
    assert_eq!(body["reason"], "No classification provided");
    assert_eq!(body["priority"], "Low");
    assert_eq!(body["details"]["has_legal_threat"], false);

    let (status, body) = send(
        Method::POST,
        "/evaluate",
        Some(json!({"classification": null, "body": "See you in court"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["reason"], "No classification provided");
    assert_eq!(body["priority"], "Critical");
}

/// Test: A config file on disk feeds the served vocabulary
#[tokio::test]
async fn test_router_with_loaded_config() {
    let file = tempfile::NamedTempFile::new().unwrap();
    std::fs::write(
        file.path(),
        r#"
[[categories]]
category = "General Queries"

[[categories.sub_categories]]
name = "Other"
"#,
    )
    .unwrap();

    let config = load_config(Some(file.path())).unwrap();
    let app = create_router(Arc::new(AppState::new(Arc::new(config))));

    let request = Request::builder()
        .uri("/categories")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&bytes).unwrap();

    assert_eq!(body["categories"].as_object().unwrap().len(), 1);
    assert_eq!(body["categories"]["General Queries"][0], "Other");

    assert!(load_config(Some(std::path::Path::new("/nonexistent.toml"))).is_err());
}
