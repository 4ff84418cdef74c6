//! Integration tests for the HTTP API
//!
//! Drives the router directly with `oneshot`

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use scotus_engine::core::create_router;
use serde_json::{json, Value};
use tower::ServiceExt;

async fn post_json(uri: &str, body: Value) -> (StatusCode, Value) {
    let response = create_router()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

async fn get_json(uri: &str) -> (StatusCode, Value) {
    let response = create_router()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

#[tokio::test]
async fn test_health_endpoint() {
    let (status, json) = get_json("/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "ok");
    assert!(json["version"].is_string());
    assert_eq!(json["samples"], 4);
}

#[tokio::test]
async fn test_analyze() {
    let (status, json) = post_json(
        "/api/analyze",
        json!({
            "text": "Emergency application: the Voting Rights Act and Section 2",
            "title": "Test v. Case",
            "posture": "auto"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["title"], "Test v. Case");
    assert_eq!(json["tier"], "C");
    assert_eq!(json["posture"], "emergency");
    assert_eq!(json["riskLevel"], "CAUTION");
    assert_eq!(json["precedents"].as_array().unwrap().len(), 2);
    assert_eq!(json["justiceQuestions"].as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn test_analyze_honors_tier_and_posture() {
    let (status, json) = post_json(
        "/api/analyze",
        json!({ "text": "short", "posture": "merits", "tier": "A" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["tier"], "A");
    assert_eq!(json["posture"], "merits");
    assert_eq!(json["risks"][0]["level"], "low");
}

#[tokio::test]
async fn test_analyze_missing_input() {
    let (status, _) = post_json("/api/analyze", json!({ "text": "   " })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_analyze_trims_padding() {
    let text = format!("Short brief.{}", " ".repeat(600));
    let (status, json) = post_json("/api/analyze", json!({ "text": text, "title": "  Doe v. Roe " })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["tier"], "C");
    assert_eq!(json["title"], "Doe v. Roe");
}

#[tokio::test]
async fn test_analyze_docket_only() {
    let (status, json) = post_json("/api/analyze", json!({ "docket": "24-109" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["precedents"][0]["case"], "Marbury v. Madison, 5 U.S. 137 (1803)");
}

#[tokio::test]
async fn test_chat() {
    let (status, json) = post_json(
        "/api/chat",
        json!({ "message": "Is there a CIRCUIT Split?", "history": [] }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(json["response"].as_str().unwrap().starts_with("Circuit split quality"));
}

#[tokio::test]
async fn test_chat_empty_message() {
    let (status, _) = post_json("/api/chat", json!({ "message": "" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_simulate() {
    let (status, json) = post_json("/api/simulate", json!({ "justice": "gorsuch" })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["question"]["justice"], "gorsuch");
    assert_eq!(json["question"]["name"], "Justice Gorsuch");
    assert_eq!(json["alreadyShown"], false);
}

#[tokio::test]
async fn test_simulate_with_context() {
    let (_, analysis) = post_json("/api/analyze", json!({ "text": "Section 2" })).await;
    let (status, json) = post_json(
        "/api/simulate",
        json!({ "justice": "kagan", "context": analysis }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["alreadyShown"], true);
    assert_eq!(json["question"]["focus"], "Workability");
}

#[tokio::test]
async fn test_simulate_unknown_justice() {
    let (status, _) = post_json("/api/simulate", json!({ "justice": "holmes" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_annotate() {
    let (_, sample) = get_json("/api/samples/williams-reed").await;
    let (status, json) = post_json(
        "/api/annotate",
        json!({ "text": sample["text"], "caseId": "williams-reed" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["caseId"], "williams-reed");
    assert_eq!(json["segments"].as_array().unwrap().len(), 3);
    assert_eq!(json["sections"][0]["kind"], "heading");
}

#[tokio::test]
async fn test_annotate_without_case() {
    let (status, json) = post_json("/api/annotate", json!({ "text": "HEADING\n\nBody text." })).await;

    assert_eq!(status, StatusCode::OK);
    assert!(json["segments"].as_array().unwrap().is_empty());
    assert_eq!(json["sections"][1]["runs"][0]["text"], "Body text.");
}

#[tokio::test]
async fn test_samples() {
    let (status, json) = get_json("/api/samples").await;

    assert_eq!(status, StatusCode::OK);
    let ids: Vec<_> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["id"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(ids, vec!["louisiana", "trump-tariffs", "ftc-removal", "williams-reed"]);
}

#[tokio::test]
async fn test_sample_not_found() {
    let (status, _) = get_json("/api/samples/marbury").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
