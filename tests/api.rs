//! API endpoint integration tests
//!
//! Exercises routing and request validation without reaching any upstream
//! service: the test state carries no Inworld client.

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use tower::ServiceExt;

mod common;
use common::unconfigured_state;

/// Build a test API router
fn build_test_router() -> Router {
    let state = unconfigured_state();

    Router::new()
        .nest("/api", karaoke_gateway::api::narration::router(state.clone()))
        .merge(karaoke_gateway::api::health::router())
        .merge(karaoke_gateway::api::health::status_router(state))
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

fn post_json(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_health_endpoint() {
    let app = build_test_router();

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert!(json["version"].is_string());
}

#[tokio::test]
async fn test_status_reports_unconfigured_upstream() {
    let app = build_test_router();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/status")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["upstream_configured"], false);
    assert_eq!(json["default_voice"], "Alex");
    let topics = json["topics"].as_array().unwrap();
    assert!(topics.iter().any(|t| t == "space"));
}

#[tokio::test]
async fn test_generate_text_rejects_unknown_topic() {
    let app = build_test_router();

    let response = app
        .oneshot(post_json("/api/generate-text", r#"{"topic": "politics"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "bad_request");
}

#[tokio::test]
async fn test_generate_text_rejects_blank_topic() {
    let app = build_test_router();

    let response = app
        .oneshot(post_json("/api/generate-text", r#"{"topic": "   "}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_generate_text_without_upstream_is_unavailable() {
    let app = build_test_router();

    // Valid topic passes validation and then hits the missing upstream
    let response = app
        .oneshot(post_json("/api/generate-text", r#"{"topic": "space"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "not_configured");
}

#[tokio::test]
async fn test_generate_speech_rejects_empty_text() {
    let app = build_test_router();

    let response = app
        .oneshot(post_json("/api/generate-speech", r#"{"text": ""}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_voices_without_upstream_is_unavailable() {
    let app = build_test_router();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/voices")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}
