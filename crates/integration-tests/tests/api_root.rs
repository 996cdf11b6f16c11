//! Integration tests for the banner and health endpoints.

use axum::http::StatusCode;
use serde_json::json;

use cartwheel_integration_tests::get;

#[tokio::test]
async fn test_root_returns_banner() {
    let (status, body) = get("/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.expect("JSON body"), json!({"message": "E-commerce API"}));
}

#[tokio::test]
async fn test_root_is_idempotent() {
    let first = get("/").await;
    let second = get("/").await;

    assert_eq!(first, second);
}

#[tokio::test]
async fn test_health_is_plain_ok() {
    let (status, body) = get("/health").await;

    assert_eq!(status, StatusCode::OK);
    // "ok" is not valid JSON, so the helper yields no parsed body
    assert!(body.is_none());
}

#[tokio::test]
async fn test_unknown_route_is_json_404() {
    let (status, body) = get("/nope").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    let body = body.expect("JSON error body");
    assert!(body["error"].as_str().expect("error string").contains("/nope"));
}
