//! Integration tests for the auth route group.
//!
//! Both endpoints are stubs: any credentials are accepted and the responses
//! are fixed literals. These tests pin that contract.

use axum::http::StatusCode;
use serde_json::json;

use cartwheel_integration_tests::{post_json, send};

#[tokio::test]
async fn test_login_returns_placeholder_token() {
    let body = json!({"email": "user@example.com", "password": "hunter2"});
    let (status, response) = post_json("/auth/login", &body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(response.expect("JSON body"), json!({"token": "fake-jwt-token"}));
}

#[tokio::test]
async fn test_login_accepts_any_credentials() {
    // No validation beyond type coercion: even a non-address email logs in.
    let body = json!({"email": "not-an-email", "password": ""});
    let (status, response) = post_json("/auth/login", &body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(response.expect("JSON body"), json!({"token": "fake-jwt-token"}));
}

#[tokio::test]
async fn test_login_is_idempotent() {
    let body = json!({"email": "user@example.com", "password": "hunter2"});

    let first = post_json("/auth/login", &body).await;
    let second = post_json("/auth/login", &body).await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_login_rejects_missing_fields() {
    let (status, _) = post_json("/auth/login", &json!({"email": "user@example.com"})).await;
    assert!(status.is_client_error());
}

#[tokio::test]
async fn test_login_rejects_missing_body() {
    let (status, _) = send("POST", "/auth/login", None).await;
    assert!(status.is_client_error());
}

#[tokio::test]
async fn test_register_returns_confirmation() {
    let body = json!({"email": "new@example.com", "password": "hunter2"});
    let (status, response) = post_json("/auth/register", &body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(response.expect("JSON body"), json!({"message": "User created"}));
}

#[tokio::test]
async fn test_register_stores_nothing() {
    // Registering twice with the same email succeeds both times - there is
    // no uniqueness check because there is no store.
    let body = json!({"email": "dup@example.com", "password": "hunter2"});

    let first = post_json("/auth/register", &body).await;
    let second = post_json("/auth/register", &body).await;
    assert_eq!(first, second);
    assert_eq!(first.0, StatusCode::OK);
}

#[tokio::test]
async fn test_register_rejects_non_string_fields() {
    let (status, _) = post_json("/auth/register", &json!({"email": 5, "password": true})).await;
    assert!(status.is_client_error());
}
