//! Integration tests for Cartwheel.
//!
//! The tests drive the complete application service in-process via
//! [`tower::ServiceExt::oneshot`], so no server or database needs to be
//! running. Each test builds a fresh app, which also proves the handlers
//! hold no hidden state between requests.
//!
//! # Test Categories
//!
//! - `api_root` - Banner and health endpoints
//! - `api_auth` - Auth route group contract
//! - `api_products` - Product route group contract

#![cfg_attr(not(test), forbid(unsafe_code))]

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
};
use serde_json::Value;
use tower::ServiceExt;
use tower_http::normalize_path::NormalizePath;

use cartwheel_api::config::ApiConfig;
use cartwheel_api::routes;
use cartwheel_api::state::AppState;

/// Build the complete application service, as served in production.
#[must_use]
pub fn app() -> NormalizePath<Router> {
    routes::app(AppState::new(ApiConfig::default()))
}

/// Send a single request to a fresh app and return status plus parsed body.
///
/// The body is `None` when the response is not valid JSON (e.g. the plain
/// text health endpoint or extractor rejections).
///
/// # Panics
///
/// Panics if the request is malformed or the response body cannot be read.
pub async fn send(method: &str, uri: &str, body: Option<&Value>) -> (StatusCode, Option<Value>) {
    let mut builder = Request::builder().method(method).uri(uri);

    let body = match body {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let request = builder.body(body).expect("Failed to build request");
    let response = app()
        .oneshot(request)
        .await
        .expect("Handlers are infallible");

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");

    (status, serde_json::from_slice(&bytes).ok())
}

/// Send a GET request to a fresh app.
pub async fn get(uri: &str) -> (StatusCode, Option<Value>) {
    send("GET", uri, None).await
}

/// Send a JSON POST request to a fresh app.
pub async fn post_json(uri: &str, body: &Value) -> (StatusCode, Option<Value>) {
    send("POST", uri, Some(body)).await
}
