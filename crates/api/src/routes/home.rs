//! Root and health route handlers.

use axum::{Json, extract::State};
use serde::Serialize;

use crate::state::AppState;

/// Banner returned by the root endpoint.
pub const API_BANNER: &str = "E-commerce API";

/// Response body for the root endpoint.
#[derive(Debug, Serialize)]
pub struct BannerResponse {
    pub message: String,
}

/// API banner endpoint.
///
/// GET / - returns a fixed identification message. No inputs, no side
/// effects, cannot fail.
pub async fn root(State(_state): State<AppState>) -> Json<BannerResponse> {
    Json(BannerResponse {
        message: API_BANNER.to_string(),
    })
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check dependencies.
pub async fn health() -> &'static str {
    "ok"
}
