//! Authentication route handlers.
//!
//! Placeholder surface for future authentication. Both endpoints accept any
//! credentials and answer with fixed payloads; nothing is verified or stored.

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use cartwheel_core::Email;

use crate::state::AppState;

/// Token returned by the login stub until real session issuance exists.
pub const PLACEHOLDER_TOKEN: &str = "fake-jwt-token";

/// Confirmation message returned by the registration stub.
pub const REGISTERED_MESSAGE: &str = "User created";

// =============================================================================
// Request Types
// =============================================================================

/// Login request body.
///
/// `Email` deserializes transparently, so no structural validation happens
/// here - matching the stub contract of accepting unconstrained input.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: Email,
    pub password: String,
}

/// Registration request body.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub email: Email,
    pub password: String,
}

// =============================================================================
// Response Types
// =============================================================================

/// Login response body.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
}

/// Registration response body.
#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub message: String,
}

// =============================================================================
// Handlers
// =============================================================================

/// Login action.
///
/// POST /auth/login - always succeeds with a placeholder token. Stateless
/// and idempotent: identical input yields identical output.
pub async fn login(
    State(_state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Json<LoginResponse> {
    // TODO: Verify credentials against the account store and issue a real
    // session token once persistence lands
    tracing::debug!(email = %req.email, "login stub called");

    Json(LoginResponse {
        token: PLACEHOLDER_TOKEN.to_string(),
    })
}

/// Registration action.
///
/// POST /auth/register - always succeeds with a fixed confirmation.
/// Performs no persistence.
pub async fn register(
    State(_state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Json<RegisterResponse> {
    // TODO: Hash the password and insert the user once the account store exists
    tracing::debug!(email = %req.email, "register stub called");

    Json(RegisterResponse {
        message: REGISTERED_MESSAGE.to_string(),
    })
}
