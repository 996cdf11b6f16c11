//! HTTP route handlers for the API.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - API banner
//! GET  /health                 - Health check
//!
//! # Auth
//! POST /auth/login             - Login (stub token)
//! POST /auth/register          - Register (stub confirmation)
//!
//! # Products
//! GET  /products               - Product listing (empty until catalog lands)
//! GET  /products/{product_id}  - Product detail (echoes the id)
//! POST /products               - Create product (stub confirmation)
//! ```
//!
//! Trailing slashes are trimmed before routing, so `/products/` and
//! `/products` are the same endpoint.

pub mod auth;
pub mod home;
pub mod products;

use axum::{
    Router,
    http::Uri,
    routing::{get, post},
};
use tower::Layer;
use tower_http::{
    normalize_path::{NormalizePath, NormalizePathLayer},
    trace::TraceLayer,
};

use crate::error::AppError;
use crate::state::AppState;

/// Create the auth routes router.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/login", post(auth::login))
        .route("/register", post(auth::register))
}

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(products::index).post(products::create))
        .route("/{product_id}", get(products::show))
}

/// Create all routes for the API.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Banner and health
        .route("/", get(home::root))
        .route("/health", get(home::health))
        // Auth routes
        .nest("/auth", auth_routes())
        // Product routes
        .nest("/products", product_routes())
        // Unknown routes get a JSON 404 instead of the framework default
        .fallback(not_found)
}

/// Build the complete application service.
///
/// Applies trailing-slash normalization around the router, so this returns a
/// `NormalizePath<Router>` rather than a bare `Router`. Serve it with
/// `axum::ServiceExt::into_make_service`.
pub fn app(state: AppState) -> NormalizePath<Router> {
    let router = routes()
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    NormalizePathLayer::trim_trailing_slash().layer(router)
}

/// Fallback handler for unknown routes.
async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(uri.path().to_string())
}
