//! Cartwheel API - Public e-commerce JSON API.
//!
//! This binary serves the public JSON API on port 8000.
//!
//! # Architecture
//!
//! - Axum web framework
//! - Stub route handlers: the HTTP contract is live, business logic is not
//! - No database yet; models document the intended schema only
//!
//! # Routes
//!
//! See [`routes`] for the full route map.

#![cfg_attr(not(test), forbid(unsafe_code))]
// Allow dead code during incremental development - the models are not yet
// wired to a store
#![allow(dead_code)]

use axum::{ServiceExt, extract::Request};

mod config;
mod error;
mod models;
mod routes;
mod state;

use config::ApiConfig;
use state::AppState;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Load configuration from environment
    let config = ApiConfig::from_env().expect("Failed to load configuration");

    // Initialize tracing with EnvFilter
    // Defaults to info level for our crate if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "cartwheel_api=info,tower_http=debug".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Build application state and the router
    let addr = config.socket_addr();
    let state = AppState::new(config);
    let app = routes::app(state);

    // Start server
    tracing::info!("api listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    // NormalizePath wraps the router, so it is served as a plain service
    // rather than via Router::into_make_service
    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
