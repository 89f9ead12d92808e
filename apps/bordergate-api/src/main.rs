//! bordergate API
//!
//! A border-entry passenger records service built with Axum. Provides
//! account registration and login, HMAC-signed bearer tokens, and
//! role-gated passenger record CRUD with password re-authentication
//! for destructive actions.

mod config;
mod health;
mod logging;
mod openapi;
mod state;

use axum::http::{header, HeaderName, HeaderValue, Method};
use axum::{routing::get, Router};
use bordergate_api_auth::auth_router;
use bordergate_api_passengers::passengers_router;
use config::Config;
use health::health_handler;
use state::AppState;
use std::net::SocketAddr;
use tokio::signal;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

#[tokio::main]
async fn main() {
    // Pick up a local .env in development; absent files are fine.
    let _ = dotenvy::dotenv();

    // Load configuration (fail-fast on missing required values)
    let config = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    logging::init_logging(&config.rust_log);

    info!(
        version = env!("CARGO_PKG_VERSION"),
        host = %config.host,
        port = config.port,
        "Starting bordergate API"
    );

    // A weak signing key or bad hashing cost refuses startup.
    let app_state = match state::build_state(&config) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    let app = build_app(app_state, &config);

    // Bind and serve
    let addr: SocketAddr = match format!("{}:{}", config.host, config.port).parse() {
        Ok(a) => a,
        Err(e) => {
            tracing::error!("Invalid bind address '{}:{}': {e}", config.host, config.port);
            std::process::exit(1);
        }
    };

    info!(%addr, "Server listening");

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            tracing::error!("Failed to bind to address {addr}: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        tracing::error!("Server error: {e}");
        std::process::exit(1);
    }

    info!("Server shutdown complete");
}

/// Compose the application router.
fn build_app(app_state: AppState, config: &Config) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .nest("/auth", auth_router(app_state.auth))
        .nest("/passengers", passengers_router(app_state.passengers))
        .merge(openapi::openapi_router())
        .layer(build_cors_layer(&config.cors_allowed_origin))
        .layer(TraceLayer::new_for_http())
}

/// Build the CORS layer for the configured frontend origin.
///
/// Only the single configured origin is allowed; an unparseable origin
/// yields a layer that allows no cross-origin requests at all.
fn build_cors_layer(origin: &str) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([
            header::AUTHORIZATION,
            header::CONTENT_TYPE,
            HeaderName::from_static("x-reauth-password"),
        ]);

    match origin.parse::<HeaderValue>() {
        Ok(value) => layer.allow_origin(value),
        Err(e) => {
            tracing::warn!(origin = %origin, "Invalid CORS origin, cross-origin requests disabled: {e}");
            layer
        }
    }
}

/// Graceful shutdown signal handler (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        match signal::ctrl_c().await {
            Ok(()) => {}
            Err(e) => {
                tracing::error!("Failed to install Ctrl+C handler: {e}");
                // Fall through - we still want to wait for terminate signal
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {e}");
                // Wait forever if we can't install the handler
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown");
        }
        () = terminate => {
            info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
