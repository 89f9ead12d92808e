//! Authentication API router configuration.
//!
//! Routes:
//! - POST /auth/register
//! - POST /auth/login
//! - POST /auth/reauth (bearer token required)

use crate::handlers::{login_handler, reauth_handler, register_handler};
use crate::middleware::jwt_auth_middleware;
use crate::services::AuthService;
use axum::{middleware, routing::post, Extension, Router};
use bordergate_auth::{TokenIssuer, TokenVerifier};
use bordergate_authorization::AuthorizationGate;
use std::sync::Arc;

/// Shared state for the authentication routes.
#[derive(Clone)]
pub struct AuthState {
    /// Registration and login service.
    pub auth_service: Arc<AuthService>,
    /// Token issuer for login.
    pub token_issuer: Arc<TokenIssuer>,
    /// Token verifier for the protected re-auth route.
    pub token_verifier: Arc<TokenVerifier>,
    /// Authorization gate for re-authentication.
    pub gate: Arc<AuthorizationGate>,
}

/// Build the authentication router.
pub fn auth_router(state: AuthState) -> Router {
    // Public routes: no token required.
    let public_routes = Router::new()
        .route("/register", post(register_handler))
        .route("/login", post(login_handler));

    // Re-auth requires a valid bearer token first.
    let protected_routes = Router::new()
        .route("/reauth", post(reauth_handler))
        .layer(middleware::from_fn(jwt_auth_middleware));

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(Extension(state.auth_service))
        .layer(Extension(state.token_issuer))
        .layer(Extension(state.token_verifier))
        .layer(Extension(state.gate))
}
