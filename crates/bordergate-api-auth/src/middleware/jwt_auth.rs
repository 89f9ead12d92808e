//! JWT authentication middleware.
//!
//! Extracts the bearer token from the Authorization header, verifies it,
//! and inserts the token's [`Claims`] into the request extensions for
//! handlers downstream. Any verification failure produces the same
//! 401 response.

use axum::{
    body::Body,
    extract::Request,
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};
use bordergate_auth::{Claims, TokenVerifier};
use std::sync::Arc;

/// JWT authentication middleware.
///
/// # Usage
///
/// ```rust,ignore
/// use axum::{middleware, Extension, Router};
///
/// let router = Router::new()
///     .route("/passengers", get(list_passengers))
///     .layer(middleware::from_fn(jwt_auth_middleware))
///     .layer(Extension(verifier));
/// ```
pub async fn jwt_auth_middleware(
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, Response> {
    let verifier = request
        .extensions()
        .get::<Arc<TokenVerifier>>()
        .cloned()
        .ok_or_else(|| {
            tracing::error!("Token verifier not configured");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Server configuration error",
            )
                .into_response()
        })?;

    let auth_header = request
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| {
            (StatusCode::UNAUTHORIZED, "Missing Authorization header").into_response()
        })?;

    let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
        (
            StatusCode::UNAUTHORIZED,
            "Invalid Authorization header format",
        )
            .into_response()
    })?;

    if token.is_empty() {
        tracing::warn!("Rejected empty bearer token");
        return Err((StatusCode::UNAUTHORIZED, "Invalid or expired token").into_response());
    }

    let claims: Claims = verifier.verify(token).map_err(|_| {
        // Signature, issuer, audience and expiry failures all land here
        // with the same response body. The token itself is never logged.
        tracing::warn!("Rejected bearer token");
        (StatusCode::UNAUTHORIZED, "Invalid or expired token").into_response()
    })?;

    tracing::debug!(username = %claims.sub, role = %claims.role, "Authenticated request");
    request.extensions_mut().insert(claims);

    Ok(next.run(request).await)
}
