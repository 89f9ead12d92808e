//! Login endpoint handler.
//!
//! POST /auth/login - Authenticate and issue a bearer token.

use crate::error::ApiAuthError;
use crate::handlers::validation_error;
use crate::models::{LoginRequest, TokenResponse};
use crate::services::AuthService;
use axum::{Extension, Json};
use bordergate_auth::TokenIssuer;
use std::sync::Arc;
use validator::Validate;

/// Handle login.
///
/// Verifies the credentials against the store and mints a signed,
/// expiring bearer token carrying the account's username and role.
/// Unknown usernames and wrong passwords produce the same response.
#[utoipa::path(
    post,
    path = "/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = TokenResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Invalid credentials"),
    ),
    tag = "Authentication"
)]
pub async fn login_handler(
    Extension(auth_service): Extension<Arc<AuthService>>,
    Extension(token_issuer): Extension<Arc<TokenIssuer>>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<TokenResponse>, ApiAuthError> {
    request.validate().map_err(|e| validation_error(&e))?;

    let account = auth_service
        .login(&request.username, &request.password)
        .await?;

    let token = token_issuer
        .issue(&account.username, account.role)
        .map_err(|e| ApiAuthError::Internal(format!("Token signing failed: {e}")))?;

    Ok(Json(TokenResponse::bearer(token, token_issuer.ttl_secs())))
}
