//! Registration endpoint handler.
//!
//! POST /auth/register - Create a new account.

use crate::error::ApiAuthError;
use crate::handlers::validation_error;
use crate::models::{RegisterRequest, RegisterResponse};
use crate::services::AuthService;
use axum::{http::StatusCode, Extension, Json};
use std::sync::Arc;
use validator::Validate;

/// Handle account registration.
///
/// The password is hashed before storage; the role defaults to `User`
/// when omitted.
#[utoipa::path(
    post,
    path = "/auth/register",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Account created", body = RegisterResponse),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Username already exists"),
    ),
    tag = "Authentication"
)]
pub async fn register_handler(
    Extension(auth_service): Extension<Arc<AuthService>>,
    Json(request): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<RegisterResponse>), ApiAuthError> {
    request.validate().map_err(|e| validation_error(&e))?;

    let account = auth_service
        .register(&request.username, &request.password, request.role)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            id: account.id,
            username: account.username,
            role: account.role,
        }),
    ))
}
