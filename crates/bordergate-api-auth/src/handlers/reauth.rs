//! Re-authentication endpoint handler.
//!
//! POST /auth/reauth - Prove the current password for the authenticated
//! identity. Admin only; used before destructive operations.

use crate::error::ApiAuthError;
use crate::handlers::validation_error;
use crate::models::ReauthRequest;
use axum::{Extension, Json};
use bordergate_auth::Claims;
use bordergate_authorization::{Action, AuthorizationGate};
use std::sync::Arc;
use validator::Validate;

/// Handle re-authentication.
///
/// The identity comes from the verified token; the password is checked
/// against the credential store's live record, not the token's claims.
#[utoipa::path(
    post,
    path = "/auth/reauth",
    request_body = ReauthRequest,
    responses(
        (status = 200, description = "Password verified", body = bool),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Wrong role or wrong password"),
    ),
    security(("bearer_token" = [])),
    tag = "Authentication"
)]
pub async fn reauth_handler(
    Extension(gate): Extension<Arc<AuthorizationGate>>,
    Extension(claims): Extension<Claims>,
    Json(request): Json<ReauthRequest>,
) -> Result<Json<bool>, ApiAuthError> {
    request.validate().map_err(|e| validation_error(&e))?;

    gate.authorize(&claims, Action::Reauthenticate, Some(&request.password))
        .await?;

    Ok(Json(true))
}
