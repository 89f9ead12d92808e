//! Error types for the authentication API.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use bordergate_authorization::AuthzError;
use bordergate_db::StoreError;
use serde::Serialize;
use utoipa::ToSchema;

/// Error type for the authentication API.
#[derive(Debug, thiserror::Error)]
pub enum ApiAuthError {
    /// Bad username/password at login. Does not reveal which was wrong.
    #[error("Invalid username or password")]
    InvalidCredentials,

    /// Registration conflict: username already taken.
    #[error("Username already exists")]
    DuplicateUsername,

    /// Role or re-authentication failure.
    #[error("Unauthorized")]
    Unauthorized,

    /// Input validation failure.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Internal server error. Detail is logged, never returned.
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl From<StoreError> for ApiAuthError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::DuplicateUsername => ApiAuthError::DuplicateUsername,
            other => ApiAuthError::Internal(other.to_string()),
        }
    }
}

impl From<AuthzError> for ApiAuthError {
    fn from(_: AuthzError) -> Self {
        ApiAuthError::Unauthorized
    }
}

/// RFC 7807 Problem Details response format.
#[derive(Debug, Serialize, ToSchema)]
pub struct ProblemDetails {
    #[serde(rename = "type")]
    pub problem_type: String,
    pub title: String,
    pub status: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl ProblemDetails {
    fn new(problem_type: &str, title: &str, status: StatusCode, detail: impl Into<String>) -> Self {
        Self {
            problem_type: format!("https://bordergate.dev/problems/{problem_type}"),
            title: title.to_string(),
            status: status.as_u16(),
            detail: Some(detail.into()),
        }
    }
}

impl IntoResponse for ApiAuthError {
    fn into_response(self) -> Response {
        let (status, problem) = match &self {
            ApiAuthError::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                ProblemDetails::new(
                    "invalid-credentials",
                    "Unauthorized",
                    StatusCode::UNAUTHORIZED,
                    "Invalid username or password",
                ),
            ),
            ApiAuthError::DuplicateUsername => (
                StatusCode::CONFLICT,
                ProblemDetails::new(
                    "conflict",
                    "Conflict",
                    StatusCode::CONFLICT,
                    "Username already exists",
                ),
            ),
            ApiAuthError::Unauthorized => (
                StatusCode::FORBIDDEN,
                ProblemDetails::new(
                    "unauthorized",
                    "Forbidden",
                    StatusCode::FORBIDDEN,
                    "Not permitted to perform this action",
                ),
            ),
            ApiAuthError::Validation(msg) => (
                StatusCode::BAD_REQUEST,
                ProblemDetails::new(
                    "validation-error",
                    "Validation Error",
                    StatusCode::BAD_REQUEST,
                    msg.clone(),
                ),
            ),
            ApiAuthError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ProblemDetails::new(
                        "internal-error",
                        "Internal Server Error",
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "An internal error occurred",
                    ),
                )
            }
        };

        (status, Json(problem)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            ApiAuthError::InvalidCredentials.to_string(),
            "Invalid username or password"
        );
        assert_eq!(
            ApiAuthError::DuplicateUsername.to_string(),
            "Username already exists"
        );
        assert_eq!(ApiAuthError::Unauthorized.to_string(), "Unauthorized");
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ApiAuthError::InvalidCredentials.into_response().status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ApiAuthError::DuplicateUsername.into_response().status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            ApiAuthError::Unauthorized.into_response().status(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            ApiAuthError::Validation("bad".to_string())
                .into_response()
                .status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiAuthError::Internal("boom".to_string())
                .into_response()
                .status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_store_error_conversion() {
        assert!(matches!(
            ApiAuthError::from(StoreError::DuplicateUsername),
            ApiAuthError::DuplicateUsername
        ));
        assert!(matches!(
            ApiAuthError::from(StoreError::Backend("down".to_string())),
            ApiAuthError::Internal(_)
        ));
    }

    #[test]
    fn test_authz_error_conversion() {
        assert!(matches!(
            ApiAuthError::from(AuthzError::Unauthorized),
            ApiAuthError::Unauthorized
        ));
    }
}
