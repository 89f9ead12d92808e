//! Error types for the passenger API.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use bordergate_api_auth::ProblemDetails;
use bordergate_authorization::AuthzError;
use bordergate_db::StoreError;

/// Error type for the passenger API.
#[derive(Debug, thiserror::Error)]
pub enum ApiPassengersError {
    /// Passenger record not found.
    #[error("Passenger not found")]
    NotFound,

    /// Role or re-authentication failure.
    #[error("Unauthorized")]
    Unauthorized,

    /// Internal server error. Detail is logged, never returned.
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl From<StoreError> for ApiPassengersError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound => ApiPassengersError::NotFound,
            other => ApiPassengersError::Internal(other.to_string()),
        }
    }
}

impl From<AuthzError> for ApiPassengersError {
    fn from(_: AuthzError) -> Self {
        ApiPassengersError::Unauthorized
    }
}

/// Build a problem-details body in the same shape the auth API uses.
fn problem(problem_type: &str, title: &str, status: StatusCode, detail: &str) -> ProblemDetails {
    ProblemDetails {
        problem_type: format!("https://bordergate.dev/problems/{problem_type}"),
        title: title.to_string(),
        status: status.as_u16(),
        detail: Some(detail.to_string()),
    }
}

impl IntoResponse for ApiPassengersError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            ApiPassengersError::NotFound => (
                StatusCode::NOT_FOUND,
                problem(
                    "not-found",
                    "Not Found",
                    StatusCode::NOT_FOUND,
                    "Passenger not found",
                ),
            ),
            ApiPassengersError::Unauthorized => (
                StatusCode::FORBIDDEN,
                problem(
                    "unauthorized",
                    "Forbidden",
                    StatusCode::FORBIDDEN,
                    "Not permitted to perform this action",
                ),
            ),
            ApiPassengersError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    problem(
                        "internal-error",
                        "Internal Server Error",
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "An internal error occurred",
                    ),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
