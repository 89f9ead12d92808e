//! Handlers for the authentication endpoints.

pub mod login;
pub mod reauth;
pub mod register;

pub use login::login_handler;
pub use reauth::reauth_handler;
pub use register::register_handler;

use crate::error::ApiAuthError;

/// Collapse validator field errors into a single validation error.
pub(crate) fn validation_error(e: &validator::ValidationErrors) -> ApiAuthError {
    let errors: Vec<String> = e
        .field_errors()
        .values()
        .flat_map(|errors| {
            errors
                .iter()
                .filter_map(|e| e.message.as_ref().map(std::string::ToString::to_string))
        })
        .collect();
    ApiAuthError::Validation(errors.join(", "))
}
