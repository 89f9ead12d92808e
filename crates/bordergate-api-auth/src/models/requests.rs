//! Request DTOs for authentication endpoints.

use bordergate_core::Role;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Registration request payload.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct RegisterRequest {
    /// Username. Case-sensitive, unique.
    #[validate(length(min = 1, max = 64, message = "Username must be 1-64 characters"))]
    pub username: String,

    /// Password. No length floor; the cap bounds hashing cost.
    #[validate(length(min = 1, max = 1024, message = "Password must be 1-1024 characters"))]
    pub password: String,

    /// Requested role. Defaults to `User` when omitted.
    #[serde(default)]
    pub role: Option<Role>,
}

/// Login request payload.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    /// Username.
    #[validate(length(min = 1, max = 64, message = "Username must be 1-64 characters"))]
    pub username: String,

    /// Password.
    /// Length cap prevents `DoS` via extremely long passwords that would
    /// consume excessive CPU during hashing.
    #[validate(length(min = 1, max = 1024, message = "Password must be 1-1024 characters"))]
    pub password: String,
}

/// Re-authentication request payload.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct ReauthRequest {
    /// The caller's current password.
    #[validate(length(min = 1, max = 1024, message = "Password must be 1-1024 characters"))]
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_request_role_defaults_to_none() {
        let request: RegisterRequest =
            serde_json::from_str(r#"{"username":"alice","password":"pw123secret"}"#).unwrap();
        assert_eq!(request.role, None);
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_register_request_rejects_empty_username() {
        let request: RegisterRequest =
            serde_json::from_str(r#"{"username":"","password":"pw123secret"}"#).unwrap();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_register_request_accepts_short_password() {
        // No length floor on registration passwords.
        let request: RegisterRequest =
            serde_json::from_str(r#"{"username":"alice","password":"pw123"}"#).unwrap();
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_register_request_rejects_empty_password() {
        let request: RegisterRequest =
            serde_json::from_str(r#"{"username":"alice","password":""}"#).unwrap();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_register_request_with_role() {
        let request: RegisterRequest = serde_json::from_str(
            r#"{"username":"root","password":"pw123secret","role":"Admin"}"#,
        )
        .unwrap();
        assert_eq!(request.role, Some(bordergate_core::Role::Admin));
    }

    #[test]
    fn test_login_request_rejects_empty_password() {
        let request: LoginRequest =
            serde_json::from_str(r#"{"username":"alice","password":""}"#).unwrap();
        assert!(request.validate().is_err());
    }
}
