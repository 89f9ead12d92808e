//! Response DTOs for authentication endpoints.

use bordergate_core::{AccountId, Role};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Successful registration response.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RegisterResponse {
    /// The new account's identifier.
    pub id: AccountId,
    /// The registered username.
    pub username: String,
    /// The role the account was created with.
    pub role: Role,
}

/// Successful login response.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TokenResponse {
    /// The signed bearer token.
    pub token: String,
    /// Always "Bearer".
    pub token_type: String,
    /// Token lifetime in seconds.
    pub expires_in: i64,
}

impl TokenResponse {
    #[must_use]
    pub fn bearer(token: String, expires_in: i64) -> Self {
        Self {
            token,
            token_type: "Bearer".to_string(),
            expires_in,
        }
    }
}
