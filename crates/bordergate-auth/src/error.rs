//! Error types for authentication operations.

use thiserror::Error;

/// Authentication error types.
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    /// The configured signing key is shorter than the required minimum.
    ///
    /// This is a startup precondition, not a runtime-recoverable error:
    /// callers are expected to refuse to start the service.
    #[error("Signing key too short: {0} bytes, need at least 32")]
    WeakSigningKey(usize),

    /// Token failed verification.
    ///
    /// Deliberately carries no detail: signature, issuer, audience and
    /// expiry failures all collapse into this variant so callers cannot
    /// leak which check failed.
    #[error("Invalid token")]
    InvalidToken,

    /// Token could not be signed.
    #[error("Token signing failed: {0}")]
    SigningFailed(String),

    /// Password hashing operation failed.
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),
}

impl AuthError {
    /// Check if this error indicates a rejected token.
    #[must_use]
    pub fn is_invalid_token(&self) -> bool {
        matches!(self, AuthError::InvalidToken)
    }
}
