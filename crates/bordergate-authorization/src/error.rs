//! Error types for authorization decisions.

use thiserror::Error;

/// Authorization failure.
#[derive(Debug, Clone, Error)]
pub enum AuthzError {
    /// The caller may not perform the requested action.
    ///
    /// Role mismatch, missing re-authentication, a stale account and a
    /// wrong re-auth password all collapse into this single variant so a
    /// caller cannot probe which check failed.
    #[error("Unauthorized")]
    Unauthorized,
}
