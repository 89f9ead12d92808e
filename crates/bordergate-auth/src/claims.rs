//! Bearer token claims.

use bordergate_core::Role;
use serde::{Deserialize, Serialize};

/// Claims carried in a signed bearer token.
///
/// # Standard claims (RFC 7519)
///
/// - `sub`: Subject (the account's username)
/// - `iss`: Issuer
/// - `aud`: Audience
/// - `exp`: Expiration time (Unix timestamp)
/// - `iat`: Issued at (Unix timestamp)
/// - `jti`: Unique token identifier
///
/// # Custom claims
///
/// - `role`: The account role at issuance time. Read paths trust this
///   value outright; destructive paths re-resolve the live account
///   instead, since a token cannot reflect a role change after issue.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Claims {
    /// Subject - the account's username.
    pub sub: String,

    /// Issuer - who created the token.
    pub iss: String,

    /// Audience - intended recipient.
    pub aud: String,

    /// Expiration time as Unix timestamp.
    pub exp: i64,

    /// Issued at as Unix timestamp.
    pub iat: i64,

    /// Unique identifier for this token.
    pub jti: String,

    /// Account role at issuance time.
    pub role: Role,
}
