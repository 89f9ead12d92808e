//! Password hashing and bearer token handling for bordergate.
//!
//! This crate provides:
//! - Argon2id password hashing and fail-closed verification
//! - HS256 JWT issuing with issuer/audience/expiry claims
//! - JWT verification that collapses every failure into a single
//!   `InvalidToken` outcome
//!
//! # Example
//!
//! ```
//! use bordergate_auth::{PasswordHasher, TokenIssuer, TokenVerifier};
//! use bordergate_core::Role;
//! use chrono::Duration;
//!
//! let secret = b"an-example-signing-secret-of-32b";
//! let issuer = TokenIssuer::new(secret, "bordergate", "bordergate-api", Duration::minutes(20))
//!     .unwrap();
//! let verifier = TokenVerifier::new(secret, "bordergate", "bordergate-api").unwrap();
//!
//! let token = issuer.issue("alice", Role::Admin).unwrap();
//! let claims = verifier.verify(&token).unwrap();
//! assert_eq!(claims.sub, "alice");
//! assert_eq!(claims.role, Role::Admin);
//! ```

mod claims;
mod error;
mod password;
mod token;

pub use claims::Claims;
pub use error::AuthError;
pub use password::PasswordHasher;
pub use token::{TokenIssuer, TokenVerifier, MIN_SIGNING_KEY_BYTES};
