//! Password hashing with Argon2id.
//!
//! Provides salted, adaptive password hashing and fail-closed
//! verification using Argon2id with OWASP-recommended parameters.

use crate::error::AuthError;
use argon2::{
    password_hash::{
        rand_core::OsRng, PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString,
    },
    Algorithm, Argon2, Params, Version,
};

/// Password hasher.
///
/// Uses OWASP 2024 recommended parameters for Argon2id by default:
/// - Memory: 19456 KiB (19 MiB)
/// - Iterations: 2
/// - Parallelism: 1
#[derive(Debug, Clone)]
pub struct PasswordHasher {
    params: Params,
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl PasswordHasher {
    /// Create a new password hasher with OWASP-recommended parameters.
    #[must_use]
    pub fn new() -> Self {
        // m=19456 (19 MiB), t=2, p=1. Hardcoded constants that are always
        // valid; a failure here indicates a bug in the argon2 crate.
        let params = Params::new(19456, 2, 1, None)
            .expect("OWASP 2024 Argon2 parameters are valid constants");

        Self { params }
    }

    /// Create a password hasher with custom cost parameters.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::HashingFailed` if the parameters are invalid.
    pub fn with_params(
        memory_kib: u32,
        iterations: u32,
        parallelism: u32,
    ) -> Result<Self, AuthError> {
        let params = Params::new(memory_kib, iterations, parallelism, None)
            .map_err(|e| AuthError::HashingFailed(format!("Invalid parameters: {e}")))?;

        Ok(Self { params })
    }

    /// Hash a password using Argon2id.
    ///
    /// Each call draws a fresh random salt, so two hashes of the same
    /// password differ.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::HashingFailed` if hashing fails.
    pub fn hash(&self, password: &str) -> Result<String, AuthError> {
        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone());

        let hash = argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AuthError::HashingFailed(format!("Hashing failed: {e}")))?;

        Ok(hash.to_string())
    }

    /// Verify a password against a PHC-formatted hash.
    ///
    /// Fails closed: a malformed hash string yields `false`, never an
    /// error that could bypass the caller's branch. Comparison is
    /// constant-time within the argon2 crate.
    #[must_use]
    pub fn verify(&self, password: &str, hash: &str) -> bool {
        let Ok(parsed_hash) = PasswordHash::new(hash) else {
            return false;
        };

        let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone());

        argon2
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok()
    }
}
