//! Authentication service for account operations.
//!
//! Handles account registration and credential verification against the
//! credential store.

use crate::error::ApiAuthError;
use bordergate_auth::PasswordHasher;
use bordergate_core::Role;
use bordergate_db::{Account, CredentialStore, NewAccount};
use std::sync::Arc;

/// Service for account registration and login.
pub struct AuthService {
    store: Arc<dyn CredentialStore>,
    hasher: PasswordHasher,
}

impl AuthService {
    /// Create a new authentication service.
    #[must_use]
    pub fn new(store: Arc<dyn CredentialStore>, hasher: PasswordHasher) -> Self {
        Self { store, hasher }
    }

    /// Register a new account.
    ///
    /// The role defaults to `User` when not supplied. Uniqueness is
    /// enforced by the store's atomic `create`; the plaintext password
    /// is hashed before it leaves this function.
    ///
    /// # Errors
    ///
    /// - `ApiAuthError::DuplicateUsername` if the username is taken
    /// - `ApiAuthError::Internal` if hashing or the store fails
    pub async fn register(
        &self,
        username: &str,
        password: &str,
        role: Option<Role>,
    ) -> Result<Account, ApiAuthError> {
        let role = role.unwrap_or_default();

        let password_hash = self
            .hasher
            .hash(password)
            .map_err(|e| ApiAuthError::Internal(format!("Password hashing failed: {e}")))?;

        let account = self
            .store
            .create(NewAccount {
                username: username.to_string(),
                password_hash,
                role,
            })
            .await?;

        tracing::info!(
            username = %account.username,
            role = %account.role,
            "New account registered"
        );

        Ok(account)
    }

    /// Authenticate an account with username and password.
    ///
    /// # Errors
    ///
    /// Returns `ApiAuthError::InvalidCredentials` whether the username
    /// is unknown or the password is wrong; callers cannot tell which.
    pub async fn login(&self, username: &str, password: &str) -> Result<Account, ApiAuthError> {
        let account = self.store.find(username).await?;

        let Some(account) = account else {
            tracing::debug!(username, "Login attempt for unknown username");
            return Err(ApiAuthError::InvalidCredentials);
        };

        if !self.hasher.verify(password, &account.password_hash) {
            tracing::debug!(username = %account.username, "Login attempt with wrong password");
            return Err(ApiAuthError::InvalidCredentials);
        }

        tracing::info!(username = %account.username, "Login succeeded");
        Ok(account)
    }
}
