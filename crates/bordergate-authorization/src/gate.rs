//! The authorization gate.

use crate::error::AuthzError;
use crate::policy::Action;
use bordergate_auth::{Claims, PasswordHasher};
use bordergate_db::CredentialStore;
use std::sync::Arc;

/// Decides whether a verified identity may perform an action.
///
/// Role checks for read actions use the token's embedded role; its
/// staleness is bounded by the short token TTL. Destructive actions do
/// not trust the token: the gate re-resolves the account from the
/// credential store, requires the live record to still carry an allowed
/// role, and verifies a freshly supplied password against the live hash.
pub struct AuthorizationGate {
    store: Arc<dyn CredentialStore>,
    hasher: PasswordHasher,
}

impl AuthorizationGate {
    /// Create a gate over the given credential store.
    #[must_use]
    pub fn new(store: Arc<dyn CredentialStore>, hasher: PasswordHasher) -> Self {
        Self { store, hasher }
    }

    /// Authorize `claims` to perform `action`.
    ///
    /// For actions where [`Action::requires_reauth`] is true,
    /// `reauth_password` must carry the caller's current password.
    ///
    /// # Errors
    ///
    /// Returns `AuthzError::Unauthorized` on any failed check. The
    /// variant is deliberately uniform; the specific reason is only
    /// logged server-side.
    pub async fn authorize(
        &self,
        claims: &Claims,
        action: Action,
        reauth_password: Option<&str>,
    ) -> Result<(), AuthzError> {
        if !action.allowed_roles().contains(&claims.role) {
            tracing::warn!(
                username = %claims.sub,
                role = %claims.role,
                action = %action,
                "Denied: role not permitted for action"
            );
            return Err(AuthzError::Unauthorized);
        }

        if !action.requires_reauth() {
            return Ok(());
        }

        let Some(password) = reauth_password else {
            tracing::warn!(
                username = %claims.sub,
                action = %action,
                "Denied: destructive action without re-authentication"
            );
            return Err(AuthzError::Unauthorized);
        };

        self.verify_live_credentials(&claims.sub, password, action)
            .await
    }

    /// Check a fresh password against the store's current record.
    ///
    /// The token's role claim is ignored here: a role revoked after
    /// issuance must deny the action even while the token is still valid.
    async fn verify_live_credentials(
        &self,
        username: &str,
        password: &str,
        action: Action,
    ) -> Result<(), AuthzError> {
        let account = match self.store.find(username).await {
            Ok(Some(account)) => account,
            Ok(None) => {
                tracing::warn!(username, action = %action, "Denied: account no longer exists");
                return Err(AuthzError::Unauthorized);
            }
            Err(err) => {
                tracing::error!(username, action = %action, error = %err, "Credential lookup failed");
                return Err(AuthzError::Unauthorized);
            }
        };

        if !action.allowed_roles().contains(&account.role) {
            tracing::warn!(
                username,
                live_role = %account.role,
                action = %action,
                "Denied: live role no longer permits destructive action"
            );
            return Err(AuthzError::Unauthorized);
        }

        if !self.hasher.verify(password, &account.password_hash) {
            tracing::warn!(username, action = %action, "Denied: re-authentication password mismatch");
            return Err(AuthzError::Unauthorized);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bordergate_core::Role;
    use bordergate_db::{MemoryCredentialStore, NewAccount};
    use chrono::Utc;

    fn claims_for(username: &str, role: Role) -> Claims {
        let now = Utc::now().timestamp();
        Claims {
            sub: username.to_string(),
            iss: "bordergate".to_string(),
            aud: "bordergate-api".to_string(),
            exp: now + 1200,
            iat: now,
            jti: "test".to_string(),
            role,
        }
    }

    async fn gate_with_accounts() -> AuthorizationGate {
        let hasher = PasswordHasher::with_params(4096, 1, 1).unwrap();
        let store = Arc::new(MemoryCredentialStore::new());

        store
            .create(NewAccount {
                username: "admin".to_string(),
                password_hash: hasher.hash("admin-pw").unwrap(),
                role: Role::Admin,
            })
            .await
            .unwrap();
        store
            .create(NewAccount {
                username: "user".to_string(),
                password_hash: hasher.hash("user-pw").unwrap(),
                role: Role::User,
            })
            .await
            .unwrap();

        AuthorizationGate::new(store, hasher)
    }

    #[tokio::test]
    async fn test_read_allowed_for_both_roles() {
        let gate = gate_with_accounts().await;

        for (name, role) in [("user", Role::User), ("admin", Role::Admin)] {
            gate.authorize(&claims_for(name, role), Action::ReadPassenger, None)
                .await
                .unwrap();
        }
    }

    #[tokio::test]
    async fn test_user_denied_destructive_action() {
        let gate = gate_with_accounts().await;

        let result = gate
            .authorize(
                &claims_for("user", Role::User),
                Action::DeletePassenger,
                Some("user-pw"),
            )
            .await;
        assert!(matches!(result, Err(AuthzError::Unauthorized)));
    }

    #[tokio::test]
    async fn test_admin_needs_reauth_password() {
        let gate = gate_with_accounts().await;
        let claims = claims_for("admin", Role::Admin);

        // Missing password.
        assert!(gate
            .authorize(&claims, Action::DeletePassenger, None)
            .await
            .is_err());

        // Wrong password.
        assert!(gate
            .authorize(&claims, Action::DeletePassenger, Some("wrong"))
            .await
            .is_err());

        // Correct password.
        gate.authorize(&claims, Action::DeletePassenger, Some("admin-pw"))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_forged_admin_claims_denied_by_live_record() {
        let gate = gate_with_accounts().await;

        // A token claiming Admin for an account whose live record is
        // User must be denied even with the correct password.
        let result = gate
            .authorize(
                &claims_for("user", Role::Admin),
                Action::DeletePassenger,
                Some("user-pw"),
            )
            .await;
        assert!(matches!(result, Err(AuthzError::Unauthorized)));
    }

    #[tokio::test]
    async fn test_live_role_checked_against_policy_table() {
        let gate = gate_with_accounts().await;

        // The live-record check follows the policy table for every
        // re-auth action, not a fixed role.
        for action in [
            Action::CreatePassenger,
            Action::UpdatePassenger,
            Action::DeletePassenger,
            Action::Reauthenticate,
        ] {
            gate.authorize(&claims_for("admin", Role::Admin), action, Some("admin-pw"))
                .await
                .unwrap();

            let denied = gate
                .authorize(&claims_for("user", Role::Admin), action, Some("user-pw"))
                .await;
            assert!(matches!(denied, Err(AuthzError::Unauthorized)));
        }
    }

    #[tokio::test]
    async fn test_deleted_account_denied() {
        let hasher = PasswordHasher::with_params(4096, 1, 1).unwrap();
        let store = Arc::new(MemoryCredentialStore::new());
        let gate = AuthorizationGate::new(store, hasher);

        let result = gate
            .authorize(
                &claims_for("ghost", Role::Admin),
                Action::DeletePassenger,
                Some("whatever"),
            )
            .await;
        assert!(matches!(result, Err(AuthzError::Unauthorized)));
    }

    #[tokio::test]
    async fn test_reauth_action() {
        let gate = gate_with_accounts().await;

        gate.authorize(
            &claims_for("admin", Role::Admin),
            Action::Reauthenticate,
            Some("admin-pw"),
        )
        .await
        .unwrap();

        assert!(gate
            .authorize(
                &claims_for("user", Role::User),
                Action::Reauthenticate,
                Some("user-pw"),
            )
            .await
            .is_err());
    }
}
