//! Application state construction.
//!
//! Wires the configured signing key and hashing cost into the auth
//! components, backed by in-memory stores.

use crate::config::Config;
use bordergate_api_auth::{AuthService, AuthState};
use bordergate_api_passengers::PassengersState;
use bordergate_auth::{AuthError, PasswordHasher, TokenIssuer, TokenVerifier};
use bordergate_authorization::AuthorizationGate;
use bordergate_db::{CredentialStore, MemoryCredentialStore, MemoryPassengerStore, PassengerStore};
use chrono::Duration;
use std::sync::Arc;

/// Fully wired application state for both routers.
pub struct AppState {
    /// State for the `/auth` routes.
    pub auth: AuthState,
    /// State for the `/passengers` routes.
    pub passengers: PassengersState,
}

/// Build the application state from configuration.
///
/// # Errors
///
/// Returns `AuthError` if the signing key is too short or the hashing
/// cost parameters are invalid. Both are fatal at startup.
pub fn build_state(config: &Config) -> Result<AppState, AuthError> {
    let hasher = PasswordHasher::with_params(
        config.hash_cost.memory_kib,
        config.hash_cost.iterations,
        config.hash_cost.parallelism,
    )?;

    let token_issuer = Arc::new(TokenIssuer::new(
        &config.jwt.secret,
        config.jwt.issuer.clone(),
        config.jwt.audience.clone(),
        Duration::seconds(config.jwt.ttl_secs),
    )?);
    let token_verifier = Arc::new(TokenVerifier::new(
        &config.jwt.secret,
        config.jwt.issuer.clone(),
        config.jwt.audience.clone(),
    )?);

    let credential_store: Arc<dyn CredentialStore> = Arc::new(MemoryCredentialStore::new());
    let passenger_store: Arc<dyn PassengerStore> = Arc::new(MemoryPassengerStore::new());

    let gate = Arc::new(AuthorizationGate::new(
        credential_store.clone(),
        hasher.clone(),
    ));
    let auth_service = Arc::new(AuthService::new(credential_store, hasher));

    Ok(AppState {
        auth: AuthState {
            auth_service,
            token_issuer,
            token_verifier: token_verifier.clone(),
            gate: gate.clone(),
        },
        passengers: PassengersState {
            store: passenger_store,
            token_verifier,
            gate,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{HashCostConfig, JwtConfig};

    fn test_config() -> Config {
        Config {
            host: "127.0.0.1".to_string(),
            port: 0,
            rust_log: "info".to_string(),
            cors_allowed_origin: "http://localhost:4200".to_string(),
            jwt: JwtConfig {
                secret: b"a-test-signing-secret-of-32-bytes!!".to_vec(),
                issuer: "bordergate".to_string(),
                audience: "bordergate-api".to_string(),
                ttl_secs: 1200,
            },
            hash_cost: HashCostConfig {
                memory_kib: 4096,
                iterations: 1,
                parallelism: 1,
            },
        }
    }

    #[test]
    fn test_build_state_succeeds() {
        let state = build_state(&test_config()).unwrap();
        assert_eq!(state.auth.token_issuer.ttl_secs(), 1200);
    }

    #[test]
    fn test_build_state_rejects_short_key() {
        let mut config = test_config();
        config.jwt.secret = b"too-short".to_vec();
        assert!(build_state(&config).is_err());
    }
}
