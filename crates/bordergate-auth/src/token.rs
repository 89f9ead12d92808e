//! Bearer token issue and verify with HS256.
//!
//! Tokens are self-contained: the signed payload carries identity, role,
//! issuer, audience and expiry, so verification needs no server-side
//! session state.

use crate::claims::Claims;
use crate::error::AuthError;
use bordergate_core::Role;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use uuid::Uuid;

/// Minimum signing key length in bytes (256 bits for HMAC-SHA-256).
pub const MIN_SIGNING_KEY_BYTES: usize = 32;

fn check_key_length(secret: &[u8]) -> Result<(), AuthError> {
    if secret.len() < MIN_SIGNING_KEY_BYTES {
        return Err(AuthError::WeakSigningKey(secret.len()));
    }
    Ok(())
}

/// Issues signed, expiring bearer tokens.
#[derive(Clone)]
pub struct TokenIssuer {
    key: EncodingKey,
    issuer: String,
    audience: String,
    ttl: Duration,
}

impl TokenIssuer {
    /// Create a token issuer.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::WeakSigningKey` if the secret is shorter than
    /// [`MIN_SIGNING_KEY_BYTES`]. Callers must treat this as fatal at
    /// startup rather than a runtime condition.
    pub fn new(
        secret: &[u8],
        issuer: impl Into<String>,
        audience: impl Into<String>,
        ttl: Duration,
    ) -> Result<Self, AuthError> {
        check_key_length(secret)?;

        Ok(Self {
            key: EncodingKey::from_secret(secret),
            issuer: issuer.into(),
            audience: audience.into(),
            ttl,
        })
    }

    /// Token lifetime in whole seconds.
    #[must_use]
    pub fn ttl_secs(&self) -> i64 {
        self.ttl.num_seconds()
    }

    /// Build and sign a token for the given identity and role.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::SigningFailed` if encoding fails.
    pub fn issue(&self, username: &str, role: Role) -> Result<String, AuthError> {
        let now = Utc::now();
        let claims = Claims {
            sub: username.to_string(),
            iss: self.issuer.clone(),
            aud: self.audience.clone(),
            exp: (now + self.ttl).timestamp(),
            iat: now.timestamp(),
            jti: Uuid::new_v4().to_string(),
            role,
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.key)
            .map_err(|e| AuthError::SigningFailed(e.to_string()))
    }
}

impl std::fmt::Debug for TokenIssuer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Key material is never printed.
        f.debug_struct("TokenIssuer")
            .field("issuer", &self.issuer)
            .field("audience", &self.audience)
            .field("ttl_secs", &self.ttl.num_seconds())
            .finish_non_exhaustive()
    }
}

/// Validates bearer tokens and extracts their claims.
///
/// Verification is a pure function of the token, the configured key,
/// issuer and audience, and the current wall-clock time.
#[derive(Clone)]
pub struct TokenVerifier {
    key: DecodingKey,
    validation: Validation,
}

impl TokenVerifier {
    /// Create a token verifier.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::WeakSigningKey` if the secret is shorter than
    /// [`MIN_SIGNING_KEY_BYTES`].
    pub fn new(
        secret: &[u8],
        issuer: impl Into<String>,
        audience: impl Into<String>,
    ) -> Result<Self, AuthError> {
        check_key_length(secret)?;

        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.set_issuer(&[issuer.into()]);
        validation.set_audience(&[audience.into()]);

        Ok(Self {
            key: DecodingKey::from_secret(secret),
            validation,
        })
    }

    /// Decode and validate a token.
    ///
    /// Checks the signature, issuer, audience and expiry.
    ///
    /// # Errors
    ///
    /// Every failure yields `AuthError::InvalidToken`; the caller learns
    /// nothing about which check failed.
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        decode::<Claims>(token, &self.key, &self.validation)
            .map(|data| data.claims)
            .map_err(|_| AuthError::InvalidToken)
    }
}

impl std::fmt::Debug for TokenVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenVerifier").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_SECRET: &[u8] = b"test-signing-secret-0123456789abcdef";
    const OTHER_SECRET: &[u8] = b"other-signing-secret-0123456789abcd";

    fn issuer(ttl: Duration) -> TokenIssuer {
        TokenIssuer::new(TEST_SECRET, "bordergate", "bordergate-api", ttl).unwrap()
    }

    fn verifier() -> TokenVerifier {
        TokenVerifier::new(TEST_SECRET, "bordergate", "bordergate-api").unwrap()
    }

    #[test]
    fn test_issue_then_verify_roundtrip() {
        let token = issuer(Duration::minutes(20))
            .issue("alice", Role::Admin)
            .unwrap();

        assert_eq!(token.split('.').count(), 3);

        let claims = verifier().verify(&token).unwrap();
        assert_eq!(claims.sub, "alice");
        assert_eq!(claims.role, Role::Admin);
        assert_eq!(claims.iss, "bordergate");
        assert_eq!(claims.aud, "bordergate-api");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_tokens_carry_unique_jti() {
        let issuer = issuer(Duration::minutes(20));
        let t1 = issuer.issue("alice", Role::User).unwrap();
        let t2 = issuer.issue("alice", Role::User).unwrap();
        assert_ne!(t1, t2);
    }

    #[test]
    fn test_expired_token_rejected() {
        let token = issuer(Duration::seconds(-120))
            .issue("alice", Role::User)
            .unwrap();

        let err = verifier().verify(&token).unwrap_err();
        assert!(matches!(err, AuthError::InvalidToken));
    }

    #[test]
    fn test_wrong_key_rejected() {
        let token = issuer(Duration::minutes(20))
            .issue("alice", Role::User)
            .unwrap();

        let other = TokenVerifier::new(OTHER_SECRET, "bordergate", "bordergate-api").unwrap();
        assert!(matches!(
            other.verify(&token),
            Err(AuthError::InvalidToken)
        ));
    }

    #[test]
    fn test_wrong_issuer_rejected() {
        let token = issuer(Duration::minutes(20))
            .issue("alice", Role::User)
            .unwrap();

        let other = TokenVerifier::new(TEST_SECRET, "someone-else", "bordergate-api").unwrap();
        assert!(matches!(
            other.verify(&token),
            Err(AuthError::InvalidToken)
        ));
    }

    #[test]
    fn test_wrong_audience_rejected() {
        let token = issuer(Duration::minutes(20))
            .issue("alice", Role::User)
            .unwrap();

        let other = TokenVerifier::new(TEST_SECRET, "bordergate", "other-api").unwrap();
        assert!(matches!(
            other.verify(&token),
            Err(AuthError::InvalidToken)
        ));
    }

    #[test]
    fn test_tampered_token_rejected() {
        let token = issuer(Duration::minutes(20))
            .issue("alice", Role::User)
            .unwrap();

        // Flip a character in the payload segment.
        let mut parts: Vec<String> = token.split('.').map(String::from).collect();
        let mut payload: Vec<u8> = parts[1].clone().into_bytes();
        payload[0] = if payload[0] == b'A' { b'B' } else { b'A' };
        parts[1] = String::from_utf8(payload).unwrap();
        let tampered = parts.join(".");

        assert!(matches!(
            verifier().verify(&tampered),
            Err(AuthError::InvalidToken)
        ));
    }

    #[test]
    fn test_garbage_token_rejected() {
        assert!(matches!(
            verifier().verify("not-a-token"),
            Err(AuthError::InvalidToken)
        ));
        assert!(matches!(
            verifier().verify(""),
            Err(AuthError::InvalidToken)
        ));
    }

    #[test]
    fn test_short_key_rejected_at_construction() {
        let short = b"sixteen-byte-key";
        assert!(matches!(
            TokenIssuer::new(short, "bordergate", "bordergate-api", Duration::minutes(20)),
            Err(AuthError::WeakSigningKey(16))
        ));
        assert!(matches!(
            TokenVerifier::new(short, "bordergate", "bordergate-api"),
            Err(AuthError::WeakSigningKey(16))
        ));
    }

    #[test]
    fn test_ttl_secs() {
        assert_eq!(issuer(Duration::minutes(20)).ttl_secs(), 1200);
    }
}
