//! Application configuration loaded from environment variables.
//!
//! Fail-fast loading with validation: required variables must be present
//! and valid or the application exits with a clear error before binding
//! a socket. The signing key in particular is never defaulted; a missing
//! or weak key refuses startup.

use std::env;
use thiserror::Error;

/// Minimum signing key length in bytes, matching the token layer.
const MIN_SIGNING_KEY_BYTES: usize = 32;

/// Configuration loading errors. All fatal at startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required environment variable is missing.
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    /// An environment variable could not be parsed.
    #[error("Invalid value for {name}: {message}")]
    InvalidVar {
        /// Variable name.
        name: &'static str,
        /// What was wrong with it.
        message: String,
    },

    /// The signing key is present but too short to be safe.
    #[error("BORDERGATE_JWT_SECRET too short: {0} bytes, need at least 32")]
    WeakSigningKey(usize),
}

/// Token-related configuration.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// Symmetric signing key, at least 32 bytes.
    pub secret: Vec<u8>,
    /// Issuer claim value.
    pub issuer: String,
    /// Audience claim value.
    pub audience: String,
    /// Token lifetime in seconds.
    pub ttl_secs: i64,
}

/// Password hashing cost configuration.
#[derive(Debug, Clone, Copy)]
pub struct HashCostConfig {
    /// Argon2 memory cost in KiB.
    pub memory_kib: u32,
    /// Argon2 iteration count.
    pub iterations: u32,
    /// Argon2 parallelism degree.
    pub parallelism: u32,
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Bind host.
    pub host: String,
    /// Bind port.
    pub port: u16,
    /// Log filter directive.
    pub rust_log: String,
    /// Allowed CORS origin for the frontend.
    pub cors_allowed_origin: String,
    /// Token configuration.
    pub jwt: JwtConfig,
    /// Password hashing cost.
    pub hash_cost: HashCostConfig,
}

impl Config {
    /// Load configuration from the environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` on a missing signing key, a key shorter
    /// than 32 bytes, or any unparseable variable. Callers must treat
    /// every variant as fatal.
    pub fn from_env() -> Result<Self, ConfigError> {
        let secret = env::var("BORDERGATE_JWT_SECRET")
            .map_err(|_| ConfigError::MissingVar("BORDERGATE_JWT_SECRET"))?;
        let secret = validate_signing_key(&secret)?;

        Ok(Self {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: parse_var("PORT", 8080)?,
            rust_log: env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            cors_allowed_origin: env::var("CORS_ALLOWED_ORIGIN")
                .unwrap_or_else(|_| "http://localhost:4200".to_string()),
            jwt: JwtConfig {
                secret,
                issuer: env::var("BORDERGATE_JWT_ISSUER")
                    .unwrap_or_else(|_| "bordergate".to_string()),
                audience: env::var("BORDERGATE_JWT_AUDIENCE")
                    .unwrap_or_else(|_| "bordergate-api".to_string()),
                ttl_secs: parse_var("BORDERGATE_TOKEN_TTL_SECS", 1200)?,
            },
            hash_cost: HashCostConfig {
                memory_kib: parse_var("BORDERGATE_ARGON2_MEMORY_KIB", 19456)?,
                iterations: parse_var("BORDERGATE_ARGON2_ITERATIONS", 2)?,
                parallelism: parse_var("BORDERGATE_ARGON2_PARALLELISM", 1)?,
            },
        })
    }
}

/// Check the signing key length. The key is taken as raw UTF-8 bytes.
fn validate_signing_key(secret: &str) -> Result<Vec<u8>, ConfigError> {
    let bytes = secret.as_bytes();
    if bytes.len() < MIN_SIGNING_KEY_BYTES {
        return Err(ConfigError::WeakSigningKey(bytes.len()));
    }
    Ok(bytes.to_vec())
}

/// Read an optional env var, parsing it when present.
fn parse_var<T>(name: &'static str, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(value) => value.parse().map_err(|e: T::Err| ConfigError::InvalidVar {
            name,
            message: e.to_string(),
        }),
        Err(_) => Ok(default),
    }
}
