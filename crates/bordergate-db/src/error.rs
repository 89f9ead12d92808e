//! Error types for store operations.

use thiserror::Error;

/// Errors surfaced by store implementations.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// An account with this username already exists.
    ///
    /// `create` must report this atomically; callers may pre-check with
    /// `exists` but cannot rely on it under concurrency.
    #[error("Username already exists")]
    DuplicateUsername,

    /// The requested record was not found.
    #[error("Record not found")]
    NotFound,

    /// The backing engine failed.
    #[error("Store backend error: {0}")]
    Backend(String),
}
