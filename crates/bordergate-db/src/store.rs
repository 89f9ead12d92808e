//! Store traits consumed by the core.
//!
//! All operations are atomic from the caller's perspective; concurrency
//! control is the implementation's responsibility.

use crate::error::StoreError;
use crate::models::{Account, NewAccount, NewPassenger, Passenger};
use bordergate_core::PassengerId;

/// Credential storage: username -> account records.
#[async_trait::async_trait]
pub trait CredentialStore: Send + Sync {
    /// Check whether a username is taken.
    async fn exists(&self, username: &str) -> Result<bool, StoreError>;

    /// Create an account.
    ///
    /// Must resolve the check-then-insert race atomically and return
    /// `StoreError::DuplicateUsername` when the username is taken, even
    /// under concurrent creation attempts.
    async fn create(&self, account: NewAccount) -> Result<Account, StoreError>;

    /// Look up an account by username.
    async fn find(&self, username: &str) -> Result<Option<Account>, StoreError>;

    /// Replace an existing account record.
    async fn update(&self, account: &Account) -> Result<(), StoreError>;

    /// Delete an account by username.
    async fn delete(&self, username: &str) -> Result<(), StoreError>;
}

/// Passenger record storage.
#[async_trait::async_trait]
pub trait PassengerStore: Send + Sync {
    /// List all passenger records.
    async fn list(&self) -> Result<Vec<Passenger>, StoreError>;

    /// Look up a passenger record by id.
    async fn find(&self, id: PassengerId) -> Result<Option<Passenger>, StoreError>;

    /// Create a passenger record.
    async fn create(&self, passenger: NewPassenger) -> Result<Passenger, StoreError>;

    /// Replace the passenger record with the given id.
    async fn update(&self, id: PassengerId, fields: NewPassenger)
        -> Result<Passenger, StoreError>;

    /// Delete a passenger record by id.
    async fn delete(&self, id: PassengerId) -> Result<(), StoreError>;
}
