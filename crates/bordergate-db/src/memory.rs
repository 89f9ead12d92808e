//! In-memory store implementations.
//!
//! Back the binary and the test suites. Uniqueness and atomicity are
//! provided by taking the write lock across the whole check-then-insert
//! section.

use crate::error::StoreError;
use crate::models::{Account, NewAccount, NewPassenger, Passenger};
use crate::store::{CredentialStore, PassengerStore};
use bordergate_core::{AccountId, PassengerId};
use chrono::Utc;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// In-memory credential store keyed by username.
#[derive(Debug, Default)]
pub struct MemoryCredentialStore {
    accounts: RwLock<HashMap<String, Account>>,
}

impl MemoryCredentialStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl CredentialStore for MemoryCredentialStore {
    async fn exists(&self, username: &str) -> Result<bool, StoreError> {
        Ok(self.accounts.read().await.contains_key(username))
    }

    async fn create(&self, account: NewAccount) -> Result<Account, StoreError> {
        let mut accounts = self.accounts.write().await;

        // Check and insert under a single write lock: exactly one of any
        // set of concurrent creators for the same username wins.
        if accounts.contains_key(&account.username) {
            return Err(StoreError::DuplicateUsername);
        }

        let record = Account {
            id: AccountId::new(),
            username: account.username.clone(),
            password_hash: account.password_hash,
            role: account.role,
            created_at: Utc::now(),
        };
        accounts.insert(account.username, record.clone());
        Ok(record)
    }

    async fn find(&self, username: &str) -> Result<Option<Account>, StoreError> {
        Ok(self.accounts.read().await.get(username).cloned())
    }

    async fn update(&self, account: &Account) -> Result<(), StoreError> {
        let mut accounts = self.accounts.write().await;
        match accounts.get_mut(&account.username) {
            Some(existing) => {
                *existing = account.clone();
                Ok(())
            }
            None => Err(StoreError::NotFound),
        }
    }

    async fn delete(&self, username: &str) -> Result<(), StoreError> {
        match self.accounts.write().await.remove(username) {
            Some(_) => Ok(()),
            None => Err(StoreError::NotFound),
        }
    }
}

/// In-memory passenger store keyed by record id.
#[derive(Debug, Default)]
pub struct MemoryPassengerStore {
    passengers: RwLock<HashMap<PassengerId, Passenger>>,
}

impl MemoryPassengerStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl PassengerStore for MemoryPassengerStore {
    async fn list(&self) -> Result<Vec<Passenger>, StoreError> {
        let mut records: Vec<Passenger> =
            self.passengers.read().await.values().cloned().collect();
        // Deterministic order for listings.
        records.sort_by(|a, b| {
            a.entry_date
                .cmp(&b.entry_date)
                .then_with(|| a.id.as_uuid().cmp(b.id.as_uuid()))
        });
        Ok(records)
    }

    async fn find(&self, id: PassengerId) -> Result<Option<Passenger>, StoreError> {
        Ok(self.passengers.read().await.get(&id).cloned())
    }

    async fn create(&self, passenger: NewPassenger) -> Result<Passenger, StoreError> {
        let record = Passenger {
            id: PassengerId::new(),
            full_name: passenger.full_name,
            passport_number: passenger.passport_number,
            nationality: passenger.nationality,
            entry_date: passenger.entry_date,
        };
        self.passengers
            .write()
            .await
            .insert(record.id, record.clone());
        Ok(record)
    }

    async fn update(
        &self,
        id: PassengerId,
        fields: NewPassenger,
    ) -> Result<Passenger, StoreError> {
        let mut passengers = self.passengers.write().await;
        match passengers.get_mut(&id) {
            Some(existing) => {
                existing.full_name = fields.full_name;
                existing.passport_number = fields.passport_number;
                existing.nationality = fields.nationality;
                existing.entry_date = fields.entry_date;
                Ok(existing.clone())
            }
            None => Err(StoreError::NotFound),
        }
    }

    async fn delete(&self, id: PassengerId) -> Result<(), StoreError> {
        match self.passengers.write().await.remove(&id) {
            Some(_) => Ok(()),
            None => Err(StoreError::NotFound),
        }
    }
}
