//! Store abstractions for bordergate.
//!
//! Persistence is a collaborator, not part of the core: this crate
//! defines the models and the [`CredentialStore`] / [`PassengerStore`]
//! traits the rest of the system consumes, plus in-memory
//! implementations used by the binary and by tests. A real backing
//! engine implements the same traits behind the same atomicity
//! guarantees.

pub mod error;
pub mod memory;
pub mod models;
pub mod store;

pub use error::StoreError;
pub use memory::{MemoryCredentialStore, MemoryPassengerStore};
pub use models::{Account, NewAccount, NewPassenger, Passenger};
pub use store::{CredentialStore, PassengerStore};
