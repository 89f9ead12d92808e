//! bordergate core library.
//!
//! Shared types for the border-entry backend.
//!
//! # Modules
//!
//! - [`ids`] - Strongly typed identifiers (`AccountId`, `PassengerId`)
//! - [`role`] - The account role enumeration
//!
//! # Example
//!
//! ```
//! use bordergate_core::{PassengerId, Role};
//!
//! let id = PassengerId::new();
//! let role = Role::default();
//! assert_eq!(role, Role::User);
//! ```

pub mod ids;
pub mod role;

pub use ids::{AccountId, ParseIdError, PassengerId};
pub use role::Role;
