//! Authorization for bordergate.
//!
//! A static policy table maps actions to the roles allowed to invoke
//! them, and [`AuthorizationGate`] evaluates a verified identity against
//! it. Destructive actions additionally require a fresh password proof
//! checked against the credential store's live record.

mod error;
mod gate;
mod policy;

pub use error::AuthzError;
pub use gate::AuthorizationGate;
pub use policy::Action;
