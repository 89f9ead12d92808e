//! Passenger record API endpoints for bordergate.
//!
//! Role-gated CRUD over border-entry passenger records:
//! - GET /passengers, GET /passengers/:id — User or Admin
//! - POST, PUT, DELETE — Admin only, with a fresh password in the
//!   `X-Reauth-Password` header checked against the live credential
//!   record. Header transport limits the password to visible ASCII.

pub mod error;
pub mod handlers;
pub mod router;

pub use error::ApiPassengersError;
pub use handlers::REAUTH_HEADER;
pub use router::{passengers_router, PassengersState};
