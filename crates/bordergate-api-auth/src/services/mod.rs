//! Services for the authentication API.

mod auth_service;

pub use auth_service::AuthService;
