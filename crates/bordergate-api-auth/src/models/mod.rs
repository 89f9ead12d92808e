//! Request and response DTOs for the authentication endpoints.

mod requests;
mod responses;

pub use requests::{LoginRequest, ReauthRequest, RegisterRequest};
pub use responses::{RegisterResponse, TokenResponse};
