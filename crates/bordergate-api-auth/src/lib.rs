//! Authentication API endpoints for bordergate.
//!
//! This crate provides the REST endpoints for account authentication:
//! - Registration (POST /auth/register)
//! - Login (POST /auth/login)
//! - Re-authentication (POST /auth/reauth)
//!
//! plus the JWT middleware that protected routes in other API crates
//! reuse.
//!
//! # Example
//!
//! ```rust,ignore
//! use bordergate_api_auth::{auth_router, AuthState};
//! use axum::Router;
//!
//! let app = Router::new().nest("/auth", auth_router(state));
//! ```

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod router;
pub mod services;

pub use error::{ApiAuthError, ProblemDetails};
pub use middleware::jwt_auth_middleware;
pub use models::{LoginRequest, ReauthRequest, RegisterRequest, RegisterResponse, TokenResponse};
pub use router::{auth_router, AuthState};
pub use services::AuthService;
