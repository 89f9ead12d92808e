//! Passenger API router configuration.
//!
//! Routes (all behind the JWT middleware):
//! - GET /passengers
//! - GET /passengers/:id
//! - POST /passengers
//! - PUT /passengers/:id
//! - DELETE /passengers/:id

use crate::handlers::{
    create_passenger_handler, delete_passenger_handler, get_passenger_handler,
    list_passengers_handler, update_passenger_handler,
};
use axum::{middleware, routing::get, Extension, Router};
use bordergate_api_auth::jwt_auth_middleware;
use bordergate_auth::TokenVerifier;
use bordergate_authorization::AuthorizationGate;
use bordergate_db::PassengerStore;
use std::sync::Arc;

/// Shared state for the passenger routes.
#[derive(Clone)]
pub struct PassengersState {
    /// Passenger record store.
    pub store: Arc<dyn PassengerStore>,
    /// Token verifier for the JWT middleware.
    pub token_verifier: Arc<TokenVerifier>,
    /// Authorization gate for role and re-auth checks.
    pub gate: Arc<AuthorizationGate>,
}

/// Build the passenger router. Every route requires a valid bearer
/// token; role and re-auth checks happen in the handlers.
pub fn passengers_router(state: PassengersState) -> Router {
    Router::new()
        .route(
            "/",
            get(list_passengers_handler).post(create_passenger_handler),
        )
        .route(
            "/:id",
            get(get_passenger_handler)
                .put(update_passenger_handler)
                .delete(delete_passenger_handler),
        )
        .layer(middleware::from_fn(jwt_auth_middleware))
        .layer(Extension(state.store))
        .layer(Extension(state.token_verifier))
        .layer(Extension(state.gate))
}
