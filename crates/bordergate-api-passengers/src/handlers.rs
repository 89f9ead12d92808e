//! Passenger CRUD endpoint handlers.
//!
//! Reads are open to both roles; create, update and delete are Admin
//! only and additionally require a fresh password in the
//! `X-Reauth-Password` header, verified against the credential store's
//! live record.

use crate::error::ApiPassengersError;
use axum::{
    extract::Path,
    http::{HeaderMap, StatusCode},
    Extension, Json,
};
use bordergate_auth::Claims;
use bordergate_authorization::{Action, AuthorizationGate};
use bordergate_core::PassengerId;
use bordergate_db::{NewPassenger, Passenger, PassengerStore};
use std::sync::Arc;

/// Header carrying the fresh password for destructive operations.
///
/// Header values are limited to visible ASCII; passwords containing
/// other characters cannot be proven through this header.
pub const REAUTH_HEADER: &str = "X-Reauth-Password";

/// Pull the re-auth password out of the request headers, if present.
///
/// A value outside visible ASCII is treated as absent, so the gate
/// denies the action. The value is passed straight to the gate and
/// never logged.
fn reauth_password(headers: &HeaderMap) -> Option<&str> {
    headers.get(REAUTH_HEADER).and_then(|v| v.to_str().ok())
}

/// List all passenger records.
#[utoipa::path(
    get,
    path = "/passengers",
    responses(
        (status = 200, description = "All passenger records", body = [Passenger]),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Role not permitted"),
    ),
    security(("bearer_token" = [])),
    tag = "Passengers"
)]
pub async fn list_passengers_handler(
    Extension(gate): Extension<Arc<AuthorizationGate>>,
    Extension(store): Extension<Arc<dyn PassengerStore>>,
    Extension(claims): Extension<Claims>,
) -> Result<Json<Vec<Passenger>>, ApiPassengersError> {
    gate.authorize(&claims, Action::ReadPassenger, None).await?;

    let passengers = store.list().await?;
    Ok(Json(passengers))
}

/// Fetch a single passenger record.
#[utoipa::path(
    get,
    path = "/passengers/{id}",
    params(("id" = PassengerId, Path, description = "Passenger record id")),
    responses(
        (status = 200, description = "The passenger record", body = Passenger),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Role not permitted"),
        (status = 404, description = "No such passenger"),
    ),
    security(("bearer_token" = [])),
    tag = "Passengers"
)]
pub async fn get_passenger_handler(
    Extension(gate): Extension<Arc<AuthorizationGate>>,
    Extension(store): Extension<Arc<dyn PassengerStore>>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<PassengerId>,
) -> Result<Json<Passenger>, ApiPassengersError> {
    gate.authorize(&claims, Action::ReadPassenger, None).await?;

    let passenger = store
        .find(id)
        .await?
        .ok_or(ApiPassengersError::NotFound)?;
    Ok(Json(passenger))
}

/// Create a passenger record. Admin only, re-auth required.
#[utoipa::path(
    post,
    path = "/passengers",
    request_body = NewPassenger,
    responses(
        (status = 201, description = "Passenger created", body = Passenger),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Role not permitted or re-auth failed"),
    ),
    security(("bearer_token" = [])),
    tag = "Passengers"
)]
pub async fn create_passenger_handler(
    Extension(gate): Extension<Arc<AuthorizationGate>>,
    Extension(store): Extension<Arc<dyn PassengerStore>>,
    Extension(claims): Extension<Claims>,
    headers: HeaderMap,
    Json(request): Json<NewPassenger>,
) -> Result<(StatusCode, Json<Passenger>), ApiPassengersError> {
    gate.authorize(&claims, Action::CreatePassenger, reauth_password(&headers))
        .await?;

    let passenger = store.create(request).await?;
    tracing::info!(
        passenger_id = %passenger.id,
        full_name = %passenger.full_name,
        by = %claims.sub,
        "Passenger created"
    );
    Ok((StatusCode::CREATED, Json(passenger)))
}

/// Replace a passenger record. Admin only, re-auth required.
#[utoipa::path(
    put,
    path = "/passengers/{id}",
    params(("id" = PassengerId, Path, description = "Passenger record id")),
    request_body = NewPassenger,
    responses(
        (status = 200, description = "Passenger updated", body = Passenger),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Role not permitted or re-auth failed"),
        (status = 404, description = "No such passenger"),
    ),
    security(("bearer_token" = [])),
    tag = "Passengers"
)]
pub async fn update_passenger_handler(
    Extension(gate): Extension<Arc<AuthorizationGate>>,
    Extension(store): Extension<Arc<dyn PassengerStore>>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<PassengerId>,
    headers: HeaderMap,
    Json(request): Json<NewPassenger>,
) -> Result<Json<Passenger>, ApiPassengersError> {
    gate.authorize(&claims, Action::UpdatePassenger, reauth_password(&headers))
        .await?;

    let passenger = store.update(id, request).await?;
    tracing::info!(
        passenger_id = %passenger.id,
        full_name = %passenger.full_name,
        by = %claims.sub,
        "Passenger updated"
    );
    Ok(Json(passenger))
}

/// Delete a passenger record. Admin only, re-auth required.
#[utoipa::path(
    delete,
    path = "/passengers/{id}",
    params(("id" = PassengerId, Path, description = "Passenger record id")),
    responses(
        (status = 204, description = "Passenger deleted"),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Role not permitted or re-auth failed"),
        (status = 404, description = "No such passenger"),
    ),
    security(("bearer_token" = [])),
    tag = "Passengers"
)]
pub async fn delete_passenger_handler(
    Extension(gate): Extension<Arc<AuthorizationGate>>,
    Extension(store): Extension<Arc<dyn PassengerStore>>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<PassengerId>,
    headers: HeaderMap,
) -> Result<StatusCode, ApiPassengersError> {
    gate.authorize(&claims, Action::DeletePassenger, reauth_password(&headers))
        .await?;

    store.delete(id).await?;
    tracing::info!(passenger_id = %id, by = %claims.sub, "Passenger deleted");
    Ok(StatusCode::NO_CONTENT)
}
