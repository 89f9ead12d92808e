//! Test helpers for bordergate-api-auth integration tests.
//!
//! Builds the composed application (auth plus passenger routes) over
//! in-memory stores, the way the binary wires it, and provides request
//! helpers around `tower::ServiceExt::oneshot`.

#![allow(dead_code)]

use axum::body::Body;
use axum::http::{header, Method, Request, Response, StatusCode};
use axum::Router;
use bordergate_api_auth::{auth_router, AuthService, AuthState};
use bordergate_api_passengers::{passengers_router, PassengersState, REAUTH_HEADER};
use bordergate_auth::{PasswordHasher, TokenIssuer, TokenVerifier};
use bordergate_authorization::AuthorizationGate;
use bordergate_db::{CredentialStore, MemoryCredentialStore, MemoryPassengerStore, PassengerStore};
use chrono::Duration;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

/// Signing secret for tests. 35 bytes, above the 32-byte minimum.
pub const TEST_SECRET: &[u8] = b"integration-test-signing-secret-35b";

/// Build the composed test application.
///
/// Hashing uses reduced cost so the suite stays fast; everything else
/// matches production wiring.
pub fn test_app() -> Router {
    test_app_with_ttl(Duration::seconds(1200))
}

/// Build the composed test application with a custom token lifetime.
pub fn test_app_with_ttl(ttl: Duration) -> Router {
    let hasher = PasswordHasher::with_params(4096, 1, 1).expect("valid test hash params");

    let token_issuer = Arc::new(
        TokenIssuer::new(TEST_SECRET, "bordergate", "bordergate-api", ttl)
            .expect("valid test signing key"),
    );
    let token_verifier = Arc::new(
        TokenVerifier::new(TEST_SECRET, "bordergate", "bordergate-api")
            .expect("valid test signing key"),
    );

    let credential_store: Arc<dyn CredentialStore> = Arc::new(MemoryCredentialStore::new());
    let passenger_store: Arc<dyn PassengerStore> = Arc::new(MemoryPassengerStore::new());

    let gate = Arc::new(AuthorizationGate::new(
        credential_store.clone(),
        hasher.clone(),
    ));
    let auth_service = Arc::new(AuthService::new(credential_store, hasher));

    Router::new()
        .nest(
            "/auth",
            auth_router(AuthState {
                auth_service,
                token_issuer,
                token_verifier: token_verifier.clone(),
                gate: gate.clone(),
            }),
        )
        .nest(
            "/passengers",
            passengers_router(PassengersState {
                store: passenger_store,
                token_verifier,
                gate,
            }),
        )
}

/// Send a request and return the response.
pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    reauth_password: Option<&str>,
    body: Option<Value>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);

    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    if let Some(password) = reauth_password {
        builder = builder.header(REAUTH_HEADER, password);
    }

    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .expect("valid test request"),
        None => builder.body(Body::empty()).expect("valid test request"),
    };

    app.clone()
        .oneshot(request)
        .await
        .expect("request should not fail at the transport level")
}

/// Read a response body as JSON.
pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should collect")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body should be JSON")
}

/// Register an account through the API.
pub async fn register(app: &Router, username: &str, password: &str, role: Option<&str>) {
    let mut payload = json!({ "username": username, "password": password });
    if let Some(role) = role {
        payload["role"] = json!(role);
    }

    let response = send(
        app,
        Method::POST,
        "/auth/register",
        None,
        None,
        Some(payload),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
}

/// Log in through the API and return the bearer token.
pub async fn login(app: &Router, username: &str, password: &str) -> String {
    let response = send(
        app,
        Method::POST,
        "/auth/login",
        None,
        None,
        Some(json!({ "username": username, "password": password })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    body["token"]
        .as_str()
        .expect("login response carries a token")
        .to_string()
}

/// A passenger record payload for create and update requests.
pub fn passenger_payload(full_name: &str) -> Value {
    json!({
        "full_name": full_name,
        "passport_number": "X1234567",
        "nationality": "NL",
        "entry_date": "2026-08-27T10:00:00Z"
    })
}
