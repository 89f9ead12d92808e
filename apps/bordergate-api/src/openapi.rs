//! `OpenAPI` documentation configuration.
//!
//! Generates the `OpenAPI` spec with utoipa and serves it as plain JSON
//! at `/api-docs/openapi.json`.

use axum::{routing::get, Json, Router};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

/// Security scheme modifier for Bearer authentication.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_token",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

/// `OpenAPI` documentation for the bordergate API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "bordergate API",
        version = "0.1.0",
        description = "Border-entry passenger records API"
    ),
    servers(
        (url = "http://localhost:8080", description = "Development server")
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Service health"),
        (name = "Authentication", description = "Registration, login and re-authentication"),
        (name = "Passengers", description = "Border-entry passenger records")
    ),
    paths(
        crate::health::health_handler,
        bordergate_api_auth::handlers::register::register_handler,
        bordergate_api_auth::handlers::login::login_handler,
        bordergate_api_auth::handlers::reauth::reauth_handler,
        bordergate_api_passengers::handlers::list_passengers_handler,
        bordergate_api_passengers::handlers::get_passenger_handler,
        bordergate_api_passengers::handlers::create_passenger_handler,
        bordergate_api_passengers::handlers::update_passenger_handler,
        bordergate_api_passengers::handlers::delete_passenger_handler,
    ),
    components(schemas(
        bordergate_api_auth::RegisterRequest,
        bordergate_api_auth::LoginRequest,
        bordergate_api_auth::ReauthRequest,
        bordergate_api_auth::RegisterResponse,
        bordergate_api_auth::TokenResponse,
        bordergate_db::Passenger,
        bordergate_db::NewPassenger,
        bordergate_core::Role,
    ))
)]
pub struct ApiDoc;

/// Router serving the generated spec as JSON.
pub fn openapi_router() -> Router {
    Router::new().route(
        "/api-docs/openapi.json",
        get(|| async { Json(ApiDoc::openapi()) }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_spec_has_paths() {
        let spec = ApiDoc::openapi();
        assert!(spec.paths.paths.contains_key("/health"));
        assert!(spec.paths.paths.contains_key("/auth/register"));
        assert!(spec.paths.paths.contains_key("/auth/login"));
        assert!(spec.paths.paths.contains_key("/passengers"));
    }
}
