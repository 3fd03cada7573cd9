//! Route definitions for the API.

use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::handlers;
use crate::AppState;

/// OpenAPI documentation.
#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::home,
        handlers::info,
        handlers::health,
        handlers::calc,
    ),
    components(schemas(
        crate::api::types::HomeResponse,
        crate::api::types::InfoResponse,
        crate::api::types::HealthResponse,
        crate::api::types::CalcResponse,
    )),
    tags(
        (name = "meta", description = "Welcome and application information"),
        (name = "health", description = "Health and status endpoints"),
        (name = "calc", description = "Demo calculator endpoints")
    ),
    info(
        title = "Beacon API",
        version = "0.1.0",
        description = "Minimal JSON smoke-test service",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

/// Build the API router.
///
/// Every response, including the not-found fallback, carries a wildcard
/// CORS header so browser frontends on any origin can call the service.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handlers::home))
        .route("/info", get(handlers::info))
        .route("/health", get(handlers::health))
        .route("/calc/{a}/{b}", get(handlers::calc))
        .fallback(handlers::not_found)
        .with_state(state)
        // OpenAPI docs
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
