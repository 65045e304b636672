//! Router configuration for the API.

use axum::{Router, middleware};
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::doc::ApiDoc;
use crate::api::handlers;
use crate::api::middleware::{logging_middleware, request_id_middleware};
use crate::state::AppState;

pub const OPENAPI_JSON_PATH: &str = "/api-docs/openapi.json";

/// Creates the application router with all routes, docs and middleware.
///
/// # Routes
/// - `/api/v1/employee...` - employee CRUD
/// - `/health` - liveness probe
/// - `/swagger-ui` - interactive docs backed by `/api-docs/openapi.json`
///
/// # Middleware Order
/// The last layer added runs first: request ID, then logging.
pub fn create_router(state: AppState) -> Router {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .nest("/api/v1", handlers::employees::employee_routes())
        .merge(handlers::health::health_routes())
        .split_for_parts();

    router
        .merge(SwaggerUi::new("/swagger-ui").url(OPENAPI_JSON_PATH, api))
        .fallback(handlers::fallback::not_found)
        .layer(middleware::from_fn(logging_middleware))
        .layer(middleware::from_fn(request_id_middleware))
        .with_state(state)
}
