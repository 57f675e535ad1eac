// Router assembly
//
// Health, Swagger UI and the OpenAPI document are always served at the root.
// API routes can be nested under a prefix (API_PREFIX).

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;
use std::sync::Arc;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api;
use crate::openapi::ApiDoc;
use crate::services::WorkflowService;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
    workflows_loaded: usize,
}

async fn health(State(state): State<HealthState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        workflows_loaded: state.service.descriptions_loaded(),
    })
}

/// State for health endpoint
#[derive(Clone)]
struct HealthState {
    service: Arc<WorkflowService>,
}

/// Build the complete application router
pub fn build_app(service: Arc<WorkflowService>, api_prefix: &str) -> Router {
    let health_state = HealthState {
        service: service.clone(),
    };
    let workflows_state = api::workflows::AppState::new(service);

    let api_routes = Router::new().merge(api::workflows::routes(workflows_state));

    // Build main router with health (not prefixed) and prefixed API routes
    let app = Router::new()
        .route("/health", get(health).with_state(health_state))
        .merge(build_router_with_prefix(api_routes, api_prefix));

    // Add Swagger UI
    let app =
        app.merge(SwaggerUi::new("/swagger-ui").url("/api-doc/openapi.json", ApiDoc::openapi()));

    app.layer(cors_layer()).layer(TraceLayer::new_for_http())
}

/// CORS policy: any origin, method and header, credentials allowed
///
/// Wildcards cannot be combined with credentials, so the request's origin,
/// method and headers are mirrored back instead.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

/// Nest API routes under `api_prefix`; an empty prefix leaves them at the root
pub fn build_router_with_prefix<S: Clone + Send + Sync + 'static>(
    api_routes: Router<S>,
    api_prefix: &str,
) -> Router<S> {
    if api_prefix.is_empty() {
        api_routes
    } else {
        Router::new().nest(api_prefix, api_routes)
    }
}
