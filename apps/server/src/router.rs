use axum::Router;
use axum::http::{Method, header};
use ohm::kernel::prelude::ApiState;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_scalar::{Scalar, Servable};

#[derive(OpenApi)]
#[openapi(info(title = "Ohm Calculator", description = "Resistor color-code calculator"))]
struct ApiDoc;

/// Assembles the full application router; the interactive API reference lives at `/api`.
#[must_use]
pub(crate) fn init(state: ApiState) -> Router {
    let cors = state.config.server.cors;

    // Separate the OpenAPI routes and the API documentation object
    let (openapi_routes, api_doc) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .merge(ohm::server::router::system_router())
        .merge(ohm::server::router::resistor_router())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
        .split_for_parts();

    let app = Router::new().merge(openapi_routes).merge(Scalar::with_url("/api", api_doc));

    if cors { app.layer(cors_layer()) } else { app }
}

fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE])
}
