use super::health;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

/// Liveness (`GET /`) and health (`GET /health`) routes.
pub fn system_router<S>() -> OpenApiRouter<S>
where
    S: Send + Sync + Clone + 'static,
{
    OpenApiRouter::<S>::new()
        .routes(routes!(health::root_handler))
        .routes(routes!(health::health_handler))
}
