//! Application assembly: routes plus the middleware stack.

use axum::{Router, middleware};
use tower_http::cors::{Any, CorsLayer};

use crate::config::CorsOrigins;
use crate::middleware::{
    logging::log_request,
    recovery::recovery_layer,
    request_id::{propagate_request_id, request_id_layer},
};
use crate::routes;
use crate::state::AppState;

/// Build the full application router.
pub fn build_app(state: AppState) -> Router {
    let cors = build_cors_layer(&state.config().cors_allowed_origins);
    with_middleware(routes::build_router(state), cors)
}

/// Wrap a router in the standard middleware stack.
///
/// Outermost first: request id, CORS, logging, recovery. Logging wraps
/// recovery so that panics are logged with their 500 status.
pub fn with_middleware(router: Router, cors: CorsLayer) -> Router {
    router
        .layer(recovery_layer())
        .layer(middleware::from_fn(log_request))
        .layer(middleware::from_fn(propagate_request_id))
        .layer(cors)
        .layer(request_id_layer())
}

/// Build CORS layer from configuration.
pub fn build_cors_layer(allowed_origins: &CorsOrigins) -> CorsLayer {
    let cors = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    match allowed_origins {
        CorsOrigins::Any => cors.allow_origin(Any),
        CorsOrigins::List(origins) => cors.allow_origin(origins.clone()),
    }
}

