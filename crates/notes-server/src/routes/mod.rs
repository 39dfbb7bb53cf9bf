//! Route definitions for the HTTP API.

pub mod health;
pub mod notes;

use axum::Router;

use crate::error::ApiError;
use crate::state::AppState;

/// Versioned prefix the note routes are also served under.
pub const API_V1_PREFIX: &str = "/api/v1";

/// Build the complete router with all routes.
///
/// Note routes are served both at the root and under [`API_V1_PREFIX`].
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(health::routes())
        .merge(notes::routes())
        .nest(API_V1_PREFIX, notes::routes())
        .method_not_allowed_fallback(method_not_allowed)
        .fallback(route_not_found)
        .with_state(state)
}

async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed("Method not allowed".to_string())
}

async fn route_not_found() -> ApiError {
    ApiError::NotFound("Route not found".to_string())
}
