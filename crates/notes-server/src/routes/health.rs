//! Health check endpoint.

use axum::{Json, Router, routing::get};
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::state::AppState;

/// Version reported by the health endpoint.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Health check response.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Current server time, RFC 3339 UTC.
    pub timestamp: String,
    /// Service version.
    pub version: String,
}

/// GET /health - Health check endpoint.
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
        version: VERSION.to_string(),
    })
}

/// Build health check routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
