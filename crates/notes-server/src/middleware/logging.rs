//! Access logging.

use std::time::Instant;

use axum::{extract::Request, middleware::Next, response::Response};

use super::request_id::REQUEST_ID_HEADER;

/// Log method, path, status and latency of every request.
///
/// Sits outside the recovery layer, so a panicking handler is still logged
/// with the 500 it was converted into.
pub async fn log_request(request: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_owned();
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("-")
        .to_owned();

    let response = next.run(request).await;

    let status = response.status();
    let code = status.as_u16();
    let latency_ms = start.elapsed().as_secs_f64() * 1000.0;

    if status.is_server_error() {
        tracing::error!(%method, %path, status = code, latency_ms, %request_id, "request");
    } else if status.is_client_error() {
        tracing::warn!(%method, %path, status = code, latency_ms, %request_id, "request");
    } else {
        tracing::info!(%method, %path, status = code, latency_ms, %request_id, "request");
    }

    response
}
