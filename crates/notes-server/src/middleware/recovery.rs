//! Panic recovery.
//!
//! A panic inside a handler unwinds only that request's task; the layer
//! turns it into a 500 with the standard error body.

use std::any::Any;

use axum::response::IntoResponse;
use tower_http::catch_panic::{CatchPanicLayer, ResponseForPanic};

use crate::error::{ApiError, INTERNAL_ERROR_MESSAGE};

/// Builds the 500 response for a caught panic.
#[derive(Clone, Copy, Debug, Default)]
pub struct PanicResponder;

impl ResponseForPanic for PanicResponder {
    type ResponseBody = axum::body::Body;

    fn response_for_panic(
        &mut self,
        err: Box<dyn Any + Send + 'static>,
    ) -> http::Response<Self::ResponseBody> {
        let detail = panic_message(err.as_ref());
        tracing::error!(panic = %detail, "Panic recovered");

        ApiError::Internal(INTERNAL_ERROR_MESSAGE.to_string()).into_response()
    }
}

/// Tower layer converting panics into 500 responses.
pub type RecoveryLayer = CatchPanicLayer<PanicResponder>;

/// Create the recovery layer.
pub fn recovery_layer() -> RecoveryLayer {
    CatchPanicLayer::custom(PanicResponder)
}

fn panic_message(err: &(dyn Any + Send)) -> &str {
    if let Some(s) = err.downcast_ref::<String>() {
        s
    } else if let Some(s) = err.downcast_ref::<&'static str>() {
        s
    } else {
        "unknown panic payload"
    }
}
