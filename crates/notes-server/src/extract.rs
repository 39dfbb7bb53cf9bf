//! Request extractors that reject with the API's JSON error shape.

use axum::{
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::{header, request::Parts},
};
use notes_core::NoteId;
use serde::de::DeserializeOwned;

use crate::error::{ApiError, ApiResult, NOTE_NOT_FOUND};

/// JSON body extractor.
///
/// Any failure (bad syntax, wrong field types, a non-JSON content type)
/// becomes a `validation_error` instead of axum's plain-text rejection. A
/// request without a `Content-Type` header is still parsed as JSON.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let parsed = if req.headers().contains_key(header::CONTENT_TYPE) {
            axum::Json::<T>::from_request(req, state)
                .await
                .map_err(|rejection| rejection.to_string())
        } else {
            match Bytes::from_request(req, state).await {
                Ok(bytes) => axum::Json::<T>::from_bytes(&bytes).map_err(|e| e.to_string()),
                Err(rejection) => Err(rejection.to_string()),
            }
        };

        match parsed {
            Ok(axum::Json(value)) => Ok(Self(value)),
            Err(reason) => {
                tracing::debug!(error = %reason, "Rejected request body");
                Err(ApiError::Validation("Invalid request body".to_string()))
            }
        }
    }
}

/// Raw `{id}` path segment.
///
/// Parsing is deferred to [`NotePath::id`] so handlers can validate the body
/// first. A segment that is not a well-formed id cannot name a stored note,
/// so it is answered with 404 like any other missing note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotePath(pub String);

impl NotePath {
    /// Parse the segment into a note id, or fail with `not_found`.
    pub fn id(&self) -> ApiResult<NoteId> {
        self.0.parse::<NoteId>().map_err(|_| {
            tracing::debug!(id = %self.0, "Malformed note id");
            ApiError::NotFound(NOTE_NOT_FOUND.to_string())
        })
    }
}

impl<S> FromRequestParts<S> for NotePath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::NotFound(NOTE_NOT_FOUND.to_string()))?;
        Ok(Self(raw))
    }
}
