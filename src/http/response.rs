//! Mapping of note errors to HTTP responses.
//!
//! - `NotFound` → 404 `{"Error": "No note found with <id>"}`
//! - `InvalidInput` on create → 422 with the bare message string
//! - `InvalidInput` on replace → 422 `{"Error": <message>, "missing": [...]}`
//! - unreadable request body (e.g. over the size limit) → the rejection's own status

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::notes::{NoteError, Payload};

/// Confirmation body returned by a successful delete.
pub const DELETED_MESSAGE: &str = "Note was successfully deleted";

/// Errors returned by handlers that read a request body.
#[derive(Debug)]
pub enum ApiError {
    Note(NoteError),
    Body(JsonRejection),
}

/// Result type for body-reading handlers.
pub type ApiResult<T> = Result<T, ApiError>;

impl From<NoteError> for ApiError {
    fn from(err: NoteError) -> Self {
        Self::Note(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Body(rejection)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Note(err) => err.into_response(),
            ApiError::Body(rejection) => {
                tracing::debug!(
                    status = %rejection.status(),
                    error = %rejection,
                    "Note body could not be read"
                );
                rejection.into_response()
            }
        }
    }
}

impl IntoResponse for NoteError {
    fn into_response(self) -> Response {
        let message = self.to_string();
        match &self {
            NoteError::NotFound { id } => {
                tracing::debug!(id = %id, "Note not found");
                (StatusCode::NOT_FOUND, Json(json!({ "Error": message }))).into_response()
            }
            NoteError::InvalidInput { payload, missing } => {
                tracing::debug!(?payload, ?missing, "Rejected note payload");
                match payload {
                    Payload::Create => {
                        (StatusCode::UNPROCESSABLE_ENTITY, Json(message)).into_response()
                    }
                    Payload::Replace => (
                        StatusCode::UNPROCESSABLE_ENTITY,
                        Json(json!({ "Error": message, "missing": missing })),
                    )
                        .into_response(),
                }
            }
        }
    }
}
