//! Axum route handlers for the notes API.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};

use crate::http::response::{ApiResult, DELETED_MESSAGE};
use crate::http::server::AppState;
use crate::notes::{CreateNote, Note, NoteResult, ReplaceNote};

/// Bodies that are not a readable JSON object (bad JSON, wrong types, no
/// JSON content type) are treated as carrying no fields, so validation
/// reports them as 422. Failures reading the body itself, such as exceeding
/// the size limit, keep the rejection's own status.
fn note_body<T: Default>(payload: Result<Json<T>, JsonRejection>) -> ApiResult<T> {
    match payload {
        Ok(Json(body)) => Ok(body),
        Err(
            rejection @ (JsonRejection::JsonDataError(_)
            | JsonRejection::JsonSyntaxError(_)
            | JsonRejection::MissingJsonContentType(_)),
        ) => {
            tracing::debug!(error = %rejection, "Unreadable note body");
            Ok(T::default())
        }
        Err(rejection) => Err(rejection.into()),
    }
}

// GET /api/v1/notes
pub async fn list_notes(State(state): State<AppState>) -> Json<Vec<Note>> {
    Json(state.store.list())
}

// GET /api/v1/notes/{id}
pub async fn get_note(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> NoteResult<Json<Note>> {
    state.store.get(&id).map(Json)
}

// POST /api/v1/notes
pub async fn create_note(
    State(state): State<AppState>,
    payload: Result<Json<CreateNote>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Note>)> {
    let note = state.store.create(note_body(payload)?)?;
    Ok((StatusCode::CREATED, Json(note)))
}

// PUT /api/v1/notes/{id}
pub async fn replace_note(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<ReplaceNote>, JsonRejection>,
) -> ApiResult<StatusCode> {
    state.store.replace(&id, note_body(payload)?)?;
    Ok(StatusCode::NO_CONTENT)
}

// DELETE /api/v1/notes/{id}
pub async fn delete_note(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> NoteResult<Json<&'static str>> {
    state.store.delete(&id)?;
    Ok(Json(DELETED_MESSAGE))
}

// GET /health
pub async fn health(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "notes": state.store.len(),
    }))
}
