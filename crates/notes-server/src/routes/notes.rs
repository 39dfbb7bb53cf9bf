//! Note CRUD routes.
//!
//! This module implements the note endpoints:
//! - GET /notes - List all notes with a count
//! - GET /notes/{id} - Fetch one note
//! - POST /notes - Create a note
//! - PUT /notes/{id} - Partially update a note
//! - DELETE /notes/{id} - Delete a note

use axum::{Json, Router, extract::State, http::StatusCode, routing::get};
use serde::{Deserialize, Serialize};

use notes_core::Note;

use crate::error::ApiResult;
use crate::extract::{JsonBody, NotePath};
use crate::state::AppState;
use crate::validate;

// ============================================================================
// Request/Response Types
// ============================================================================

/// Request body for POST /notes.
///
/// Fields are optional at the parsing level so that a missing field is
/// reported by the validator rather than as a malformed body.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct CreateNoteRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

/// Request body for PUT /notes/{id}. Absent or empty fields are left unchanged.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct UpdateNoteRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

/// Envelope for a single note.
#[derive(Debug, Serialize, Deserialize)]
pub struct NoteResponse {
    pub data: Note,
}

/// Response for GET /notes.
#[derive(Debug, Serialize, Deserialize)]
pub struct ListNotesResponse {
    pub data: Vec<Note>,
    pub count: usize,
}

/// Response for DELETE /notes/{id}.
#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteNoteResponse {
    /// Confirmation message.
    pub message: String,
}

// ============================================================================
// Route Handlers
// ============================================================================

/// GET /notes - List all notes.
///
/// # Response
///
/// - 200 OK: `{ "data": [...], "count": n }`
async fn list_notes(State(state): State<AppState>) -> Json<ListNotesResponse> {
    let notes = state.notes().get_all();
    let count = notes.len();

    tracing::debug!(count, "Listed notes");

    Json(ListNotesResponse { data: notes, count })
}

/// GET /notes/{id} - Fetch one note.
///
/// # Response
///
/// - 200 OK: `{ "data": {...} }`
/// - 404 Not Found: No note with this id
async fn get_note(State(state): State<AppState>, path: NotePath) -> ApiResult<Json<NoteResponse>> {
    let note = state.notes().get_by_id(&path.id()?)?;
    Ok(Json(NoteResponse { data: note }))
}

/// POST /notes - Create a note.
///
/// # Request
///
/// Body: `{ "title": "...", "content": "..." }`
///
/// # Response
///
/// - 201 Created: `{ "data": {...} }`
/// - 400 Bad Request: Missing title or content, or malformed body
async fn create_note(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<CreateNoteRequest>,
) -> ApiResult<(StatusCode, Json<NoteResponse>)> {
    let new_note = validate::new_note(
        request.title.unwrap_or_default(),
        request.content.unwrap_or_default(),
    )?;

    let note = state.notes().create(new_note);

    tracing::info!(note_id = %note.id, "Note created");

    Ok((StatusCode::CREATED, Json(NoteResponse { data: note })))
}

/// PUT /notes/{id} - Partially update a note.
///
/// # Request
///
/// Body: `{ "title"?: "...", "content"?: "..." }`
///
/// # Response
///
/// - 200 OK: `{ "data": {...} }`
/// - 400 Bad Request: Malformed body
/// - 404 Not Found: No note with this id
async fn update_note(
    State(state): State<AppState>,
    path: NotePath,
    JsonBody(request): JsonBody<UpdateNoteRequest>,
) -> ApiResult<Json<NoteResponse>> {
    // The body is checked before the id is looked at.
    let changes = validate::note_changes(request.title, request.content);
    let id = path.id()?;
    let note = state.notes().update(&id, changes)?;

    tracing::info!(note_id = %id, "Note updated");

    Ok(Json(NoteResponse { data: note }))
}

/// DELETE /notes/{id} - Delete a note.
///
/// # Response
///
/// - 200 OK: `{ "message": "Note deleted successfully" }`
/// - 404 Not Found: No note with this id
async fn delete_note(
    State(state): State<AppState>,
    path: NotePath,
) -> ApiResult<Json<DeleteNoteResponse>> {
    let id = path.id()?;
    state.notes().delete(&id)?;

    tracing::info!(note_id = %id, "Note deleted");

    Ok(Json(DeleteNoteResponse {
        message: "Note deleted successfully".to_string(),
    }))
}

/// Build note routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/notes", get(list_notes).post(create_note))
        .route("/notes/{id}", get(get_note).put(update_note).delete(delete_note))
}

// ============================================================================
// Tests
// ============================================================================
