//! Presence checks for request payloads.
//!
//! Creation needs both fields; updates accept any subset and treat empty
//! strings as absent.

use notes_store::{NewNote, NoteChanges};

/// Rejection raised before a payload reaches the store.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Title and content are required")]
    MissingFields,
}

/// Validate a creation payload.
///
/// Only emptiness is checked; whitespace-only text is accepted.
pub fn new_note(title: String, content: String) -> Result<NewNote, ValidationError> {
    if title.is_empty() || content.is_empty() {
        return Err(ValidationError::MissingFields);
    }
    Ok(NewNote { title, content })
}

/// Normalize an update payload. Never fails.
pub fn note_changes(title: Option<String>, content: Option<String>) -> NoteChanges {
    NoteChanges {
        title: title.filter(|t| !t.is_empty()),
        content: content.filter(|c| !c.is_empty()),
    }
}
