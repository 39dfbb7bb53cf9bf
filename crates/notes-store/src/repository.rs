//! Repository abstraction over note storage.
//!
//! Handlers depend on [`NoteRepository`] rather than a concrete store, so a
//! persistent backend can replace [`crate::MemoryStore`] without touching the
//! HTTP layer.

use notes_core::{Note, NoteId};

use crate::error::StoreResult;
use crate::models::{NewNote, NoteChanges};

/// The set of operations a note backend must provide.
///
/// Every operation must appear atomic to concurrent callers, and returned
/// notes are owned copies that never alias stored state.
pub trait NoteRepository: Send + Sync {
    /// Snapshot of every stored note. Ordering is backend-defined.
    fn get_all(&self) -> Vec<Note>;

    /// Fetch a single note, or [`crate::StoreError::NotFound`].
    fn get_by_id(&self, id: &NoteId) -> StoreResult<Note>;

    /// Store a new note with a fresh id and timestamps.
    fn create(&self, note: NewNote) -> Note;

    /// Apply a partial update and refresh `updated_at`.
    fn update(&self, id: &NoteId, changes: NoteChanges) -> StoreResult<Note>;

    /// Remove a note.
    fn delete(&self, id: &NoteId) -> StoreResult<()>;
}
