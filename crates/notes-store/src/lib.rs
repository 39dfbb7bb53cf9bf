//! notes-store: storage layer for the notes service.
//!
//! This crate provides:
//! - The [`NoteRepository`] capability trait used by the HTTP layer
//! - [`MemoryStore`], a process-local implementation guarded by one lock
//! - Input models for creation and partial update
//!
//! # Usage
//!
//! ```rust
//! use notes_store::{MemoryStore, NewNote, NoteRepository};
//!
//! let store = MemoryStore::new();
//! let note = store.create(NewNote::new("Groceries", "Milk"));
//! assert_eq!(store.get_by_id(&note.id).unwrap().title, "Groceries");
//! ```

pub mod error;
pub mod memory;
pub mod models;
pub mod repository;

pub use error::{StoreError, StoreResult};
pub use memory::MemoryStore;
pub use models::{NewNote, NoteChanges};
pub use repository::NoteRepository;

// Re-export notes-core for downstream crates
pub use notes_core;
