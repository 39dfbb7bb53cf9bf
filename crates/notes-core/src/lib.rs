//! notes-core: domain types for the notes service.
//!
//! This crate defines the single entity of the service, [`Note`], and its
//! identifier [`NoteId`]. Storage and HTTP concerns live in `notes-store`
//! and `notes-server`.

pub mod types;

pub use types::{Note, NoteId};
