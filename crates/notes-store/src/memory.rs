//! In-memory note store.
//!
//! A single reader/writer lock guards the whole collection. Reads share the
//! lock; every write holds it exclusively and commits with one map
//! assignment, so no reader ever sees a half-applied update.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::Utc;
use notes_core::{Note, NoteId};

use crate::error::{StoreError, StoreResult};
use crate::models::{NewNote, NoteChanges};
use crate::repository::NoteRepository;

/// Process-local note storage. Contents are lost when the process exits.
#[derive(Debug, Default)]
pub struct MemoryStore {
    notes: RwLock<HashMap<NoteId, Note>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored notes.
    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    // A panicking writer can only poison the lock before its single
    // `insert`/`remove`, so the map behind a poisoned lock is intact.
    fn read(&self) -> RwLockReadGuard<'_, HashMap<NoteId, Note>> {
        self.notes.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<NoteId, Note>> {
        self.notes.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl NoteRepository for MemoryStore {
    fn get_all(&self) -> Vec<Note> {
        let mut notes: Vec<Note> = self.read().values().cloned().collect();
        notes.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        notes
    }

    fn get_by_id(&self, id: &NoteId) -> StoreResult<Note> {
        self.read()
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    fn create(&self, note: NewNote) -> Note {
        let mut notes = self.write();

        let mut id = NoteId::new();
        while notes.contains_key(&id) {
            id = NoteId::new();
        }

        let note = Note::new(id, note.title, note.content, Utc::now());
        notes.insert(id, note.clone());

        tracing::debug!(note_id = %id, "Note created");
        note
    }

    fn update(&self, id: &NoteId, changes: NoteChanges) -> StoreResult<Note> {
        let mut notes = self.write();

        let mut note = notes
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;

        if let Some(title) = changes.title.filter(|t| !t.is_empty()) {
            note.title = title;
        }
        if let Some(content) = changes.content.filter(|c| !c.is_empty()) {
            note.content = content;
        }
        // Wall clock may step backwards; updated_at must not.
        note.updated_at = Utc::now().max(note.updated_at);

        notes.insert(*id, note.clone());

        tracing::debug!(note_id = %id, "Note updated");
        Ok(note)
    }

    fn delete(&self, id: &NoteId) -> StoreResult<()> {
        match self.write().remove(id) {
            Some(_) => {
                tracing::debug!(note_id = %id, "Note deleted");
                Ok(())
            }
            None => Err(StoreError::NotFound(id.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Arc;

    fn seeded() -> (MemoryStore, Note) {
        let store = MemoryStore::new();
        let note = store.create(NewNote::new("Original Title", "Original Content"));
        (store, note)
    }

    #[test]
    fn test_create_then_get_returns_same_note() {
        let (store, created) = seeded();

        let fetched = store.get_by_id(&created.id).unwrap();
        assert_eq!(fetched, created);
        assert_eq!(fetched.title, "Original Title");
        assert_eq!(fetched.content, "Original Content");
        assert_eq!(fetched.created_at, fetched.updated_at);
    }

    #[test]
    fn test_missing_id_is_not_found_everywhere() {
        let (store, _) = seeded();
        let missing = NoteId::new();

        assert_eq!(
            store.get_by_id(&missing),
            Err(StoreError::NotFound(missing.to_string()))
        );
        assert!(matches!(
            store.update(&missing, NoteChanges::default().title("x")),
            Err(StoreError::NotFound(_))
        ));
        assert!(matches!(store.delete(&missing), Err(StoreError::NotFound(_))));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_update_title_only_keeps_content() {
        let (store, created) = seeded();

        let updated = store
            .update(&created.id, NoteChanges::default().title("New"))
            .unwrap();
        assert_eq!(updated.title, "New");
        assert_eq!(updated.content, "Original Content");
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at >= created.updated_at);
    }

    #[test]
    fn test_update_content_only_keeps_title() {
        let (store, created) = seeded();

        let updated = store
            .update(&created.id, NoteChanges::default().content("New body"))
            .unwrap();
        assert_eq!(updated.title, "Original Title");
        assert_eq!(updated.content, "New body");
    }

    #[test]
    fn test_update_with_empty_strings_changes_nothing_but_timestamp() {
        let (store, created) = seeded();

        let updated = store
            .update(&created.id, NoteChanges::default().title("").content(""))
            .unwrap();
        assert_eq!(updated.title, created.title);
        assert_eq!(updated.content, created.content);
        assert!(updated.updated_at >= created.updated_at);
    }

    #[test]
    fn test_updated_at_never_decreases() {
        let (store, created) = seeded();

        let mut previous = created.updated_at;
        for i in 0..50 {
            let note = store
                .update(&created.id, NoteChanges::default().title(format!("t{i}")))
                .unwrap();
            assert!(note.updated_at >= previous);
            assert!(note.created_at <= note.updated_at);
            previous = note.updated_at;
        }
    }

    #[test]
    fn test_returned_copies_do_not_alias_storage() {
        let (store, created) = seeded();

        let mut copy = store.get_by_id(&created.id).unwrap();
        copy.title = "Mutated outside".to_string();

        assert_eq!(store.get_by_id(&created.id).unwrap().title, "Original Title");
    }

    #[test]
    fn test_delete_then_get_is_not_found() {
        let (store, created) = seeded();

        store.delete(&created.id).unwrap();
        assert!(matches!(
            store.get_by_id(&created.id),
            Err(StoreError::NotFound(_))
        ));
        assert!(matches!(store.delete(&created.id), Err(StoreError::NotFound(_))));
        assert!(store.is_empty());
    }

    #[test]
    fn test_get_all_counts_creates_minus_deletes() {
        let store = MemoryStore::new();
        assert!(store.get_all().is_empty());

        let ids: Vec<NoteId> = (0..5)
            .map(|i| store.create(NewNote::new(format!("t{i}"), "c")).id)
            .collect();
        store.delete(&ids[1]).unwrap();
        store.delete(&ids[3]).unwrap();
        let _ = store.delete(&ids[3]);

        let all = store.get_all();
        assert_eq!(all.len(), 3);
        assert_eq!(all.len(), store.len());
        assert!(all.iter().all(|n| n.id != ids[1] && n.id != ids[3]));
    }

    #[test]
    fn test_get_all_is_ordered_by_creation() {
        let store = MemoryStore::new();
        for i in 0..10 {
            store.create(NewNote::new(format!("t{i}"), "c"));
        }

        let all = store.get_all();
        assert!(all.windows(2).all(|w| w[0].created_at <= w[1].created_at));
    }

    #[test]
    fn test_concurrent_creates_yield_distinct_ids() {
        let store = Arc::new(MemoryStore::new());
        let threads = 8;
        let per_thread = 100;

        let ids: Vec<NoteId> = std::thread::scope(|s| {
            let handles: Vec<_> = (0..threads)
                .map(|t| {
                    let store = Arc::clone(&store);
                    s.spawn(move || {
                        (0..per_thread)
                            .map(|i| store.create(NewNote::new(format!("{t}-{i}"), "c")).id)
                            .collect::<Vec<_>>()
                    })
                })
                .collect();
            handles
                .into_iter()
                .flat_map(|h| h.join().unwrap())
                .collect()
        });

        let unique: HashSet<NoteId> = ids.iter().copied().collect();
        assert_eq!(ids.len(), threads * per_thread);
        assert_eq!(unique.len(), ids.len());
        assert_eq!(store.len(), ids.len());
    }

    #[test]
    fn test_concurrent_updates_never_tear() {
        let (store, created) = seeded();
        let store = Arc::new(store);

        std::thread::scope(|s| {
            for t in 0..4 {
                let store = Arc::clone(&store);
                s.spawn(move || {
                    for i in 0..200 {
                        let value = format!("{t}:{i}");
                        store
                            .update(
                                &created.id,
                                NoteChanges::default().title(value.clone()).content(value),
                            )
                            .unwrap();
                    }
                });
            }
            for _ in 0..4 {
                let store = Arc::clone(&store);
                s.spawn(move || {
                    for _ in 0..200 {
                        let note = store.get_by_id(&created.id).unwrap();
                        if note.title != "Original Title" {
                            assert_eq!(note.title, note.content);
                        }
                        assert!(note.created_at <= note.updated_at);
                    }
                });
            }
        });

        let last = store.get_by_id(&created.id).unwrap();
        assert_eq!(last.title, last.content);
    }
}
