//! In-memory note store.

use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::notes::error::{NoteError, NoteResult};
use crate::notes::ids::{IdGenerator, ShortIdGenerator};
use crate::notes::model::{CreateNote, Note, NoteDraft, ReplaceNote};
use crate::observability::metrics;

/// Insertion-ordered collection of notes, lost on process exit.
#[derive(Debug)]
pub struct NoteStore {
    notes: Mutex<Vec<Note>>,
    ids: Box<dyn IdGenerator>,
}

impl NoteStore {
    /// Create an empty store with the default id generator.
    pub fn new() -> Self {
        Self::with_id_generator(ShortIdGenerator)
    }

    /// Create an empty store drawing ids from `ids`.
    pub fn with_id_generator(ids: impl IdGenerator + 'static) -> Self {
        Self {
            notes: Mutex::new(Vec::new()),
            ids: Box::new(ids),
        }
    }

    // Every mutation completes before the guard drops, so a poisoned
    // vector is still consistent.
    fn lock(&self) -> MutexGuard<'_, Vec<Note>> {
        self.notes.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// All notes in creation order.
    pub fn list(&self) -> Vec<Note> {
        self.lock().clone()
    }

    /// Fetch a note by id.
    pub fn get(&self, id: &str) -> NoteResult<Note> {
        self.lock()
            .iter()
            .find(|note| note.id == id)
            .cloned()
            .ok_or_else(|| NoteError::not_found(id))
    }

    /// Validate `body` and append a new note with a fresh id.
    pub fn create(&self, body: CreateNote) -> NoteResult<Note> {
        let draft = NoteDraft::try_from(body)?;

        let mut notes = self.lock();
        let id = loop {
            let candidate = self.ids.generate();
            if !candidate.is_empty() && !notes.iter().any(|n| n.id == candidate) {
                break candidate;
            }
            tracing::warn!(id = %candidate, "Generated note id rejected, drawing again");
        };

        let note = Note {
            id,
            title: draft.title,
            list: draft.list,
        };
        notes.push(note.clone());
        metrics::record_stored(notes.len());

        tracing::info!(id = %note.id, items = note.list.len(), "Note created");
        Ok(note)
    }

    /// Overwrite the title and items of an existing note.
    ///
    /// The id is resolved before the body is validated, so an unknown id is
    /// reported as `NotFound` even when the body is invalid too.
    pub fn replace(&self, id: &str, body: ReplaceNote) -> NoteResult<Note> {
        let mut notes = self.lock();
        let note = notes
            .iter_mut()
            .find(|note| note.id == id)
            .ok_or_else(|| NoteError::not_found(id))?;

        let draft = NoteDraft::try_from(body)?;
        note.title = draft.title;
        note.list = draft.list;

        tracing::info!(id = %note.id, items = note.list.len(), "Note replaced");
        Ok(note.clone())
    }

    /// Remove a note, keeping the order of the rest.
    pub fn delete(&self, id: &str) -> NoteResult<Note> {
        let mut notes = self.lock();
        let index = notes
            .iter()
            .position(|note| note.id == id)
            .ok_or_else(|| NoteError::not_found(id))?;

        let removed = notes.remove(index);
        metrics::record_stored(notes.len());

        tracing::info!(id = %removed.id, "Note deleted");
        Ok(removed)
    }

    /// Number of stored notes.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}

impl Default for NoteStore {
    fn default() -> Self {
        Self::new()
    }
}
