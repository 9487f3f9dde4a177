//! In-memory note collection with id and tag invariants.

use crate::domain::{NewNote, Note, NoteError, NoteId, Tag};
use chrono::NaiveDateTime;
use std::collections::{BTreeMap, HashSet};
use thiserror::Error;

/// Reasons a set of persisted notes cannot form a store.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum IntegrityError {
    #[error("duplicate note id {0}")]
    DuplicateId(NoteId),

    #[error("note {0} has an empty title")]
    EmptyTitle(NoteId),
}

/// The full collection of notes for one command invocation.
///
/// Notes keep the order they were loaded or inserted in. The store also
/// tracks the highest id ever assigned, so deleting the newest note never
/// frees its id for reuse, and the ids removed since it was loaded, so a
/// backend only deletes what this invocation deleted.
#[derive(Debug, Clone, Default)]
pub struct Store {
    notes: Vec<Note>,
    last_id: u64,
    removed: Vec<NoteId>,
}

// Pending removals are bookkeeping for the next save, not content.
impl PartialEq for Store {
    fn eq(&self, other: &Self) -> bool {
        self.notes == other.notes && self.last_id == other.last_id
    }
}

impl Eq for Store {}

impl Store {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty store that will not hand out ids at or below
    /// `high_water`.
    pub fn with_high_water(high_water: u64) -> Self {
        Self {
            last_id: high_water,
            ..Self::default()
        }
    }

    /// Builds a store from persisted notes and the persisted high-water mark.
    ///
    /// # Errors
    ///
    /// Returns `IntegrityError` if two notes share an id or a title is empty.
    pub fn from_notes(notes: Vec<Note>, high_water: u64) -> Result<Self, IntegrityError> {
        let mut seen = HashSet::with_capacity(notes.len());
        for note in &notes {
            if !seen.insert(note.id()) {
                return Err(IntegrityError::DuplicateId(note.id()));
            }
            if note.title().trim().is_empty() {
                return Err(IntegrityError::EmptyTitle(note.id()));
            }
        }

        let max_id = notes.iter().map(|n| n.id().get()).max().unwrap_or(0);
        Ok(Self {
            notes,
            last_id: max_id.max(high_water),
            removed: Vec::new(),
        })
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Highest id ever assigned in this store (0 if none).
    pub fn high_water(&self) -> u64 {
        self.last_id
    }

    /// The id the next inserted note will receive, or `None` once every
    /// id has been used.
    pub fn next_id(&self) -> Option<NoteId> {
        match NoteId::new(self.last_id) {
            Ok(id) => id.next(),
            Err(_) => Some(NoteId::FIRST),
        }
    }

    /// Appends a new note built from `draft` and returns it.
    ///
    /// # Errors
    ///
    /// Returns `NoteError::Validation` if no unused id is left.
    pub fn insert(
        &mut self,
        draft: NewNote,
        created_at: NaiveDateTime,
    ) -> Result<&Note, NoteError> {
        let id = self
            .next_id()
            .ok_or_else(|| NoteError::validation("no note ids left to assign"))?;
        self.last_id = id.get();
        self.notes.push(Note::new(id, draft, created_at));
        Ok(&self.notes[self.notes.len() - 1])
    }

    pub fn get(&self, id: NoteId) -> Option<&Note> {
        self.notes.iter().find(|n| n.id() == id)
    }

    pub fn get_mut(&mut self, id: NoteId) -> Option<&mut Note> {
        self.notes.iter_mut().find(|n| n.id() == id)
    }

    /// Looks up a note, failing with `NoteError::NotFound`.
    pub fn require(&self, id: NoteId) -> Result<&Note, NoteError> {
        self.get(id).ok_or(NoteError::NotFound(id))
    }

    /// Mutable variant of [`Store::require`].
    pub fn require_mut(&mut self, id: NoteId) -> Result<&mut Note, NoteError> {
        self.get_mut(id).ok_or(NoteError::NotFound(id))
    }

    /// Removes a note, returning it if it existed.
    pub fn remove(&mut self, id: NoteId) -> Option<Note> {
        let pos = self.notes.iter().position(|n| n.id() == id)?;
        self.removed.push(id);
        Some(self.notes.remove(pos))
    }

    /// Ids removed since the store was loaded.
    pub fn removed(&self) -> &[NoteId] {
        &self.removed
    }

    /// Notes carrying `tag`, in store order.
    pub fn with_tag<'a>(&'a self, tag: &'a Tag) -> impl Iterator<Item = &'a Note> + 'a {
        self.notes.iter().filter(move |n| n.has_tag(tag))
    }

    /// Notes matching a case-insensitive substring query, in store order.
    pub fn search<'a>(
        &'a self,
        query: &str,
        tags_only: bool,
    ) -> impl Iterator<Item = &'a Note> + use<'a> {
        let query = query.to_lowercase();
        self.notes
            .iter()
            .filter(move |n| n.matches(&query, tags_only))
    }

    /// Every tag in use with the number of notes carrying it.
    pub fn tag_counts(&self) -> BTreeMap<&Tag, usize> {
        let mut counts = BTreeMap::new();
        for tag in self.notes.iter().flat_map(|n| n.tags()) {
            *counts.entry(tag).or_insert(0) += 1;
        }
        counts
    }
}
