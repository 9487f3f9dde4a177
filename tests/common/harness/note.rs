//! Builder for test notes with sensible defaults.

// Test utility; not every helper is used by every test binary
#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime};
use notekeeper::domain::{NewNote, Note, NoteId};

/// Builder for seeding a store with notes.
///
/// Ids are assigned by `TestEnv::seed` unless set explicitly.
#[derive(Debug, Clone)]
pub struct TestNote {
    id: Option<u64>,
    title: String,
    content: String,
    created_at: NaiveDateTime,
    tags: Vec<String>,
}

impl TestNote {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: None,
            title: title.into(),
            content: "body".to_string(),
            created_at: NaiveDate::from_ymd_opt(2024, 1, 15)
                .and_then(|d| d.and_hms_opt(10, 30, 0))
                .expect("valid date"),
            tags: Vec::new(),
        }
    }

    pub fn id(mut self, id: u64) -> Self {
        self.id = Some(id);
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    pub fn created_at(mut self, created_at: NaiveDateTime) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds the domain note, using `fallback_id` when no id was set.
    pub fn to_note(&self, fallback_id: u64) -> Note {
        let id = NoteId::new(self.id.unwrap_or(fallback_id)).expect("test ids are positive");
        let draft =
            NewNote::new(&self.title, &self.content, &self.tags).expect("test note should be valid");
        Note::new(id, draft, self.created_at)
    }
}
