//! Note record and the validated draft used to create one.

use crate::domain::{NoteError, NoteId, Tag};
use chrono::{NaiveDateTime, SubsecRound};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Format of `created_at` in the persisted store and in output.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A single persisted note.
///
/// # Fields
/// - `id`: unique, assigned by the store
/// - `title`: non-empty, immutable after creation
/// - `content`: body text, replaced only by `edit`
/// - `created_at`: local wall-clock time at creation, second precision
/// - `tags`: lowercase, deduplicated, always sorted
///
/// Serialized field order is `id`, `title`, `content`, `created_at`, `tags`.
/// The legacy key `date` is accepted in place of `created_at`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    id: NoteId,
    title: String,
    content: String,
    #[serde(with = "timestamp", alias = "date")]
    created_at: NaiveDateTime,
    #[serde(default)]
    tags: BTreeSet<Tag>,
}

impl Note {
    /// Builds a note from a validated draft.
    pub fn new(id: NoteId, draft: NewNote, created_at: NaiveDateTime) -> Self {
        Self {
            id,
            title: draft.title,
            content: draft.content,
            created_at: created_at.trunc_subsecs(0),
            tags: draft.tags,
        }
    }

    /// Reassembles a note from already-persisted parts.
    pub(crate) fn from_parts(
        id: NoteId,
        title: String,
        content: String,
        created_at: NaiveDateTime,
        tags: BTreeSet<Tag>,
    ) -> Self {
        Self {
            id,
            title,
            content,
            created_at,
            tags,
        }
    }

    pub fn id(&self) -> NoteId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn created_at(&self) -> NaiveDateTime {
        self.created_at
    }

    /// Returns `created_at` formatted as `YYYY-MM-DD HH:MM:SS`.
    pub fn created_at_display(&self) -> String {
        self.created_at.format(TIMESTAMP_FORMAT).to_string()
    }

    /// Returns the tags in sorted order.
    pub fn tags(&self) -> &BTreeSet<Tag> {
        &self.tags
    }

    pub fn has_tag(&self, tag: &Tag) -> bool {
        self.tags.contains(tag)
    }

    /// Adds a tag. Returns `false` if the note already had it.
    pub fn add_tag(&mut self, tag: Tag) -> bool {
        self.tags.insert(tag)
    }

    /// Removes a tag. Returns `false` if the note did not have it.
    pub fn remove_tag(&mut self, tag: &Tag) -> bool {
        self.tags.remove(tag)
    }

    /// Replaces the content. Title, tags and `created_at` are untouched.
    pub fn set_content(&mut self, content: String) {
        self.content = content;
    }

    /// Case-insensitive substring match against title, content and tags.
    ///
    /// `query` must already be lowercase. With `tags_only`, title and content
    /// are not considered.
    pub fn matches(&self, query: &str, tags_only: bool) -> bool {
        let in_tags = self.tags.iter().any(|t| t.as_str().contains(query));
        if tags_only {
            return in_tags;
        }
        in_tags
            || self.title.to_lowercase().contains(query)
            || self.content.to_lowercase().contains(query)
    }
}

/// Validated input for creating a note.
///
/// Title and content are trimmed and must be non-empty; tags are normalized
/// and deduplicated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewNote {
    title: String,
    content: String,
    tags: BTreeSet<Tag>,
}

impl NewNote {
    /// Validates raw command input into a draft.
    ///
    /// # Errors
    ///
    /// Returns `NoteError::Validation` if the title or content is empty or
    /// whitespace-only, or if any tag is invalid.
    pub fn new(title: &str, content: &str, tag_strs: &[String]) -> Result<Self, NoteError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(NoteError::validation("title cannot be empty"));
        }

        let content = content.trim();
        if content.is_empty() {
            return Err(NoteError::validation("content (-c) cannot be empty"));
        }

        let tags = tag_strs
            .iter()
            .map(|s| Tag::new(s).map_err(|e| NoteError::validation(e.to_string())))
            .collect::<Result<BTreeSet<_>, _>>()?;

        Ok(Self {
            title: title.to_string(),
            content: content.to_string(),
            tags,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }
}

/// Serde adapter for `YYYY-MM-DD HH:MM:SS` timestamps.
pub(crate) mod timestamp {
    use super::TIMESTAMP_FORMAT;
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&value.format(TIMESTAMP_FORMAT))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&s, TIMESTAMP_FORMAT).map_err(serde::de::Error::custom)
    }
}
