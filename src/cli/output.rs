//! Output format types for CLI commands.

use clap::ValueEnum;
use serde::Serialize;

use crate::domain::{Note, Tag};

/// Output format for command results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for programmatic consumption
    Json,
}

/// Wrapper for serializable command output.
#[derive(Debug, Serialize)]
pub struct Output<T: Serialize> {
    pub data: T,
}

impl<T: Serialize> Output<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// A single note in listing output.
#[derive(Debug, Serialize)]
pub struct NoteListing<'a> {
    pub id: u64,
    pub title: &'a str,
    pub tags: Vec<&'a str>,
    pub created_at: String,
}

impl<'a> From<&'a Note> for NoteListing<'a> {
    fn from(note: &'a Note) -> Self {
        Self {
            id: note.id().get(),
            title: note.title(),
            tags: note.tags().iter().map(Tag::as_str).collect(),
            created_at: note.created_at_display(),
        }
    }
}

/// A tag with its note count.
#[derive(Debug, Serialize)]
pub struct TagListing<'a> {
    pub name: &'a str,
    pub count: usize,
}
