//! Command handlers for the CLI.
//!
//! Each handler loads the store, runs one command, and persists the store
//! only when the command changed it. Output goes to the writer passed in so
//! handlers can be exercised without a terminal.

mod add;
mod delete;
mod list;
mod tags;
mod view_edit;


use anyhow::{Context, Result};
use serde::Serialize;
use std::io::Write;

use super::output::Output;
use super::present::Style;
use crate::domain::{NoteError, Store, Tag};
use crate::infra::NoteStorage;

// Re-export public items
pub use add::handle_add;
pub use delete::handle_delete;
pub use list::{handle_list, handle_search, select_notes};
pub use tags::{handle_tag, handle_tags};
pub use view_edit::{EditOutcome, apply_edit, handle_edit, handle_view};

/// What every handler needs besides its own arguments.
pub struct Session<'a> {
    pub storage: &'a dyn NoteStorage,
    pub style: Style,
}

impl<'a> Session<'a> {
    pub fn new(storage: &'a dyn NoteStorage, style: Style) -> Self {
        Self { storage, style }
    }
}

// ===========================================
// Shared Utilities
// ===========================================

/// Loads the store, recovering from a corrupt document with an empty store.
///
/// The corrupt document is left on disk; the next save replaces it. The
/// recovered store keeps the persisted high-water mark so ids of the
/// unreadable notes are never handed out again.
pub(crate) fn load_store(storage: &dyn NoteStorage) -> Result<Store> {
    match storage.load() {
        Ok(store) => Ok(store),
        Err(err) if err.is_corrupt() => {
            let high_water = storage.high_water().with_context(|| {
                format!("failed to load notes from {}", storage.location().display())
            })?;
            tracing::warn!(
                error = %err,
                high_water,
                "starting with an empty list; saving changes will overwrite the corrupt store"
            );
            Ok(Store::with_high_water(high_water))
        }
        Err(err) => Err(err).with_context(|| {
            format!("failed to load notes from {}", storage.location().display())
        }),
    }
}

pub(crate) fn save_store(storage: &dyn NoteStorage, store: &Store) -> Result<()> {
    storage
        .save(store)
        .with_context(|| format!("failed to save notes to {}", storage.location().display()))
}

pub(crate) fn parse_tag(s: &str) -> Result<Tag, NoteError> {
    Tag::new(s).map_err(|e| NoteError::validation(e.to_string()))
}

pub(crate) fn print_json<T: Serialize>(out: &mut dyn Write, data: T) -> Result<()> {
    let text = serde_json::to_string_pretty(&Output::new(data))?;
    writeln!(out, "{}", text)?;
    Ok(())
}
