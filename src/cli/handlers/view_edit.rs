//! View and Edit command handlers.

use anyhow::{Context, Result};
use std::io::Write;

use super::{Session, load_store, print_json, save_store};
use crate::cli::output::OutputFormat;
use crate::cli::present;
use crate::cli::{EditArgs, ViewArgs};
use crate::domain::NoteError;
use crate::infra::{EditorLauncher, ScratchFile};

pub fn handle_view(args: &ViewArgs, session: &Session, out: &mut dyn Write) -> Result<()> {
    let store = load_store(session.storage)?;
    let note = store.require(args.id)?;

    match args.format {
        OutputFormat::Human => writeln!(out, "{}", present::full(note, session.style))?,
        OutputFormat::Json => print_json(out, note)?,
    }
    Ok(())
}

/// Result of comparing edited text against the original content.
#[derive(Debug, PartialEq, Eq)]
pub enum EditOutcome {
    Unchanged,
    Changed(String),
}

/// Decides what an edit did, ignoring trailing whitespace differences.
///
/// # Errors
///
/// Returns `NoteError::Validation` if the edit emptied the content.
pub fn apply_edit(original: &str, edited: &str) -> Result<EditOutcome, NoteError> {
    let edited = edited.trim_end();
    if edited == original.trim_end() {
        return Ok(EditOutcome::Unchanged);
    }
    if edited.trim().is_empty() {
        return Err(NoteError::validation(
            "edited content is empty; note left unchanged",
        ));
    }
    Ok(EditOutcome::Changed(edited.to_string()))
}

/// Edits a note's content through a scratch file and an external editor.
///
/// The scratch file is removed on every path out of this function.
pub fn handle_edit<E: EditorLauncher + ?Sized>(
    args: &EditArgs,
    session: &Session,
    editor: &E,
    out: &mut dyn Write,
) -> Result<()> {
    let mut store = load_store(session.storage)?;
    let original = store.require(args.id)?.content().to_string();

    let edited = {
        let scratch = ScratchFile::create(args.id, &original)
            .context("failed to create scratch file for editing")?;

        writeln!(
            out,
            "{}",
            session
                .style
                .label(&format!("Opening note ID {} in editor...", args.id))
        )?;
        editor.open(scratch.path())?;

        scratch
            .read()
            .with_context(|| format!("failed to read back {}", scratch.path().display()))?
    };

    match apply_edit(&original, &edited)? {
        EditOutcome::Unchanged => {
            writeln!(
                out,
                "{}",
                session.style.warning(&format!(
                    "Note ID {}: Content unchanged. Edit cancelled.",
                    args.id
                ))
            )?;
        }
        EditOutcome::Changed(content) => {
            store.require_mut(args.id)?.set_content(content);
            save_store(session.storage, &store)?;
            tracing::info!(id = %args.id, "updated note content");
            writeln!(
                out,
                "{}",
                session
                    .style
                    .success(&format!("Note ID {} content updated successfully.", args.id))
            )?;
        }
    }
    Ok(())
}
