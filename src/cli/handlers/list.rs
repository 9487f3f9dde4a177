//! List and search command handlers.

use anyhow::Result;
use std::io::Write;

use super::{Session, load_store, parse_tag, print_json};
use crate::cli::output::{NoteListing, OutputFormat};
use crate::cli::present;
use crate::cli::{ListArgs, SearchArgs};
use crate::domain::{Note, NoteError, Store, Tag};

/// Notes passing the optional tag filter, lazily, in store order.
pub fn select_notes<'a>(
    store: &'a Store,
    tag: Option<&'a Tag>,
) -> Box<dyn Iterator<Item = &'a Note> + 'a> {
    match tag {
        Some(tag) => Box::new(store.with_tag(tag)),
        None => Box::new(store.notes().iter()),
    }
}

pub fn handle_list(args: &ListArgs, session: &Session, out: &mut dyn Write) -> Result<()> {
    let tag = args.tag.as_deref().map(parse_tag).transpose()?;
    let store = load_store(session.storage)?;
    let notes: Vec<&Note> = select_notes(&store, tag.as_ref()).collect();
    let style = session.style;

    match args.format {
        OutputFormat::Human => {
            if notes.is_empty() {
                let message = present::empty_list_message(tag.as_ref());
                writeln!(out, "{}", style.warning(&message))?;
                return Ok(());
            }

            writeln!(out, "{}", present::list_header(notes.len(), tag.as_ref(), style))?;
            for note in &notes {
                writeln!(out, "{}", present::summary(note, style))?;
                writeln!(out, "{}", "-".repeat(20))?;
            }
        }
        OutputFormat::Json => {
            let listings: Vec<NoteListing> = notes.into_iter().map(NoteListing::from).collect();
            print_json(out, listings)?;
        }
    }
    Ok(())
}

pub fn handle_search(args: &SearchArgs, session: &Session, out: &mut dyn Write) -> Result<()> {
    let query = args.query.trim();
    if query.is_empty() {
        return Err(NoteError::validation("search query cannot be empty").into());
    }

    let store = load_store(session.storage)?;
    let results: Vec<&Note> = store.search(query, args.tags_only).collect();
    let style = session.style;

    match args.format {
        OutputFormat::Human => {
            writeln!(
                out,
                "{}",
                style.heading(&format!("--- Search Results for '{}' ---", query))
            )?;
            if results.is_empty() {
                writeln!(out, "{}", style.warning("No matches found."))?;
            }
            for note in &results {
                writeln!(out, "{}", present::preview(note, style))?;
                writeln!(out, "{}", "-".repeat(20))?;
            }
        }
        OutputFormat::Json => {
            let listings: Vec<NoteListing> = results.into_iter().map(NoteListing::from).collect();
            print_json(out, listings)?;
        }
    }
    Ok(())
}
