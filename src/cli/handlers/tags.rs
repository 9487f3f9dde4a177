//! Tag command handlers (tag add, tag remove, tags).

use anyhow::Result;
use std::io::Write;

use super::{Session, load_store, parse_tag, print_json, save_store};
use crate::cli::output::{OutputFormat, TagListing};
use crate::cli::{TagAction, TagArgs, TagChangeArgs, TagsArgs};

pub fn handle_tag(args: &TagArgs, session: &Session, out: &mut dyn Write) -> Result<()> {
    match &args.action {
        TagAction::Add(change) => change_tag(change, true, session, out),
        TagAction::Remove(change) => change_tag(change, false, session, out),
    }
}

/// Adds (`add == true`) or removes a tag. Already-present or absent tags
/// produce a warning and leave the store unsaved.
fn change_tag(args: &TagChangeArgs, add: bool, session: &Session, out: &mut dyn Write) -> Result<()> {
    let tag = parse_tag(&args.tag)?;
    let mut store = load_store(session.storage)?;
    let style = session.style;

    let changed = {
        let note = store.require_mut(args.id)?;
        if add {
            note.add_tag(tag.clone())
        } else {
            note.remove_tag(&tag)
        }
    };

    if !changed {
        let message = if add {
            format!("Tag '{}' already exists on Note ID {}.", tag, args.id)
        } else {
            format!("Tag '{}' not found on Note ID {}.", tag, args.id)
        };
        writeln!(out, "{}", style.warning(&message))?;
        return Ok(());
    }

    save_store(session.storage, &store)?;

    let message = if add {
        format!("Tag '{}' added to Note ID {}.", tag, args.id)
    } else {
        format!("Tag '{}' removed from Note ID {}.", tag, args.id)
    };
    writeln!(out, "{}", style.success(&message))?;
    Ok(())
}

pub fn handle_tags(args: &TagsArgs, session: &Session, out: &mut dyn Write) -> Result<()> {
    let store = load_store(session.storage)?;
    let counts = store.tag_counts();

    match args.format {
        OutputFormat::Human => {
            if counts.is_empty() {
                writeln!(out, "No tags found.")?;
            }
            for (tag, count) in &counts {
                writeln!(out, "{} ({})", tag, count)?;
            }
        }
        OutputFormat::Json => {
            let listings: Vec<TagListing> = counts
                .iter()
                .map(|(tag, count)| TagListing {
                    name: tag.as_str(),
                    count: *count,
                })
                .collect();
            print_json(out, listings)?;
        }
    }
    Ok(())
}
