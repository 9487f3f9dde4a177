//! Add command handler.

use anyhow::Result;
use chrono::Local;
use std::io::Write;

use super::{Session, load_store, save_store};
use crate::cli::AddArgs;
use crate::domain::NewNote;

pub fn handle_add(args: &AddArgs, session: &Session, out: &mut dyn Write) -> Result<()> {
    // Validate before any I/O
    let draft = NewNote::new(
        &args.title,
        args.content.as_deref().unwrap_or_default(),
        &args.tags,
    )?;

    let mut store = load_store(session.storage)?;
    let note = store.insert(draft, Local::now().naive_local())?;
    let (id, title) = (note.id(), note.title().to_string());

    save_store(session.storage, &store)?;
    tracing::info!(%id, "added note");

    writeln!(
        out,
        "{}",
        session
            .style
            .success(&format!("Note ID {} ('{}') added successfully.", id, title))
    )?;
    Ok(())
}
