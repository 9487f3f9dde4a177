//! Delete command handler.

use anyhow::Result;
use std::io::{BufRead, Write};

use super::{Session, load_store, save_store};
use crate::cli::DeleteArgs;
use crate::infra::confirm;

/// Deletes a note once the user types `yes`. Any other answer leaves the
/// store untouched.
pub fn handle_delete(
    args: &DeleteArgs,
    session: &Session,
    input: &mut dyn BufRead,
    out: &mut dyn Write,
) -> Result<()> {
    let mut store = load_store(session.storage)?;
    let title = store.require(args.id)?.title().to_string();
    let style = session.style;

    writeln!(out)?;
    writeln!(out, "{}", style.warning("--- CONFIRM DELETION ---"))?;
    writeln!(
        out,
        "Are you sure you want to delete Note ID {} ('{}')?",
        args.id, title
    )?;

    if !confirm(out, input, "Type 'yes' to confirm: ")? {
        writeln!(out, "{}", style.label("Deletion cancelled."))?;
        return Ok(());
    }

    store.remove(args.id);
    save_store(session.storage, &store)?;
    tracing::info!(id = %args.id, "deleted note");

    writeln!(
        out,
        "{}",
        style.success(&format!("Note ID {} successfully DELETED.", args.id))
    )?;
    Ok(())
}
