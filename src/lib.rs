//! notekeeper - a small tagged note store for the terminal

pub mod cli;
pub mod domain;
pub mod infra;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use std::io::{self, Write};

use cli::{
    Cli, Command,
    config::Config,
    handlers::{
        Session, handle_add, handle_delete, handle_edit, handle_list, handle_search, handle_tag,
        handle_tags, handle_view,
    },
    present::Style,
};
use infra::{SystemEditor, logging::init_tracing, open_storage};

/// Main entry point for the CLI application.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    if let Err(err) = init_tracing(cli.verbose) {
        eprintln!("warning: logging disabled: {err}");
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if let Command::Completions(args) = &cli.command {
        clap_complete::generate(args.shell, &mut Cli::command(), "note", &mut out);
        return Ok(());
    }

    let config = Config::load()?;
    let backend = config.backend(cli.backend);
    let store_path = config.store_path(cli.store.as_ref(), backend);
    tracing::debug!(?backend, path = %store_path.display(), "opening store");

    let storage = open_storage(backend, store_path);
    let session = Session::new(storage.as_ref(), Style::new(config.color_enabled(cli.no_color)));

    match &cli.command {
        Command::Add(args) => handle_add(args, &session, &mut out),
        Command::List(args) => handle_list(args, &session, &mut out),
        Command::View(args) => handle_view(args, &session, &mut out),
        Command::Edit(args) => {
            let editor = SystemEditor::new(config.editor());
            tracing::debug!(editor = editor.command(), "resolved editor");
            handle_edit(args, &session, &editor, &mut out)
        }
        Command::Delete(args) => {
            let stdin = io::stdin();
            handle_delete(args, &session, &mut stdin.lock(), &mut out)
        }
        Command::Tag(args) => handle_tag(args, &session, &mut out),
        Command::Search(args) => handle_search(args, &session, &mut out),
        Command::Tags(args) => handle_tags(args, &session, &mut out),
        Command::Completions(_) => Ok(()),
    }?;

    out.flush()?;
    Ok(())
}
