//! CLI command definitions and handlers

pub mod config;
pub mod handlers;
pub mod output;
pub mod present;

use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::domain::NoteId;
use crate::infra::Backend;
use output::OutputFormat;

/// note - a small tagged note store for the terminal
#[derive(Parser, Debug)]
#[command(name = "note", version, about, long_about = None)]
pub struct Cli {
    /// Store location: a JSON file, or a directory with `--backend dir`
    #[arg(short = 's', long, global = true)]
    pub store: Option<PathBuf>,

    /// Storage backend (overrides config file)
    #[arg(long, global = true, value_enum)]
    pub backend: Option<Backend>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Increase verbosity (-v, -vv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Add a new note
    Add(AddArgs),

    /// List notes, optionally filtered by tag
    List(ListArgs),

    /// Show a single note in full
    View(ViewArgs),

    /// Edit a note's content in $EDITOR
    Edit(EditArgs),

    /// Delete a note after confirmation
    Delete(DeleteArgs),

    /// Add or remove a tag on a note
    Tag(TagArgs),

    /// Search titles, content and tags
    Search(SearchArgs),

    /// List all tags with note counts
    Tags(TagsArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `add` command
#[derive(Parser, Debug)]
pub struct AddArgs {
    /// Note title
    pub title: String,

    /// Note content
    #[arg(short, long)]
    pub content: Option<String>,

    /// Tags for the note
    #[arg(short, long, num_args = 1.., action = ArgAction::Append)]
    pub tags: Vec<String>,
}

/// Arguments for the `list` command
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Only list notes carrying this tag
    #[arg(short, long)]
    pub tag: Option<String>,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `view` command
#[derive(Parser, Debug)]
pub struct ViewArgs {
    /// Note ID
    pub id: NoteId,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `edit` command
#[derive(Parser, Debug)]
pub struct EditArgs {
    /// Note ID
    pub id: NoteId,
}

/// Arguments for the `delete` command
#[derive(Parser, Debug)]
pub struct DeleteArgs {
    /// Note ID
    pub id: NoteId,
}

/// Arguments for the `tag` command
#[derive(Parser, Debug)]
pub struct TagArgs {
    #[command(subcommand)]
    pub action: TagAction,
}

#[derive(Subcommand, Debug)]
pub enum TagAction {
    /// Add a tag to a note
    Add(TagChangeArgs),

    /// Remove a tag from a note
    Remove(TagChangeArgs),
}

/// Arguments for `tag add` and `tag remove`
#[derive(Parser, Debug)]
pub struct TagChangeArgs {
    /// Note ID
    pub id: NoteId,

    /// Tag name
    pub tag: String,
}

/// Arguments for the `search` command
#[derive(Parser, Debug)]
pub struct SearchArgs {
    /// Search term (case-insensitive substring)
    pub query: String,

    /// Search tags only, ignoring title and content
    #[arg(long = "tag")]
    pub tags_only: bool,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `tags` command
#[derive(Parser, Debug)]
pub struct TagsArgs {
    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `completions` command
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for (bash, zsh, fish)
    #[arg(value_enum)]
    pub shell: Shell,
}
