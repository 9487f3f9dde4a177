//! Storage backends, editor and prompt plumbing, logging

mod dir_store;
mod editor;
mod frontmatter;
mod json_store;
pub mod logging;
mod prompt;
mod scratch;
mod storage;

pub use dir_store::DirectoryStorage;
pub use editor::{EditorLauncher, SystemEditor};
pub use frontmatter::{Frontmatter, ParseError, parse, serialize};
pub use json_store::JsonFileStorage;
pub use prompt::{confirm, is_affirmative};
pub use scratch::ScratchFile;
pub use storage::{Backend, NoteStorage, StoreError, open_storage};
