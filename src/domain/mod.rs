//! Core types: Note, NoteId, Tag, Store

mod error;
mod note;
mod note_id;
mod store;
mod tag;

pub use error::NoteError;
pub use note::{NewNote, Note, TIMESTAMP_FORMAT};
pub(crate) use note::timestamp;
pub use note_id::{NoteId, ParseNoteIdError};
pub use store::{IntegrityError, Store};
pub use tag::{ParseTagError, Tag};
