//! Error taxonomy for note commands.

use super::NoteId;
use std::io;
use thiserror::Error;

/// Failures a note command reports to the user.
///
/// Storage failures (corrupt or unreadable store) live in
/// [`StoreError`](crate::infra::StoreError).
#[derive(Debug, Error)]
pub enum NoteError {
    /// A required field was missing or empty; nothing was changed.
    #[error("{0}")]
    Validation(String),

    #[error("note with ID {0} not found")]
    NotFound(NoteId),

    /// The external editor process could not be started.
    #[error("editor '{editor}' could not be started: {source}")]
    EditorUnavailable {
        editor: String,
        #[source]
        source: io::Error,
    },
}

impl NoteError {
    pub(crate) fn validation(message: impl Into<String>) -> Self {
        NoteError::Validation(message.into())
    }
}
