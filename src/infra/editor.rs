//! External editor invocation.

use crate::domain::NoteError;
use std::io;
use std::path::Path;
use std::process::Command;

/// Opens a file in an editor and blocks until the editor exits.
pub trait EditorLauncher {
    /// # Errors
    ///
    /// Returns `NoteError::EditorUnavailable` if the editor could not be
    /// started at all. A non-zero exit status is not an error.
    fn open(&self, path: &Path) -> Result<(), NoteError>;
}

/// The user's configured editor, run as a child process on the terminal.
#[derive(Debug, Clone)]
pub struct SystemEditor {
    command: String,
}

impl SystemEditor {
    /// `command` may include arguments, e.g. `code --wait`.
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }

    pub fn command(&self) -> &str {
        &self.command
    }
}

impl EditorLauncher for SystemEditor {
    fn open(&self, path: &Path) -> Result<(), NoteError> {
        let mut parts = self.command.split_whitespace();
        let Some(program) = parts.next() else {
            return Err(NoteError::EditorUnavailable {
                editor: self.command.clone(),
                source: io::Error::new(io::ErrorKind::NotFound, "editor command is empty"),
            });
        };

        tracing::debug!(editor = %self.command, path = %path.display(), "open_editor");

        let status = Command::new(program)
            .args(parts)
            .arg(path)
            .status()
            .map_err(|source| NoteError::EditorUnavailable {
                editor: self.command.clone(),
                source,
            })?;

        if !status.success() {
            tracing::warn!(editor = %self.command, %status, "editor exited with non-zero status");
        }
        Ok(())
    }
}
