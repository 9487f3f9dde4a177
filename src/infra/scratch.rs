//! Scoped scratch files for the editor round trip.

use crate::domain::NoteId;
use std::io::{self, Write as IoWrite};
use std::path::Path;
use tempfile::NamedTempFile;

/// A uniquely named temporary file holding note content while it is edited.
///
/// The file is removed when the value is dropped, on every exit path.
#[derive(Debug)]
pub struct ScratchFile {
    file: NamedTempFile,
}

impl ScratchFile {
    /// Creates a scratch file in the system temp directory seeded with `content`.
    pub fn create(id: NoteId, content: &str) -> io::Result<Self> {
        Self::create_in(&std::env::temp_dir(), id, content)
    }

    /// Creates a scratch file in `dir` seeded with `content`.
    pub fn create_in(dir: &Path, id: NoteId, content: &str) -> io::Result<Self> {
        let mut file = tempfile::Builder::new()
            .prefix(&format!("note_edit_{}_", id))
            .suffix(".txt")
            .tempfile_in(dir)?;
        file.write_all(content.as_bytes())?;
        file.flush()?;
        Ok(Self { file })
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// Reads the current contents back, including changes made by other processes.
    pub fn read(&self) -> io::Result<String> {
        std::fs::read_to_string(self.path())
    }
}
