//! Single-document JSON backend.

use super::storage::{NoteStorage, StoreError, read_high_water, write_atomic, write_high_water};
use crate::domain::{Note, Store};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::io;
use std::path::{Path, PathBuf};

/// Stores every note in one JSON array document.
///
/// The document is pretty-printed with a four-space indent. The id
/// high-water mark lives next to it in `<document>.seq`.
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    path: PathBuf,
    seq_path: PathBuf,
}

impl JsonFileStorage {
    pub fn new(path: PathBuf) -> Self {
        let mut seq = path.clone().into_os_string();
        seq.push(".seq");
        Self {
            path,
            seq_path: PathBuf::from(seq),
        }
    }

    /// Serializes notes exactly as `save` writes them.
    pub fn encode(notes: &[Note]) -> Result<Vec<u8>, serde_json::Error> {
        let mut buf = Vec::new();
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        notes.serialize(&mut serializer)?;
        Ok(buf)
    }
}

impl NoteStorage for JsonFileStorage {
    fn load(&self) -> Result<Store, StoreError> {
        let high_water = read_high_water(&self.seq_path)?;

        let text = match std::fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "store not found, starting empty");
                return Store::from_notes(Vec::new(), high_water)
                    .map_err(|e| StoreError::integrity(&self.path, e));
            }
            Err(e) if e.kind() == io::ErrorKind::InvalidData => {
                return Err(StoreError::corrupt(&self.path, "not valid UTF-8"));
            }
            Err(e) => return Err(StoreError::from_io(&self.path, e)),
        };

        let notes: Vec<Note> =
            serde_json::from_str(&text).map_err(|e| StoreError::corrupt(&self.path, e))?;

        tracing::debug!(path = %self.path.display(), count = notes.len(), "loaded store");
        Store::from_notes(notes, high_water).map_err(|e| StoreError::integrity(&self.path, e))
    }

    fn save(&self, store: &Store) -> Result<(), StoreError> {
        let bytes = Self::encode(store.notes()).map_err(|e| StoreError::Encode {
            path: self.path.clone(),
            reason: e.to_string(),
        })?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| StoreError::from_io(parent, e))?;
        }

        write_atomic(&self.path, &bytes)?;
        write_high_water(&self.seq_path, store.high_water())?;

        tracing::debug!(path = %self.path.display(), count = store.len(), "saved store");
        Ok(())
    }

    fn high_water(&self) -> Result<u64, StoreError> {
        read_high_water(&self.seq_path)
    }

    fn location(&self) -> &Path {
        &self.path
    }
}
