//! Storage access contract shared by the note store backends.

use crate::domain::{IntegrityError, Store};
use serde::Deserialize;
use std::io::{self, Write as IoWrite};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use thiserror::Error;

use super::{DirectoryStorage, JsonFileStorage};

/// Errors while loading or saving the note store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The persisted document exists but cannot be interpreted.
    #[error("store at {path} is corrupt: {reason}")]
    Corrupt { path: PathBuf, reason: String },

    #[error("permission denied: {path}")]
    PermissionDenied { path: PathBuf },

    #[error("I/O error for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("atomic write failed for {path}: {source}")]
    AtomicWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to encode store for {path}: {reason}")]
    Encode { path: PathBuf, reason: String },

    #[error("path is not a directory: {path}")]
    NotADirectory { path: PathBuf },
}

impl StoreError {
    /// Creates an appropriate StoreError from an io::Error.
    pub(crate) fn from_io(path: &Path, error: io::Error) -> Self {
        match error.kind() {
            io::ErrorKind::PermissionDenied => StoreError::PermissionDenied { path: path.into() },
            _ => StoreError::Io {
                path: path.into(),
                source: error,
            },
        }
    }

    pub(crate) fn corrupt(path: &Path, reason: impl ToString) -> Self {
        StoreError::Corrupt {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    pub(crate) fn integrity(path: &Path, error: IntegrityError) -> Self {
        Self::corrupt(path, error)
    }

    /// True for the recoverable "document exists but is unparsable" case.
    pub fn is_corrupt(&self) -> bool {
        matches!(self, StoreError::Corrupt { .. })
    }
}

/// Loads and saves the whole note store.
///
/// Every invocation reads the full store and, after a mutating command,
/// writes it back in full. A missing store is an empty store, not an error.
pub trait NoteStorage {
    /// Reads the persisted store.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Corrupt` if the store exists but cannot be parsed
    /// or violates the id/title invariants, and an I/O variant if it cannot
    /// be read at all.
    fn load(&self) -> Result<Store, StoreError>;

    /// Replaces the persisted store with `store`.
    fn save(&self, store: &Store) -> Result<(), StoreError>;

    /// Highest id the persisted store has ever used, readable even when
    /// [`load`](NoteStorage::load) reports the store as corrupt.
    fn high_water(&self) -> Result<u64, StoreError>;

    /// Where the store lives, for messages.
    fn location(&self) -> &Path;
}

/// Which persistence strategy backs the store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// A single JSON document holding every note
    #[default]
    Json,
    /// A directory with one markdown file per note
    Dir,
}

/// Opens the storage backend for `backend` rooted at `path`.
pub fn open_storage(backend: Backend, path: PathBuf) -> Box<dyn NoteStorage> {
    match backend {
        Backend::Json => Box::new(JsonFileStorage::new(path)),
        Backend::Dir => Box::new(DirectoryStorage::new(path)),
    }
}

/// Writes `bytes` to `path` atomically.
///
/// Uses a temporary file in the destination directory and an atomic rename,
/// so a crash mid-write leaves the previous file intact.
pub(crate) fn write_atomic(path: &Path, bytes: &[u8]) -> Result<(), StoreError> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let mut temp = NamedTempFile::new_in(parent).map_err(|e| StoreError::from_io(path, e))?;

    temp.write_all(bytes)
        .and_then(|_| temp.as_file().sync_all())
        .map_err(|e| StoreError::from_io(path, e))?;

    temp.persist(path).map_err(|e| StoreError::AtomicWrite {
        path: path.into(),
        source: e.error,
    })?;

    Ok(())
}

/// Reads the id high-water mark sidecar. Missing means 0.
pub(crate) fn read_high_water(path: &Path) -> Result<u64, StoreError> {
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(0),
        Err(e) => return Err(StoreError::from_io(path, e)),
    };

    match text.trim().parse() {
        Ok(value) => Ok(value),
        Err(_) => {
            tracing::warn!(path = %path.display(), "ignoring unreadable id sequence file");
            Ok(0)
        }
    }
}

pub(crate) fn write_high_water(path: &Path, value: u64) -> Result<(), StoreError> {
    write_atomic(path, format!("{}\n", value).as_bytes())
}
