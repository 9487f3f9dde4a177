//! Isolated test environment with temp directory.

// Test utility; not every helper is used by every test binary
#![allow(dead_code)]

use super::{NoteCommand, TestNote};
use notekeeper::domain::Store;
use notekeeper::infra::{DirectoryStorage, JsonFileStorage, NoteStorage};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated test environment with a temporary store location.
///
/// The temp directory is removed when the TestEnv is dropped.
pub struct TestEnv {
    /// The temporary directory (kept for lifetime management)
    _temp_dir: TempDir,
    root: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let root = temp_dir.path().to_path_buf();
        Self {
            _temp_dir: temp_dir,
            root,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Location of the JSON store document.
    pub fn store_path(&self) -> PathBuf {
        self.root.join("notes_db.json")
    }

    /// Location of the one-file-per-note store.
    pub fn notes_dir(&self) -> PathBuf {
        self.root.join("notes")
    }

    pub fn json_storage(&self) -> JsonFileStorage {
        JsonFileStorage::new(self.store_path())
    }

    pub fn dir_storage(&self) -> DirectoryStorage {
        DirectoryStorage::new(self.notes_dir())
    }

    /// Writes `notes` to the JSON store, numbering unset ids from 1.
    pub fn seed(&self, notes: &[TestNote]) -> Store {
        seed_into(&self.json_storage(), notes)
    }

    /// Writes `notes` to the directory store, numbering unset ids from 1.
    pub fn seed_dir(&self, notes: &[TestNote]) -> Store {
        seed_into(&self.dir_storage(), notes)
    }

    /// Loads the JSON store as the binary would see it.
    pub fn load(&self) -> Store {
        self.json_storage().load().expect("store should load")
    }

    pub fn load_dir(&self) -> Store {
        self.dir_storage().load().expect("store should load")
    }

    /// Creates a NoteCommand pointed at the JSON store.
    pub fn cmd(&self) -> NoteCommand {
        NoteCommand::new().store(&self.store_path())
    }

    /// Creates a NoteCommand pointed at the directory store.
    pub fn dir_cmd(&self) -> NoteCommand {
        NoteCommand::new().dir_backend().store(&self.notes_dir())
    }

    /// Writes a file under the environment root and returns its path.
    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.root.join(name);
        std::fs::write(&path, content).expect("Failed to write file");
        path
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

fn seed_into(storage: &dyn NoteStorage, notes: &[TestNote]) -> Store {
    let built = notes
        .iter()
        .enumerate()
        .map(|(i, n)| n.to_note(i as u64 + 1))
        .collect();
    let store = Store::from_notes(built, 0).expect("seed notes should be consistent");
    storage.save(&store).expect("Failed to seed store");
    store
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_cleanup_on_drop() {
        let path = {
            let env = TestEnv::new();
            env.root().to_path_buf()
        };
        assert!(!path.exists(), "temp directory should be cleaned up on drop");
    }

    #[test]
    fn seed_numbers_notes_from_one() {
        let env = TestEnv::new();
        env.seed(&[TestNote::new("A"), TestNote::new("B")]);
        let ids: Vec<u64> = env.load().notes().iter().map(|n| n.id().get()).collect();
        assert_eq!(ids, vec![1, 2]);
    }
}
