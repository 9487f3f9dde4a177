//! One-file-per-note backend.

use super::frontmatter::{self, Frontmatter};
use super::storage::{NoteStorage, StoreError, read_high_water, write_atomic, write_high_water};
use crate::domain::{Note, NoteId, Store};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

const SEQ_FILE: &str = ".seq";

/// Stores each note as `<id>.md` inside a directory.
///
/// Each file holds YAML frontmatter (title, creation time, tags) followed by
/// the note content. Files not named `<positive integer>.md` are ignored,
/// as are hidden files and subdirectories. Saving only deletes the files of
/// notes removed from the store, never files it did not load.
#[derive(Debug, Clone)]
pub struct DirectoryStorage {
    dir: PathBuf,
}

impl DirectoryStorage {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Path of the file holding the note with `id`.
    pub fn note_path(&self, id: NoteId) -> PathBuf {
        self.dir.join(format!("{}.md", id))
    }

    /// Note files currently on disk, keyed by the id in their filename.
    fn scan(&self) -> Result<Vec<(NoteId, PathBuf)>, StoreError> {
        let mut found = Vec::new();
        for entry in WalkDir::new(&self.dir).min_depth(1).max_depth(1) {
            let entry = entry.map_err(|e| {
                let path = e.path().unwrap_or(&self.dir).to_path_buf();
                match e.into_io_error() {
                    Some(io) => StoreError::from_io(&path, io),
                    None => StoreError::corrupt(&path, "filesystem loop"),
                }
            })?;

            if !entry.file_type().is_file() {
                continue;
            }
            if let Some(id) = id_from_filename(entry.file_name().to_str()) {
                found.push((id, entry.into_path()));
            }
        }
        found.sort_by_key(|(id, _)| *id);
        Ok(found)
    }

    fn read_note(id: NoteId, path: &Path) -> Result<Note, StoreError> {
        let text = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::InvalidData => StoreError::corrupt(path, "not valid UTF-8"),
            _ => StoreError::from_io(path, e),
        })?;
        let (fm, body) = frontmatter::parse(&text).map_err(|e| StoreError::corrupt(path, e))?;
        Ok(Note::from_parts(id, fm.title, body, fm.created_at, fm.tags))
    }
}

/// Extracts the id from a `<id>.md` filename.
fn id_from_filename(name: Option<&str>) -> Option<NoteId> {
    let stem = name?.strip_suffix(".md")?;
    if stem.is_empty() || !stem.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    stem.parse().ok()
}

impl NoteStorage for DirectoryStorage {
    fn load(&self) -> Result<Store, StoreError> {
        if !self.dir.exists() {
            tracing::debug!(dir = %self.dir.display(), "notes directory not found, starting empty");
            return Ok(Store::new());
        }
        if !self.dir.is_dir() {
            return Err(StoreError::NotADirectory {
                path: self.dir.clone(),
            });
        }

        let high_water = read_high_water(&self.dir.join(SEQ_FILE))?;
        let notes = self
            .scan()?
            .iter()
            .map(|(id, path)| Self::read_note(*id, path))
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!(dir = %self.dir.display(), count = notes.len(), "loaded notes");
        Store::from_notes(notes, high_water).map_err(|e| StoreError::integrity(&self.dir, e))
    }

    fn save(&self, store: &Store) -> Result<(), StoreError> {
        std::fs::create_dir_all(&self.dir).map_err(|e| StoreError::from_io(&self.dir, e))?;

        for note in store.notes() {
            let path = self.note_path(note.id());
            let fm = Frontmatter {
                title: note.title().to_string(),
                created_at: note.created_at(),
                tags: note.tags().clone(),
            };
            let text = frontmatter::serialize(&fm, note.content()).map_err(|e| {
                StoreError::Encode {
                    path: path.clone(),
                    reason: e.to_string(),
                }
            })?;
            write_atomic(&path, text.as_bytes())?;
        }

        for &id in store.removed() {
            let path = self.note_path(id);
            match std::fs::remove_file(&path) {
                Ok(()) => tracing::debug!(path = %path.display(), "removed deleted note file"),
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
                Err(e) => return Err(StoreError::from_io(&path, e)),
            }
        }

        write_high_water(&self.dir.join(SEQ_FILE), store.high_water())?;
        Ok(())
    }

    /// The sidecar value, raised to the largest `<id>.md` on disk so ids of
    /// unreadable files are not handed out again.
    fn high_water(&self) -> Result<u64, StoreError> {
        if !self.dir.is_dir() {
            return Ok(0);
        }
        let recorded = read_high_water(&self.dir.join(SEQ_FILE))?;
        let on_disk = self.scan()?.last().map_or(0, |(id, _)| id.get());
        Ok(recorded.max(on_disk))
    }

    fn location(&self) -> &Path {
        &self.dir
    }
}
