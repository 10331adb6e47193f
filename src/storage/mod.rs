//! Snapshot persistence for small JSON documents (preferences, history).
//!
//! Stores are whole-document: `load` returns the last saved snapshot, `save`
//! replaces it. Callers own the read-modify-write locking.

use parking_lot::Mutex;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Storage I/O error: {0}")]
    Io(String),

    /// The persisted bytes exist but don't decode.
    #[error("Corrupt snapshot: {0}")]
    Corrupt(String),
}

impl From<std::io::Error> for StorageError {
    fn from(e: std::io::Error) -> Self {
        StorageError::Io(e.to_string())
    }
}

/// Durable keyed store for one snapshot type.
///
/// `load` returns `Ok(None)` when nothing was saved yet.
pub trait SnapshotStore<T>: Send + Sync {
    fn load(&self) -> Result<Option<T>, StorageError>;
    fn save(&self, value: &T) -> Result<(), StorageError>;
}

/// Loads a snapshot, falling back to `T::default()` when it is missing or
/// unreadable. Resets are logged, never returned.
pub fn load_or_default<T, S>(store: &S, what: &str) -> T
where
    T: Default,
    S: SnapshotStore<T> + ?Sized,
{
    match store.load() {
        Ok(Some(value)) => value,
        Ok(None) => T::default(),
        Err(e) => {
            log::warn!("Resetting {} to defaults: {}", what, e);
            T::default()
        }
    }
}

/// Pretty-printed JSON file on disk.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl<T> SnapshotStore<T> for JsonFileStore
where
    T: Serialize + DeserializeOwned,
{
    fn load(&self) -> Result<Option<T>, StorageError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        if content.trim().is_empty() {
            return Ok(None);
        }

        serde_json::from_str(&content)
            .map(Some)
            .map_err(|e| StorageError::Corrupt(format!("{}: {}", self.path.display(), e)))
    }

    fn save(&self, value: &T) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(value)
            .map_err(|e| StorageError::Io(format!("Serialization error: {}", e)))?;

        // Atomic replace: readers see the old or the new snapshot, never a mix.
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

/// In-process store, holds the snapshot as JSON text like the file store.
#[derive(Default)]
pub struct MemoryStore {
    content: Mutex<Option<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the store with raw text, e.g. to simulate corrupted data.
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            content: Mutex::new(Some(raw.into())),
        }
    }
}

impl<T> SnapshotStore<T> for MemoryStore
where
    T: Serialize + DeserializeOwned,
{
    fn load(&self) -> Result<Option<T>, StorageError> {
        let content = self.content.lock();
        match content.as_deref() {
            Some(raw) => serde_json::from_str(raw)
                .map(Some)
                .map_err(|e| StorageError::Corrupt(e.to_string())),
            None => Ok(None),
        }
    }

    fn save(&self, value: &T) -> Result<(), StorageError> {
        let json = serde_json::to_string(value)
            .map_err(|e| StorageError::Io(format!("Serialization error: {}", e)))?;
        *self.content.lock() = Some(json);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
    struct Doc {
        items: Vec<String>,
    }

    #[test]
    fn test_file_store_round_trip_and_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("nested").join("doc.json"));

        let missing: Option<Doc> = store.load().unwrap();
        assert!(missing.is_none());

        let doc = Doc {
            items: vec!["a".to_string()],
        };
        store.save(&doc).unwrap();
        let loaded: Option<Doc> = store.load().unwrap();
        assert_eq!(loaded, Some(doc));
    }

    #[test]
    fn test_corrupt_file_resets_to_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.json");
        fs::write(&path, "{not json").unwrap();

        let store = JsonFileStore::new(&path);
        let result: Result<Option<Doc>, _> = store.load();
        assert!(matches!(result, Err(StorageError::Corrupt(_))));

        let doc: Doc = load_or_default(&store, "doc");
        assert_eq!(doc, Doc::default());
    }

    #[test]
    fn test_memory_store_with_raw_corruption() {
        let store = MemoryStore::with_raw("[1, 2");
        let doc: Doc = load_or_default(&store, "doc");
        assert!(doc.items.is_empty());
    }
}
