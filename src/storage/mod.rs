//! Durable storage medium abstraction.
//!
//! The collection store only depends on a synchronous, string-keyed
//! key-to-text interface, so it can run against the on-disk medium in
//! production and an in-memory map in tests.

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::errors::AppError;

/// Synchronous key-to-text storage medium.
///
/// Writes are whole-value replacements; there is no partial update of a key.
pub trait StorageMedium: Send + Sync {
    /// Read the stored text for `key`, or `None` if nothing is stored.
    fn read(&self, key: &str) -> Result<Option<String>, AppError>;

    /// Replace the stored text for `key`.
    fn write(&self, key: &str, value: &str) -> Result<(), AppError>;

    /// Delete `key`. Deleting a missing key is a no-op.
    fn delete(&self, key: &str) -> Result<(), AppError>;
}

/// File-backed storage medium: one text file per key under a data directory.
pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    /// Open the storage directory, creating it if necessary.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, AppError> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", key))
    }
}

impl StorageMedium for FileStorage {
    fn read(&self, key: &str) -> Result<Option<String>, AppError> {
        match fs::read_to_string(self.key_path(key)) {
            Ok(text) => Ok(Some(text)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<(), AppError> {
        // Write to a temp file and rename so a key is never observed
        // half-written.
        let path = self.key_path(key);
        let tmp = temp_path(&path);
        fs::write(&tmp, value)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), AppError> {
        match fs::remove_file(self.key_path(key)) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

fn temp_path(path: &Path) -> PathBuf {
    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    PathBuf::from(tmp)
}

/// In-memory storage medium for tests and ephemeral sessions.
#[derive(Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageMedium for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>, AppError> {
        let entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        Ok(entries.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), AppError> {
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), AppError> {
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.remove(key);
        Ok(())
    }
}
