//! Key-Value Storage
//!
//! Abstraction over wherever the client keeps its auth blob: browser
//! local storage in a web build, a file on disk for native shells, or
//! plain memory in tests.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use thiserror::Error;

/// Storage key for the persisted auth state
pub const AUTH_STORAGE_KEY: &str = "auth";

/// Storage errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Storage I/O failed: {0}")]
    Io(#[from] io::Error),
}

/// Key-value storage port
pub trait Storage: Send + Sync {
    /// Load the value for a key, `None` when absent
    fn load(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Save a value under a key, replacing any previous value
    fn save(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove a key
    fn clear(&self, key: &str) -> Result<(), StorageError>;
}

impl<T: Storage + ?Sized> Storage for &T {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).load(key)
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).save(key, value)
    }

    fn clear(&self, key: &str) -> Result<(), StorageError> {
        (**self).clear(key)
    }
}

/// In-memory storage
#[derive(Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.lock().unwrap().get(key).cloned())
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn clear(&self, key: &str) -> Result<(), StorageError> {
        self.entries.lock().unwrap().remove(key);
        Ok(())
    }
}

/// File-backed storage, one file per key under a base directory
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl Storage for FileStorage {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.path_for(key), value)?;
        Ok(())
    }

    fn clear(&self, key: &str) -> Result<(), StorageError> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_roundtrip() {
        let storage = MemoryStorage::new();
        assert!(storage.load("auth").unwrap().is_none());

        storage.save("auth", "{\"token\":\"t\"}").unwrap();
        assert_eq!(
            storage.load("auth").unwrap().as_deref(),
            Some("{\"token\":\"t\"}")
        );

        storage.clear("auth").unwrap();
        assert!(storage.load("auth").unwrap().is_none());
    }

    #[test]
    fn test_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path());

        assert!(storage.load("auth").unwrap().is_none());
        storage.save("auth", "payload").unwrap();
        assert_eq!(storage.load("auth").unwrap().as_deref(), Some("payload"));

        storage.clear("auth").unwrap();
        assert!(storage.load("auth").unwrap().is_none());

        // Clearing an absent key is not an error
        storage.clear("auth").unwrap();
    }
}
