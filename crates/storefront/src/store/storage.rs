//! Key-value storage access wrapper.
//!
//! A narrow interface over the persisted state so the transport (local
//! files here, an in-memory map in tests, conceivably a real backend) is
//! swappable without touching call sites. Values are opaque strings; the
//! stores above this layer decide the JSON layout.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use thiserror::Error;

/// Storage key for the serialized cart line-item list.
pub const CART_ITEMS_KEY: &str = "cartItems";

/// Storage key for the serialized wishlist entry list.
pub const WISHLIST_ITEMS_KEY: &str = "wishlistItems";

/// Storage key for the demo logged-in flag (boolean-as-string).
pub const LOGGED_IN_KEY: &str = "isLoggedIn";

/// Errors raised by a storage backend.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Underlying I/O failed (missing directory, permissions, disk full).
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The key contains characters the backend cannot map to a location.
    #[error("invalid storage key: {0}")]
    InvalidKey(String),

    /// The backend's internal lock was poisoned by a panicking writer.
    #[error("storage poisoned")]
    Poisoned,
}

/// A flat string key-value store.
///
/// Writes replace the whole value for a key. There is no transaction or
/// optimistic-concurrency check: two near-simultaneous read-modify-write
/// cycles can lose an update (last-write-wins). Accepted for the demo.
pub trait StorageBackend: Send + Sync {
    /// Read the value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read at all; a missing
    /// key is `Ok(None)`, not an error.
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the value cannot be written.
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove the value stored under `key`. Removing an absent key is a
    /// no-op.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails to delete an existing value.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Shared handle to a storage backend.
pub type SharedStorage = Arc<dyn StorageBackend>;

// =============================================================================
// FileStorage
// =============================================================================

/// File-backed storage: one file per key under a data directory.
///
/// Stands in for browser local storage; single profile, no versioning,
/// full-value writes.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Open (creating if needed) a storage directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    /// The directory this storage writes into.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        // Keys are fixed identifiers; anything path-like is rejected
        // rather than escaping the data directory.
        if key.is_empty() || !key.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
            return Err(StorageError::InvalidKey(key.to_owned()));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl StorageBackend for FileStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key)?;
        match std::fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        std::fs::write(&path, value)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        match std::fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

// =============================================================================
// MemoryStorage
// =============================================================================

/// In-memory storage for tests and dry runs.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    /// Create an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a shared handle to a fresh in-memory store.
    #[must_use]
    pub fn shared() -> SharedStorage {
        Arc::new(Self::new())
    }
}

impl StorageBackend for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        let entries = self.entries.lock().map_err(|_| StorageError::Poisoned)?;
        Ok(entries.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.lock().map_err(|_| StorageError::Poisoned)?;
        entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.lock().map_err(|_| StorageError::Poisoned)?;
        entries.remove(key);
        Ok(())
    }
}

/// A backend whose writes always fail, for exercising the swallowed-error
/// path in store tests.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct FailingStorage;

#[cfg(test)]
impl StorageBackend for FailingStorage {
    fn read(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Ok(None)
    }

    fn write(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Io(std::io::Error::other("write refused")))
    }

    fn remove(&self, _key: &str) -> Result<(), StorageError> {
        Err(StorageError::Io(std::io::Error::other("remove refused")))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_round_trip() {
        let storage = MemoryStorage::new();
        assert!(storage.read(CART_ITEMS_KEY).unwrap().is_none());

        storage.write(CART_ITEMS_KEY, "[]").unwrap();
        assert_eq!(storage.read(CART_ITEMS_KEY).unwrap().as_deref(), Some("[]"));

        storage.remove(CART_ITEMS_KEY).unwrap();
        assert!(storage.read(CART_ITEMS_KEY).unwrap().is_none());
    }

    #[test]
    fn test_memory_remove_absent_key_is_noop() {
        let storage = MemoryStorage::new();
        storage.remove("neverWritten").unwrap();
    }

    #[test]
    fn test_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::open(dir.path()).unwrap();

        assert!(storage.read(WISHLIST_ITEMS_KEY).unwrap().is_none());
        storage.write(WISHLIST_ITEMS_KEY, r#"[{"id":"2"}]"#).unwrap();
        assert_eq!(
            storage.read(WISHLIST_ITEMS_KEY).unwrap().as_deref(),
            Some(r#"[{"id":"2"}]"#)
        );

        storage.remove(WISHLIST_ITEMS_KEY).unwrap();
        assert!(storage.read(WISHLIST_ITEMS_KEY).unwrap().is_none());
        storage.remove(WISHLIST_ITEMS_KEY).unwrap();
    }

    #[test]
    fn test_file_last_write_wins() {
        let dir = tempfile::tempdir().unwrap();
        let a = FileStorage::open(dir.path()).unwrap();
        let b = FileStorage::open(dir.path()).unwrap();

        a.write(CART_ITEMS_KEY, "first").unwrap();
        b.write(CART_ITEMS_KEY, "second").unwrap();
        assert_eq!(
            a.read(CART_ITEMS_KEY).unwrap().as_deref(),
            Some("second")
        );
    }

    #[test]
    fn test_file_rejects_path_like_keys() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::open(dir.path()).unwrap();
        assert!(matches!(
            storage.write("../escape", "x"),
            Err(StorageError::InvalidKey(_))
        ));
        assert!(matches!(
            storage.read(""),
            Err(StorageError::InvalidKey(_))
        ));
    }
}
