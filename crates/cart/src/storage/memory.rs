//! In-memory storage for tests and previews.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use super::{CartStorage, StorageError};

/// In-memory key-value storage.
///
/// Clones share the same underlying map, so a test can hold one handle for
/// inspection while the store owns another.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    /// Create an empty in-memory storage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current payload under `key`, if any.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        self.lock().get(key).cloned()
    }

    /// Seed a payload under `key`, as if a previous run had persisted it.
    pub fn insert(&self, key: impl Into<String>, payload: impl Into<String>) {
        self.lock().insert(key.into(), payload.into());
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        self.entries.lock().expect("storage mutex poisoned")
    }
}

impl CartStorage for MemoryStorage {
    async fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.get(key))
    }

    async fn write(&self, key: &str, payload: &str) -> Result<(), StorageError> {
        self.insert(key, payload);
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_read_missing_key_is_none() {
        let storage = MemoryStorage::new();
        assert!(storage.read("cart").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_write_then_read() {
        let storage = MemoryStorage::new();
        storage.write("cart", "[]").await.unwrap();
        assert_eq!(storage.read("cart").await.unwrap().as_deref(), Some("[]"));
    }

    #[tokio::test]
    async fn test_clones_share_entries() {
        let storage = MemoryStorage::new();
        let other = storage.clone();

        storage.write("cart", "[]").await.unwrap();
        assert_eq!(other.get("cart").as_deref(), Some("[]"));
    }
}
