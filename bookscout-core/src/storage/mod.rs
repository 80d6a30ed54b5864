//! Durable storage port for local persistence
//!
//! The favorites store and the CLI's result cache both persist through this
//! trait, so tests can substitute an in-memory backend.

use crate::error::StorageError;
use async_trait::async_trait;

/// Result type for storage operations
pub type StorageResult<T> = std::result::Result<T, StorageError>;

/// Abstract storage provider over named slots of UTF-8 text
#[async_trait]
pub trait StorageProvider: Send + Sync {
    /// Read the contents of the given slot
    async fn read(&self, slot: &str) -> StorageResult<String>;

    /// Overwrite the given slot
    async fn write(&self, slot: &str, data: &str) -> StorageResult<()>;

    /// Remove the given slot
    async fn delete(&self, slot: &str) -> StorageResult<()>;

    /// Check if a slot exists
    async fn exists(&self, slot: &str) -> StorageResult<bool>;
}

/// Local filesystem storage rooted at a data directory
pub struct LocalStorage {
    root: std::path::PathBuf,
}

impl LocalStorage {
    /// Create a local storage provider with the given root directory
    pub fn new(root: impl Into<std::path::PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Resolve a slot name under the root, rejecting path traversal
    fn slot_path(&self, slot: &str) -> StorageResult<std::path::PathBuf> {
        use std::path::Component;

        let mut normalized = std::path::PathBuf::new();
        for component in std::path::Path::new(slot).components() {
            match component {
                Component::Normal(c) => normalized.push(c),
                Component::CurDir => {}
                Component::ParentDir | Component::Prefix(_) | Component::RootDir => {
                    return Err(StorageError::Backend(
                        "Path traversal attempt detected".to_string(),
                    ));
                }
            }
        }

        Ok(self.root.join(normalized))
    }
}

#[async_trait]
impl StorageProvider for LocalStorage {
    async fn read(&self, slot: &str) -> StorageResult<String> {
        let path = self.slot_path(slot)?;
        tokio::fs::read_to_string(path)
            .await
            .map_err(|e| StorageError::NotFound(e.to_string()))
    }

    async fn write(&self, slot: &str, data: &str) -> StorageResult<()> {
        let path = self.slot_path(slot)?;
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| StorageError::Backend(e.to_string()))?;
        }
        tokio::fs::write(path, data)
            .await
            .map_err(|e| StorageError::Backend(e.to_string()))
    }

    async fn delete(&self, slot: &str) -> StorageResult<()> {
        let path = self.slot_path(slot)?;
        tokio::fs::remove_file(path)
            .await
            .map_err(|e| StorageError::NotFound(e.to_string()))
    }

    async fn exists(&self, slot: &str) -> StorageResult<bool> {
        let path = self.slot_path(slot)?;
        tokio::fs::try_exists(path)
            .await
            .map_err(|e| StorageError::Backend(e.to_string()))
    }
}

/// In-memory storage provider (for testing)
#[derive(Default)]
pub struct MemoryStorage {
    data: std::sync::RwLock<std::collections::HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl StorageProvider for MemoryStorage {
    async fn read(&self, slot: &str) -> StorageResult<String> {
        self.data
            .read()
            .unwrap()
            .get(slot)
            .cloned()
            .ok_or_else(|| StorageError::NotFound(slot.to_string()))
    }

    async fn write(&self, slot: &str, data: &str) -> StorageResult<()> {
        self.data
            .write()
            .unwrap()
            .insert(slot.to_string(), data.to_string());
        Ok(())
    }

    async fn delete(&self, slot: &str) -> StorageResult<()> {
        self.data
            .write()
            .unwrap()
            .remove(slot)
            .ok_or_else(|| StorageError::NotFound(slot.to_string()))?;
        Ok(())
    }

    async fn exists(&self, slot: &str) -> StorageResult<bool> {
        Ok(self.data.read().unwrap().contains_key(slot))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_storage_round_trip() {
        let storage = MemoryStorage::new();

        storage.write("favorites.json", "{}").await.unwrap();
        assert!(storage.exists("favorites.json").await.unwrap());
        assert_eq!(storage.read("favorites.json").await.unwrap(), "{}");

        storage.delete("favorites.json").await.unwrap();
        assert!(!storage.exists("favorites.json").await.unwrap());
    }

    #[tokio::test]
    async fn test_memory_storage_missing_slot() {
        let storage = MemoryStorage::new();
        assert!(matches!(
            storage.read("nope").await,
            Err(StorageError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_local_storage_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let storage = LocalStorage::new(dir.path());

        storage.write("favorites.json", r#"{"a":1}"#).await.unwrap();
        assert_eq!(storage.read("favorites.json").await.unwrap(), r#"{"a":1}"#);
        assert!(storage.exists("favorites.json").await.unwrap());

        storage.delete("favorites.json").await.unwrap();
        assert!(!storage.exists("favorites.json").await.unwrap());
    }

    #[tokio::test]
    async fn test_local_storage_rejects_traversal() {
        let dir = tempfile::tempdir().unwrap();
        let storage = LocalStorage::new(dir.path());
        assert!(storage.read("../escape.json").await.is_err());
    }

    #[tokio::test]
    async fn test_local_storage_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let storage = LocalStorage::new(dir.path().join("nested"));
        storage.write("cache/results.json", "[]").await.unwrap();
        assert_eq!(storage.read("cache/results.json").await.unwrap(), "[]");
    }
}
