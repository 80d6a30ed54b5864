//! Persistent favorites store
//!
//! Owns the map of saved books and writes it through to durable storage on
//! every mutation. Persistence is best-effort by contract: a failed write
//! is logged and counted but the in-memory map stays authoritative for the
//! session, and a missing or corrupt slot at load time degrades to an empty
//! map rather than an error.

use crate::error::StorageError;
use crate::storage::StorageProvider;
use crate::types::Book;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, warn};

/// Storage slot holding the serialized favorites map
pub const FAVORITES_SLOT: &str = "favorites.json";

/// The favorites map and its storage port
pub struct FavoritesStore {
    map: HashMap<String, Book>,
    storage: Arc<dyn StorageProvider>,
    persist_failures: u64,
}

impl FavoritesStore {
    /// Load the persisted map from storage, degrading to an empty map on a
    /// missing or unparseable slot
    pub async fn load(storage: Arc<dyn StorageProvider>) -> Self {
        let map = match storage.read(FAVORITES_SLOT).await {
            Ok(raw) => match serde_json::from_str::<HashMap<String, Book>>(&raw) {
                Ok(map) => map,
                Err(e) => {
                    debug!("Discarding unparseable favorites slot: {}", e);
                    HashMap::new()
                }
            },
            Err(e) => {
                debug!("No favorites slot loaded: {}", e);
                HashMap::new()
            }
        };

        Self {
            map,
            storage,
            persist_failures: 0,
        }
    }

    /// Whether the given book key is currently a favorite
    pub fn is_favorite(&self, key: &str) -> bool {
        self.map.contains_key(key)
    }

    /// Toggle a book in or out of the favorites map and persist the result.
    ///
    /// Returns `true` if the book is a favorite after the call. Two calls in
    /// a row restore the original state.
    pub async fn toggle(&mut self, book: &Book) -> bool {
        let now_favorite = if self.map.contains_key(&book.key) {
            self.map.remove(&book.key);
            false
        } else {
            self.map.insert(book.key.clone(), book.clone());
            true
        };

        self.persist().await;
        now_favorite
    }

    /// Snapshot of the current favorites, in map iteration order (display
    /// order carries no meaning)
    pub fn books(&self) -> Vec<&Book> {
        self.map.values().collect()
    }

    /// Look up a favorite by key
    pub fn get(&self, key: &str) -> Option<&Book> {
        self.map.get(key)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// How many write-throughs have failed this session. Monitoring hook for
    /// the otherwise swallowed persistence errors.
    pub fn persist_failures(&self) -> u64 {
        self.persist_failures
    }

    /// Write the whole map through to storage, swallowing failures
    async fn persist(&mut self) {
        if let Err(e) = self.try_persist().await {
            warn!("Failed to persist favorites: {}", e);
            self.persist_failures += 1;
        }
    }

    async fn try_persist(&self) -> std::result::Result<(), StorageError> {
        let serialized = serde_json::to_string(&self.map)?;
        self.storage.write(FAVORITES_SLOT, &serialized).await
    }
}
