//! Bookmark persistence on top of [`LocalStorage`].
//!
//! The collection lives as one JSON array under a single key and is
//! overwritten wholesale on every save. Storage failures never reach the
//! caller of [`BookmarkStore::load`] or [`BookmarkStore::save`]: they go
//! through the [`FailOpen`] policy, which logs and drops them. Navigation
//! proceeds either way.

use tracing::warn;

use crate::services::local_storage::LocalStorage;
use crate::types::bookmark::Bookmark;
use crate::types::errors::StorageError;

/// Failure policy for the bookmark store: errors are logged and replaced by
/// the neutral value.
pub struct FailOpen;

impl FailOpen {
    /// Returns the success value, or `T::default()` after logging the error.
    pub fn absorb<T: Default>(operation: &str, result: Result<T, StorageError>) -> T {
        match result {
            Ok(value) => value,
            Err(e) => {
                warn!(operation, error = %e, "bookmark storage failed; continuing without it");
                T::default()
            }
        }
    }
}

/// Reads and writes the bookmark collection under one storage key.
pub struct BookmarkStore<S: LocalStorage = Box<dyn LocalStorage>> {
    storage: S,
    key: String,
}

impl<S: LocalStorage> BookmarkStore<S> {
    pub fn new(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    /// The storage key this store reads and writes.
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }

    /// Loads the stored collection, reporting failures.
    ///
    /// A missing key is an empty collection, not an error.
    pub fn try_load(&self) -> Result<Vec<Bookmark>, StorageError> {
        match self.storage.get_item(&self.key)? {
            Some(raw) => serde_json::from_str(&raw)
                .map_err(|e| StorageError::Serialization(e.to_string())),
            None => Ok(Vec::new()),
        }
    }

    /// Overwrites the stored collection, reporting failures.
    pub fn try_save(&mut self, bookmarks: &[Bookmark]) -> Result<(), StorageError> {
        let raw = serde_json::to_string(bookmarks)
            .map_err(|e| StorageError::Serialization(e.to_string()))?;
        self.storage.set_item(&self.key, &raw)
    }

    /// Loads the stored collection; any failure yields an empty one.
    pub fn load(&self) -> Vec<Bookmark> {
        FailOpen::absorb("load", self.try_load())
    }

    /// Overwrites the stored collection; any failure leaves storage untouched.
    pub fn save(&mut self, bookmarks: &[Bookmark]) {
        FailOpen::absorb("save", self.try_save(bookmarks))
    }
}
