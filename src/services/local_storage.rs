//! Key-value local storage for LinkPad.
//!
//! Mirrors the browser `localStorage` contract: string keys, string values,
//! whole-value overwrite. Two backends implement [`LocalStorage`]:
//! [`SqliteLocalStorage`] for the app and [`MemoryLocalStorage`] for tests and
//! the console demo.

use std::collections::HashMap;

use rusqlite::{params, OptionalExtension};

use crate::database::Database;
use crate::types::errors::StorageError;

/// String key-value store with browser local-storage semantics.
pub trait LocalStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove_item(&mut self, key: &str) -> Result<(), StorageError>;
}

/// Bytes charged against the quota for one entry.
fn entry_size(key: &str, value: &str) -> u64 {
    (key.len() + value.len()) as u64
}

/// Local storage persisted in the `local_storage` SQLite table.
pub struct SqliteLocalStorage {
    db: Database,
    quota_bytes: Option<u64>,
}

impl SqliteLocalStorage {
    /// Wraps an opened database. `quota_bytes` of `None` disables the budget.
    pub fn new(db: Database, quota_bytes: Option<u64>) -> Self {
        Self { db, quota_bytes }
    }

    /// Bytes used by every entry except `key`.
    fn used_bytes_excluding(&self, key: &str) -> Result<u64, StorageError> {
        let used: i64 = self.db.connection().query_row(
            "SELECT COALESCE(SUM(LENGTH(CAST(key AS BLOB)) + LENGTH(CAST(value AS BLOB))), 0) \
             FROM local_storage WHERE key != ?1",
            params![key],
            |row| row.get(0),
        )?;
        Ok(used.max(0) as u64)
    }
}

impl LocalStorage for SqliteLocalStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        let value = self
            .db
            .connection()
            .query_row(
                "SELECT value FROM local_storage WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()?;
        Ok(value)
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        if let Some(quota) = self.quota_bytes {
            let needed = self.used_bytes_excluding(key)? + entry_size(key, value);
            if needed > quota {
                return Err(StorageError::QuotaExceeded { needed, quota });
            }
        }

        self.db.connection().execute(
            "INSERT INTO local_storage (key, value) VALUES (?1, ?2) \
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            params![key, value],
        )?;
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> Result<(), StorageError> {
        self.db
            .connection()
            .execute("DELETE FROM local_storage WHERE key = ?1", params![key])?;
        Ok(())
    }
}

/// In-process local storage. Can be switched off to behave like a browser
/// with storage disabled.
#[derive(Debug, Clone)]
pub struct MemoryLocalStorage {
    items: HashMap<String, String>,
    available: bool,
    quota_bytes: Option<u64>,
}

impl MemoryLocalStorage {
    pub fn new() -> Self {
        Self {
            items: HashMap::new(),
            available: true,
            quota_bytes: None,
        }
    }

    pub fn with_quota(quota_bytes: u64) -> Self {
        Self {
            quota_bytes: Some(quota_bytes),
            ..Self::new()
        }
    }

    /// When `false`, every operation fails with [`StorageError::Unavailable`].
    pub fn set_available(&mut self, available: bool) {
        self.available = available;
    }

    fn ensure_available(&self) -> Result<(), StorageError> {
        if self.available {
            Ok(())
        } else {
            Err(StorageError::Unavailable("local storage is disabled".to_string()))
        }
    }
}

impl Default for MemoryLocalStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl LocalStorage for MemoryLocalStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.ensure_available()?;
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.ensure_available()?;
        if let Some(quota) = self.quota_bytes {
            let others: u64 = self
                .items
                .iter()
                .filter(|(k, _)| k.as_str() != key)
                .map(|(k, v)| entry_size(k, v))
                .sum();
            let needed = others + entry_size(key, value);
            if needed > quota {
                return Err(StorageError::QuotaExceeded { needed, quota });
            }
        }
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> Result<(), StorageError> {
        self.ensure_available()?;
        self.items.remove(key);
        Ok(())
    }
}

impl<S: LocalStorage + ?Sized> LocalStorage for Box<S> {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get_item(key)
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set_item(key, value)
    }

    fn remove_item(&mut self, key: &str) -> Result<(), StorageError> {
        (**self).remove_item(key)
    }
}
