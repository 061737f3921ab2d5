use serde::{Deserialize, Serialize};

use super::page::PageVariant;

/// Default per-origin budget of browser local storage.
pub const DEFAULT_QUOTA_BYTES: u64 = 5 * 1024 * 1024;

/// Top-level application settings container.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct AppSettings {
    pub general: GeneralSettings,
    pub storage: StorageSettings,
    pub logging: LoggingSettings,
}

/// Page and window settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GeneralSettings {
    pub variant: PageVariant,
    pub window_title: String,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            variant: PageVariant::Controlled,
            window_title: "LinkPad".to_string(),
        }
    }
}

/// Where and how bookmarks are stored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct StorageSettings {
    /// Local-storage key holding the JSON bookmark array.
    pub storage_key: String,
    /// SQLite file name, resolved against the data directory.
    pub database_file: String,
    /// Byte budget for all stored keys and values. `0` disables the check.
    pub quota_bytes: u64,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            storage_key: "bookmarks".to_string(),
            database_file: "linkpad.db".to_string(),
            quota_bytes: DEFAULT_QUOTA_BYTES,
        }
    }
}

/// Log output settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LoggingSettings {
    /// `tracing` filter directive, e.g. `info` or `linkpad=debug`.
    pub level: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}
