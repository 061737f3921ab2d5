use std::fmt;

// === FormError ===

/// Errors raised while handling a form submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    /// The assembled address failed the URL-syntax check.
    InvalidUrl(String),
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormError::InvalidUrl(candidate) => write!(f, "Invalid URL: {}", candidate),
        }
    }
}

impl std::error::Error for FormError {}

// === StorageError ===

/// Errors related to the key-value local storage and the bookmark record in it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// Storage is disabled or cannot be reached.
    Unavailable(String),
    /// Writing would exceed the storage byte budget.
    QuotaExceeded { needed: u64, quota: u64 },
    /// The stored value could not be encoded or decoded.
    Serialization(String),
    /// The backing database failed.
    Database(String),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::Unavailable(msg) => write!(f, "Storage unavailable: {}", msg),
            StorageError::QuotaExceeded { needed, quota } => write!(
                f,
                "Storage quota exceeded: {} bytes needed, {} allowed",
                needed, quota
            ),
            StorageError::Serialization(msg) => {
                write!(f, "Storage serialization error: {}", msg)
            }
            StorageError::Database(msg) => write!(f, "Storage database error: {}", msg),
        }
    }
}

impl std::error::Error for StorageError {}

impl From<rusqlite::Error> for StorageError {
    fn from(e: rusqlite::Error) -> Self {
        StorageError::Database(e.to_string())
    }
}

// === SettingsError ===

/// Errors related to settings management.
#[derive(Debug)]
pub enum SettingsError {
    /// File I/O error reading or writing settings.
    IoError(String),
    /// JSON serialization or deserialization error.
    SerializationError(String),
    /// The provided settings key does not exist.
    InvalidKey(String),
    /// The provided value is invalid for the given key.
    InvalidValue(String),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::IoError(msg) => write!(f, "Settings I/O error: {}", msg),
            SettingsError::SerializationError(msg) => {
                write!(f, "Settings serialization error: {}", msg)
            }
            SettingsError::InvalidKey(key) => write!(f, "Invalid settings key: {}", key),
            SettingsError::InvalidValue(msg) => write!(f, "Invalid settings value: {}", msg),
        }
    }
}

impl std::error::Error for SettingsError {}

// === RpcError ===

/// Errors returned to RPC and IPC callers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RpcError {
    /// No handler is registered for the method name.
    UnknownMethod(String),
    /// A required parameter was not supplied.
    MissingParam(&'static str),
    /// A parameter was supplied with the wrong type.
    InvalidParam(&'static str),
    /// A previous handler panicked while holding the application lock.
    StatePoisoned,
}

impl fmt::Display for RpcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RpcError::UnknownMethod(m) => write!(f, "unknown method: {}", m),
            RpcError::MissingParam(p) => write!(f, "missing {}", p),
            RpcError::InvalidParam(p) => write!(f, "invalid {}", p),
            RpcError::StatePoisoned => write!(f, "application state poisoned"),
        }
    }
}

impl std::error::Error for RpcError {}
