//! LinkPad database layer.
//!
//! Backs the local-storage key-value table with SQLite.
//!
//! # Usage
//!
//! ```no_run
//! use linkpad::database::Database;
//!
//! // Persistent storage next to the other app data
//! let db = Database::open("linkpad.db").expect("failed to open database");
//!
//! // Throwaway storage for tests
//! let db = Database::open_in_memory().expect("failed to open in-memory database");
//!
//! let conn = db.connection();
//! ```

pub mod connection;
pub mod migrations;

pub use connection::Database;
