//! Property-based tests for bookmark persistence.
//!
//! Whatever collection is saved under the storage key loads back unchanged,
//! with either storage backend.

use linkpad::database::Database;
use linkpad::services::bookmark_store::BookmarkStore;
use linkpad::services::local_storage::{MemoryLocalStorage, SqliteLocalStorage};
use linkpad::types::bookmark::Bookmark;
use proptest::prelude::*;

fn arb_bookmark() -> impl Strategy<Value = Bookmark> {
    (".{0,40}", ".{0,40}", any::<i64>()).prop_map(|(url, label, id)| Bookmark { url, label, id })
}

fn arb_bookmarks() -> impl Strategy<Value = Vec<Bookmark>> {
    proptest::collection::vec(arb_bookmark(), 0..20)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(30))]

    #[test]
    fn memory_storage_roundtrip(bookmarks in arb_bookmarks()) {
        let mut store = BookmarkStore::new(MemoryLocalStorage::new(), "bookmarks");
        store.try_save(&bookmarks).unwrap();
        prop_assert_eq!(store.try_load().unwrap(), bookmarks);
    }

    #[test]
    fn sqlite_storage_roundtrip(bookmarks in arb_bookmarks()) {
        let db = Database::open_in_memory().expect("Failed to open in-memory database");
        let mut store = BookmarkStore::new(SqliteLocalStorage::new(db, None), "bookmarks");
        store.try_save(&bookmarks).unwrap();
        prop_assert_eq!(store.try_load().unwrap(), bookmarks);
    }

    #[test]
    fn later_save_replaces_earlier(first in arb_bookmarks(), second in arb_bookmarks()) {
        let db = Database::open_in_memory().expect("Failed to open in-memory database");
        let mut store = BookmarkStore::new(SqliteLocalStorage::new(db, None), "bookmarks");
        store.save(&first);
        store.save(&second);
        prop_assert_eq!(store.load(), second);
    }
}
