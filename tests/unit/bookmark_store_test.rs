//! Unit tests for `BookmarkStore` and its fail-open policy.

use linkpad::services::bookmark_store::{BookmarkStore, FailOpen};
use linkpad::services::local_storage::{LocalStorage, MemoryLocalStorage};
use linkpad::types::bookmark::Bookmark;
use linkpad::types::errors::StorageError;

fn sample() -> Vec<Bookmark> {
    vec![
        Bookmark::new("example.com", "", 1),
        Bookmark::new("rust-lang.org", "Rust", 2),
    ]
}

#[test]
fn test_missing_key_loads_empty() {
    let store = BookmarkStore::new(MemoryLocalStorage::new(), "bookmarks");
    assert!(store.try_load().unwrap().is_empty());
    assert!(store.load().is_empty());
}

#[test]
fn test_save_writes_json_array_under_key() {
    let mut store = BookmarkStore::new(MemoryLocalStorage::new(), "bookmarks");
    store.save(&sample());

    let raw = store.storage().get_item("bookmarks").unwrap().unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(
        value,
        serde_json::json!([
            {"url": "example.com", "label": "example.com", "id": 1},
            {"url": "rust-lang.org", "label": "Rust", "id": 2}
        ])
    );
}

#[test]
fn test_save_then_load_round_trips() {
    let mut store = BookmarkStore::new(MemoryLocalStorage::new(), "bookmarks");
    store.save(&sample());
    assert_eq!(store.load(), sample());
}

#[test]
fn test_malformed_json_loads_empty() {
    let mut storage = MemoryLocalStorage::new();
    storage.set_item("bookmarks", "{not json").unwrap();
    let store = BookmarkStore::new(storage, "bookmarks");

    assert!(matches!(store.try_load(), Err(StorageError::Serialization(_))));
    assert!(store.load().is_empty());
}

#[test]
fn test_wrong_shape_loads_empty() {
    let mut storage = MemoryLocalStorage::new();
    storage.set_item("bookmarks", r#"[{"href":"x"}]"#).unwrap();
    let store = BookmarkStore::new(storage, "bookmarks");
    assert!(store.load().is_empty());
}

#[test]
fn test_unavailable_storage_is_silent() {
    let mut storage = MemoryLocalStorage::new();
    storage.set_available(false);
    let mut store = BookmarkStore::new(storage, "bookmarks");

    assert!(store.load().is_empty());
    store.save(&sample());
    assert!(matches!(store.try_save(&sample()), Err(StorageError::Unavailable(_))));
}

#[test]
fn test_quota_failure_keeps_previous_record() {
    let mut store = BookmarkStore::new(MemoryLocalStorage::with_quota(120), "bookmarks");
    let first = vec![Bookmark::new("a.io", "", 1)];
    store.save(&first);

    let mut bigger = first.clone();
    bigger.push(Bookmark::new("b.io", &"x".repeat(200), 2));
    store.save(&bigger);

    assert!(store.try_save(&bigger).is_err());
    assert_eq!(store.load(), first);
}

#[test]
fn test_fail_open_absorb() {
    assert_eq!(FailOpen::absorb("load", Ok(vec![1, 2])), vec![1, 2]);
    let empty: Vec<i32> = FailOpen::absorb("load", Err(StorageError::Unavailable("off".into())));
    assert!(empty.is_empty());
}

#[test]
fn test_store_reports_its_key() {
    let store = BookmarkStore::new(MemoryLocalStorage::new(), "my-key");
    assert_eq!(store.key(), "my-key");
}
