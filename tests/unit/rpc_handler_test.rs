//! Unit tests for the RPC handler, covering every method `handle_method` dispatches.
//!
//! These run through the same code path as the `linkpad-rpc` binary and the
//! WebView IPC bridge, against a temporary on-disk database.

use std::sync::Mutex;

use serde_json::json;
use tempfile::TempDir;

use linkpad::app::App;
use linkpad::rpc_handler::{handle_method, parse_event};
use linkpad::types::page::PageEvent;
use linkpad::types::settings::AppSettings;

/// Create a fresh App backed by a temp directory DB.
fn setup() -> (Mutex<App>, TempDir) {
    let tmp = TempDir::new().expect("Failed to create temp dir");
    let app = App::open(AppSettings::default(), &tmp.path().join("test.db"));
    (Mutex::new(app), tmp)
}

fn add(app: &Mutex<App>, url: &str, label: &str) {
    handle_method(app, "form.set_url", &json!({"value": url})).unwrap();
    handle_method(app, "form.set_label", &json!({"value": label})).unwrap();
    handle_method(app, "form.set_save_bookmark", &json!({"checked": true})).unwrap();
    handle_method(app, "form.submit", &json!({})).unwrap();
}

#[test]
fn test_ping() {
    let (app, _tmp) = setup();
    assert_eq!(handle_method(&app, "ping", &json!({})).unwrap(), json!({"pong": true}));
}

#[test]
fn test_unknown_method_returns_error() {
    let (app, _tmp) = setup();
    let err = handle_method(&app, "tab.open", &json!({})).unwrap_err();
    assert!(err.contains("unknown method"));
}

#[test]
fn test_missing_and_invalid_params() {
    let (app, _tmp) = setup();
    assert_eq!(
        handle_method(&app, "form.set_url", &json!({})).unwrap_err(),
        "missing value"
    );
    assert_eq!(
        handle_method(&app, "form.set_save_bookmark", &json!({"checked": "yes"})).unwrap_err(),
        "invalid checked"
    );
    assert_eq!(
        handle_method(&app, "bookmark.request_delete", &json!({"id": "12"})).unwrap_err(),
        "invalid id"
    );
}

#[test]
fn test_page_state_initially_empty() {
    let (app, _tmp) = setup();
    let state = handle_method(&app, "page.state", &json!({})).unwrap();
    assert_eq!(state["variant"], "controlled");
    assert_eq!(state["url"], "");
    assert_eq!(state["show_url_error"], false);
    assert_eq!(state["pending_delete"], serde_json::Value::Null);
    assert_eq!(state["bookmarks"], json!([]));
}

#[test]
fn test_submit_valid_returns_navigation() {
    let (app, _tmp) = setup();
    handle_method(&app, "form.set_url", &json!({"value": "example.com"})).unwrap();
    let res = handle_method(&app, "form.submit", &json!({})).unwrap();
    assert_eq!(res["navigate"], "https://example.com");
    assert_eq!(res["state"]["show_url_error"], false);
}

#[test]
fn test_submit_invalid_sets_error_and_no_navigation() {
    let (app, _tmp) = setup();
    handle_method(&app, "form.set_url", &json!({"value": "nope"})).unwrap();
    let res = handle_method(&app, "form.submit", &json!({})).unwrap();
    assert_eq!(res["navigate"], serde_json::Value::Null);
    assert_eq!(res["state"]["show_url_error"], true);

    let res = handle_method(&app, "form.set_url", &json!({"value": "nope."})).unwrap();
    assert_eq!(res["state"]["show_url_error"], false);
}

#[test]
fn test_bookmark_list_and_delete_flow() {
    let (app, _tmp) = setup();
    add(&app, "a.com", "A");
    add(&app, "b.com", "");

    let list = handle_method(&app, "bookmark.list", &json!({})).unwrap();
    let rows = list.as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1]["label"], "b.com");

    let first_id = rows[0]["id"].as_i64().unwrap();
    let res = handle_method(&app, "bookmark.request_delete", &json!({"id": first_id})).unwrap();
    assert_eq!(res["state"]["pending_delete"], first_id);

    let res = handle_method(&app, "bookmark.cancel_delete", &json!({})).unwrap();
    assert_eq!(res["state"]["pending_delete"], serde_json::Value::Null);
    assert_eq!(res["state"]["bookmarks"].as_array().unwrap().len(), 2);

    handle_method(&app, "bookmark.request_delete", &json!({"id": first_id})).unwrap();
    let res = handle_method(&app, "bookmark.confirm_delete", &json!({})).unwrap();
    let remaining = res["state"]["bookmarks"].as_array().unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0]["url"], "b.com");
}

#[test]
fn test_parse_event_maps_methods() {
    assert_eq!(
        parse_event("form.set_url", &json!({"value": "x"})).unwrap(),
        Some(PageEvent::UrlChanged("x".into()))
    );
    assert_eq!(
        parse_event("bookmark.request_delete", &json!({"id": 7})).unwrap(),
        Some(PageEvent::RequestDelete(7))
    );
    assert_eq!(parse_event("page.state", &json!({})).unwrap(), None);
}
