//! Unit tests for page rendering.

use linkpad::services::page_renderer::{render_bookmarks_table, render_page, render_patch_script};
use linkpad::types::bookmark::Bookmark;
use linkpad::types::page::{PageSnapshot, PageVariant};

fn snapshot(variant: PageVariant) -> PageSnapshot {
    PageSnapshot {
        variant,
        url: String::new(),
        label: String::new(),
        save_bookmark: false,
        show_url_error: false,
        pending_delete: None,
        bookmarks: vec![
            Bookmark::new("a.com", "A", 1),
            Bookmark::new("b.com", "<b>", 2),
        ],
    }
}

#[test]
fn test_basic_page_has_no_table_or_label() {
    let html = render_page(&snapshot(PageVariant::Basic), "LinkPad");
    assert!(html.contains("Enter your url"));
    assert!(html.contains("https://"));
    assert!(html.contains("placeholder=\"example.com\""));
    assert!(!html.contains("id=\"bookmarks\""));
    assert!(!html.contains("id=\"label\""));
    assert!(!html.contains("id=\"url-error\""));
}

#[test]
fn test_controlled_page_has_table_and_label() {
    let html = render_page(&snapshot(PageVariant::Controlled), "LinkPad");
    assert!(html.contains("id=\"bookmarks\""));
    assert!(html.contains("id=\"label\""));
    assert!(html.contains("\"Bookmark\" this url for later use"));
    assert!(html.contains("href=\"https://a.com\""));
}

#[test]
fn test_error_hidden_until_flagged() {
    let mut snap = snapshot(PageVariant::Controlled);
    let html = render_page(&snap, "LinkPad");
    assert!(html.contains("class=\"error\" hidden>Please enter a valid url"));

    snap.show_url_error = true;
    let html = render_page(&snap, "LinkPad");
    assert!(html.contains("class=\"error\">Please enter a valid url"));
}

#[test]
fn test_pending_row_shows_prompt() {
    let mut snap = snapshot(PageVariant::Controlled);
    snap.pending_delete = Some(2);
    let table = render_bookmarks_table(&snap);

    assert_eq!(table.matches("Are you sure?").count(), 1);
    assert!(table.contains("data-action=\"delete\" data-id=\"1\""));
    assert!(!table.contains("data-action=\"delete\" data-id=\"2\""));
    assert!(table.contains("data-action=\"confirm\""));
    assert!(table.contains("data-action=\"cancel\""));
}

#[test]
fn test_labels_are_escaped() {
    let table = render_bookmarks_table(&snapshot(PageVariant::Controlled));
    assert!(table.contains("&lt;b&gt;"));
    assert!(!table.contains("<b>"));
}

#[test]
fn test_patch_script_carries_state() {
    let mut snap = snapshot(PageVariant::Controlled);
    snap.show_url_error = true;
    let js = render_patch_script(&snap);
    assert!(js.starts_with("if(window.__lp_patch)__lp_patch({"));
    assert!(js.contains("\"show_url_error\":true"));
    assert!(js.contains("\"table\":"));
}
