//! LinkPad: a single-page URL launcher with locally stored bookmarks.
//!
//! With the `gui` feature the page opens in a native WebView window.
//! Without it, a console walkthrough drives the same page logic against
//! in-memory storage.

#[cfg(feature = "gui")]
fn main() {
    linkpad::ui::webview_app::run();
}

#[cfg(not(feature = "gui"))]
fn main() {
    use linkpad::app::App;
    use linkpad::logging::init_logging;
    use linkpad::services::bookmark_store::BookmarkStore;
    use linkpad::services::clock::SystemClock;
    use linkpad::services::local_storage::{LocalStorage, MemoryLocalStorage};
    use linkpad::services::url_validator::SyntaxValidator;
    use linkpad::types::page::{PageEvent, PageVariant};
    use linkpad::types::settings::AppSettings;

    let mut settings = AppSettings::default();
    init_logging(&settings.logging);

    println!();
    println!("LinkPad v{} (console demo)", env!("CARGO_PKG_VERSION"));
    println!();

    for variant in [PageVariant::Basic, PageVariant::Controlled, PageVariant::Demo] {
        settings.general.variant = variant;
        let storage: Box<dyn LocalStorage> = Box::new(MemoryLocalStorage::new());
        let store = BookmarkStore::new(storage, settings.storage.storage_key.clone());
        let mut app = App::with_parts(
            settings.clone(),
            store,
            Box::new(SyntaxValidator),
            Box::new(SystemClock),
        );

        println!("── {:?} page ──", variant);
        println!("  starts with {} bookmark(s)", app.state().bookmarks().len());

        app.dispatch(PageEvent::UrlChanged("not a url".to_string()));
        let nav = app.dispatch(PageEvent::Submit);
        println!(
            "  submit \"not a url\": navigate={:?} error_shown={}",
            nav,
            app.state().show_url_error()
        );

        app.dispatch(PageEvent::UrlChanged(" example.com ".to_string()));
        app.dispatch(PageEvent::SaveBookmarkToggled(true));
        let nav = app.dispatch(PageEvent::Submit);
        println!("  submit \"example.com\" with bookmark: navigate={:?}", nav);

        for bm in app.state().bookmarks() {
            println!("    [{}] {} -> {}", bm.id, bm.label, bm.href());
        }

        if let Some(first) = app.state().bookmarks().first().map(|b| b.id) {
            app.dispatch(PageEvent::RequestDelete(first));
            println!("  delete requested, pending={:?}", app.state().pending_delete());
            app.dispatch(PageEvent::ConfirmDelete);
            println!("  confirmed, {} bookmark(s) left", app.state().bookmarks().len());
        }

        println!(
            "  stored record: {}",
            app.store()
                .storage()
                .get_item(app.store().key())
                .ok()
                .flatten()
                .unwrap_or_else(|| "<none>".to_string())
        );
        println!();
    }
}
