//! App Core for LinkPad.
//!
//! [`App`] is the page driver: it owns the [`PageState`], feeds it events,
//! and carries out the effects the reducer asks for. Persistence goes
//! through the fail-open [`BookmarkStore`]; navigation targets are handed
//! back to the shell (WebView or RPC) that owns the window.

use std::fs;
use std::path::Path;

use tracing::{info, warn};

use crate::database::Database;
use crate::logging;
use crate::managers::page_state::PageState;
use crate::platform;
use crate::services::bookmark_store::BookmarkStore;
use crate::services::clock::{Clock, SystemClock};
use crate::services::local_storage::{LocalStorage, MemoryLocalStorage, SqliteLocalStorage};
use crate::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use crate::services::url_validator::{SyntaxValidator, UrlValidator};
use crate::types::page::{PageEffect, PageEvent, PageSnapshot};
use crate::types::settings::AppSettings;

pub struct App {
    settings: AppSettings,
    state: PageState,
    store: BookmarkStore,
    validator: Box<dyn UrlValidator>,
    clock: Box<dyn Clock>,
}

impl App {
    /// Startup sequence: loads settings from `settings_path` (or the
    /// platform default), installs logging, and opens the bookmark database
    /// the settings point to.
    ///
    /// Never fails: unreadable settings fall back to defaults and an
    /// unusable database falls back to in-memory storage.
    pub fn new(settings_path: Option<String>) -> Self {
        let mut engine = SettingsEngine::new(settings_path);
        let loaded = engine.load();
        let settings = loaded.as_ref().cloned().unwrap_or_default();
        logging::init_logging(&settings.logging);
        if let Err(e) = loaded {
            warn!(path = engine.get_config_path(), error = %e, "settings unreadable, using defaults");
        }

        let db_path = platform::database_path(&settings.storage.database_file);
        Self::open(settings, &db_path)
    }

    /// Mounts the page against the SQLite database at `db_path`.
    pub fn open(settings: AppSettings, db_path: &Path) -> Self {
        let quota = Some(settings.storage.quota_bytes).filter(|q| *q > 0);
        let storage = open_local_storage(db_path, quota);
        let store = BookmarkStore::new(storage, settings.storage.storage_key.clone());
        Self::with_parts(settings, store, Box::new(SyntaxValidator), Box::new(SystemClock))
    }

    /// Mounts the page with explicit collaborators. Reads the stored
    /// collection once.
    pub fn with_parts(
        settings: AppSettings,
        store: BookmarkStore,
        validator: Box<dyn UrlValidator>,
        clock: Box<dyn Clock>,
    ) -> Self {
        let state = PageState::mount(settings.general.variant, store.load());
        info!(
            variant = ?settings.general.variant,
            bookmarks = state.bookmarks().len(),
            "page mounted"
        );
        Self {
            settings,
            state,
            store,
            validator,
            clock,
        }
    }

    /// Applies one event. Returns the address to navigate to, if any.
    pub fn dispatch(&mut self, event: PageEvent) -> Option<String> {
        let effects = self
            .state
            .reduce(event, self.validator.as_ref(), self.clock.as_ref());

        let mut navigate = None;
        for effect in effects {
            match effect {
                PageEffect::PersistBookmarks => self.store.save(self.state.bookmarks()),
                PageEffect::Navigate(url) => {
                    info!(%url, "navigating");
                    navigate = Some(url);
                }
            }
        }
        navigate
    }

    pub fn state(&self) -> &PageState {
        &self.state
    }

    pub fn snapshot(&self) -> PageSnapshot {
        self.state.snapshot()
    }

    pub fn settings(&self) -> &AppSettings {
        &self.settings
    }

    pub fn store(&self) -> &BookmarkStore {
        &self.store
    }
}

/// Opens SQLite-backed local storage at `path`, or in-memory storage when
/// the file cannot be opened.
pub fn open_local_storage(path: &Path, quota_bytes: Option<u64>) -> Box<dyn LocalStorage> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!(dir = %parent.display(), error = %e, "cannot create data directory");
        }
    }

    match Database::open(path) {
        Ok(db) => {
            info!(path = %path.display(), "bookmark storage opened");
            Box::new(SqliteLocalStorage::new(db, quota_bytes))
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "bookmark storage unavailable, bookmarks will not persist");
            Box::new(MemoryLocalStorage::new())
        }
    }
}
