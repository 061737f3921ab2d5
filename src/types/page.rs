use serde::{Deserialize, Serialize};

use super::bookmark::Bookmark;

/// Scheme prepended to every submitted fragment.
pub const SCHEME_PREFIX: &str = "https://";

/// Which iteration of the page is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PageVariant {
    /// Plain form: no validation, no label, no bookmarks table.
    Basic,
    /// Validated form with label field and bookmarks table.
    #[default]
    Controlled,
    /// Controlled form seeded with sample bookmarks when storage is empty.
    Demo,
}

impl PageVariant {
    /// Whether this variant validates input and keeps a bookmark collection.
    pub fn is_controlled(self) -> bool {
        !matches!(self, PageVariant::Basic)
    }
}

/// One user interaction with the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageEvent {
    UrlChanged(String),
    LabelChanged(String),
    SaveBookmarkToggled(bool),
    Submit,
    /// Delete affordance clicked on the row with this id.
    RequestDelete(i64),
    /// "Yes" in the confirmation prompt.
    ConfirmDelete,
    /// "No" in the confirmation prompt.
    CancelDelete,
}

/// Side effect requested by the reducer, carried out by the driver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageEffect {
    /// Flush the whole bookmark collection to durable storage.
    PersistBookmarks,
    /// Send the window to this address.
    Navigate(String),
}

/// Serializable view of the page, handed to the renderer and RPC clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageSnapshot {
    pub variant: PageVariant,
    pub url: String,
    pub label: String,
    pub save_bookmark: bool,
    pub show_url_error: bool,
    pub pending_delete: Option<i64>,
    pub bookmarks: Vec<Bookmark>,
}
