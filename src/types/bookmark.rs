use serde::{Deserialize, Serialize};

/// A saved address, shown as one row of the bookmarks table.
///
/// `url` is the encoded fragment without its scheme; `id` is the creation
/// timestamp in milliseconds and doubles as the row key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bookmark {
    pub url: String,
    pub label: String,
    pub id: i64,
}

impl Bookmark {
    /// Builds a bookmark, falling back to `url` as the label when `label` is empty.
    pub fn new(url: &str, label: &str, id: i64) -> Self {
        let label = if label.is_empty() { url } else { label };
        Self {
            url: url.to_string(),
            label: label.to_string(),
            id,
        }
    }

    /// Full address this bookmark points to.
    pub fn href(&self) -> String {
        format!("{}{}", crate::types::page::SCHEME_PREFIX, self.url)
    }
}
