//! Bookmark Manager for LinkPad.
//!
//! Implements `BookmarkManagerTrait` over the in-memory collection the page
//! owns. Insertion order is display order. Persistence is the caller's job,
//! see [`crate::services::bookmark_store`].

use crate::types::bookmark::Bookmark;

/// Trait defining operations on the bookmark collection.
pub trait BookmarkManagerTrait {
    /// Appends a bookmark at the end of the list.
    fn add_bookmark(&mut self, bookmark: Bookmark);
    /// Removes the bookmark with `id`, returning it. Other rows keep their order.
    fn remove_bookmark(&mut self, id: i64) -> Option<Bookmark>;
    fn get_bookmark(&self, id: i64) -> Option<&Bookmark>;
    fn list_bookmarks(&self) -> &[Bookmark];
    fn bookmark_count(&self) -> usize;
}

/// Ordered, in-memory bookmark collection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookmarkManager {
    bookmarks: Vec<Bookmark>,
}

impl BookmarkManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from an already loaded collection.
    pub fn from_bookmarks(bookmarks: Vec<Bookmark>) -> Self {
        Self { bookmarks }
    }

    fn find_index(&self, id: i64) -> Option<usize> {
        self.bookmarks.iter().position(|b| b.id == id)
    }
}

impl BookmarkManagerTrait for BookmarkManager {
    fn add_bookmark(&mut self, bookmark: Bookmark) {
        self.bookmarks.push(bookmark);
    }

    fn remove_bookmark(&mut self, id: i64) -> Option<Bookmark> {
        let index = self.find_index(id)?;
        Some(self.bookmarks.remove(index))
    }

    fn get_bookmark(&self, id: i64) -> Option<&Bookmark> {
        self.bookmarks.iter().find(|b| b.id == id)
    }

    fn list_bookmarks(&self) -> &[Bookmark] {
        &self.bookmarks
    }

    fn bookmark_count(&self) -> usize {
        self.bookmarks.len()
    }
}

/// Sample rows shown by the demo page when storage holds nothing.
pub fn demo_bookmarks() -> Vec<Bookmark> {
    vec![
        Bookmark::new("github.com", "GitHub", 1_700_000_000_000),
        Bookmark::new("doc.rust-lang.org", "Rust documentation", 1_700_000_000_001),
        Bookmark::new("crates.io", "", 1_700_000_000_002),
    ]
}
