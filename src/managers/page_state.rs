//! Page state for LinkPad.
//!
//! All mutable page state (inputs, flags, pending delete, bookmark
//! collection) lives in [`PageState`] and changes only through
//! [`PageState::reduce`], one call per user event. The reducer never touches
//! storage or the window; it returns [`PageEffect`]s for the driver to run.

use tracing::debug;

use crate::managers::bookmark_manager::{demo_bookmarks, BookmarkManager, BookmarkManagerTrait};
use crate::services::clock::Clock;
use crate::services::url_validator::{candidate_address, encode_fragment, UrlValidator};
use crate::types::bookmark::Bookmark;
use crate::types::errors::FormError;
use crate::types::page::{PageEffect, PageEvent, PageSnapshot, PageVariant};

/// Address produced by a submission, before and after adding the scheme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub encoded: String,
    pub address: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageState {
    variant: PageVariant,
    bookmarks: BookmarkManager,
    url: String,
    label: String,
    save_bookmark: bool,
    show_url_error: bool,
    pending_delete: Option<i64>,
}

impl PageState {
    /// Builds the state a freshly mounted page starts with.
    ///
    /// `stored` is the collection read from storage. The demo variant shows
    /// its sample rows instead when `stored` is empty; they are written to
    /// storage only by the first add or delete.
    pub fn mount(variant: PageVariant, stored: Vec<Bookmark>) -> Self {
        let bookmarks = match variant {
            PageVariant::Basic => Vec::new(),
            PageVariant::Demo if stored.is_empty() => demo_bookmarks(),
            _ => stored,
        };

        Self {
            variant,
            bookmarks: BookmarkManager::from_bookmarks(bookmarks),
            url: String::new(),
            label: String::new(),
            save_bookmark: false,
            show_url_error: false,
            pending_delete: None,
        }
    }

    pub fn variant(&self) -> PageVariant {
        self.variant
    }

    pub fn bookmarks(&self) -> &[Bookmark] {
        self.bookmarks.list_bookmarks()
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn save_bookmark(&self) -> bool {
        self.save_bookmark
    }

    pub fn show_url_error(&self) -> bool {
        self.show_url_error
    }

    pub fn pending_delete(&self) -> Option<i64> {
        self.pending_delete
    }

    pub fn snapshot(&self) -> PageSnapshot {
        PageSnapshot {
            variant: self.variant,
            url: self.url.clone(),
            label: self.label.clone(),
            save_bookmark: self.save_bookmark,
            show_url_error: self.show_url_error,
            pending_delete: self.pending_delete,
            bookmarks: self.bookmarks().to_vec(),
        }
    }

    /// Assembles the target address from the url field and, unless this is
    /// the basic page, validates it.
    pub fn prepare_submission(&self, validator: &dyn UrlValidator) -> Result<Submission, FormError> {
        let encoded = encode_fragment(&self.url);
        let address = candidate_address(&encoded);

        if self.variant.is_controlled() && !validator.is_valid(&address) {
            return Err(FormError::InvalidUrl(address));
        }
        Ok(Submission { encoded, address })
    }

    /// Applies one event and returns the effects it requires, in order.
    pub fn reduce(
        &mut self,
        event: PageEvent,
        validator: &dyn UrlValidator,
        clock: &dyn Clock,
    ) -> Vec<PageEffect> {
        debug!(?event, variant = ?self.variant, "page event");

        match event {
            PageEvent::UrlChanged(value) => {
                self.url = value;
                self.show_url_error = false;
                Vec::new()
            }
            PageEvent::LabelChanged(value) => {
                self.label = value;
                Vec::new()
            }
            PageEvent::SaveBookmarkToggled(checked) => {
                self.save_bookmark = checked;
                Vec::new()
            }
            PageEvent::Submit => self.submit(validator, clock),
            PageEvent::RequestDelete(id) => {
                if self.variant.is_controlled() && self.bookmarks.get_bookmark(id).is_some() {
                    self.pending_delete = Some(id);
                } else {
                    debug!(id, "delete requested for unknown row");
                }
                Vec::new()
            }
            PageEvent::ConfirmDelete => match self.pending_delete.take() {
                Some(id) if self.bookmarks.remove_bookmark(id).is_some() => {
                    vec![PageEffect::PersistBookmarks]
                }
                _ => Vec::new(),
            },
            PageEvent::CancelDelete => {
                self.pending_delete = None;
                Vec::new()
            }
        }
    }

    fn submit(&mut self, validator: &dyn UrlValidator, clock: &dyn Clock) -> Vec<PageEffect> {
        let submission = match self.prepare_submission(validator) {
            Ok(s) => s,
            Err(e) => {
                debug!(error = %e, "submission rejected");
                self.show_url_error = true;
                return Vec::new();
            }
        };

        if !self.variant.is_controlled() {
            // The basic page has nowhere to go without input.
            if submission.encoded.is_empty() {
                return Vec::new();
            }
            return vec![PageEffect::Navigate(submission.address)];
        }

        let mut effects = Vec::with_capacity(2);
        if self.save_bookmark {
            let bookmark = Bookmark::new(&submission.encoded, &self.label, clock.now_millis());
            self.bookmarks.add_bookmark(bookmark);
            effects.push(PageEffect::PersistBookmarks);
        }
        effects.push(PageEffect::Navigate(submission.address));
        effects
    }
}
