//! Bookmark manager for Orlanda.
//!
//! Keeps an insertion-ordered list of (title, url) pairs with set semantics
//! on the URL: adding an already-bookmarked URL is a silent no-op. The app
//! core persists the list after each successful add.

use crate::types::bookmark::Bookmark;

/// Trait defining bookmark management operations.
pub trait BookmarkManagerTrait {
    /// Adds a bookmark. Returns `true` if it was appended, `false` when a
    /// bookmark with the same URL already exists.
    fn add_bookmark(&mut self, url: &str, title: &str) -> bool;
    fn list_bookmarks(&self) -> &[Bookmark];
    fn is_empty(&self) -> bool;
}

/// In-memory bookmark manager seeded from the settings store at startup.
pub struct BookmarkManager {
    bookmarks: Vec<Bookmark>,
}

impl BookmarkManager {
    pub fn new(bookmarks: Vec<Bookmark>) -> Self {
        Self { bookmarks }
    }
}

impl Default for BookmarkManager {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl BookmarkManagerTrait for BookmarkManager {
    fn add_bookmark(&mut self, url: &str, title: &str) -> bool {
        if url.is_empty() || self.bookmarks.iter().any(|b| b.url == url) {
            return false;
        }
        // An untitled page falls back to its URL for display
        let title = if title.is_empty() { url } else { title };
        self.bookmarks.push(Bookmark {
            title: title.to_string(),
            url: url.to_string(),
        });
        true
    }

    fn list_bookmarks(&self) -> &[Bookmark] {
        &self.bookmarks
    }

    fn is_empty(&self) -> bool {
        self.bookmarks.is_empty()
    }
}
