use serde::{Deserialize, Serialize};

/// Represents a saved bookmark.
///
/// Bookmarks are keyed by `url`: the manager never stores two entries with
/// the same URL. Display order is insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bookmark {
    pub title: String,
    pub url: String,
}
