use serde::{Deserialize, Serialize};

/// The kind of content a tab displays.
///
/// `Page` tabs are bound to an engine view; auxiliary tabs render shell-owned
/// content (bookmark list, history list, page source) and never navigate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TabKind {
    Page,
    Bookmarks,
    History,
    Source,
}

/// Represents a browser tab, identified by its position in the container.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tab {
    pub url: String,
    pub title: String,
    pub kind: TabKind,
}

impl Tab {
    pub fn page(url: &str, title: &str) -> Self {
        Self {
            url: url.to_string(),
            title: title.to_string(),
            kind: TabKind::Page,
        }
    }
}
