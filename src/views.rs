//! Auxiliary view models: bookmark list, history list, page source, save-page.
//!
//! These functions produce the row data the UI layer renders into extra tabs;
//! they hold no widget state. Activating a row re-opens its URL in a new tab.

use std::fs;
use std::path::{Path, PathBuf};

use crate::types::bookmark::Bookmark;
use crate::types::errors::PageError;

/// The history view shows at most this many entries, newest first.
pub const HISTORY_VIEW_LIMIT: usize = 50;

/// A selectable row in an auxiliary list view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub label: String,
    /// Navigation target when the row is activated.
    pub url: String,
}

/// Rows for the history view: the most recent entries in reverse
/// chronological order, capped at [`HISTORY_VIEW_LIMIT`].
pub fn history_rows(entries: &[String]) -> Vec<Row> {
    let start = entries.len().saturating_sub(HISTORY_VIEW_LIMIT);
    entries[start..]
        .iter()
        .rev()
        .map(|url| Row {
            label: url.clone(),
            url: url.clone(),
        })
        .collect()
}

/// Rows for the bookmarks view, in insertion order.
pub fn bookmark_rows(bookmarks: &[Bookmark]) -> Vec<Row> {
    bookmarks
        .iter()
        .map(|b| Row {
            label: format!("{} - {}", b.title, b.url),
            url: b.url.clone(),
        })
        .collect()
}

/// Forces a `.html` extension on a save destination.
pub fn ensure_html_extension(path: PathBuf) -> PathBuf {
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("html") => path,
        _ => {
            let mut s = path.into_os_string();
            s.push(".html");
            PathBuf::from(s)
        }
    }
}

/// Writes rendered page HTML to disk, forcing a `.html` extension.
///
/// Returns the final path on success. I/O failures are surfaced to the user
/// as a non-fatal message; a cancelled path prompt never reaches this point.
pub fn write_page_html(path: PathBuf, html: &str) -> Result<PathBuf, PageError> {
    let path = ensure_html_extension(path);
    fs::write(&path, html).map_err(|e| PageError::WriteFailed(e.to_string()))?;
    Ok(path)
}

/// Tab label for a source view of the given page.
pub fn source_view_label(url: &str) -> String {
    format!("Source: {}", crate::resolver::title_for_url(url))
}

/// Checks whether a path already ends in `.html` (case-insensitive).
pub fn has_html_extension(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some(ext) if ext.eq_ignore_ascii_case("html")
    )
}
