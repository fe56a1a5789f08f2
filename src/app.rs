//! App core for Orlanda.
//!
//! Central struct owning all shell state: the tab container, history,
//! bookmarks, the download ledger, and the settings store. The store is
//! loaded once here at startup and written after every history or bookmark
//! mutation; everything else is process-scoped. All methods run on the UI
//! event loop; engine callbacks re-enter through `on_navigation_completed`
//! and `settle_download`, never concurrently.

use std::path::{Path, PathBuf};

use crate::managers::bookmark_manager::{BookmarkManager, BookmarkManagerTrait};
use crate::managers::download_manager::{DownloadManager, DownloadManagerTrait};
use crate::managers::history_recorder::{HistoryRecorder, HistoryRecorderTrait};
use crate::managers::navigation::NavigationController;
use crate::managers::tab_manager::{TabManager, TabManagerTrait};
use crate::resolver;
use crate::services::settings_store::{SettingsStore, SettingsStoreTrait, StoreData};
use crate::types::download::{DownloadDecision, DownloadRequest};
use crate::types::errors::{PageError, StoreError};
use crate::types::tab::{Tab, TabKind};
use crate::views;

/// URL loaded in the first tab on launch.
pub const HOME_URL: &str = "https://google.com";

/// Central application struct holding all managers and the settings store.
pub struct App {
    store: SettingsStore,
    pub tab_manager: TabManager,
    pub navigation: NavigationController,
    pub history: HistoryRecorder,
    pub bookmarks: BookmarkManager,
    pub downloads: DownloadManager,
}

impl App {
    /// Creates a new App, loading durable state from the settings store.
    ///
    /// If `store_path` is `Some`, the store document lives at that path;
    /// otherwise the platform config directory is used.
    pub fn new(store_path: Option<String>) -> Result<Self, StoreError> {
        let mut store = SettingsStore::new(store_path);
        let data = store.load()?;

        Ok(Self {
            store,
            tab_manager: TabManager::new(),
            navigation: NavigationController,
            history: HistoryRecorder::new(data.history),
            bookmarks: BookmarkManager::new(data.bookmarks),
            downloads: DownloadManager::new(),
        })
    }

    /// Startup sequence: open the initial tab at the home URL.
    pub fn startup(&mut self) -> usize {
        self.open_page(HOME_URL)
    }

    /// Writes both durable lists to the settings store.
    fn persist(&self) {
        let data = StoreData {
            history: self.history.entries().to_vec(),
            bookmarks: self.bookmarks.list_bookmarks().to_vec(),
        };
        if let Err(e) = self.store.save(&data) {
            eprintln!("[STORE] {}", e);
        }
    }

    /// Opens a new page tab for `url`, labeled by its host or file name.
    pub fn open_page(&mut self, url: &str) -> usize {
        let label = resolver::title_for_url(url);
        self.tab_manager.add_tab(url, &label)
    }

    /// Handles the engine's navigation-completed callback.
    ///
    /// Updates the active page tab's URL and label, then records the visit,
    /// persisting when the history list changed.
    pub fn on_navigation_completed(&mut self, url: &str) {
        if self.tab_manager.active_page().is_some() {
            self.tab_manager.update_active_url(url);
            self.tab_manager
                .update_active_title(&resolver::title_for_url(url));
        }
        if self.history.record_visit(url) {
            self.persist();
        }
    }

    /// Bookmarks the given page. Returns `true` when a new bookmark was
    /// stored; a duplicate URL is a silent no-op.
    pub fn add_bookmark(&mut self, url: &str, title: &str) -> bool {
        let added = self.bookmarks.add_bookmark(url, title);
        if added {
            self.persist();
        }
        added
    }

    /// Opens the bookmarks list as an auxiliary tab.
    ///
    /// Returns the tab index and its rows, or `None` when there are no
    /// bookmarks (the caller surfaces an informational notice instead).
    pub fn open_bookmarks_view(&mut self) -> Option<(usize, Vec<views::Row>)> {
        if self.bookmarks.is_empty() {
            return None;
        }
        let rows = views::bookmark_rows(self.bookmarks.list_bookmarks());
        let index = self.tab_manager.add_view(Tab {
            url: String::new(),
            title: "Bookmarks".to_string(),
            kind: TabKind::Bookmarks,
        });
        Some((index, rows))
    }

    /// Opens the history list as an auxiliary tab, newest entries first.
    ///
    /// Returns `None` when history is empty (informational notice instead).
    pub fn open_history_view(&mut self) -> Option<(usize, Vec<views::Row>)> {
        if self.history.is_empty() {
            return None;
        }
        let rows = views::history_rows(self.history.entries());
        let index = self.tab_manager.add_view(Tab {
            url: String::new(),
            title: "History".to_string(),
            kind: TabKind::History,
        });
        Some((index, rows))
    }

    /// Activates a list row: opens its URL in a new page tab.
    pub fn open_row(&mut self, row: &views::Row) -> usize {
        self.open_page(&row.url)
    }

    /// Opens a source view tab for the page at `url`. The rendered HTML
    /// itself arrives asynchronously and is displayed by the UI layer.
    pub fn open_source_view(&mut self, url: &str) -> usize {
        self.tab_manager.add_view(Tab {
            url: url.to_string(),
            title: views::source_view_label(url),
            kind: TabKind::Source,
        })
    }

    /// Opens a local `.html`/`.htm`/`.pdf` file in a new tab.
    ///
    /// Returns `None` (no tab opened) for unsupported or relative paths.
    pub fn open_local_file(&mut self, path: &Path) -> Option<usize> {
        if !resolver::is_openable_file(path) {
            return None;
        }
        let url = resolver::local_file_url(path)?;
        Some(self.open_page(&url))
    }

    /// Writes saved page HTML to `path` (forcing a `.html` extension).
    pub fn save_page(&mut self, path: PathBuf, html: &str) -> Result<PathBuf, PageError> {
        views::write_page_html(path, html)
    }

    /// Settles one download negotiation with the user's chosen path, or
    /// `None` when the save prompt was dismissed.
    pub fn settle_download(
        &mut self,
        request: &DownloadRequest,
        chosen: Option<PathBuf>,
    ) -> DownloadDecision {
        self.downloads.settle(request, chosen)
    }
}
