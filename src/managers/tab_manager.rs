//! Tab container for Orlanda.
//!
//! Tabs are identified by their position in the container. Each `Page` tab is
//! bound to one engine view; auxiliary tabs (bookmarks, history, source) hold
//! shell-rendered content. The container never drops below one tab once the
//! first has been opened: closing the sole remaining tab is a silent no-op.

use crate::types::errors::TabError;
use crate::types::tab::{Tab, TabKind};

/// Trait defining the tab container interface.
pub trait TabManagerTrait {
    fn add_tab(&mut self, url: &str, label: &str) -> usize;
    fn add_view(&mut self, tab: Tab) -> usize;
    fn close_tab(&mut self, index: usize) -> Result<(), TabError>;
    fn switch_tab(&mut self, index: usize) -> Result<(), TabError>;
    fn get_tab(&self, index: usize) -> Option<&Tab>;
    fn active_index(&self) -> Option<usize>;
    fn active_tab(&self) -> Option<&Tab>;
    fn active_page(&self) -> Option<&Tab>;
    fn tab_count(&self) -> usize;
    fn update_active_url(&mut self, url: &str);
    fn update_active_title(&mut self, title: &str);
}

/// In-memory tab container for the browser shell.
pub struct TabManager {
    tabs: Vec<Tab>,
    active: Option<usize>,
}

impl TabManager {
    pub fn new() -> Self {
        Self {
            tabs: Vec::new(),
            active: None,
        }
    }
}

impl Default for TabManager {
    fn default() -> Self {
        Self::new()
    }
}

impl TabManagerTrait for TabManager {
    /// Opens a new page tab and switches focus to it. Returns its index.
    fn add_tab(&mut self, url: &str, label: &str) -> usize {
        self.add_view(Tab::page(url, label))
    }

    /// Appends any tab (page or auxiliary) and switches focus to it.
    fn add_view(&mut self, tab: Tab) -> usize {
        self.tabs.push(tab);
        let index = self.tabs.len() - 1;
        self.active = Some(index);
        index
    }

    /// Closes the tab at `index`.
    ///
    /// Closing the sole remaining tab is a silent no-op. An out-of-range
    /// index is the only error condition.
    fn close_tab(&mut self, index: usize) -> Result<(), TabError> {
        if index >= self.tabs.len() {
            return Err(TabError::InvalidIndex(index));
        }
        if self.tabs.len() == 1 {
            return Ok(());
        }

        self.tabs.remove(index);

        // Keep the active index pointing at the same tab where possible,
        // clamping to the nearest neighbor when the active tab was closed.
        if let Some(active) = self.active {
            let new_active = if active > index {
                active - 1
            } else {
                active.min(self.tabs.len() - 1)
            };
            self.active = Some(new_active);
        }
        Ok(())
    }

    /// Switches focus to the tab at `index`.
    fn switch_tab(&mut self, index: usize) -> Result<(), TabError> {
        if index >= self.tabs.len() {
            return Err(TabError::InvalidIndex(index));
        }
        self.active = Some(index);
        Ok(())
    }

    fn get_tab(&self, index: usize) -> Option<&Tab> {
        self.tabs.get(index)
    }

    fn active_index(&self) -> Option<usize> {
        self.active
    }

    fn active_tab(&self) -> Option<&Tab> {
        self.active.and_then(|i| self.tabs.get(i))
    }

    /// The active tab, only if it is a page tab bound to an engine view.
    fn active_page(&self) -> Option<&Tab> {
        self.active_tab().filter(|t| t.kind == TabKind::Page)
    }

    fn tab_count(&self) -> usize {
        self.tabs.len()
    }

    fn update_active_url(&mut self, url: &str) {
        if let Some(i) = self.active {
            if let Some(tab) = self.tabs.get_mut(i) {
                tab.url = url.to_string();
            }
        }
    }

    fn update_active_title(&mut self, title: &str) {
        if let Some(i) = self.active {
            if let Some(tab) = self.tabs.get_mut(i) {
                tab.title = title.to_string();
            }
        }
    }
}
