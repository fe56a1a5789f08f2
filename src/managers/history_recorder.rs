//! History recorder for Orlanda.
//!
//! Appends the resulting URL of every completed navigation, suppressing
//! consecutive repeats and capping total retained entries at
//! [`HISTORY_CAP`] (oldest evicted first). The recorder owns only the
//! in-memory list; the app core persists it after each mutation.

/// Maximum number of retained history entries.
pub const HISTORY_CAP: usize = 100;

/// Trait defining history recording operations.
pub trait HistoryRecorderTrait {
    /// Records a completed navigation. Returns `true` if the list changed.
    fn record_visit(&mut self, url: &str) -> bool;
    fn entries(&self) -> &[String];
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool;
}

/// In-memory history recorder seeded from the settings store at startup.
pub struct HistoryRecorder {
    entries: Vec<String>,
}

impl HistoryRecorder {
    pub fn new(entries: Vec<String>) -> Self {
        Self { entries }
    }
}

impl Default for HistoryRecorder {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl HistoryRecorderTrait for HistoryRecorder {
    fn record_visit(&mut self, url: &str) -> bool {
        if url.is_empty() {
            return false;
        }
        if self.entries.last().map(String::as_str) == Some(url) {
            return false;
        }
        self.entries.push(url.to_string());
        if self.entries.len() > HISTORY_CAP {
            self.entries.remove(0);
        }
        true
    }

    fn entries(&self) -> &[String] {
        &self.entries
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
