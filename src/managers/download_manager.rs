//! Download handler for Orlanda.
//!
//! Bound to the engine's download-request event. Each request is negotiated
//! once: the user either supplies a destination path (the engine proceeds and
//! the path is recorded) or dismisses the prompt (the engine cancels). The
//! completed list is in-memory only and lives for the process lifetime.

use std::path::PathBuf;

use crate::platform;
use crate::types::download::{DownloadDecision, DownloadRequest};

/// Trait defining download negotiation operations.
pub trait DownloadManagerTrait {
    /// Default destination offered in the save prompt: the platform download
    /// directory plus the engine-suggested file name.
    fn default_destination(&self, request: &DownloadRequest) -> PathBuf;
    /// Settles one request. `chosen` is the path from the save prompt, or
    /// `None` when the prompt was dismissed.
    fn settle(&mut self, request: &DownloadRequest, chosen: Option<PathBuf>) -> DownloadDecision;
    /// Paths of accepted downloads, in call order.
    fn completed(&self) -> &[PathBuf];
}

/// Download manager recording accepted downloads for the process lifetime.
pub struct DownloadManager {
    download_dir: PathBuf,
    completed: Vec<PathBuf>,
}

impl DownloadManager {
    pub fn new() -> Self {
        Self::with_download_dir(platform::get_download_dir())
    }

    pub fn with_download_dir(download_dir: PathBuf) -> Self {
        Self {
            download_dir,
            completed: Vec::new(),
        }
    }
}

impl Default for DownloadManager {
    fn default() -> Self {
        Self::new()
    }
}

impl DownloadManagerTrait for DownloadManager {
    fn default_destination(&self, request: &DownloadRequest) -> PathBuf {
        self.download_dir.join(&request.suggested_name)
    }

    fn settle(&mut self, _request: &DownloadRequest, chosen: Option<PathBuf>) -> DownloadDecision {
        match chosen {
            Some(path) => {
                self.completed.push(path.clone());
                DownloadDecision::Accepted(path)
            }
            None => DownloadDecision::Cancelled,
        }
    }

    fn completed(&self) -> &[PathBuf] {
        &self.completed
    }
}
