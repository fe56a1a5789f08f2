use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// A download request as reported by the engine.
///
/// Transient: exists only for the duration of one download negotiation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DownloadRequest {
    /// File name suggested by the engine (from headers or the URL).
    pub suggested_name: String,
}

/// Terminal outcome of a download negotiation.
///
/// `Requested -> Accepted(path) | Cancelled`; no pause/resume is modeled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownloadDecision {
    /// The engine proceeds to fetch and write to this path.
    Accepted(PathBuf),
    /// The prompt was dismissed; the engine abandons the download.
    Cancelled,
}
