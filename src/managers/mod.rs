// Orlanda state managers
// Managers handle stateful shell operations: tabs, navigation, history,
// bookmarks, downloads.

pub mod bookmark_manager;
pub mod download_manager;
pub mod history_recorder;
pub mod navigation;
pub mod tab_manager;
