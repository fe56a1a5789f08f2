// Orlanda platform paths for macOS
// Config:    ~/Library/Application Support/Orlanda
// Downloads: ~/Downloads

use std::env;
use std::path::PathBuf;

/// Returns the home directory on macOS.
fn home_dir() -> PathBuf {
    PathBuf::from(env::var("HOME").unwrap_or_else(|_| String::from("/tmp")))
}

/// Returns the configuration directory for Orlanda on macOS.
/// `~/Library/Application Support/Orlanda`
pub fn get_config_dir() -> PathBuf {
    home_dir()
        .join("Library")
        .join("Application Support")
        .join("Orlanda")
}

/// Returns the downloads directory on macOS: `~/Downloads`.
pub fn get_download_dir() -> PathBuf {
    home_dir().join("Downloads")
}
