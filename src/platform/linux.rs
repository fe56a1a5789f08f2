// Orlanda platform paths for Linux
// Config:    ~/.config/orlanda
// Downloads: $XDG_DOWNLOAD_DIR or ~/Downloads

use std::env;
use std::path::PathBuf;

fn home_dir() -> PathBuf {
    PathBuf::from(env::var("HOME").unwrap_or_else(|_| String::from("/tmp")))
}

/// Returns the configuration directory for Orlanda on Linux.
/// Uses `$XDG_CONFIG_HOME/orlanda` if set, otherwise `~/.config/orlanda`.
pub fn get_config_dir() -> PathBuf {
    if let Ok(xdg) = env::var("XDG_CONFIG_HOME") {
        PathBuf::from(xdg).join("orlanda")
    } else {
        home_dir().join(".config").join("orlanda")
    }
}

/// Returns the downloads directory on Linux.
/// Uses `$XDG_DOWNLOAD_DIR` if set, otherwise `~/Downloads`.
pub fn get_download_dir() -> PathBuf {
    if let Ok(xdg) = env::var("XDG_DOWNLOAD_DIR") {
        PathBuf::from(xdg)
    } else {
        home_dir().join("Downloads")
    }
}
