// Orlanda platform paths for Windows
// Config:    %APPDATA%/Orlanda
// Downloads: %USERPROFILE%/Downloads

use std::env;
use std::path::PathBuf;

/// Returns the configuration directory for Orlanda on Windows.
/// `%APPDATA%/Orlanda`
pub fn get_config_dir() -> PathBuf {
    let appdata =
        env::var("APPDATA").unwrap_or_else(|_| String::from("C:\\Users\\Default\\AppData\\Roaming"));
    PathBuf::from(appdata).join("Orlanda")
}

/// Returns the downloads directory on Windows: `%USERPROFILE%/Downloads`.
pub fn get_download_dir() -> PathBuf {
    let profile =
        env::var("USERPROFILE").unwrap_or_else(|_| String::from("C:\\Users\\Default"));
    PathBuf::from(profile).join("Downloads")
}
