// Orlanda settings store
// Persists the two durable lists, navigation history and bookmarks, as a
// JSON document at the platform-specific config path. Loaded once at startup,
// written synchronously on every mutation; there is no other durable state.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::platform;
use crate::types::bookmark::Bookmark;
use crate::types::errors::StoreError;

/// The persisted document: history and bookmarks, both insertion-ordered.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoreData {
    #[serde(default)]
    pub history: Vec<String>,
    #[serde(default)]
    pub bookmarks: Vec<Bookmark>,
}

/// Trait defining the settings store interface.
pub trait SettingsStoreTrait {
    fn load(&mut self) -> Result<StoreData, StoreError>;
    fn save(&self, data: &StoreData) -> Result<(), StoreError>;
    fn store_path(&self) -> &str;
}

/// Settings store implementation that persists the document as JSON on disk.
pub struct SettingsStore {
    store_path: String,
}

impl SettingsStore {
    /// Creates a new `SettingsStore`.
    ///
    /// If `path_override` is `Some`, uses that path for the store file.
    /// Otherwise, uses the platform-specific config directory with `store.json`.
    pub fn new(path_override: Option<String>) -> Self {
        let store_path = match path_override {
            Some(p) => p,
            None => platform::get_config_dir()
                .join("store.json")
                .to_string_lossy()
                .to_string(),
        };
        Self { store_path }
    }
}

impl SettingsStoreTrait for SettingsStore {
    /// Loads the store document from disk.
    ///
    /// A missing file yields empty lists; a malformed file is an error.
    fn load(&mut self) -> Result<StoreData, StoreError> {
        let path = Path::new(&self.store_path);

        if !path.exists() {
            return Ok(StoreData::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| StoreError::IoError(format!("Failed to read store file: {}", e)))?;

        serde_json::from_str(&content).map_err(|e| {
            StoreError::SerializationError(format!("Failed to parse store file: {}", e))
        })
    }

    /// Writes the store document to disk, creating parent directories if needed.
    fn save(&self, data: &StoreData) -> Result<(), StoreError> {
        let path = Path::new(&self.store_path);

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                StoreError::IoError(format!("Failed to create store directory: {}", e))
            })?;
        }

        let json = serde_json::to_string_pretty(data).map_err(|e| {
            StoreError::SerializationError(format!("Failed to serialize store: {}", e))
        })?;

        fs::write(path, json)
            .map_err(|e| StoreError::IoError(format!("Failed to write store file: {}", e)))
    }

    /// Returns the path to the store file.
    fn store_path(&self) -> &str {
        &self.store_path
    }
}
