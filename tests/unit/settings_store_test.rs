use orlanda::services::settings_store::{SettingsStore, SettingsStoreTrait, StoreData};
use orlanda::types::bookmark::Bookmark;
use tempfile::TempDir;

/// Helper: a store backed by a temp directory that lives for the duration of
/// the test (the caller holds the `TempDir` handle).
fn store_in_temp(dir: &TempDir) -> SettingsStore {
    let path = dir.path().join("store.json").to_string_lossy().to_string();
    SettingsStore::new(Some(path))
}

/// When no store file exists on disk, `load()` must return empty lists so the
/// browser can start with a clean state.
#[test]
fn test_load_defaults_when_no_store_file_exists() {
    let dir = TempDir::new().unwrap();
    let mut store = store_in_temp(&dir);

    let data = store.load().unwrap();
    assert_eq!(data, StoreData::default());
}

/// Saved data must survive a completely new store instance reading the same
/// file, covering the restart path.
#[test]
fn test_save_survives_new_store_instance() {
    let dir = TempDir::new().unwrap();

    {
        let store = store_in_temp(&dir);
        store
            .save(&StoreData {
                history: vec!["https://a.com".to_string(), "https://b.com".to_string()],
                bookmarks: vec![Bookmark {
                    title: "A".to_string(),
                    url: "https://a.com".to_string(),
                }],
            })
            .unwrap();
    }

    {
        let mut store2 = store_in_temp(&dir);
        let loaded = store2.load().unwrap();
        assert_eq!(loaded.history, vec!["https://a.com", "https://b.com"]);
        assert_eq!(loaded.bookmarks.len(), 1);
        assert_eq!(loaded.bookmarks[0].url, "https://a.com");
    }
}

/// Saving twice overwrites rather than appends; the store file always holds
/// exactly the latest snapshot.
#[test]
fn test_save_overwrites_previous_snapshot() {
    let dir = TempDir::new().unwrap();
    let store = store_in_temp(&dir);

    store
        .save(&StoreData {
            history: vec!["https://old.com".to_string()],
            bookmarks: Vec::new(),
        })
        .unwrap();
    store
        .save(&StoreData {
            history: vec!["https://new.com".to_string()],
            bookmarks: Vec::new(),
        })
        .unwrap();

    let mut store2 = store_in_temp(&dir);
    let loaded = store2.load().unwrap();
    assert_eq!(loaded.history, vec!["https://new.com"]);
}

/// `save` creates missing parent directories, so a fresh profile directory
/// does not need to exist beforehand.
#[test]
fn test_save_creates_parent_directories() {
    let dir = TempDir::new().unwrap();
    let nested = dir
        .path()
        .join("deep")
        .join("profile")
        .join("store.json")
        .to_string_lossy()
        .to_string();
    let store = SettingsStore::new(Some(nested));

    store.save(&StoreData::default()).unwrap();

    let mut reload = SettingsStore::new(Some(store.store_path().to_string()));
    assert_eq!(reload.load().unwrap(), StoreData::default());
}

/// A corrupted store file is an error, not silently treated as empty.
#[test]
fn test_malformed_store_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("store.json");
    std::fs::write(&path, "not json at all").unwrap();

    let mut store = SettingsStore::new(Some(path.to_string_lossy().to_string()));
    assert!(store.load().is_err());
}
