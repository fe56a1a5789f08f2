//! Orlanda Browse — a minimal tabbed web browser shell.
//!
//! Entry point: opens the browser window on the system webview.
//! When built without the `gui` feature, runs a console demo.

#[cfg(feature = "gui")]
fn main() {
    orlanda::ui::webview_app::run();
}

#[cfg(not(feature = "gui"))]
fn main() {
    println!();
    println!("╔══════════════════════════════════════════════════════════════╗");
    println!("║             Orlanda Browse v{} — Demo Mode              ║", env!("CARGO_PKG_VERSION"));
    println!("║          Minimal tabbed browser on the system webview        ║");
    println!("╚══════════════════════════════════════════════════════════════╝");
    println!();

    demo_resolver();
    demo_tabs();
    demo_navigation();
    demo_history();
    demo_bookmarks();
    demo_views();
    demo_downloads();
    demo_store();
    demo_app_core();

    println!();
    println!("═══════════════════════════════════════════════════════════════");
    println!("  ✅ All components demonstrated successfully!");
    println!("  Orlanda Browse is ready for webview integration.");
    println!("═══════════════════════════════════════════════════════════════");
}

#[cfg(not(feature = "gui"))]
fn section(name: &str) {
    println!("───────────────────────────────────────────────────────────────");
    println!("  📦 {}", name);
    println!("───────────────────────────────────────────────────────────────");
}

#[cfg(not(feature = "gui"))]
fn demo_resolver() {
    use orlanda::resolver;
    section("Address Resolver");

    println!("  'https://example.com' -> {:?}", resolver::resolve("https://example.com"));
    println!("  'example.com' -> {:?}", resolver::resolve("example.com"));
    println!("  'hello world' -> {:?}", resolver::resolve("hello world"));
    println!("  '   ' -> {:?}", resolver::resolve("   "));
    println!("  ✓ Resolver OK");
    println!();
}

#[cfg(not(feature = "gui"))]
fn demo_tabs() {
    use orlanda::managers::tab_manager::{TabManager, TabManagerTrait};
    section("Tab Manager");

    let mut mgr = TabManager::new();
    mgr.add_tab("https://google.com", "google.com");
    mgr.add_tab("https://docs.rs", "docs.rs");
    mgr.add_tab("https://crates.io", "crates.io");
    println!("  Opened 3 tabs, count = {}", mgr.tab_count());

    mgr.switch_tab(0).unwrap();
    println!("  Active tab: {}", mgr.active_tab().unwrap().url);

    mgr.close_tab(1).unwrap();
    println!("  Closed tab 1, count = {}", mgr.tab_count());

    mgr.close_tab(0).unwrap();
    let attempt = mgr.close_tab(0);
    println!("  Closed down to 1 tab; closing the last one: {:?} (count = {})", attempt, mgr.tab_count());
    println!("  ✓ TabManager OK");
    println!();
}

#[cfg(not(feature = "gui"))]
fn demo_navigation() {
    use orlanda::managers::navigation::NavigationController;
    section("Navigation Controller");

    let nav = NavigationController;
    nav.back(None);
    nav.forward(None);
    nav.reload(None);
    println!("  back/forward/reload with no engine view: silent no-ops");
    println!("  navigate('rust lang') -> {:?}", nav.navigate(None, "rust lang"));
    println!("  ✓ NavigationController OK");
    println!();
}

#[cfg(not(feature = "gui"))]
fn demo_history() {
    use orlanda::managers::history_recorder::{HistoryRecorder, HistoryRecorderTrait, HISTORY_CAP};
    section("History Recorder");

    let mut rec = HistoryRecorder::new(Vec::new());
    rec.record_visit("https://a.com");
    rec.record_visit("https://b.com");
    let dup = rec.record_visit("https://b.com");
    println!("  Recorded a, b, b -> {} entries (consecutive dup recorded: {})", rec.len(), dup);

    for i in 0..200 {
        rec.record_visit(&format!("https://site{}.com", i));
    }
    println!("  After 200 more visits: {} entries (cap = {})", rec.len(), HISTORY_CAP);
    println!("  ✓ HistoryRecorder OK");
    println!();
}

#[cfg(not(feature = "gui"))]
fn demo_bookmarks() {
    use orlanda::managers::bookmark_manager::{BookmarkManager, BookmarkManagerTrait};
    section("Bookmark Manager");

    let mut mgr = BookmarkManager::new(Vec::new());
    mgr.add_bookmark("https://github.com", "GitHub");
    mgr.add_bookmark("https://docs.rs", "");
    let dup = mgr.add_bookmark("https://github.com", "GitHub again");
    println!("  Added 2 bookmarks (duplicate URL accepted: {})", dup);
    for b in mgr.list_bookmarks() {
        println!("    {} - {}", b.title, b.url);
    }
    println!("  ✓ BookmarkManager OK");
    println!();
}

#[cfg(not(feature = "gui"))]
fn demo_views() {
    use orlanda::views;
    use std::path::PathBuf;
    section("Auxiliary Views");

    let entries: Vec<String> = (1..=3).map(|i| format!("https://page{}.com", i)).collect();
    let rows = views::history_rows(&entries);
    println!("  History rows (newest first): {:?}", rows.iter().map(|r| r.url.as_str()).collect::<Vec<_>>());

    let forced = views::ensure_html_extension(PathBuf::from("/tmp/page.txt"));
    println!("  Save destination '/tmp/page.txt' -> {}", forced.display());
    println!("  ✓ Views OK");
    println!();
}

#[cfg(not(feature = "gui"))]
fn demo_downloads() {
    use orlanda::managers::download_manager::{DownloadManager, DownloadManagerTrait};
    use orlanda::types::download::DownloadRequest;
    use std::path::PathBuf;
    section("Download Manager");

    let mut mgr = DownloadManager::with_download_dir(PathBuf::from("/tmp/downloads"));
    let request = DownloadRequest {
        suggested_name: "file.zip".to_string(),
    };
    println!("  Default destination: {}", mgr.default_destination(&request).display());

    let accepted = mgr.settle(&request, Some(PathBuf::from("/tmp/downloads/file.zip")));
    println!("  Settled with a chosen path: {:?}", accepted);

    let cancelled = mgr.settle(&request, None);
    println!("  Settled with a dismissed prompt: {:?}", cancelled);
    println!("  Completed downloads: {}", mgr.completed().len());
    println!("  ✓ DownloadManager OK");
    println!();
}

#[cfg(not(feature = "gui"))]
fn demo_store() {
    use orlanda::services::settings_store::{SettingsStore, SettingsStoreTrait, StoreData};
    use orlanda::types::bookmark::Bookmark;
    section("Settings Store");

    let mut store = SettingsStore::new(Some("demo_store.json".to_string()));
    let data = store.load().unwrap();
    println!("  Fresh store: {} history, {} bookmarks", data.history.len(), data.bookmarks.len());

    store
        .save(&StoreData {
            history: vec!["https://a.com".to_string()],
            bookmarks: vec![Bookmark {
                title: "A".to_string(),
                url: "https://a.com".to_string(),
            }],
        })
        .unwrap();
    let reloaded = store.load().unwrap();
    println!("  After save: {} history, {} bookmarks", reloaded.history.len(), reloaded.bookmarks.len());
    let _ = std::fs::remove_file("demo_store.json");
    println!("  ✓ SettingsStore OK");
    println!();
}

#[cfg(not(feature = "gui"))]
fn demo_app_core() {
    use orlanda::app::App;
    section("App Core (full lifecycle)");

    let mut app = App::new(Some("demo_app_store.json".to_string())).unwrap();
    let first = app.startup();
    println!("  Startup opened tab {} at the home URL", first);

    app.on_navigation_completed("https://example.com");
    println!("  Navigation completed: history persisted");

    app.add_bookmark("https://example.com", "Example");
    let view = app.open_bookmarks_view();
    println!("  Bookmarks view: {} row(s)", view.map(|(_, rows)| rows.len()).unwrap_or(0));
    let _ = std::fs::remove_file("demo_app_store.json");
    println!("  ✓ App Core OK");
}
