use std::path::{Path, PathBuf};

use tempfile::TempDir;

use orlanda::types::bookmark::Bookmark;
use orlanda::views::{self, HISTORY_VIEW_LIMIT};

#[test]
fn test_history_rows_newest_first() {
    let entries: Vec<String> = ["https://a.com", "https://b.com", "https://c.com"]
        .iter()
        .map(|s| s.to_string())
        .collect();

    let rows = views::history_rows(&entries);
    let urls: Vec<&str> = rows.iter().map(|r| r.url.as_str()).collect();
    assert_eq!(urls, ["https://c.com", "https://b.com", "https://a.com"]);
}

#[test]
fn test_history_rows_capped_at_limit() {
    let entries: Vec<String> = (0..120).map(|i| format!("https://site{}.com", i)).collect();

    let rows = views::history_rows(&entries);
    assert_eq!(rows.len(), HISTORY_VIEW_LIMIT);
    // Most recent entry leads, the cut-off entry closes the list
    assert_eq!(rows[0].url, "https://site119.com");
    assert_eq!(rows.last().unwrap().url, "https://site70.com");
}

#[test]
fn test_history_rows_empty() {
    assert!(views::history_rows(&[]).is_empty());
}

#[test]
fn test_bookmark_rows_label_format() {
    let bookmarks = vec![Bookmark {
        title: "GitHub".to_string(),
        url: "https://github.com".to_string(),
    }];

    let rows = views::bookmark_rows(&bookmarks);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].label, "GitHub - https://github.com");
    assert_eq!(rows[0].url, "https://github.com");
}

#[test]
fn test_ensure_html_extension_appends() {
    assert_eq!(
        views::ensure_html_extension(PathBuf::from("/tmp/page")),
        PathBuf::from("/tmp/page.html")
    );
    assert_eq!(
        views::ensure_html_extension(PathBuf::from("/tmp/page.txt")),
        PathBuf::from("/tmp/page.txt.html")
    );
}

#[test]
fn test_ensure_html_extension_keeps_existing() {
    assert_eq!(
        views::ensure_html_extension(PathBuf::from("/tmp/page.html")),
        PathBuf::from("/tmp/page.html")
    );
    assert_eq!(
        views::ensure_html_extension(PathBuf::from("/tmp/page.HTML")),
        PathBuf::from("/tmp/page.HTML")
    );
}

#[test]
fn test_write_page_html_forces_extension() {
    let dir = TempDir::new().unwrap();
    let target = dir.path().join("saved_page");

    let written = views::write_page_html(target, "<html><body>hi</body></html>").unwrap();
    assert!(views::has_html_extension(&written));
    let content = std::fs::read_to_string(&written).unwrap();
    assert_eq!(content, "<html><body>hi</body></html>");
}

#[test]
fn test_write_page_html_to_unwritable_path_errors() {
    let result = views::write_page_html(
        PathBuf::from("/nonexistent-root-dir/page.html"),
        "<html></html>",
    );
    assert!(result.is_err());
}

#[test]
fn test_source_view_label() {
    assert_eq!(
        views::source_view_label("https://example.com/page"),
        "Source: example.com"
    );
}

#[test]
fn test_has_html_extension() {
    assert!(views::has_html_extension(Path::new("a.html")));
    assert!(views::has_html_extension(Path::new("a.HTML")));
    assert!(!views::has_html_extension(Path::new("a.htm")));
    assert!(!views::has_html_extension(Path::new("a")));
}
