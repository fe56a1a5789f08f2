//! Address resolver: turns raw address-bar text into a navigable URL.
//!
//! Resolution precedence, in order:
//! 1. Explicit `http://` or `https://` prefix is taken literally.
//! 2. Input containing a dot and no whitespace is treated as a bare domain.
//! 3. Anything else becomes a search-engine query.
//!
//! Blank input resolves to nothing and triggers no navigation.

use std::path::Path;

const SEARCH_URL: &str = "https://www.google.com/search?q=";

/// Resolves raw address-bar input into a URL, or `None` for blank input.
pub fn resolve(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        return Some(trimmed.to_string());
    }
    if trimmed.contains('.') && !trimmed.contains(char::is_whitespace) {
        return Some(format!("https://{}", trimmed));
    }
    Some(format!("{}{}", SEARCH_URL, urlencode(trimmed)))
}

/// Percent-encodes a search query, mapping spaces to `+`.
fn urlencode(s: &str) -> String {
    let mut out = String::with_capacity(s.len() * 3);
    for b in s.bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(b as char);
            }
            b' ' => out.push('+'),
            _ => {
                out.push('%');
                out.push(char::from(b"0123456789ABCDEF"[(b >> 4) as usize]));
                out.push(char::from(b"0123456789ABCDEF"[(b & 0xf) as usize]));
            }
        }
    }
    out
}

/// Returns true for file types the shell opens directly (`.html`, `.htm`, `.pdf`).
pub fn is_openable_file(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some(ext) if ext.eq_ignore_ascii_case("html")
            || ext.eq_ignore_ascii_case("htm")
            || ext.eq_ignore_ascii_case("pdf")
    )
}

/// Converts an absolute local path into a `file://` URL.
///
/// Returns `None` for relative paths; the caller is expected to canonicalize
/// dialog results before handing them over.
pub fn local_file_url(path: &Path) -> Option<String> {
    if !path.is_absolute() {
        return None;
    }
    Some(format!("file://{}", path.display()))
}

/// Derives a short tab title from a URL: the host for web pages, the file
/// name for local files.
pub fn title_for_url(url: &str) -> String {
    if let Some(rest) = url.strip_prefix("file://") {
        return Path::new(rest)
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| url.to_string());
    }
    url.trim_start_matches("https://")
        .trim_start_matches("http://")
        .trim_start_matches("www.")
        .split('/')
        .next()
        .unwrap_or(url)
        .to_string()
}
