use std::path::Path;

use rstest::rstest;

use orlanda::resolver;

#[rstest]
#[case("https://example.com", "https://example.com")]
#[case("http://example.com", "http://example.com")]
#[case("https://example.com/path?q=1", "https://example.com/path?q=1")]
fn test_explicit_scheme_is_literal(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(resolver::resolve(input).as_deref(), Some(expected));
}

#[rstest]
#[case("example.com", "https://example.com")]
#[case("docs.rs/serde", "https://docs.rs/serde")]
#[case("sub.domain.co.uk", "https://sub.domain.co.uk")]
fn test_bare_domain_gets_https(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(resolver::resolve(input).as_deref(), Some(expected));
}

#[rstest]
#[case("hello world", "https://www.google.com/search?q=hello+world")]
#[case("rust", "https://www.google.com/search?q=rust")]
#[case("how to example.com", "https://www.google.com/search?q=how+to+example.com")]
fn test_plain_text_becomes_search(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(resolver::resolve(input).as_deref(), Some(expected));
}

#[rstest]
#[case("")]
#[case("   ")]
#[case("\t\n")]
fn test_blank_input_resolves_to_none(#[case] input: &str) {
    assert_eq!(resolver::resolve(input), None);
}

#[test]
fn test_input_is_trimmed_before_resolution() {
    assert_eq!(
        resolver::resolve("  example.com  ").as_deref(),
        Some("https://example.com")
    );
}

#[test]
fn test_search_query_is_percent_encoded() {
    let resolved = resolver::resolve("a&b=c").unwrap();
    assert_eq!(resolved, "https://www.google.com/search?q=a%26b%3Dc");
}

#[rstest]
#[case("page.html", true)]
#[case("page.HTM", true)]
#[case("doc.pdf", true)]
#[case("image.png", false)]
#[case("archive.tar.gz", false)]
#[case("no_extension", false)]
fn test_is_openable_file(#[case] name: &str, #[case] expected: bool) {
    assert_eq!(resolver::is_openable_file(Path::new(name)), expected);
}

#[test]
fn test_local_file_url_requires_absolute_path() {
    assert_eq!(
        resolver::local_file_url(Path::new("/home/user/page.html")).as_deref(),
        Some("file:///home/user/page.html")
    );
    assert_eq!(resolver::local_file_url(Path::new("relative/page.html")), None);
}

#[rstest]
#[case("https://www.github.com/rust-lang/rust", "github.com")]
#[case("http://example.com", "example.com")]
#[case("file:///home/user/notes.html", "notes.html")]
fn test_title_for_url(#[case] url: &str, #[case] expected: &str) {
    assert_eq!(resolver::title_for_url(url), expected);
}
