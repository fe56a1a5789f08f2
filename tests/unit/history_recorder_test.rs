use orlanda::managers::history_recorder::{HistoryRecorder, HistoryRecorderTrait, HISTORY_CAP};

#[test]
fn test_record_visit_appends() {
    let mut rec = HistoryRecorder::new(Vec::new());
    assert!(rec.record_visit("https://a.com"));
    assert!(rec.record_visit("https://b.com"));
    assert_eq!(rec.entries(), &["https://a.com", "https://b.com"]);
}

#[test]
fn test_consecutive_duplicate_is_suppressed() {
    let mut rec = HistoryRecorder::new(Vec::new());
    assert!(rec.record_visit("https://a.com"));
    assert!(!rec.record_visit("https://a.com"));
    assert_eq!(rec.len(), 1);
}

#[test]
fn test_non_consecutive_duplicate_is_recorded() {
    let mut rec = HistoryRecorder::new(Vec::new());
    rec.record_visit("https://a.com");
    rec.record_visit("https://b.com");
    assert!(rec.record_visit("https://a.com"));
    assert_eq!(rec.entries(), &["https://a.com", "https://b.com", "https://a.com"]);
}

#[test]
fn test_empty_url_is_ignored() {
    let mut rec = HistoryRecorder::new(Vec::new());
    assert!(!rec.record_visit(""));
    assert!(rec.is_empty());
}

#[test]
fn test_cap_evicts_oldest_entry() {
    let mut rec = HistoryRecorder::new(Vec::new());
    for i in 0..HISTORY_CAP {
        rec.record_visit(&format!("https://site{}.com", i));
    }
    assert_eq!(rec.len(), HISTORY_CAP);
    assert_eq!(rec.entries()[0], "https://site0.com");

    rec.record_visit("https://one-more.com");
    assert_eq!(rec.len(), HISTORY_CAP);
    // Oldest gone, newest at the back
    assert_eq!(rec.entries()[0], "https://site1.com");
    assert_eq!(rec.entries().last().unwrap(), "https://one-more.com");
}

#[test]
fn test_seeded_entries_survive() {
    let seed = vec!["https://a.com".to_string(), "https://b.com".to_string()];
    let mut rec = HistoryRecorder::new(seed.clone());
    assert_eq!(rec.entries(), seed.as_slice());

    // Dedupe applies against the seeded tail
    assert!(!rec.record_visit("https://b.com"));
    assert_eq!(rec.len(), 2);
}
