use std::path::PathBuf;

use orlanda::managers::download_manager::{DownloadManager, DownloadManagerTrait};
use orlanda::types::download::{DownloadDecision, DownloadRequest};

fn request(name: &str) -> DownloadRequest {
    DownloadRequest {
        suggested_name: name.to_string(),
    }
}

#[test]
fn test_default_destination_joins_suggested_name() {
    let mgr = DownloadManager::with_download_dir(PathBuf::from("/home/user/Downloads"));
    let dest = mgr.default_destination(&request("report.pdf"));
    assert_eq!(dest, PathBuf::from("/home/user/Downloads/report.pdf"));
}

#[test]
fn test_settle_with_path_accepts() {
    let mut mgr = DownloadManager::with_download_dir(PathBuf::from("/tmp"));
    let chosen = PathBuf::from("/tmp/file.zip");

    let decision = mgr.settle(&request("file.zip"), Some(chosen.clone()));
    assert_eq!(decision, DownloadDecision::Accepted(chosen.clone()));
    assert_eq!(mgr.completed(), &[chosen]);
}

#[test]
fn test_settle_without_path_cancels() {
    let mut mgr = DownloadManager::with_download_dir(PathBuf::from("/tmp"));
    let decision = mgr.settle(&request("file.zip"), None);
    assert_eq!(decision, DownloadDecision::Cancelled);
    assert!(mgr.completed().is_empty());
}

#[test]
fn test_completed_records_in_call_order() {
    let mut mgr = DownloadManager::with_download_dir(PathBuf::from("/tmp"));
    mgr.settle(&request("a.zip"), Some(PathBuf::from("/tmp/a.zip")));
    mgr.settle(&request("b.zip"), None);
    mgr.settle(&request("c.zip"), Some(PathBuf::from("/tmp/c.zip")));

    assert_eq!(
        mgr.completed(),
        &[PathBuf::from("/tmp/a.zip"), PathBuf::from("/tmp/c.zip")]
    );
}

#[test]
fn test_chosen_path_overrides_default_destination() {
    let mut mgr = DownloadManager::with_download_dir(PathBuf::from("/home/user/Downloads"));
    let elsewhere = PathBuf::from("/mnt/archive/file.zip");
    let decision = mgr.settle(&request("file.zip"), Some(elsewhere.clone()));
    assert_eq!(decision, DownloadDecision::Accepted(elsewhere));
}
