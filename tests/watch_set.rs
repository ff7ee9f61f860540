// tests/watch_set.rs

//! `WatchSet` behaviour against the real filesystem.

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use tokio::time::sleep;

use bazwatch::watch::WatchSet;
use bazwatch_test_utils::{init_tracing, with_timeout};

#[tokio::test]
async fn reports_a_write_to_a_watched_file() {
    init_tracing();

    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("watched.txt");
    fs::write(&file, "before").unwrap();

    let mut set = WatchSet::arm(&[file.clone()]).unwrap();

    // Let the backend finish installing the watch before writing.
    sleep(Duration::from_millis(200)).await;
    fs::write(&file, "after").unwrap();

    let changed = with_timeout(set.changed()).await.expect("watch stream closed");
    // Backends may report a canonicalized variant of the path.
    assert_eq!(changed.file_name(), file.file_name());
}

#[tokio::test]
async fn arming_a_missing_path_fails() {
    init_tracing();

    let missing = PathBuf::from("/definitely/not/here.txt");
    assert!(WatchSet::arm(&[missing]).is_err());
}

#[tokio::test]
async fn arming_the_same_path_twice_is_tolerated() {
    init_tracing();

    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("WORKSPACE");
    fs::write(&file, "").unwrap();

    // The resolver may hand back duplicates (the WORKSPACE append is
    // unconditional); arming must not choke on them.
    let set = WatchSet::arm(&[file.clone(), file]).unwrap();
    drop(set);
}
