use chrono::NaiveDate;
use rollbook::archive::{
    Archive, LocalArchive, PushOutcome, push, snapshot_message, snapshot_path,
};
use rollbook::errors::AppError;
use std::env;
use std::fs;
use std::path::PathBuf;

fn test_root(name: &str) -> PathBuf {
    let mut path = env::temp_dir();
    path.push(format!("{}_rollbook_archive", name));
    fs::remove_dir_all(&path).ok();
    path
}

#[test]
fn test_snapshot_path_convention() {
    let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
    assert_eq!(
        snapshot_path("10A", date),
        "records/attendance_10A_20240105.csv"
    );
    assert_eq!(snapshot_message("10A"), "Update attendance for 10A");
}

#[test]
fn test_push_creates_then_updates() {
    let root = test_root("create_update");
    let store = LocalArchive::new(&root);
    let path = "records/attendance_10A_20240105.csv";

    let first = push(&store, path, "Update attendance for 10A", b"v1", "main").unwrap();
    assert_eq!(first, PushOutcome::Created);

    let second = push(&store, path, "Update attendance for 10A", b"v2", "main").unwrap();
    assert_eq!(second, PushOutcome::Updated);

    let file = store.get_contents(path, "main").unwrap().unwrap();
    assert_eq!(file.content, b"v2");
}

#[test]
fn test_get_contents_missing_path() {
    let root = test_root("missing");
    let store = LocalArchive::new(&root);

    let got = store.get_contents("records/nothing.csv", "main").unwrap();
    assert!(got.is_none());
}

#[test]
fn test_version_token_tracks_content() {
    let root = test_root("token");
    let store = LocalArchive::new(&root);
    let path = "records/attendance_10A_20240105.csv";

    store.create_file(path, "msg", b"v1", "main").unwrap();
    let before = store.get_contents(path, "main").unwrap().unwrap();

    store
        .update_file(path, "msg", b"v2", &before.version, "main")
        .unwrap();
    let after = store.get_contents(path, "main").unwrap().unwrap();

    assert_ne!(before.version, after.version);
    assert_eq!(after.content, b"v2");
}

#[test]
fn test_stale_version_token_rejected() {
    let root = test_root("stale");
    let store = LocalArchive::new(&root);
    let path = "records/attendance_10A_20240105.csv";

    store.create_file(path, "msg", b"v1", "main").unwrap();
    let token = store.get_contents(path, "main").unwrap().unwrap().version;

    // someone else writes in between; our token is now stale
    store.update_file(path, "msg", b"v2", &token, "main").unwrap();

    let err = store.update_file(path, "msg", b"v3", &token, "main").unwrap_err();
    match err {
        AppError::Archive(msg) => assert!(msg.contains("stale"), "unexpected message: {msg}"),
        other => panic!("expected Archive error, got {other:?}"),
    }

    // the rejected write changed nothing
    let current = store.get_contents(path, "main").unwrap().unwrap();
    assert_eq!(current.content, b"v2");
}

#[test]
fn test_create_on_existing_path_rejected() {
    let root = test_root("create_existing");
    let store = LocalArchive::new(&root);
    let path = "records/attendance_10A_20240105.csv";

    store.create_file(path, "msg", b"v1", "main").unwrap();
    assert!(store.create_file(path, "msg", b"v2", "main").is_err());
}

#[test]
fn test_update_missing_path_rejected() {
    let root = test_root("update_missing");
    let store = LocalArchive::new(&root);

    let err = store
        .update_file("records/nothing.csv", "msg", b"v1", "deadbeef", "main")
        .unwrap_err();
    assert!(matches!(err, AppError::Archive(_)));
}

#[test]
fn test_branches_are_separate() {
    let root = test_root("branches");
    let store = LocalArchive::new(&root);
    let path = "records/attendance_10A_20240105.csv";

    store.create_file(path, "msg", b"main-data", "main").unwrap();
    assert!(store.get_contents(path, "backup").unwrap().is_none());
}
