#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rbk() -> Command {
    cargo_bin_cmd!("rollbook")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rollbook.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a unique archive root inside the system temp dir and wipe it
pub fn setup_archive_dir(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rollbook_archive", name));
    let dir = path.to_string_lossy().to_string();
    fs::remove_dir_all(&dir).ok();
    dir
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize the database schema (uses --test so no config file is written)
pub fn init_db(db_path: &str) {
    rbk()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Create a class with the default code ("1234") and default daily limit
pub fn add_class(db_path: &str, name: &str) {
    rbk()
        .args(["--db", db_path, "class", "add", name])
        .assert()
        .success();
}

pub fn open_class(db_path: &str, name: &str) {
    rbk()
        .args(["--db", db_path, "open", name])
        .assert()
        .success();
}

/// Record a presence event using the default class code
pub fn mark(db_path: &str, class: &str, roll: &str, name: &str, date: &str) {
    rbk()
        .args([
            "--db", db_path, "mark", class, roll, name, "--code", "1234", "--date", date,
        ])
        .assert()
        .success();
}

/// Init DB plus the small Amy/Bo dataset many tests start from:
/// Amy present on both days, Bo only on the first.
pub fn init_db_with_data(db_path: &str, class: &str) {
    init_db(db_path);
    add_class(db_path, class);
    open_class(db_path, class);

    mark(db_path, class, "101", "Amy", "2024-01-01");
    mark(db_path, class, "102", "Bo", "2024-01-01");
    mark(db_path, class, "101", "Amy", "2024-01-02");
}
