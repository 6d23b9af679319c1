mod common;
use common::{init_db_with_data, rbk, setup_test_db, temp_out};
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

#[test]
fn test_export_matrix_csv() {
    let db_path = setup_test_db("export_matrix_csv");
    init_db_with_data(&db_path, "10A");

    let out = temp_out("export_matrix_csv", "csv");

    rbk()
        .args([
            "--db", &db_path, "export", "10A", "--format", "csv", "--file", &out,
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    let mut lines = content.lines();

    // header: index columns first, then the observed dates ascending
    assert_eq!(lines.next().unwrap(), "roll_number,name,2024-01-01,2024-01-02");
    assert_eq!(lines.next().unwrap(), "101,Amy,P,P");
    assert_eq!(lines.next().unwrap(), "102,Bo,P,A");
}

#[test]
fn test_export_matrix_json() {
    let db_path = setup_test_db("export_matrix_json");
    init_db_with_data(&db_path, "10A");

    let out = temp_out("export_matrix_json", "json");

    rbk()
        .args([
            "--db", &db_path, "export", "10A", "--format", "json", "--file", &out,
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    assert!(content.contains("\"roll_number\": \"101\""));
    assert!(content.contains("\"2024-01-01\": \"P\""));
    assert!(content.contains("\"2024-01-02\": \"A\""));
}

#[test]
fn test_export_requires_absolute_path() {
    let db_path = setup_test_db("export_relative");
    init_db_with_data(&db_path, "10A");

    rbk()
        .args([
            "--db", &db_path, "export", "10A", "--format", "csv", "--file", "relative.csv",
        ])
        .assert()
        .failure()
        .stderr(contains("absolute"));
}

#[test]
fn test_export_empty_class_warns_without_file() {
    let db_path = setup_test_db("export_empty");
    init_db_with_data(&db_path, "10A");

    rbk()
        .args(["--db", &db_path, "class", "add", "10B"])
        .assert()
        .success();

    let out = temp_out("export_empty", "csv");

    rbk()
        .args([
            "--db", &db_path, "export", "10B", "--format", "csv", "--file", &out,
        ])
        .assert()
        .success()
        .stdout(contains("No attendance data"));

    assert!(!std::path::Path::new(&out).exists());
}

#[test]
fn test_export_force_overwrites() {
    let db_path = setup_test_db("export_force");
    init_db_with_data(&db_path, "10A");

    let out = temp_out("export_force", "csv");
    fs::write(&out, "stale").unwrap();

    rbk()
        .args([
            "--db", &db_path, "export", "10A", "--format", "csv", "--file", &out, "--force",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).unwrap();
    assert!(content.starts_with("roll_number,name"));
}

#[test]
fn test_matrix_command_renders_rows() {
    let db_path = setup_test_db("matrix_command");
    init_db_with_data(&db_path, "10A");

    rbk()
        .args(["--db", &db_path, "matrix", "10A"])
        .assert()
        .success()
        .stdout(contains("2024-01-01"))
        .stdout(contains("Amy"))
        .stdout(contains("Bo"));
}

#[test]
fn test_matrix_command_single_student() {
    let db_path = setup_test_db("matrix_student");
    init_db_with_data(&db_path, "10A");

    rbk()
        .args(["--db", &db_path, "matrix", "10A", "--roll", "102"])
        .assert()
        .success()
        .stdout(contains("Bo"))
        .stdout(contains("Amy").not());
}
