use chrono::NaiveDate;
use rollbook::core::matrix::{Mark, build_matrix};
use rollbook::models::attendance_event::AttendanceEvent;

fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn ev(roll: &str, name: &str, date: &str) -> AttendanceEvent {
    AttendanceEvent::new("10A", roll, name, d(date))
}

#[test]
fn test_matrix_is_dense() {
    // 3 students spread over 3 dates, nobody present everywhere
    let events = vec![
        ev("101", "Amy", "2024-01-01"),
        ev("102", "Bo", "2024-01-02"),
        ev("103", "Cid", "2024-01-03"),
        ev("101", "Amy", "2024-01-03"),
    ];

    let matrix = build_matrix(&events);

    assert_eq!(matrix.rows().len(), 3);
    assert_eq!(matrix.dates().len(), 3);
    for row in matrix.rows() {
        // every row carries one mark per date column
        assert_eq!(row.marks.len(), matrix.dates().len());
    }
}

#[test]
fn test_presence_round_trip() {
    let events = vec![
        ev("101", "Amy", "2024-01-01"),
        ev("102", "Bo", "2024-01-02"),
    ];

    let matrix = build_matrix(&events);

    // every input event is a 'P' cell
    for e in &events {
        assert_eq!(matrix.mark_at(&e.roll_number, e.date), Some(Mark::Present));
    }
    // every (student, date) pair absent from the input is an 'A' cell
    assert_eq!(matrix.mark_at("101", d("2024-01-02")), Some(Mark::Absent));
    assert_eq!(matrix.mark_at("102", d("2024-01-01")), Some(Mark::Absent));
}

#[test]
fn test_rows_and_columns_sorted() {
    let events = vec![
        ev("103", "Cid", "2024-02-01"),
        ev("101", "Amy", "2024-01-15"),
        ev("102", "Bo", "2024-01-20"),
    ];

    let matrix = build_matrix(&events);

    let rolls: Vec<&str> = matrix
        .rows()
        .iter()
        .map(|r| r.roll_number.as_str())
        .collect();
    assert_eq!(rolls, vec!["101", "102", "103"]);

    let dates: Vec<NaiveDate> = matrix.dates().to_vec();
    assert_eq!(
        dates,
        vec![d("2024-01-15"), d("2024-01-20"), d("2024-02-01")]
    );
}

#[test]
fn test_inconsistent_name_picks_lexicographically_smallest() {
    // same roll number spelled two ways; result must not depend on input order
    let forward = vec![
        ev("101", "Zoe", "2024-01-01"),
        ev("101", "Amy", "2024-01-02"),
    ];
    let backward = vec![
        ev("101", "Amy", "2024-01-02"),
        ev("101", "Zoe", "2024-01-01"),
    ];

    let m1 = build_matrix(&forward);
    let m2 = build_matrix(&backward);

    assert_eq!(m1.rows().len(), 1);
    assert_eq!(m1.rows()[0].name, "Amy");
    assert_eq!(m2.rows()[0].name, "Amy");
    // both dates still belong to the single surviving row
    assert_eq!(m1.mark_at("101", d("2024-01-01")), Some(Mark::Present));
    assert_eq!(m1.mark_at("101", d("2024-01-02")), Some(Mark::Present));
}

#[test]
fn test_duplicate_events_are_idempotent() {
    let events = vec![
        ev("101", "Amy", "2024-01-01"),
        ev("101", "Amy", "2024-01-01"),
    ];

    let matrix = build_matrix(&events);

    assert_eq!(matrix.rows().len(), 1);
    assert_eq!(matrix.dates().len(), 1);
    assert_eq!(matrix.mark_at("101", d("2024-01-01")), Some(Mark::Present));
}

#[test]
fn test_empty_input_empty_matrix() {
    let matrix = build_matrix(&[]);

    assert!(matrix.is_empty());
    assert!(matrix.dates().is_empty());
    assert!(matrix.rows().is_empty());
}

#[test]
fn test_amy_bo_scenario() {
    let events = vec![
        ev("101", "Amy", "2024-01-01"),
        ev("102", "Bo", "2024-01-01"),
        ev("101", "Amy", "2024-01-02"),
    ];

    let matrix = build_matrix(&events);

    assert_eq!(matrix.mark_at("101", d("2024-01-01")), Some(Mark::Present));
    assert_eq!(matrix.mark_at("101", d("2024-01-02")), Some(Mark::Present));
    assert_eq!(matrix.mark_at("102", d("2024-01-01")), Some(Mark::Present));
    assert_eq!(matrix.mark_at("102", d("2024-01-02")), Some(Mark::Absent));
}
