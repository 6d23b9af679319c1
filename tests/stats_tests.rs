use chrono::NaiveDate;
use rollbook::core::matrix::build_matrix;
use rollbook::core::stats::{
    aggregate_totals, bottom_n, filter_range, summarize, top_n, top_n_by_count,
};
use rollbook::models::attendance_event::AttendanceEvent;

fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn ev(roll: &str, name: &str, date: &str) -> AttendanceEvent {
    AttendanceEvent::new("10A", roll, name, d(date))
}

/// Amy 2/2 days, Bo 1/2 days.
fn amy_bo_matrix() -> rollbook::core::matrix::AttendanceMatrix {
    build_matrix(&[
        ev("101", "Amy", "2024-01-01"),
        ev("102", "Bo", "2024-01-01"),
        ev("101", "Amy", "2024-01-02"),
    ])
}

#[test]
fn test_amy_bo_percentages() {
    let summaries = summarize(&amy_bo_matrix());

    assert_eq!(summaries.len(), 2);
    assert_eq!(summaries[0].roll_number, "101");
    assert_eq!(summaries[0].present_count, 2);
    assert_eq!(summaries[0].percent, 100.0);
    assert_eq!(summaries[1].roll_number, "102");
    assert_eq!(summaries[1].present_count, 1);
    assert_eq!(summaries[1].percent, 50.0);
}

#[test]
fn test_percentages_within_bounds() {
    let matrix = build_matrix(&[
        ev("101", "Amy", "2024-01-01"),
        ev("102", "Bo", "2024-01-02"),
        ev("103", "Cid", "2024-01-03"),
        ev("103", "Cid", "2024-01-01"),
    ]);

    for s in summarize(&matrix) {
        assert!(s.percent >= 0.0, "{} below 0", s.roll_number);
        assert!(s.percent <= 100.0, "{} above 100", s.roll_number);
    }
}

#[test]
fn test_rounding_two_decimals() {
    // 1 of 3 days = 33.333…% → 33.33
    let matrix = build_matrix(&[
        ev("101", "Amy", "2024-01-01"),
        ev("102", "Bo", "2024-01-01"),
        ev("102", "Bo", "2024-01-02"),
        ev("102", "Bo", "2024-01-03"),
    ]);

    let summaries = summarize(&matrix);
    assert_eq!(summaries[0].percent, 33.33);
}

#[test]
fn test_empty_matrix_summarizes_to_nothing() {
    let summaries = summarize(&build_matrix(&[]));
    assert!(summaries.is_empty());
}

#[test]
fn test_top_and_bottom() {
    let summaries = summarize(&amy_bo_matrix());

    let top = top_n(&summaries, 1);
    assert_eq!(top.len(), 1);
    assert_eq!(top[0].roll_number, "101");

    let bottom = bottom_n(&summaries, 1);
    assert_eq!(bottom.len(), 1);
    assert_eq!(bottom[0].roll_number, "102");
}

#[test]
fn test_top_n_truncation_and_overflow() {
    let summaries = summarize(&amy_bo_matrix());

    // asking for more rows than exist returns them all
    assert_eq!(top_n(&summaries, 10).len(), 2);
    assert_eq!(bottom_n(&summaries, 0).len(), 0);
}

#[test]
fn test_ties_keep_matrix_order() {
    // three students all present on the same single day → all 100%
    let matrix = build_matrix(&[
        ev("103", "Cid", "2024-01-01"),
        ev("101", "Amy", "2024-01-01"),
        ev("102", "Bo", "2024-01-01"),
    ]);

    let summaries = summarize(&matrix);
    let top = top_n(&summaries, 3);

    let rolls: Vec<&str> = top.iter().map(|s| s.roll_number.as_str()).collect();
    assert_eq!(rolls, vec!["101", "102", "103"]);
}

#[test]
fn test_top_n_by_count() {
    let summaries = summarize(&amy_bo_matrix());
    let board = top_n_by_count(&summaries, 2);

    assert_eq!(board[0].roll_number, "101");
    assert_eq!(board[0].present_count, 2);
    assert_eq!(board[1].present_count, 1);
}

#[test]
fn test_filter_range_is_inclusive() {
    let summaries = summarize(&amy_bo_matrix());

    // both bounds sit exactly on row percentages
    let all = filter_range(&summaries, 50.0, 100.0);
    assert_eq!(all.len(), 2);

    let only_bo = filter_range(&summaries, 0.0, 50.0);
    assert_eq!(only_bo.len(), 1);
    assert_eq!(only_bo[0].roll_number, "102");

    let none = filter_range(&summaries, 60.0, 99.0);
    assert!(none.is_empty());
}

#[test]
fn test_aggregate_totals() {
    let totals = aggregate_totals(&amy_bo_matrix());

    // 2 students × 2 dates = 4 cells, 3 of them present
    assert_eq!(totals.cells(), 4);
    assert_eq!(totals.present, 3);
    assert_eq!(totals.absent, 1);
    assert_eq!(totals.present_ratio(), 75.0);
}
