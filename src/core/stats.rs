//! Summary statistics over a built matrix. Read-only: nothing here mutates
//! the matrix, every operation returns fresh rows.

use crate::core::matrix::AttendanceMatrix;
use serde::Serialize;

/// Per-student presence summary.
#[derive(Debug, Clone, Serialize)]
pub struct StudentSummary {
    pub roll_number: String,
    pub name: String,
    pub present_count: usize,
    pub percent: f64,
}

/// Whole-matrix presence/absence totals.
#[derive(Debug, Clone, Copy)]
pub struct PresenceTotals {
    pub present: usize,
    pub absent: usize,
}

impl PresenceTotals {
    pub fn cells(&self) -> usize {
        self.present + self.absent
    }

    /// Share of Present cells over all cells, rounded to two decimals.
    pub fn present_ratio(&self) -> f64 {
        if self.cells() == 0 {
            return 0.0;
        }
        round2(self.present as f64 / self.cells() as f64 * 100.0)
    }
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

/// One summary row per matrix row, in matrix order.
///
/// A matrix with zero date columns produces no rows at all — the percentage
/// is undefined there and the division is never attempted. Callers treat an
/// empty result as "no data".
pub fn summarize(matrix: &AttendanceMatrix) -> Vec<StudentSummary> {
    let total = matrix.dates().len();
    if total == 0 {
        return Vec::new();
    }

    matrix
        .rows()
        .iter()
        .map(|row| {
            let present_count = row.marks.iter().filter(|m| m.is_present()).count();
            StudentSummary {
                roll_number: row.roll_number.clone(),
                name: row.name.clone(),
                present_count,
                percent: round2(present_count as f64 / total as f64 * 100.0),
            }
        })
        .collect()
}

/// Best `n` rows by percentage. Stable: ties keep their matrix order.
pub fn top_n(summaries: &[StudentSummary], n: usize) -> Vec<StudentSummary> {
    let mut out = summaries.to_vec();
    out.sort_by(|a, b| b.percent.total_cmp(&a.percent));
    out.truncate(n);
    out
}

/// Worst `n` rows by percentage. Stable: ties keep their matrix order.
pub fn bottom_n(summaries: &[StudentSummary], n: usize) -> Vec<StudentSummary> {
    let mut out = summaries.to_vec();
    out.sort_by(|a, b| a.percent.total_cmp(&b.percent));
    out.truncate(n);
    out
}

/// Leaderboard by raw present count (the admin dashboard bar chart).
pub fn top_n_by_count(summaries: &[StudentSummary], n: usize) -> Vec<StudentSummary> {
    let mut out = summaries.to_vec();
    out.sort_by(|a, b| b.present_count.cmp(&a.present_count));
    out.truncate(n);
    out
}

/// Sub-view of rows whose percentage falls within [lo, hi], both inclusive.
pub fn filter_range(summaries: &[StudentSummary], lo: f64, hi: f64) -> Vec<StudentSummary> {
    summaries
        .iter()
        .filter(|s| s.percent >= lo && s.percent <= hi)
        .cloned()
        .collect()
}

/// Present/absent counts across every cell of the matrix.
pub fn aggregate_totals(matrix: &AttendanceMatrix) -> PresenceTotals {
    let present = matrix
        .rows()
        .iter()
        .flat_map(|r| r.marks.iter())
        .filter(|m| m.is_present())
        .count();
    let cells = matrix.rows().len() * matrix.dates().len();

    PresenceTotals {
        present,
        absent: cells - present,
    }
}
