//! Attendance matrix builder: sparse presence events in, dense grid out.

use crate::models::attendance_event::AttendanceEvent;
use chrono::NaiveDate;
use std::collections::{BTreeMap, BTreeSet, HashSet};

/// One cell of the matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mark {
    Present, // 'P'
    Absent,  // 'A'
}

impl Mark {
    pub fn as_char(&self) -> char {
        match self {
            Mark::Present => 'P',
            Mark::Absent => 'A',
        }
    }

    pub fn is_present(&self) -> bool {
        matches!(self, Mark::Present)
    }
}

/// One student row; `marks` is aligned index-for-index with the matrix dates.
#[derive(Debug, Clone)]
pub struct MatrixRow {
    pub roll_number: String,
    pub name: String,
    pub marks: Vec<Mark>,
}

/// Dense roll-number × date presence grid for a single class.
///
/// Every date observed for any student is a column for every student; the
/// gaps are explicit `Absent` cells. Rows are ordered by (roll_number, name)
/// ascending, columns by date ascending. Derived data only — never persisted.
#[derive(Debug, Clone, Default)]
pub struct AttendanceMatrix {
    dates: Vec<NaiveDate>,
    rows: Vec<MatrixRow>,
}

impl AttendanceMatrix {
    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    pub fn rows(&self) -> &[MatrixRow] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn row_for(&self, roll_number: &str) -> Option<&MatrixRow> {
        self.rows.iter().find(|r| r.roll_number == roll_number)
    }

    /// Cell lookup by roll number and date.
    pub fn mark_at(&self, roll_number: &str, date: NaiveDate) -> Option<Mark> {
        let col = self.dates.iter().position(|d| *d == date)?;
        self.row_for(roll_number).map(|r| r.marks[col])
    }
}

/// Build the dense matrix from a set of events, all scoped to one class.
///
/// A roll number that appears with more than one spelling of its name keeps
/// the lexicographically smallest one, so the result does not depend on the
/// order the store returned the rows in. Empty input yields an empty matrix;
/// callers skip the downstream stages in that case.
pub fn build_matrix(events: &[AttendanceEvent]) -> AttendanceMatrix {
    if events.is_empty() {
        return AttendanceMatrix::default();
    }

    let mut dates: BTreeSet<NaiveDate> = BTreeSet::new();
    let mut names: BTreeMap<&str, &str> = BTreeMap::new();
    let mut present: HashSet<(&str, NaiveDate)> = HashSet::new();

    for ev in events {
        dates.insert(ev.date);
        names
            .entry(ev.roll_number.as_str())
            .and_modify(|n| {
                if ev.name.as_str() < *n {
                    *n = ev.name.as_str();
                }
            })
            .or_insert(ev.name.as_str());
        present.insert((ev.roll_number.as_str(), ev.date));
    }

    let dates: Vec<NaiveDate> = dates.into_iter().collect();

    let rows = names
        .into_iter()
        .map(|(roll, name)| {
            let marks = dates
                .iter()
                .map(|d| {
                    if present.contains(&(roll, *d)) {
                        Mark::Present
                    } else {
                        Mark::Absent
                    }
                })
                .collect();
            MatrixRow {
                roll_number: roll.to_string(),
                name: name.to_string(),
                marks,
            }
        })
        .collect();

    AttendanceMatrix { dates, rows }
}
