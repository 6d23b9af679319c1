use chrono::NaiveDate;
use serde::Serialize;

/// One presence record: a student was present in a class on a date.
///
/// There are no explicit absence rows; absence is the complement of
/// presence within the observed date range of the class. One logical event
/// exists per (class_name, roll_number, date) — duplicates collapse.
#[derive(Debug, Clone, Serialize)]
pub struct AttendanceEvent {
    pub class_name: String,  // ⇔ attendance.class_name (TEXT)
    pub roll_number: String, // ⇔ attendance.roll_number (TEXT)
    pub name: String,        // ⇔ attendance.name (TEXT)
    pub date: NaiveDate,     // ⇔ attendance.date (TEXT "YYYY-MM-DD")
}

impl AttendanceEvent {
    pub fn new(class_name: &str, roll_number: &str, name: &str, date: NaiveDate) -> Self {
        Self {
            class_name: class_name.trim().to_string(),
            roll_number: roll_number.trim().to_string(),
            name: name.trim().to_string(),
            date,
        }
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}
