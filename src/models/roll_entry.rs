use serde::Serialize;

/// Roll registry row: maps a roll number to a display name within a class.
/// Lifecycle mirrors the class itself (deleted when the class is deleted).
#[derive(Debug, Clone, Serialize)]
pub struct RollEntry {
    pub class_name: String,
    pub roll_number: String,
    pub name: String,
}

impl RollEntry {
    pub fn new(class_name: &str, roll_number: &str, name: &str) -> Self {
        Self {
            class_name: class_name.trim().to_string(),
            roll_number: roll_number.trim().to_string(),
            name: name.trim().to_string(),
        }
    }
}
