use crate::errors::{AppError, AppResult};
use serde::Serialize;

/// Per-class settings row.
///
/// `class_name` is the unique key across all three store tables. `is_open`
/// is never written directly; it only changes through the session gate.
#[derive(Debug, Clone, Serialize)]
pub struct ClassConfig {
    pub class_name: String, // ⇔ classroom_settings.class_name (TEXT, PK)
    pub code: String,       // ⇔ classroom_settings.code (TEXT)
    pub daily_limit: i64,   // ⇔ classroom_settings.daily_limit (INT >= 1)
    pub is_open: bool,      // ⇔ classroom_settings.is_open (INT 0/1)
}

impl ClassConfig {
    /// Constructor for a freshly created class: always starts closed.
    pub fn new(class_name: &str, code: &str, daily_limit: i64) -> Self {
        Self {
            class_name: class_name.trim().to_string(),
            code: code.trim().to_string(),
            daily_limit,
            is_open: false,
        }
    }

    /// Field validation applied before any row reaches the store.
    pub fn validate(&self) -> AppResult<()> {
        if self.class_name.is_empty() {
            return Err(AppError::Validation("class name must not be empty".into()));
        }
        if self.code.is_empty() {
            return Err(AppError::Validation("class code must not be empty".into()));
        }
        if self.daily_limit < 1 {
            return Err(AppError::Validation(format!(
                "daily limit must be at least 1 (got {})",
                self.daily_limit
            )));
        }
        Ok(())
    }
}
