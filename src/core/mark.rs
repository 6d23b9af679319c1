//! Student submission flow: record one presence event against the class
//! whose attendance window is currently open.

use crate::db::log::oplog;
use crate::db::pool::{DbPool, write_err};
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::models::attendance_event::AttendanceEvent;
use crate::models::roll_entry::RollEntry;
use chrono::NaiveDate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkOutcome {
    Recorded,
    /// The (class, roll, date) triple already existed; submitting twice is
    /// not an error.
    AlreadyMarked,
}

pub struct MarkLogic;

impl MarkLogic {
    pub fn submit(
        pool: &mut DbPool,
        class_name: &str,
        roll_number: &str,
        name: &str,
        code: &str,
        date: NaiveDate,
    ) -> AppResult<MarkOutcome> {
        let roll_number = roll_number.trim();
        let name = name.trim();
        if roll_number.is_empty() {
            return Err(AppError::Validation("roll number must not be empty".into()));
        }
        if name.is_empty() {
            return Err(AppError::Validation("name must not be empty".into()));
        }

        let config = queries::get_class(pool, class_name)?
            .ok_or_else(|| AppError::Validation(format!("unknown class '{}'", class_name)))?;

        if !config.is_open {
            return Err(AppError::Validation(format!(
                "attendance is closed for '{}'",
                class_name
            )));
        }
        if config.code != code {
            return Err(AppError::Validation("invalid class code".into()));
        }

        let ev = AttendanceEvent::new(class_name, roll_number, name, date);

        // Cap check and insert share one transaction so a concurrent
        // submission cannot slip between them; an early return rolls back.
        let tx = pool.conn.transaction().map_err(write_err)?;

        let taken = queries::count_events_for_date(&tx, class_name, date)?;
        let inserted = queries::insert_event(&tx, &ev)?;
        if !inserted {
            return Ok(MarkOutcome::AlreadyMarked);
        }
        if taken >= config.daily_limit {
            return Err(AppError::Validation(format!(
                "daily limit reached for '{}' ({} submissions)",
                class_name, config.daily_limit
            )));
        }

        queries::upsert_roll_entry(&tx, &RollEntry::new(class_name, roll_number, name))?;

        tx.commit().map_err(write_err)?;

        let _ = oplog(
            &pool.conn,
            "mark",
            class_name,
            &format!(
                "{} ({}) marked present on {}",
                name,
                roll_number,
                ev.date_str()
            ),
        );

        Ok(MarkOutcome::Recorded)
    }
}
