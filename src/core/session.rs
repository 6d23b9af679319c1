//! Class session gate: guards the single "open attendance window" slot.

use crate::db::log::oplog;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::{AppError, AppResult};

/// Result of a close transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseOutcome {
    Closed,
    AlreadyClosed,
}

/// High-level business logic for the attendance window transitions.
///
/// Global invariant: across all classes at most one may be open. The gate
/// never performs the two-step close-then-open dance outside a transaction;
/// the conditional write lives in `db::queries::open_exclusive`.
pub struct SessionGate;

impl SessionGate {
    /// Open the attendance window for `class_name`.
    ///
    /// Fails with `AppError::Conflict` (naming the offending classes) when
    /// another window is already open; the caller must close it first.
    pub fn open(pool: &mut DbPool, class_name: &str) -> AppResult<()> {
        queries::open_exclusive(pool, class_name)?;

        let _ = oplog(
            &pool.conn,
            "open",
            class_name,
            "Attendance window opened",
        );
        Ok(())
    }

    /// Close the attendance window for `class_name`. Idempotent.
    pub fn close(pool: &mut DbPool, class_name: &str) -> AppResult<CloseOutcome> {
        let was_open = queries::close_class(pool, class_name)?;

        if was_open {
            let _ = oplog(
                &pool.conn,
                "close",
                class_name,
                "Attendance window closed",
            );
            Ok(CloseOutcome::Closed)
        } else {
            Ok(CloseOutcome::AlreadyClosed)
        }
    }

    /// Update class code and daily limit. Allowed in either state and never
    /// touches `is_open`.
    pub fn configure(
        pool: &mut DbPool,
        class_name: &str,
        code: &str,
        daily_limit: i64,
    ) -> AppResult<()> {
        let code = code.trim();
        if code.is_empty() {
            return Err(AppError::Validation("class code must not be empty".into()));
        }
        if daily_limit < 1 {
            return Err(AppError::Validation(format!(
                "daily limit must be at least 1 (got {})",
                daily_limit
            )));
        }

        queries::update_class_settings(&pool.conn, class_name, code, daily_limit)?;

        let _ = oplog(
            &pool.conn,
            "settings",
            class_name,
            &format!("Settings updated (limit {})", daily_limit),
        );
        Ok(())
    }
}
