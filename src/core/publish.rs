//! Push a rendered matrix snapshot to the archive.

use crate::archive::{self, Archive, PushOutcome};
use crate::core::matrix::{AttendanceMatrix, build_matrix};
use crate::db::log::oplog;
use crate::db::pool::DbPool;
use crate::db::queries::load_events_for_class;
use crate::errors::{AppError, AppResult};
use crate::export::json_csv::matrix_to_csv_bytes;
use chrono::NaiveDate;

pub struct PublishLogic;

impl PublishLogic {
    /// Serialize the matrix and push it to
    /// `records/attendance_{class}_{YYYYMMDD}.csv` on the given branch.
    ///
    /// An empty matrix means "no data" and nothing reaches the archive.
    pub fn push(
        pool: &mut DbPool,
        store: &dyn Archive,
        class_name: &str,
        date: NaiveDate,
        branch: &str,
    ) -> AppResult<PushOutcome> {
        let events = load_events_for_class(pool, class_name)?;
        let matrix = build_matrix(&events);

        if matrix.is_empty() {
            return Err(AppError::Validation(format!(
                "no attendance data for '{}'",
                class_name
            )));
        }

        Self::push_matrix(pool, store, class_name, &matrix, date, branch)
    }

    /// Push an already-built matrix (used when the caller rendered it first).
    pub fn push_matrix(
        pool: &mut DbPool,
        store: &dyn Archive,
        class_name: &str,
        matrix: &AttendanceMatrix,
        date: NaiveDate,
        branch: &str,
    ) -> AppResult<PushOutcome> {
        let content = matrix_to_csv_bytes(matrix)?;
        let path = archive::snapshot_path(class_name, date);
        let message = archive::snapshot_message(class_name);

        let outcome = archive::push(store, &path, &message, &content, branch)?;

        let _ = oplog(
            &pool.conn,
            "push",
            class_name,
            &format!(
                "Snapshot {} at {}",
                match outcome {
                    PushOutcome::Created => "created",
                    PushOutcome::Updated => "updated",
                },
                path
            ),
        );

        Ok(outcome)
    }
}
