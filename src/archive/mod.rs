//! Path-addressed snapshot archive with optimistic concurrency.
//!
//! The archive stores one file per (class, day) under `records/`. Updates
//! are keyed by the version token returned from the last read; a stale token
//! is rejected by the backend and surfaces as an error the caller may retry.

pub mod local;

use crate::errors::AppResult;
use chrono::NaiveDate;

pub use local::LocalArchive;

/// Contents plus the version token to present on the next update.
#[derive(Debug, Clone)]
pub struct ArchiveFile {
    pub content: Vec<u8>,
    pub version: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PushOutcome {
    Created,
    Updated,
}

/// Capability interface over the file host.
pub trait Archive {
    /// Fetch contents and version token; `Ok(None)` when the path is absent.
    fn get_contents(&self, path: &str, branch: &str) -> AppResult<Option<ArchiveFile>>;

    /// Create a new file. Fails if the path already exists.
    fn create_file(&self, path: &str, message: &str, content: &[u8], branch: &str)
    -> AppResult<()>;

    /// Replace an existing file, keyed by the version token from the last
    /// read. A token that no longer matches is rejected.
    fn update_file(
        &self,
        path: &str,
        message: &str,
        content: &[u8],
        version: &str,
        branch: &str,
    ) -> AppResult<()>;
}

/// Upsert-or-create: read-modify-write against whatever is at `path`.
///
/// No locking — when two pushes race for one path the second update carries
/// a stale token, the backend rejects it, and the error reaches the caller
/// unretried.
pub fn push(
    archive: &dyn Archive,
    path: &str,
    message: &str,
    content: &[u8],
    branch: &str,
) -> AppResult<PushOutcome> {
    match archive.get_contents(path, branch)? {
        Some(existing) => {
            archive.update_file(path, message, content, &existing.version, branch)?;
            Ok(PushOutcome::Updated)
        }
        None => {
            archive.create_file(path, message, content, branch)?;
            Ok(PushOutcome::Created)
        }
    }
}

/// Archive path for one class on one day: `records/attendance_{class}_{YYYYMMDD}.csv`.
pub fn snapshot_path(class_name: &str, date: NaiveDate) -> String {
    format!(
        "records/attendance_{}_{}.csv",
        class_name,
        date.format("%Y%m%d")
    )
}

/// Fixed commit message used for every snapshot push of a class.
pub fn snapshot_message(class_name: &str) -> String {
    format!("Update attendance for {}", class_name)
}
