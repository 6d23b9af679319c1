use crate::core::matrix::build_matrix;
use crate::db::log::oplog;
use crate::db::pool::DbPool;
use crate::db::queries::load_events_for_class;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::ui::messages::warning;

use std::io;
use std::path::Path;

/// High-level logic for the `export` command.
pub struct ExportLogic;

impl ExportLogic {
    /// Export the dense matrix of one class.
    ///
    /// - `format`: "csv" | "json"
    /// - `file`: absolute path of the output file
    pub fn export(
        pool: &mut DbPool,
        class_name: &str,
        format: &ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::from(io::Error::other(format!(
                "Output file path must be absolute: {file}"
            ))));
        }

        ensure_writable(path, force)?;

        let events = load_events_for_class(pool, class_name)?;
        let matrix = build_matrix(&events);

        if matrix.is_empty() {
            warning(format!("No attendance data for '{}'.", class_name));
            return Ok(());
        }

        match format {
            ExportFormat::Csv => export_csv(&matrix, path)?,
            ExportFormat::Json => export_json(&matrix, path)?,
        }

        let _ = oplog(
            &pool.conn,
            "export",
            class_name,
            &format!("Matrix exported to {} ({})", file, format.as_str()),
        );

        Ok(())
    }
}
