use crate::core::matrix::AttendanceMatrix;
use crate::errors::{AppError, AppResult};
use crate::export::notify_export_success;
use crate::ui::messages::info;
use serde_json::json;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

/// Render the matrix as CSV: header `roll_number,name,<date...>`, then one
/// row per student with 'P'/'A' cells. This is also the archive snapshot
/// format, so it lives apart from the file-writing wrappers below.
pub fn matrix_to_csv_bytes(matrix: &AttendanceMatrix) -> AppResult<Vec<u8>> {
    let mut wtr = csv::Writer::from_writer(Vec::new());

    let mut header = vec!["roll_number".to_string(), "name".to_string()];
    header.extend(
        matrix
            .dates()
            .iter()
            .map(|d| d.format("%Y-%m-%d").to_string()),
    );
    wtr.write_record(&header)
        .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;

    for row in matrix.rows() {
        let mut record = vec![row.roll_number.clone(), row.name.clone()];
        record.extend(row.marks.iter().map(|m| m.as_char().to_string()));
        wtr.write_record(&record)
            .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;
    }

    wtr.into_inner()
        .map_err(|e| AppError::Export(format!("CSV flush error: {e}")))
}

/// Export CSV to a file.
pub(crate) fn export_csv(matrix: &AttendanceMatrix, path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let bytes = matrix_to_csv_bytes(matrix)?;
    let mut file = File::create(path)?;
    file.write_all(&bytes)?;

    notify_export_success("CSV", path);
    Ok(())
}

/// Export JSON pretty-printed: one object per student, marks keyed by date.
pub(crate) fn export_json(matrix: &AttendanceMatrix, path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let rows: Vec<serde_json::Value> = matrix
        .rows()
        .iter()
        .map(|row| {
            let marks: serde_json::Map<String, serde_json::Value> = matrix
                .dates()
                .iter()
                .zip(row.marks.iter())
                .map(|(d, m)| {
                    (
                        d.format("%Y-%m-%d").to_string(),
                        json!(m.as_char().to_string()),
                    )
                })
                .collect();
            json!({
                "roll_number": row.roll_number,
                "name": row.name,
                "marks": marks,
            })
        })
        .collect();

    let json_data = serde_json::to_string_pretty(&rows)
        .map_err(|e| AppError::from(io::Error::other(format!("JSON serialization error: {e}"))))?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("JSON", path);
    Ok(())
}
