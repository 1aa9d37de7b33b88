// src/export/logic.rs

use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::{ensure_not_source, ensure_writable};
use crate::export::json_csv::{export_csv, export_json};
use crate::models::shift::{CSV_HEADER, PUBLIC_COLUMNS, ShiftRecord};
use crate::ui::messages::warning;
use std::path::Path;

/// What to export and where.
#[derive(Debug, Clone)]
pub struct ExportRequest<'a> {
    pub format: ExportFormat,
    pub file: &'a Path,
    /// Only the columns that are safe to publish.
    pub public: bool,
    pub force: bool,
}

/// High level export entry point.
pub struct ExportLogic;

impl ExportLogic {
    /// Export the given (already filtered) records.
    ///
    /// `public` restricts the output to the sanitized columns and is only
    /// available as CSV. Records are written sorted by date, ties kept in
    /// file order. Returns the number of exported rows.
    pub fn export(
        records: &[&ShiftRecord],
        request: &ExportRequest<'_>,
        source: &Path,
    ) -> AppResult<usize> {
        let path = request.file;

        if request.public && request.format != ExportFormat::Csv {
            return Err(AppError::Export(format!(
                "public export is only available as csv, not {}",
                request.format.as_str()
            )));
        }

        ensure_not_source(path, source)?;
        ensure_writable(path, request.force)?;

        if records.is_empty() {
            warning("No shifts found for the selected view; writing an empty export.");
        }

        let mut sorted = records.to_vec();
        sorted.sort_by(|a, b| a.date().cmp(b.date()));

        match (request.format, request.public) {
            (ExportFormat::Csv, true) => export_csv(&sorted, &PUBLIC_COLUMNS, path)?,
            (ExportFormat::Csv, false) => export_csv(&sorted, &CSV_HEADER, path)?,
            (ExportFormat::Json, _) => export_json(&sorted, path)?,
        }

        Ok(sorted.len())
    }
}
