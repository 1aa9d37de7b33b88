// src/export/json_csv.rs

use crate::errors::{AppError, AppResult};
use crate::export::notify_export_success;
use crate::export::model::{ShiftExport, export_rows};
use crate::models::shift::ShiftRecord;
use crate::ui::messages::info;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Export JSON pretty-printed.
pub(crate) fn export_json(records: &[&ShiftRecord], path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let items: Vec<ShiftExport> = records.iter().map(|r| ShiftExport::from(*r)).collect();
    let json_data = serde_json::to_string_pretty(&items)
        .map_err(|e| AppError::Export(format!("JSON serialization error: {e}")))?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("JSON", path, items.len());
    Ok(())
}

/// Export CSV with the given columns as header.
pub(crate) fn export_csv(records: &[&ShiftRecord], columns: &[&str], path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let mut wtr = csv::Writer::from_path(path)
        .map_err(|e| AppError::Export(format!("CSV open error: {e}")))?;

    wtr.write_record(columns)
        .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;
    for row in export_rows(records, columns) {
        wtr.write_record(&row)
            .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;
    }

    wtr.flush()
        .map_err(|e| AppError::Export(format!("CSV flush error: {e}")))?;

    notify_export_success("CSV", path, records.len());
    Ok(())
}
