//! Append-only CSV data file.

use crate::errors::{AppError, AppResult};
use crate::models::shift::{CSV_HEADER, ShiftRecord};
use std::fs::{self, File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::Path;

/// Create the data file with the full header when it is missing or empty.
/// Returns true when a file was written.
pub fn ensure_data_file(path: &Path) -> AppResult<bool> {
    if path.exists() && fs::metadata(path)?.len() > 0 {
        return Ok(false);
    }
    if let Some(dir) = path.parent()
        && !dir.as_os_str().is_empty()
    {
        fs::create_dir_all(dir)?;
    }
    let mut wtr = csv::Writer::from_path(path)?;
    wtr.write_record(CSV_HEADER)?;
    wtr.flush()?;
    Ok(true)
}

/// Header of an existing data file.
pub fn read_header(path: &Path) -> AppResult<Vec<String>> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .from_path(path)?;
    Ok(rdr.headers()?.iter().map(str::to_string).collect())
}

/// Append one record, laid out in the column order of the existing file.
pub fn append_record(path: &Path, record: &ShiftRecord) -> AppResult<()> {
    ensure_data_file(path)?;
    let header = read_header(path)?;
    if header.iter().all(|h| h != "date") {
        return Err(AppError::Other(format!(
            "{} has no 'date' column",
            path.display()
        )));
    }

    let mut file = OpenOptions::new().read(true).append(true).open(path)?;
    if !ends_with_newline(&mut file)? {
        file.write_all(b"\n")?;
    }

    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(file);
    wtr.write_record(header.iter().map(|h| record.column(h)))?;
    wtr.flush()?;

    log::info!("appended shift {} to {}", record.date(), path.display());
    Ok(())
}

fn ends_with_newline(file: &mut File) -> AppResult<bool> {
    let len = file.metadata()?.len();
    if len == 0 {
        return Ok(true);
    }
    file.seek(SeekFrom::Start(len - 1))?;
    let mut last = [0u8; 1];
    file.read_exact(&mut last)?;
    Ok(last[0] == b'\n')
}

/// Rewrite a whole table. The new content goes to a sibling temp file that
/// is renamed over the target.
pub fn write_table(path: &Path, header: &[String], rows: &[Vec<String>]) -> AppResult<()> {
    let tmp = path.with_extension("csv.tmp");
    {
        let mut wtr = csv::WriterBuilder::new()
            .terminator(csv::Terminator::Any(b'\n'))
            .from_path(&tmp)?;
        wtr.write_record(header)?;
        for row in rows {
            wtr.write_record(row)?;
        }
        wtr.flush()?;
    }
    fs::rename(&tmp, path)?;
    Ok(())
}
