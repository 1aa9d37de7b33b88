// src/export/fs_utils.rs

use crate::errors::{AppError, AppResult};
use std::path::Path;

/// Check that an export target can be written.
///
/// - missing file → Ok
/// - existing file with `force` → Ok
/// - existing file without `force` → error, nothing is overwritten
pub(crate) fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if path.is_dir() {
        return Err(AppError::Export(format!(
            "'{}' is a directory",
            path.display()
        )));
    }
    if !path.exists() || force {
        return Ok(());
    }
    Err(AppError::Export(format!(
        "'{}' already exists (use --force to overwrite)",
        path.display()
    )))
}

/// Refuse to write over the data file an export was read from.
pub(crate) fn ensure_not_source(target: &Path, source: &Path) -> AppResult<()> {
    let same = match (target.canonicalize(), source.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => target == source,
    };
    if same {
        return Err(AppError::Export(format!(
            "refusing to overwrite the data file {}",
            source.display()
        )));
    }
    Ok(())
}
