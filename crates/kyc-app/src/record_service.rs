//! Saving, loading, and locating records.

use crate::error::{AppError, AppResult};
use crate::form::FormState;
use crate::opener::FolderOpener;
use kyc_store::Record;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Validate the form and append it to the store at `csv_path`.
pub fn save_record(csv_path: &str, form: &FormState) -> AppResult<Record> {
    let record = form.to_record();
    kyc_store::append(csv_path, &record)?;
    Ok(record)
}

/// Read every record in the store. A blank or missing path is empty.
pub fn load_records(csv_path: &str) -> AppResult<Vec<Record>> {
    let records = kyc_store::read_to_vec(csv_path)?;
    debug!(count = records.len(), "records loaded");
    Ok(records)
}

/// Directory holding the store file; `.` when the path names a bare file.
pub fn folder_for(csv_path: &str) -> AppResult<PathBuf> {
    let csv_path = csv_path.trim();
    if csv_path.is_empty() {
        return Err(AppError::NoPath);
    }
    let folder = Path::new(csv_path)
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    Ok(folder.to_path_buf())
}

/// Ask the host to show the store's folder. Returns the folder opened.
pub fn open_folder(csv_path: &str, opener: &dyn FolderOpener) -> AppResult<PathBuf> {
    let folder = folder_for(csv_path)?;
    debug!(folder = %folder.display(), "opening folder");
    match opener.open_path_in_file_explorer(&folder) {
        Ok(()) => Ok(folder),
        Err(source) => Err(AppError::OpenFolder { folder, source }),
    }
}
