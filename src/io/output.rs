//! Output directory preparation

use std::path::Path;

use crate::io::error::{Result, SpliceError};

/// State of the output directory before the run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectoryStatus {
    /// Directory and any missing parents were created
    Created,
    /// Path already existed and was left untouched
    AlreadyExisted,
}

/// Make sure the output directory exists, creating parents as needed
///
/// # Errors
///
/// Returns [`SpliceError::OutputDirectory`] if the directory cannot be created
pub fn ensure_output_directory(path: &Path) -> Result<DirectoryStatus> {
    if path.exists() {
        return Ok(DirectoryStatus::AlreadyExisted);
    }

    std::fs::create_dir_all(path).map_err(|e| SpliceError::OutputDirectory {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(DirectoryStatus::Created)
}
