//! Local storage for generated report artifacts.
//!
//! Artifacts are written to a temporary sibling first and renamed into place,
//! so a failed write never leaves a truncated report behind or touches another
//! employee's file.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{ReportError, ReportResult};

/// A directory holding generated reports.
#[derive(Debug, Clone)]
pub struct ReportStore {
    root: PathBuf,
}

impl ReportStore {
    /// Creates a store rooted at `root`. The directory is created on first write.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The output directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Writes an artifact and returns its full path.
    pub fn write(&self, filename: &str, contents: &[u8]) -> ReportResult<PathBuf> {
        validate_file_name(filename)?;

        let target = self.root.join(filename);
        let write_error = |e: std::io::Error| ReportError::Write {
            path: target.display().to_string(),
            message: e.to_string(),
        };

        fs::create_dir_all(&self.root).map_err(write_error)?;

        let staging = self.root.join(format!(".{filename}.partial"));
        fs::write(&staging, contents).map_err(write_error)?;
        if let Err(e) = fs::rename(&staging, &target) {
            let _ = fs::remove_file(&staging);
            return Err(write_error(e));
        }

        debug!(path = %target.display(), bytes = contents.len(), "Wrote report");
        Ok(target)
    }

    /// Reads back a previously written artifact.
    pub fn read(&self, filename: &str) -> ReportResult<Vec<u8>> {
        validate_file_name(filename)?;

        let path = self.root.join(filename);
        fs::read(&path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => ReportError::ReportNotFound {
                filename: filename.to_string(),
            },
            _ => ReportError::ReportRead {
                path: path.display().to_string(),
                message: e.to_string(),
            },
        })
    }
}

/// Rejects names that are empty, hidden, or could leave the store directory.
///
/// # Example
///
/// ```
/// use attendance_report::storage::validate_file_name;
///
/// assert!(validate_file_name("1001_ENERO_2024.txt").is_ok());
/// assert!(validate_file_name("../secret").is_err());
/// ```
pub fn validate_file_name(filename: &str) -> ReportResult<()> {
    let invalid = filename.is_empty()
        || filename.starts_with('.')
        || filename.contains(['/', '\\', '\0'])
        || filename.contains("..");
    if invalid {
        return Err(ReportError::InvalidFileName {
            filename: filename.to_string(),
        });
    }
    Ok(())
}
