//! Append-only error log file.
//!
//! Per-profile failures are appended as timestamped lines to `errors.log`
//! inside the error log directory. Failing to create or open the log is
//! fatal for the run; a failed append mid-run is only warned about.

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::Utc;

use crate::domain::{AppError, Result, ERROR_LOG_FILENAME};

/// Handle to the run's error log file.
pub struct ErrorLog {
    file: File,
    path: PathBuf,
}

impl ErrorLog {
    /// Creates the log directory if needed and opens the log for appending.
    ///
    /// # Errors
    /// Returns an `Io` error if the directory or file cannot be created.
    pub fn open(dir: &Path) -> Result<Self> {
        fs::create_dir_all(dir)
            .map_err(|e| AppError::io(format!("cannot create log directory {}", dir.display()), e))?;

        let path = dir.join(ERROR_LOG_FILENAME);
        let file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&path)
            .map_err(|e| AppError::io(format!("cannot open error log {}", path.display()), e))?;

        Ok(Self { file, path })
    }

    /// Appends one timestamped error line with its context.
    pub fn record(&mut self, context: &str, err: &AppError) {
        let line = format!(
            "{} error: {context}: {err}\n",
            Utc::now().format("%Y-%m-%d %H:%M:%S")
        );
        if let Err(e) = self.file.write_all(line.as_bytes()) {
            tracing::warn!(log = %self.path.display(), "Failed to append to error log: {e}");
        }
    }
}
