//! Artifact writing.
//!
//! Writes the verbatim recovered JSON and the rendered text into the output
//! directory, named after the profile's account email.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::{AppError, Result};

/// Writer bound to one output directory.
pub struct OutputWriter {
    dir: PathBuf,
}

impl OutputWriter {
    /// Creates the output directory if absent and returns a writer for it.
    ///
    /// # Errors
    /// Returns an `Io` error if the directory cannot be created.
    pub fn create(dir: &Path) -> Result<Self> {
        fs::create_dir_all(dir).map_err(|e| {
            AppError::io(format!("cannot create output directory {}", dir.display()), e)
        })?;
        Ok(Self {
            dir: dir.to_path_buf(),
        })
    }

    /// Writes `<stem>.json` and `<stem>.txt`, returning both paths.
    ///
    /// The stem is the account email and is used verbatim; stems that would
    /// escape the output directory are rejected.
    ///
    /// # Errors
    /// Returns `InvalidData` for an unsafe stem, or an `Io` error if a file
    /// cannot be written.
    pub fn write_artifacts(
        &self,
        stem: &str,
        json_text: &str,
        rendered_text: &str,
    ) -> Result<(PathBuf, PathBuf)> {
        check_stem(stem)?;

        let json_path = self.dir.join(format!("{stem}.json"));
        fs::write(&json_path, json_text)
            .map_err(|e| AppError::io(format!("cannot write {}", json_path.display()), e))?;

        let txt_path = self.dir.join(format!("{stem}.txt"));
        fs::write(&txt_path, rendered_text)
            .map_err(|e| AppError::io(format!("cannot write {}", txt_path.display()), e))?;

        tracing::info!(json = %json_path.display(), txt = %txt_path.display(), "Wrote artifacts");

        Ok((json_path, txt_path))
    }
}

/// Rejects stems that contain path separators or NUL.
fn check_stem(stem: &str) -> Result<()> {
    if stem.is_empty() || stem.contains(['/', '\\', '\0']) {
        return Err(AppError::InvalidData {
            message: format!("account email {stem:?} is not usable as a filename"),
        });
    }
    Ok(())
}
