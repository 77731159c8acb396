//! Preference file reading.
//!
//! Recovers the signed-in account identity from a profile's `Preferences`
//! JSON file. Only the first account entry is used.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::domain::{AppError, Preferences, Result, PREFERENCES_FILENAME};

/// Reads the first account email from a profile directory's preference file.
///
/// # Errors
/// Returns a `Preferences` error if the file is absent, unreadable, not
/// valid JSON, or lists no accounts.
pub fn read_account_email(profile_dir: &Path) -> Result<String> {
    let path = profile_dir.join(PREFERENCES_FILENAME);

    let file =
        File::open(&path).map_err(|e| AppError::preferences(&path, format!("cannot open: {e}")))?;

    let prefs: Preferences = serde_json::from_reader(BufReader::new(file))
        .map_err(|e| AppError::preferences(&path, format!("invalid JSON: {e}")))?;

    prefs
        .primary_email()
        .map(ToString::to_string)
        .ok_or_else(|| AppError::preferences(&path, "no account entries"))
}
