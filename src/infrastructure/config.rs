//! Configuration file loading.
//!
//! An optional TOML file can override the username-derived default paths.

use std::fs;
use std::path::Path;

use crate::domain::{AppError, FileConfig, Result};

/// Loads a [`FileConfig`] from a TOML file.
///
/// # Errors
/// Returns an error if the file cannot be read or parsed.
pub fn load_config_from_file(path: &Path) -> Result<FileConfig> {
    let content = fs::read_to_string(path)
        .map_err(|e| AppError::io(format!("Failed to read config file: {}", path.display()), e))?;

    toml::from_str(&content).map_err(|e| AppError::Config {
        message: format!("Failed to parse config file: {e}"),
    })
}
