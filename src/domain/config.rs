//! Run configuration.
//!
//! All fixed identifiers (profile prefix, extension id, filenames) and the
//! three filesystem roots live in one immutable [`ExtractConfig`] built once
//! at startup and passed into the pipeline. [`FileConfig`] is the optional
//! TOML overlay shape.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Directory-name prefix identifying a Chrome profile directory.
pub const PROFILE_PREFIX: &str = "Profile";
/// Subdirectory of a profile holding per-extension LevelDB stores.
pub const EXTENSION_SETTINGS_DIR: &str = "Local Extension Settings";
/// OneTab's Chrome extension id.
pub const EXTENSION_ID: &str = "chphlpgkkbolifaimnlloiipkdnihall";
/// Preference file name inside a profile directory.
pub const PREFERENCES_FILENAME: &str = "Preferences";
/// Store key under which OneTab persists its serialized session.
pub const STATE_KEY: &[u8] = b"state";
/// Error log file name inside the error log directory.
pub const ERROR_LOG_FILENAME: &str = "errors.log";

/// Path overrides from the optional TOML config file.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PathConfig {
    /// Chrome user-data root to scan.
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
    /// Directory receiving the `.json`/`.txt` artifacts.
    #[serde(default)]
    pub output_dir: Option<PathBuf>,
    /// Directory receiving `errors.log`.
    #[serde(default)]
    pub error_log_dir: Option<PathBuf>,
}

/// Complete file-config shape.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FileConfig {
    /// Path configuration.
    #[serde(default)]
    pub paths: PathConfig,
}

/// Immutable, fully resolved configuration for one extraction run.
#[derive(Debug, Clone)]
pub struct ExtractConfig {
    /// Root of the directory tree to scan for profiles.
    pub data_root: PathBuf,
    /// Directory the artifacts are written into (created if absent).
    pub output_dir: PathBuf,
    /// Directory the error log is written into (created if absent).
    pub error_log_dir: PathBuf,
    /// Extension id whose store is read.
    pub extension_id: String,
}

impl ExtractConfig {
    /// Username-derived defaults.
    #[must_use]
    pub fn for_username(username: &str) -> Self {
        let home = home_for(username);
        Self {
            data_root: home.join("Library/Application Support/Google/Chrome"),
            output_dir: home.join("Desktop/onetabs/outputs"),
            error_log_dir: home.join("Desktop/onetabs/errors"),
            extension_id: EXTENSION_ID.to_string(),
        }
    }

    /// Apply file-config overrides (weaker than CLI flags, stronger than defaults).
    #[must_use]
    pub fn with_file_config(mut self, file: &FileConfig) -> Self {
        if let Some(dir) = &file.paths.data_dir {
            self.data_root.clone_from(dir);
        }
        if let Some(dir) = &file.paths.output_dir {
            self.output_dir.clone_from(dir);
        }
        if let Some(dir) = &file.paths.error_log_dir {
            self.error_log_dir.clone_from(dir);
        }
        self
    }
}

/// Home directory for `username`: the real home when it belongs to the
/// current user, otherwise the conventional `/Users/<name>` layout.
fn home_for(username: &str) -> PathBuf {
    match dirs::home_dir() {
        Some(home) if home.file_name().is_some_and(|n| n == username) => home,
        _ => PathBuf::from(format!("/Users/{username}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn username_defaults() {
        let config = ExtractConfig::for_username("alice");
        assert_eq!(
            config.data_root,
            PathBuf::from("/Users/alice/Library/Application Support/Google/Chrome")
        );
        assert_eq!(config.extension_id, EXTENSION_ID);
    }

    #[test]
    fn file_config_overrides_defaults() {
        let file = FileConfig {
            paths: PathConfig {
                data_dir: Some(PathBuf::from("/tmp/chrome")),
                output_dir: None,
                error_log_dir: None,
            },
        };
        let config = ExtractConfig::for_username("alice").with_file_config(&file);
        assert_eq!(config.data_root, PathBuf::from("/tmp/chrome"));
        assert_eq!(
            config.output_dir,
            PathBuf::from("/Users/alice/Desktop/onetabs/outputs")
        );
    }
}
