//! Domain-level error types for onetab-export.
//!
//! All errors are typed with `thiserror`. Fatal kinds (`Config`, `Traversal`)
//! abort the run; everything else is caught at the per-profile boundary,
//! written to the error log, and the scan continues.

use std::path::PathBuf;
use thiserror::Error;

/// Application-level errors.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration or environment error. Fatal, raised before any work starts.
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Directory traversal failed (root unreadable, entry cannot be statted). Fatal.
    #[error("Traversal error at {}: {source}", path.display())]
    Traversal {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Preferences file missing, unreadable, malformed, or with no accounts.
    #[error("Preferences error at {}: {message}", path.display())]
    Preferences { path: PathBuf, message: String },

    /// Embedded store exists but could not be opened or read.
    #[error("Store error at {}: {message}", path.display())]
    Store { path: PathBuf, message: String },

    /// The stored value's quoted-string escaping is malformed.
    #[error("Decode error: {message}")]
    Decode { message: String },

    /// JSON parsing failed.
    #[error("JSON parse error: {message}")]
    Parse {
        message: String,
        #[source]
        source: Option<serde_json::Error>,
    },

    /// Structurally valid input carrying unusable data (e.g. unsafe filename).
    #[error("Invalid data: {message}")]
    InvalidData { message: String },

    /// IO operation failed.
    #[error("IO error: {message}")]
    Io {
        message: String,
        #[source]
        source: Option<std::io::Error>,
    },
}

impl AppError {
    /// Create a store error from a LevelDB status.
    pub fn store(path: impl Into<PathBuf>, status: &rusty_leveldb::Status) -> Self {
        Self::Store {
            path: path.into(),
            message: status.to_string(),
        }
    }

    /// Create a preferences error with context.
    pub fn preferences(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Preferences {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a decode error.
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Create a JSON parse error.
    pub fn json_parse(err: serde_json::Error) -> Self {
        Self::Parse {
            message: err.to_string(),
            source: Some(err),
        }
    }

    /// Create an IO error with context.
    pub fn io(message: impl Into<String>, err: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source: Some(err),
        }
    }
}

/// Result type alias using `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
