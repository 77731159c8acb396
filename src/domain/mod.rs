//! Domain layer - core business logic and types.
//!
//! This layer contains pure domain models, configuration, and error types
//! without any external dependencies (store, IO, etc.).

pub mod config;
pub mod error;
pub mod models;

pub use config::{
    ExtractConfig, FileConfig, PathConfig, ERROR_LOG_FILENAME, EXTENSION_ID,
    EXTENSION_SETTINGS_DIR, PREFERENCES_FILENAME, PROFILE_PREFIX, STATE_KEY,
};
pub use error::{AppError, Result};
pub use models::{
    AccountEntry, Preferences, ProfileOutcome, ProfileReport, RunStats, Session, TabGroup, TabMeta,
};
