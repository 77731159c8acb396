//! Infrastructure layer - external adapters (store, filesystem).
//!
//! This layer handles all I/O operations and external dependencies.

pub mod config;
pub mod error_log;
pub mod output;
pub mod preferences;
pub mod profile_paths;
pub mod record_store;

pub use config::load_config_from_file;
pub use error_log::ErrorLog;
pub use output::OutputWriter;
pub use preferences::read_account_email;
pub use profile_paths::scan_profiles;
pub use record_store::RecordStore;
