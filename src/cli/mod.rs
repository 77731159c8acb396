//! CLI interface using clap.

use std::path::PathBuf;

use clap::Parser;

use crate::domain::{ExtractConfig, FileConfig};

/// OneTab Export - extract OneTab saved sessions from Chrome profiles.
///
/// Scans a user's Chrome data directory for profiles, reads the OneTab
/// extension store of each, and writes one `.json` and one `.txt` artifact
/// per signed-in profile.
#[derive(Parser, Debug)]
#[command(name = "onetab-export")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Username whose Chrome data is scanned.
    #[arg(short, long)]
    pub username: String,

    /// Override the Chrome user-data root to scan.
    #[arg(long, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Override the artifact output directory.
    #[arg(long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Override the error log directory.
    #[arg(long, value_name = "DIR")]
    pub error_log_dir: Option<PathBuf>,

    /// TOML config file with [paths] overrides.
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (use multiple times for more verbosity).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Resolves the final run configuration.
    ///
    /// Precedence: CLI flags over config-file values over username-derived
    /// defaults.
    #[must_use]
    pub fn resolve_config(&self, file: Option<&FileConfig>) -> ExtractConfig {
        let mut config = ExtractConfig::for_username(&self.username);
        if let Some(file) = file {
            config = config.with_file_config(file);
        }
        if let Some(dir) = &self.data_dir {
            config.data_root.clone_from(dir);
        }
        if let Some(dir) = &self.output_dir {
            config.output_dir.clone_from(dir);
        }
        if let Some(dir) = &self.error_log_dir {
            config.error_log_dir.clone_from(dir);
        }
        config
    }
}
