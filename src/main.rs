//! OneTab Export - extract OneTab saved sessions from Chrome profiles.
//!
//! One-shot pipeline: scan a user's Chrome data tree for profile
//! directories, read each profile's `Preferences` for the signed-in account,
//! open the OneTab extension's LevelDB store, decode the `"state"` record,
//! and write `<email>.json` plus `<email>.txt` artifacts. Per-profile
//! failures are appended to `errors.log`; only traversal and setup failures
//! abort the run.

mod application;
mod cli;
mod domain;
mod infrastructure;

use clap::Parser;
use colored::Colorize;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use application::{format_reports_table, format_stats, run_extraction};
use cli::Cli;
use domain::AppError;
use infrastructure::{load_config_from_file, ErrorLog};

fn main() {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("{} {}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

/// Main application logic.
fn run(cli: Cli) -> domain::Result<()> {
    if cli.username.trim().is_empty() {
        return Err(AppError::Config {
            message: "username is required".into(),
        });
    }

    let file_config = match &cli.config {
        Some(path) => Some(load_config_from_file(path)?),
        None => None,
    };
    let config = cli.resolve_config(file_config.as_ref());

    // The error channel must be available before any profile work starts.
    let mut error_log = ErrorLog::open(&config.error_log_dir)?;

    match run_extraction(&config, &mut error_log) {
        Ok((reports, stats)) => {
            if reports.is_empty() {
                println!("No sessions extracted.");
            } else {
                println!("{}", format_reports_table(&reports));
                println!();
                for report in &reports {
                    println!(
                        "{} {} → {}, {}",
                        "✓".green(),
                        report.account.cyan(),
                        report.json_path.display(),
                        report.txt_path.display()
                    );
                }
                println!();
            }
            println!("{}", format_stats(&stats));
            Ok(())
        }
        Err(err) => {
            // Fatal errors are logged too before the non-zero exit.
            error_log.record(&config.data_root.display().to_string(), &err);
            Err(err)
        }
    }
}

/// Setup tracing/logging based on verbosity level.
fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).without_time())
        .with(filter)
        .init();
}
