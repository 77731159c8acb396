//! Console output for run results.

use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Table};

use crate::domain::{ProfileReport, RunStats};

/// Formats a table listing of extracted profiles.
#[must_use]
pub fn format_reports_table(reports: &[ProfileReport]) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Profile", "Account", "Groups", "Tabs"]);

    for report in reports {
        let profile = report.profile_dir.file_name().map_or_else(
            || report.profile_dir.display().to_string(),
            |n| n.to_string_lossy().into_owned(),
        );

        table.add_row(vec![
            profile,
            report.account.clone(),
            report.group_count.to_string(),
            report.tab_count.to_string(),
        ]);
    }

    table.to_string()
}

/// Formats run statistics for display.
#[must_use]
pub fn format_stats(stats: &RunStats) -> String {
    format!(
        "{}\n  Profiles seen: {}\n  Extracted: {}\n  Skipped: {}\n  Failed: {}",
        "📊 Run summary".bold(),
        stats.profiles_seen.to_string().cyan(),
        stats.extracted.to_string().green(),
        stats.skipped.to_string().yellow(),
        stats.failed.to_string().red()
    )
}
