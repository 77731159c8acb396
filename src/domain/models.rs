//! Domain models for OneTab session data.
//!
//! These models mirror the JSON shapes the extension and the browser write to
//! disk. Order of groups and of tabs within a group reflects the original save
//! order and is preserved everywhere.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// A single saved tab inside a tab group.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct TabMeta {
    /// Unique identifier for this tab entry.
    #[serde(default)]
    pub id: String,
    /// Page title at save time.
    #[serde(default)]
    pub title: String,
    /// Page URL.
    #[serde(default)]
    pub url: String,
}

/// A saved collection of tabs with a creation time.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TabGroup {
    /// Unique identifier for this group.
    #[serde(default)]
    pub id: String,
    /// Creation timestamp (milliseconds since epoch, as stored).
    #[serde(default)]
    pub create_date: i64,
    /// Tabs in this group, in save order.
    #[serde(default)]
    pub tabs_meta: Vec<TabMeta>,
}

/// The decoded `"state"` record: an ordered list of tab groups.
///
/// Missing array fields degrade to empty lists so that schema additions in
/// newer extension versions do not break extraction. Unknown fields are
/// ignored.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// Tab groups in save order.
    #[serde(default)]
    pub tab_groups: Vec<TabGroup>,
}

impl Session {
    /// Total number of tabs across all groups.
    #[must_use]
    pub fn tab_count(&self) -> usize {
        self.tab_groups.iter().map(|g| g.tabs_meta.len()).sum()
    }

    /// Number of tab groups.
    #[must_use]
    pub const fn group_count(&self) -> usize {
        self.tab_groups.len()
    }
}

/// One account entry from a profile's `Preferences` file.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AccountEntry {
    /// Account email address.
    #[serde(default)]
    pub email: String,
}

/// The subset of Chrome's `Preferences` file the pipeline reads.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Preferences {
    /// Signed-in accounts, in browser order. Only the first entry is used.
    #[serde(default)]
    pub account_info: Vec<AccountEntry>,
}

impl Preferences {
    /// The first account's email, if any account is present.
    #[must_use]
    pub fn primary_email(&self) -> Option<&str> {
        self.account_info.first().map(|a| a.email.as_str())
    }
}

/// Result of processing one profile directory.
#[derive(Debug)]
pub enum ProfileOutcome {
    /// Artifacts were written.
    Extracted(ProfileReport),
    /// The profile has no embedded store for the extension. Not an error.
    NoStore,
    /// The store exists but holds no `"state"` record. Not an error.
    NoRecord,
}

/// Details of one successful extraction.
#[derive(Debug)]
pub struct ProfileReport {
    /// Profile directory that was processed.
    pub profile_dir: PathBuf,
    /// Account email used as the artifact filename stem.
    pub account: String,
    /// Number of tab groups in the session.
    pub group_count: usize,
    /// Total number of tabs in the session.
    pub tab_count: usize,
    /// Path of the written `.json` artifact.
    pub json_path: PathBuf,
    /// Path of the written `.txt` artifact.
    pub txt_path: PathBuf,
}

/// Summary statistics for a full run.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunStats {
    /// Candidate profile directories visited.
    pub profiles_seen: usize,
    /// Profiles for which both artifacts were written.
    pub extracted: usize,
    /// Profiles skipped (no store, or no record in the store).
    pub skipped: usize,
    /// Profiles that failed and were written to the error log.
    pub failed: usize,
}
