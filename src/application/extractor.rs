//! Session extraction service.
//!
//! Walks the user-data tree and runs the per-profile pipeline: preference
//! lookup, store open, record fetch, decode, render, write. Per-profile
//! failures go to the error log and the scan continues; only traversal
//! failures abort the run.

use std::path::Path;

use crate::domain::{
    ExtractConfig, ProfileOutcome, ProfileReport, Result, RunStats, EXTENSION_SETTINGS_DIR,
    STATE_KEY,
};
use crate::infrastructure::{
    read_account_email, scan_profiles, ErrorLog, OutputWriter, RecordStore,
};

use super::decoder::{parse_session, unquote};
use super::renderer::render_text;

/// Runs the full extraction over every profile under the configured root.
///
/// # Errors
/// Returns a `Traversal` error if the directory walk itself fails. All other
/// errors are recorded per profile and do not propagate.
pub fn run_extraction(
    config: &ExtractConfig,
    error_log: &mut ErrorLog,
) -> Result<(Vec<ProfileReport>, RunStats)> {
    let mut reports = Vec::new();
    let mut stats = RunStats::default();

    tracing::info!(root = %config.data_root.display(), "Scanning for profiles");

    scan_profiles(&config.data_root, |profile_dir| {
        stats.profiles_seen += 1;
        match extract_profile(config, profile_dir) {
            Ok(ProfileOutcome::Extracted(report)) => {
                stats.extracted += 1;
                reports.push(report);
            }
            Ok(ProfileOutcome::NoStore) => {
                stats.skipped += 1;
                tracing::debug!(profile = %profile_dir.display(), "No extension store, skipping");
            }
            Ok(ProfileOutcome::NoRecord) => {
                stats.skipped += 1;
                tracing::debug!(profile = %profile_dir.display(), "No state record, skipping");
            }
            Err(err) => {
                stats.failed += 1;
                tracing::warn!(profile = %profile_dir.display(), "Profile failed: {err}");
                error_log.record(&profile_dir.display().to_string(), &err);
            }
        }
    })?;

    tracing::info!(
        seen = stats.profiles_seen,
        extracted = stats.extracted,
        skipped = stats.skipped,
        failed = stats.failed,
        "Scan complete"
    );

    Ok((reports, stats))
}

/// Runs the pipeline for a single profile directory.
fn extract_profile(config: &ExtractConfig, profile_dir: &Path) -> Result<ProfileOutcome> {
    let account = read_account_email(profile_dir)?;

    let store_path = profile_dir
        .join(EXTENSION_SETTINGS_DIR)
        .join(&config.extension_id);

    let Some(mut store) = RecordStore::open_if_exists(&store_path)? else {
        return Ok(ProfileOutcome::NoStore);
    };

    let Some(raw) = store.get(STATE_KEY) else {
        // Surface store corruption even when the key is simply absent.
        let present = store.entries()?.len();
        tracing::debug!(
            profile = %profile_dir.display(),
            keys = present,
            "Store has no state record"
        );
        return Ok(ProfileOutcome::NoRecord);
    };
    drop(store);

    let json_text = unquote(&raw)?;
    let session = parse_session(&json_text)?;

    let writer = OutputWriter::create(&config.output_dir)?;
    let (json_path, txt_path) =
        writer.write_artifacts(&account, &json_text, &render_text(&session))?;

    Ok(ProfileOutcome::Extracted(ProfileReport {
        profile_dir: profile_dir.to_path_buf(),
        account,
        group_count: session.group_count(),
        tab_count: session.tab_count(),
        json_path,
        txt_path,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    use rusty_leveldb::{Options, DB};
    use tempfile::tempdir;

    use crate::domain::{ERROR_LOG_FILENAME, EXTENSION_ID, PREFERENCES_FILENAME};

    const STATE_VALUE: &[u8] = br#""{\"tabGroups\":[{\"id\":\"g1\",\"createDate\":1,\"tabsMeta\":[{\"id\":\"t1\",\"title\":\"Example\",\"url\":\"http://e.com\"}]}]}""#;

    struct Fixture {
        _tmp: tempfile::TempDir,
        root: PathBuf,
        config: ExtractConfig,
        log_dir: PathBuf,
    }

    impl Fixture {
        fn new() -> Self {
            let tmp = tempdir().unwrap();
            let root = tmp.path().join("Chrome");
            fs::create_dir_all(&root).unwrap();
            let config = ExtractConfig {
                data_root: root.clone(),
                output_dir: tmp.path().join("outputs"),
                error_log_dir: tmp.path().join("errors"),
                extension_id: EXTENSION_ID.to_string(),
            };
            let log_dir = config.error_log_dir.clone();
            Self {
                _tmp: tmp,
                root,
                config,
                log_dir,
            }
        }

        fn add_profile(&self, name: &str, prefs: &str) -> PathBuf {
            let dir = self.root.join(name);
            fs::create_dir_all(&dir).unwrap();
            fs::write(dir.join(PREFERENCES_FILENAME), prefs).unwrap();
            dir
        }

        fn add_store(&self, profile_dir: &Path, value: &[u8]) {
            let store_path = profile_dir.join(EXTENSION_SETTINGS_DIR).join(EXTENSION_ID);
            fs::create_dir_all(&store_path).unwrap();
            let mut db = DB::open(&store_path, Options::default()).unwrap();
            db.put(STATE_KEY, value).unwrap();
            db.flush().unwrap();
        }

        fn run(&self) -> (Vec<ProfileReport>, RunStats) {
            let mut log = ErrorLog::open(&self.log_dir).unwrap();
            run_extraction(&self.config, &mut log).unwrap()
        }

        fn log_content(&self) -> String {
            fs::read_to_string(self.log_dir.join(ERROR_LOG_FILENAME)).unwrap_or_default()
        }
    }

    #[test]
    fn end_to_end_scenario() {
        let fx = Fixture::new();
        let profile = fx.add_profile("Profile 1", r#"{"account_info":[{"email":"a@x.com"}]}"#);
        fx.add_store(&profile, STATE_VALUE);

        let (reports, stats) = fx.run();

        assert_eq!(stats.extracted, 1);
        assert_eq!(stats.failed, 0);
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].account, "a@x.com");
        assert_eq!(reports[0].group_count, 1);
        assert_eq!(reports[0].tab_count, 1);

        let txt = fs::read_to_string(fx.config.output_dir.join("a@x.com.txt")).unwrap();
        assert_eq!(txt, "http://e.com | Example\n\n");

        let json = fs::read_to_string(fx.config.output_dir.join("a@x.com.json")).unwrap();
        assert_eq!(
            json,
            r#"{"tabGroups":[{"id":"g1","createDate":1,"tabsMeta":[{"id":"t1","title":"Example","url":"http://e.com"}]}]}"#
        );
        assert!(fx.log_content().is_empty());
    }

    #[test]
    fn absent_store_is_a_silent_skip() {
        let fx = Fixture::new();
        fx.add_profile("Profile 1", r#"{"account_info":[{"email":"a@x.com"}]}"#);

        let (reports, stats) = fx.run();

        assert!(reports.is_empty());
        assert_eq!(stats.skipped, 1);
        assert_eq!(stats.failed, 0);
        assert!(!fx.config.output_dir.join("a@x.com.txt").exists());
        assert!(fx.log_content().is_empty());
    }

    #[test]
    fn store_without_state_record_is_skipped() {
        let fx = Fixture::new();
        let profile = fx.add_profile("Profile 1", r#"{"account_info":[{"email":"a@x.com"}]}"#);

        let store_path = profile.join(EXTENSION_SETTINGS_DIR).join(EXTENSION_ID);
        fs::create_dir_all(&store_path).unwrap();
        let mut db = DB::open(&store_path, Options::default()).unwrap();
        db.put(b"settings", b"{}").unwrap();
        db.flush().unwrap();
        drop(db);

        let (reports, stats) = fx.run();

        assert!(reports.is_empty());
        assert_eq!(stats.skipped, 1);
        assert!(!fx.config.output_dir.join("a@x.com.json").exists());
    }

    #[test]
    fn malformed_escaping_does_not_abort_siblings() {
        let fx = Fixture::new();
        let bad = fx.add_profile("Profile 1", r#"{"account_info":[{"email":"bad@x.com"}]}"#);
        fx.add_store(&bad, br#""{\"tabGroups\""#);
        let good = fx.add_profile("Profile 2", r#"{"account_info":[{"email":"a@x.com"}]}"#);
        fx.add_store(&good, STATE_VALUE);

        let (reports, stats) = fx.run();

        assert_eq!(stats.extracted, 1);
        assert_eq!(stats.failed, 1);
        assert_eq!(reports[0].account, "a@x.com");
        assert!(!fx.config.output_dir.join("bad@x.com.json").exists());
        assert!(fx.config.output_dir.join("a@x.com.json").exists());

        let log = fx.log_content();
        assert_eq!(log.lines().count(), 1);
        assert!(log.contains("Decode error"));
        assert!(log.contains("Profile 1"));
    }

    #[test]
    fn empty_account_list_is_logged_and_skipped() {
        let fx = Fixture::new();
        let profile = fx.add_profile("Profile 1", r#"{"account_info":[]}"#);
        fx.add_store(&profile, STATE_VALUE);

        let (reports, stats) = fx.run();

        assert!(reports.is_empty());
        assert_eq!(stats.failed, 1);
        assert!(fx.log_content().contains("Preferences error"));
    }

    #[test]
    fn first_account_email_names_the_artifacts() {
        let fx = Fixture::new();
        let profile = fx.add_profile(
            "Profile 1",
            r#"{"account_info":[{"email":"first@x.com"},{"email":"second@x.com"}]}"#,
        );
        fx.add_store(&profile, STATE_VALUE);

        fx.run();

        assert!(fx.config.output_dir.join("first@x.com.json").exists());
        assert!(!fx.config.output_dir.join("second@x.com.json").exists());
    }

    #[test]
    fn nested_profile_under_non_matching_directory_is_processed() {
        let fx = Fixture::new();
        let nested = fx.root.join("Snapshots/Profile 7");
        fs::create_dir_all(&nested).unwrap();
        fs::write(
            nested.join(PREFERENCES_FILENAME),
            r#"{"account_info":[{"email":"nested@x.com"}]}"#,
        )
        .unwrap();
        fx.add_store(&nested, STATE_VALUE);

        let (reports, stats) = fx.run();

        assert_eq!(stats.extracted, 1);
        assert_eq!(reports[0].account, "nested@x.com");
    }

    #[test]
    fn rerun_is_byte_identical() {
        let fx = Fixture::new();
        let profile = fx.add_profile("Profile 1", r#"{"account_info":[{"email":"a@x.com"}]}"#);
        fx.add_store(&profile, STATE_VALUE);

        fx.run();
        let json_first = fs::read(fx.config.output_dir.join("a@x.com.json")).unwrap();
        let txt_first = fs::read(fx.config.output_dir.join("a@x.com.txt")).unwrap();

        fx.run();
        assert_eq!(
            fs::read(fx.config.output_dir.join("a@x.com.json")).unwrap(),
            json_first
        );
        assert_eq!(
            fs::read(fx.config.output_dir.join("a@x.com.txt")).unwrap(),
            txt_first
        );
    }

    #[test]
    fn missing_root_is_fatal() {
        let fx = Fixture::new();
        let config = ExtractConfig {
            data_root: fx.root.join("absent"),
            ..fx.config.clone()
        };
        let mut log = ErrorLog::open(&fx.log_dir).unwrap();
        assert!(run_extraction(&config, &mut log).is_err());
    }
}
