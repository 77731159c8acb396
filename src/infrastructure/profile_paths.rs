//! Profile directory discovery.
//!
//! Walks the Chrome user-data tree and reports every directory whose name
//! starts with the profile prefix. Non-matching directories are still
//! descended into, since profile directories can sit at any depth.

use std::fs;
use std::path::Path;

use crate::domain::{AppError, Result, PROFILE_PREFIX};

/// Walks `root` recursively and invokes `visit` for each profile directory.
///
/// The root itself is a candidate. Matching directories are also descended
/// into, so a profile nested below another profile is reported too. Any
/// traversal failure (unreadable directory, unstat-able entry) is fatal for
/// the whole scan.
///
/// # Errors
/// Returns a `Traversal` error if a directory cannot be read or an entry's
/// type cannot be determined.
pub fn scan_profiles<F>(root: &Path, mut visit: F) -> Result<()>
where
    F: FnMut(&Path),
{
    walk(root, &mut visit)
}

fn walk<F>(dir: &Path, visit: &mut F) -> Result<()>
where
    F: FnMut(&Path),
{
    if is_profile_dir(dir) {
        tracing::debug!(profile = %dir.display(), "Found profile directory");
        visit(dir);
    }

    let entries = fs::read_dir(dir).map_err(|e| AppError::Traversal {
        path: dir.to_path_buf(),
        source: e,
    })?;

    for entry in entries {
        let entry = entry.map_err(|e| AppError::Traversal {
            path: dir.to_path_buf(),
            source: e,
        })?;
        let file_type = entry.file_type().map_err(|e| AppError::Traversal {
            path: entry.path(),
            source: e,
        })?;
        if file_type.is_dir() {
            walk(&entry.path(), visit)?;
        }
    }

    Ok(())
}

fn is_profile_dir(path: &Path) -> bool {
    path.file_name()
        .and_then(std::ffi::OsStr::to_str)
        .is_some_and(|name| name.starts_with(PROFILE_PREFIX))
}
