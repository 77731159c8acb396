//! Embedded key-value store access.
//!
//! Chrome keeps per-extension storage as a LevelDB directory under
//! `Local Extension Settings/<extension-id>`. This wrapper opens it
//! read-style (no create) and exposes point lookup and full forward
//! iteration in store order. The handle is released on drop, on every
//! exit path.

use std::path::{Path, PathBuf};

use rusty_leveldb::{LdbIterator, Options, DB};

use crate::domain::{AppError, Result};

/// Handle to one profile's extension store.
pub struct RecordStore {
    db: DB,
    path: PathBuf,
}

impl RecordStore {
    /// Opens the store at `path` if the directory exists.
    ///
    /// An absent directory means the extension is not installed for this
    /// profile and yields `Ok(None)` so the caller can skip the profile
    /// silently.
    ///
    /// # Errors
    /// Returns a `Store` error if the directory exists but cannot be opened
    /// as a LevelDB store (corruption, lock held, bad manifest).
    pub fn open_if_exists(path: &Path) -> Result<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }

        let mut opts = Options::default();
        opts.create_if_missing = false;

        let db = DB::open(path, opts).map_err(|status| AppError::store(path, &status))?;
        tracing::debug!(store = %path.display(), "Opened extension store");

        Ok(Some(Self {
            db,
            path: path.to_path_buf(),
        }))
    }

    /// Point lookup by exact key bytes.
    pub fn get(&mut self, key: &[u8]) -> Option<Vec<u8>> {
        self.db.get(key)
    }

    /// All key/value pairs in store order.
    ///
    /// # Errors
    /// Returns a `Store` error if the iteration cursor cannot be created.
    pub fn entries(&mut self) -> Result<Vec<(Vec<u8>, Vec<u8>)>> {
        let mut iter = self
            .db
            .new_iter()
            .map_err(|status| AppError::store(&self.path, &status))?;

        let mut entries = Vec::new();
        while let Some((key, value)) = iter.next() {
            entries.push((key, value));
        }
        Ok(entries)
    }
}
