//! JSON file-per-record store.
//!
//! Each [`StoreKey`] maps to `<data-dir>/<key>.json`. The directory is
//! created lazily on first write, so read-only use of a fresh profile never
//! touches the filesystem.

use std::path::{Path, PathBuf};

use anyhow::Result;

use eduquest_core::error::StoreError;
use eduquest_core::traits::{StateStore, StoreKey};

/// File-backed store rooted at a data directory.
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Open a store over an explicit data directory.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Open a store over the default per-user data directory.
    pub fn open_default() -> Result<Self> {
        let dir = default_data_dir()
            .ok_or_else(|| anyhow::anyhow!("cannot determine data directory (HOME not set)"))?;
        Ok(Self::new(dir))
    }

    /// The directory this store reads and writes.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn record_path(&self, key: StoreKey) -> PathBuf {
        self.dir.join(format!("{}.json", key.name()))
    }
}

impl StateStore for FileStore {
    fn read(&self, key: StoreKey) -> Result<Option<String>, StoreError> {
        let path = self.record_path(key);
        match std::fs::read_to_string(&path) {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::Io { path, source: e }),
        }
    }

    fn write(&mut self, key: StoreKey, value: &str) -> Result<(), StoreError> {
        if !self.dir.exists() {
            tracing::debug!("creating data directory {}", self.dir.display());
            std::fs::create_dir_all(&self.dir).map_err(|e| StoreError::Io {
                path: self.dir.clone(),
                source: e,
            })?;
        }
        let path = self.record_path(key);
        std::fs::write(&path, value).map_err(|e| StoreError::Io { path, source: e })
    }

    fn remove(&mut self, key: StoreKey) -> Result<(), StoreError> {
        let path = self.record_path(key);
        match std::fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StoreError::Io { path, source: e }),
        }
    }
}

/// Per-user data directory: `$HOME/.local/share/eduquest`.
pub fn default_data_dir() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".local").join("share").join("eduquest"))
}
