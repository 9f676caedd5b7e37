//! Flat-file credential store.
//!
//! The whole account table lives in a single pretty-printed JSON array. Reads
//! never fail: a missing, unreadable or malformed document is an empty table.
//! Writes replace the document atomically by persisting a temp file from the
//! same directory over it.

use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use tempfile::{NamedTempFile, PersistError};
use thiserror::Error;

use crate::infrastructure::models::account::StoredAccount;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("store I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("store serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("failed to replace store document: {0}")]
    Persist(#[from] PersistError),
}

#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Vec<StoredAccount> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "store document not found, starting empty");
                return Vec::new();
            }
            Err(err) => {
                tracing::warn!(path = %self.path.display(), error = %err, "store document unreadable, starting empty");
                return Vec::new();
            }
        };

        match serde_json::from_str(&contents) {
            Ok(accounts) => accounts,
            Err(err) => {
                tracing::warn!(path = %self.path.display(), error = %err, "store document malformed, starting empty");
                Vec::new()
            }
        }
    }

    pub fn save(&self, accounts: &[StoredAccount]) -> Result<(), StoreError> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir)?;

        let mut file = NamedTempFile::new_in(dir)?;
        {
            let mut writer = BufWriter::new(file.as_file_mut());
            serde_json::to_writer_pretty(&mut writer, accounts)?;
            writer.flush()?;
        }
        file.as_file().sync_all()?;
        file.persist(&self.path)?;

        tracing::debug!(path = %self.path.display(), accounts = accounts.len(), "store document written");

        Ok(())
    }
}
