//! Record store: a JSON array of candidate records on disk.
//!
//! Every append rewrites the whole file. That is O(n) per insert and assumes a single
//! writer; callers serialize access (the service keeps the store behind a mutex).

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde_json::Value;
use thiserror::Error;
use tracing::{info, warn};

use crate::extraction::Record;
use crate::models::candidate::CandidateRecord;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("record store I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("record store is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("record store could not be replaced: {0}")]
    Persist(#[from] tempfile::PersistError),

    #[error("record store holds neither an array nor an object")]
    UnexpectedShape,
}

/// Why an append was skipped.
#[derive(Debug, Clone, PartialEq)]
pub enum Rejection {
    DuplicateKey { key_field: String, key: Value },
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rejection::DuplicateKey { key_field, key } => {
                let key = key.as_str().map(str::to_string).unwrap_or(key.to_string());
                write!(f, "a record with {key_field} '{key}' is already stored")
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum AppendOutcome {
    Stored { total: usize },
    Rejected(Rejection),
}

#[derive(Debug, Clone)]
pub struct RecordStore {
    path: PathBuf,
}

impl RecordStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads every stored record in file order. A missing or blank file is an empty store,
    /// a bare object is a one-element store.
    pub fn load_all(&self) -> Result<Vec<Value>, StoreError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }
        match serde_json::from_str::<Value>(&content)? {
            Value::Array(items) => Ok(items),
            obj @ Value::Object(_) => Ok(vec![obj]),
            _ => Err(StoreError::UnexpectedShape),
        }
    }

    /// Typed view of the store. Entries that are not objects are skipped.
    pub fn load_candidates(&self) -> Result<Vec<CandidateRecord>, StoreError> {
        let mut candidates = Vec::new();
        for value in self.load_all()? {
            if !value.is_object() {
                warn!("Skipping non-object entry in record store {}", self.path.display());
                continue;
            }
            candidates.push(CandidateRecord::from_value(value)?);
        }
        Ok(candidates)
    }

    /// Finds the stored record whose `key_field` equals `key`.
    pub fn find(&self, key_field: &str, key: &str) -> Result<Option<Value>, StoreError> {
        Ok(self
            .load_all()?
            .into_iter()
            .find(|entry| entry.get(key_field).and_then(Value::as_str) == Some(key)))
    }

    /// Appends `record` unless another record already has the same `key_field` value.
    /// A rejected append leaves the file untouched.
    pub fn append(&self, record: &Record, key_field: &str) -> Result<AppendOutcome, StoreError> {
        let mut entries = self.load_all()?;

        let key = record.get(key_field).cloned().unwrap_or(Value::Null);
        let duplicate = entries
            .iter()
            .any(|entry| entry.get(key_field).unwrap_or(&Value::Null) == &key);
        if duplicate {
            let rejection = Rejection::DuplicateKey {
                key_field: key_field.to_string(),
                key,
            };
            warn!("Record store append skipped: {rejection}");
            return Ok(AppendOutcome::Rejected(rejection));
        }

        entries.push(Value::Object(record.clone()));
        let serialized = serde_json::to_string_pretty(&entries)?;
        self.replace_contents(serialized.as_bytes())?;

        info!(
            "Stored record {} in {} ({} total)",
            key,
            self.path.display(),
            entries.len()
        );
        Ok(AppendOutcome::Stored {
            total: entries.len(),
        })
    }

    /// Raw file contents, for download.
    pub fn raw(&self) -> Result<Option<String>, StoreError> {
        if !self.path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(&self.path)?))
    }

    /// Writes to a sibling temp file and renames it over the store.
    fn replace_contents(&self, bytes: &[u8]) -> Result<(), StoreError> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&dir)?;
        let mut tmp = tempfile::NamedTempFile::new_in(&dir)?;
        tmp.write_all(bytes)?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path)?;
        Ok(())
    }
}
