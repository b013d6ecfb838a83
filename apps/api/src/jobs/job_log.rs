use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

use crate::models::job::JobPosting;

const DELIMITER: u8 = b';';

/// Append-only, `;`-delimited job log with header `title;description;details`.
/// The last row is the active posting.
#[derive(Debug, Clone)]
pub struct JobLog {
    path: PathBuf,
}

impl JobLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends one row, writing the header first when the file is new or empty.
    pub fn append(&self, job: &JobPosting) -> Result<()> {
        let needs_header = std::fs::metadata(&self.path)
            .map(|m| m.len() == 0)
            .unwrap_or(true);

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .with_context(|| format!("Failed to open job log {}", self.path.display()))?;

        let mut writer = csv::WriterBuilder::new()
            .delimiter(DELIMITER)
            .has_headers(needs_header)
            .from_writer(file);
        writer.serialize(job).context("Failed to write job posting")?;
        writer.flush().context("Failed to flush job log")?;

        info!("Saved job posting '{}' to {}", job.title, self.path.display());
        Ok(())
    }

    /// Every row, oldest first. A missing file is an empty log.
    pub fn all(&self) -> Result<Vec<JobPosting>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(DELIMITER)
            .from_path(&self.path)
            .with_context(|| format!("Failed to open job log {}", self.path.display()))?;

        reader
            .deserialize()
            .collect::<std::result::Result<Vec<JobPosting>, _>>()
            .context("Job log contains a malformed row")
    }

    /// The most recently saved posting.
    pub fn active(&self) -> Result<Option<JobPosting>> {
        Ok(self.all()?.pop())
    }
}
