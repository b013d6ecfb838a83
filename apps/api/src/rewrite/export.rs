//! Markdown export of rewritten résumés.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

const FILE_STEM: &str = "rewritten_resume";

/// `rewritten_resume.md`, or `rewritten_resume_Ana_Silva.md` for a named candidate.
pub fn export_file_name(candidate_name: Option<&str>) -> String {
    let name = candidate_name.map(str::trim).unwrap_or_default();
    if name.is_empty() {
        return format!("{FILE_STEM}.md");
    }
    let slug: String = name
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
        .chars()
        .map(|c| if matches!(c, '/' | '\\' | ':' | '.') { '_' } else { c })
        .collect();
    format!("{FILE_STEM}_{slug}.md")
}

/// True for a bare file name that cannot escape the export directory.
pub fn is_safe_file_name(file_name: &str) -> bool {
    !file_name.is_empty()
        && !file_name.contains(['/', '\\'])
        && !file_name.contains("..")
        && file_name.ends_with(".md")
}

/// Writes `content` to the export directory and returns the file path.
pub fn save(export_dir: &Path, candidate_name: Option<&str>, content: &str) -> Result<PathBuf> {
    std::fs::create_dir_all(export_dir)
        .with_context(|| format!("Failed to create {}", export_dir.display()))?;
    let path = export_dir.join(export_file_name(candidate_name));
    std::fs::write(&path, content)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    info!("Exported rewritten résumé to {}", path.display());
    Ok(path)
}

/// Reads an exported file back. `None` when the name is unsafe or the file does not exist.
pub fn load(export_dir: &Path, file_name: &str) -> Result<Option<String>> {
    if !is_safe_file_name(file_name) {
        return Ok(None);
    }
    let path = export_dir.join(file_name);
    if !path.is_file() {
        return Ok(None);
    }
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    Ok(Some(content))
}
