//! Response extraction: turns free-form model text into a JSON object.
//!
//! The algorithm is best-effort: everything between the FIRST `{` and the
//! LAST `}` is parsed as one object. Output containing several independent objects is
//! therefore over-captured and usually fails as `MalformedJson`.

use serde_json::{Map, Value};
use thiserror::Error;

/// Closing tag of a reasoning block emitted by reasoning models.
pub const REASONING_CLOSE: &str = "</think>";
pub const REASONING_OPEN: &str = "<think>";

pub type Record = Map<String, Value>;

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("no JSON object found in model response")]
    NoJsonFound,

    #[error("malformed JSON in model response: {0}")]
    MalformedJson(#[source] serde_json::Error),
}

/// Drops everything up to and including the last reasoning closing tag.
pub fn strip_reasoning(raw: &str) -> &str {
    match raw.rfind(REASONING_CLOSE) {
        Some(idx) => raw[idx + REASONING_CLOSE.len()..].trim(),
        None => raw.trim(),
    }
}

/// Cleans a completion for display. With `show_reasoning` the reasoning block is kept
/// but its tags are replaced with readable markers.
pub fn format_response(raw: &str, show_reasoning: bool) -> String {
    let trimmed = raw.trim();
    if show_reasoning {
        trimmed
            .replace(REASONING_OPEN, "[thinking...] ")
            .replace(REASONING_CLOSE, "\n---\n")
    } else {
        strip_reasoning(trimmed).to_string()
    }
}

/// Returns the reasoning segment of a completion, if it has one.
pub fn reasoning_of(raw: &str) -> Option<String> {
    let end = raw.rfind(REASONING_CLOSE)?;
    let head = &raw[..end + REASONING_CLOSE.len()];
    Some(format_response(head, true).trim().to_string())
}

/// Extracts the JSON object embedded in `raw` and back-fills every name in
/// `required_fields` that the object lacks with an empty list.
///
/// Pass an empty slice to disable back-fill.
pub fn extract(raw: &str, required_fields: &[&str]) -> Result<Record, ExtractionError> {
    let text = strip_reasoning(raw);

    let (start, end) = match (text.find('{'), text.rfind('}')) {
        (Some(start), Some(end)) if start < end => (start, end),
        _ => return Err(ExtractionError::NoJsonFound),
    };

    let mut record: Record =
        serde_json::from_str(&text[start..=end]).map_err(ExtractionError::MalformedJson)?;

    for field in required_fields {
        if !record.contains_key(*field) {
            record.insert((*field).to_string(), Value::Array(Vec::new()));
        }
    }

    Ok(record)
}
