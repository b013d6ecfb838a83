//! Résumé text source: a single uploaded PDF.

use thiserror::Error;
use tracing::{debug, warn};

const PDF_MAGIC: &[u8] = b"%PDF";

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("uploaded file is not a PDF")]
    NotPdf,

    #[error("could not read text from PDF: {0}")]
    Unreadable(String),

    #[error("PDF contains no extractable text")]
    Blank,
}

/// Checks the PDF signature. Leading whitespace before the header is tolerated.
pub fn is_pdf(bytes: &[u8]) -> bool {
    let start = bytes
        .iter()
        .position(|b| !b.is_ascii_whitespace())
        .unwrap_or(bytes.len());
    bytes[start..].starts_with(PDF_MAGIC)
}

/// Extracts the text layer of a PDF. Scanned documents without a text layer are rejected
/// as blank.
pub fn extract_pdf_text(bytes: &[u8]) -> Result<String, DocumentError> {
    if !is_pdf(bytes) {
        return Err(DocumentError::NotPdf);
    }

    let text = pdf_extract::extract_text_from_mem(bytes)
        .map_err(|e| DocumentError::Unreadable(e.to_string()))?;
    if text.trim().is_empty() {
        return Err(DocumentError::Blank);
    }

    debug!("Extracted {} chars from {} byte PDF", text.len(), bytes.len());
    Ok(text.trim().to_string())
}

/// Extracts PDF text on the blocking pool.
pub async fn read_pdf(bytes: Vec<u8>) -> Result<String, DocumentError> {
    run_blocking(move || extract_pdf_text(&bytes)).await
}

/// `pdf-extract` panics on some malformed files; a panic is reported as an unreadable PDF.
async fn run_blocking<F>(extract: F) -> Result<String, DocumentError>
where
    F: FnOnce() -> Result<String, DocumentError> + Send + 'static,
{
    match tokio::task::spawn_blocking(extract).await {
        Ok(result) => result,
        Err(e) if e.is_panic() => {
            warn!("PDF parser panicked on upload");
            Err(DocumentError::Unreadable("the PDF parser could not process the file".to_string()))
        }
        Err(e) => Err(DocumentError::Unreadable(e.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signature_check() {
        assert!(is_pdf(b"%PDF-1.7\n..."));
        assert!(is_pdf(b"\n  %PDF-1.4"));
        assert!(!is_pdf(b"PK\x03\x04 docx"));
        assert!(!is_pdf(b""));
    }

    #[test]
    fn test_non_pdf_is_rejected_before_parsing() {
        assert!(matches!(
            extract_pdf_text(b"Ana Silva, data engineer"),
            Err(DocumentError::NotPdf)
        ));
    }

    #[test]
    fn test_truncated_pdf_is_unreadable() {
        assert!(matches!(
            extract_pdf_text(b"%PDF-1.7\n"),
            Err(DocumentError::Unreadable(_))
        ));
    }

    #[tokio::test]
    async fn test_parser_panic_is_unreadable() {
        let result = run_blocking(|| panic!("bad xref table")).await;
        assert!(matches!(result, Err(DocumentError::Unreadable(_))));
    }

    #[tokio::test]
    async fn test_read_pdf_rejects_non_pdf() {
        let result = read_pdf(b"plain text".to_vec()).await;
        assert!(matches!(result, Err(DocumentError::NotPdf)));
    }
}
