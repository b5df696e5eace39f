//! Résumé document text extraction.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("file is not a PDF document")]
    NotPdf,

    #[error("PDF text extraction failed: {0}")]
    Extraction(String),

    #[error("document contains no extractable text")]
    Empty,
}

/// Extracts the text layer of a PDF. CPU-bound; call from the blocking pool.
pub fn extract_pdf_text(bytes: &[u8]) -> Result<String, DocumentError> {
    if !looks_like_pdf(bytes) {
        return Err(DocumentError::NotPdf);
    }

    let text = pdf_extract::extract_text_from_mem(bytes)
        .map_err(|e| DocumentError::Extraction(e.to_string()))?;

    let text = text.trim();
    if text.is_empty() {
        return Err(DocumentError::Empty);
    }
    Ok(text.to_string())
}

fn looks_like_pdf(bytes: &[u8]) -> bool {
    bytes.starts_with(b"%PDF-")
}
