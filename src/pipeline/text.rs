//! Plain-text extraction from a page's text layer.

use crate::error::SiteError;
use pdfium_render::prelude::*;

/// Extract the page's text in pdfium's reading order, normalised and trimmed.
pub fn extract_page_text(page: &PdfPage, page_num: usize) -> Result<String, SiteError> {
    let text = page
        .text()
        .map_err(|e| SiteError::TextExtractionFailed {
            page: page_num,
            detail: format!("{:?}", e),
        })?;
    Ok(normalize_text(&text.all()))
}

/// pdfium separates lines with `\r\n` and may emit stray NULs; the manifest
/// wants `\n`-separated text with no surrounding whitespace.
pub fn normalize_text(raw: &str) -> String {
    raw.replace("\r\n", "\n")
        .replace('\r', "\n")
        .replace('\0', "")
        .trim()
        .to_string()
}
