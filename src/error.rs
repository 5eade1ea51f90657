//! Error types for the pdf2site library.
//!
//! Every failure is fatal: a run either produces the full page set and
//! manifest or stops at the first error. [`SiteError`] is returned as
//! `Err(SiteError)` from the top-level `build_site*` and `inspect*` functions.

use std::path::PathBuf;
use thiserror::Error;

/// All errors returned by the pdf2site library.
#[derive(Debug, Error)]
pub enum SiteError {
    // ── Input errors ──────────────────────────────────────────────────────
    /// Input file was not found at the given path.
    #[error("PDF not found at '{path}'")]
    FileNotFound { path: PathBuf },

    /// Process does not have read permission on the file.
    #[error("Permission denied reading '{path}'\nTry: chmod +r {path:?}")]
    PermissionDenied { path: PathBuf },

    /// The file exists and was read, but is not a PDF.
    #[error("File is not a valid PDF: '{path}'\nFirst bytes: {magic:?}")]
    NotAPdf { path: PathBuf, magic: [u8; 4] },

    // ── PDF errors ────────────────────────────────────────────────────────
    /// PDF header/trailer/xref is corrupt and cannot be parsed.
    #[error("PDF '{path}' is corrupt: {detail}")]
    CorruptPdf { path: PathBuf, detail: String },

    /// PDF requires a password but none was provided.
    #[error("PDF '{path}' is encrypted and requires a password.\nProvide it with --password <PASSWORD>.")]
    PasswordRequired { path: PathBuf },

    /// A password was provided but it is wrong.
    #[error("Wrong password for PDF '{path}'")]
    WrongPassword { path: PathBuf },

    /// pdfium-render could not rasterise a page.
    #[error("Rasterisation failed for page {page}: {detail}")]
    RasterisationFailed { page: usize, detail: String },

    /// pdfium-render could not load the text layer of a page.
    #[error("Text extraction failed for page {page}: {detail}")]
    TextExtractionFailed { page: usize, detail: String },

    // ── I/O errors ────────────────────────────────────────────────────────
    /// JPEG encoding or writing a page image failed.
    #[error("Failed to write page image '{path}': {source}")]
    ImageWriteFailed {
        path: PathBuf,
        #[source]
        source: jpeg_encoder::EncodingError,
    },

    /// The rendered page exceeds the 65535 px JPEG dimension limit.
    #[error("Page image '{path}' is {width}x{height} px, above the JPEG limit of 65535 px; lower --zoom")]
    ImageTooLarge {
        path: PathBuf,
        width: u32,
        height: u32,
    },

    /// Could not create an output directory or write the manifest.
    #[error("Failed to write output '{path}': {source}")]
    OutputWriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The manifest could not be serialised to JSON.
    #[error("Failed to serialise manifest: {0}")]
    ManifestSerialization(#[from] serde_json::Error),

    // ── Config errors ─────────────────────────────────────────────────────
    /// Builder validation failed.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // ── Pdfium binding errors ─────────────────────────────────────────────
    /// Could not bind to a pdfium library.
    #[error(
        "Failed to bind to pdfium library: {0}\n\n\
You can:\n\
  • Set PDFIUM_LIB_PATH=/path/to/libpdfium (or pass --pdfium-lib).\n\
  • Place libpdfium next to the pdf2site executable.\n\
  • Install pdfium system-wide. Prebuilt binaries:\n\
    https://github.com/bblanchon/pdfium-binaries/releases\n"
    )]
    PdfiumBindingFailed(String),

    // ── Catch-all ─────────────────────────────────────────────────────────
    /// Unexpected internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_not_found_names_the_path() {
        let e = SiteError::FileNotFound {
            path: PathBuf::from("/decks/presentation.pdf"),
        };
        assert!(e.to_string().contains("/decks/presentation.pdf"));
    }

    #[test]
    fn rasterisation_failed_display() {
        let e = SiteError::RasterisationFailed {
            page: 7,
            detail: "bitmap allocation".into(),
        };
        let msg = e.to_string();
        assert!(msg.contains("page 7"), "got: {msg}");
        assert!(msg.contains("bitmap allocation"));
    }

    #[test]
    fn output_write_failed_keeps_source() {
        use std::error::Error as _;
        let e = SiteError::OutputWriteFailed {
            path: PathBuf::from("site/data/pages.json"),
            source: std::io::Error::new(std::io::ErrorKind::Other, "disk full"),
        };
        assert!(e.to_string().contains("disk full"));
        assert!(e.source().is_some());
    }

    #[test]
    fn binding_failure_mentions_env_override() {
        let e = SiteError::PdfiumBindingFailed("dlopen failed".into());
        assert!(e.to_string().contains("PDFIUM_LIB_PATH"));
    }
}
