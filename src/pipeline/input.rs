//! Input validation: confirm the PDF exists, is readable, and looks like a PDF.
//!
//! Runs before anything touches the output root.

use crate::error::SiteError;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Validate a local PDF path, returning it unchanged on success.
pub fn resolve_local(path: &Path) -> Result<PathBuf, SiteError> {
    let path = path.to_path_buf();

    if !path.is_file() {
        return Err(SiteError::FileNotFound { path });
    }

    match std::fs::File::open(&path) {
        Ok(mut f) => {
            let mut magic = [0u8; 4];
            if f.read_exact(&mut magic).is_ok() && &magic != b"%PDF" {
                return Err(SiteError::NotAPdf { path, magic });
            }
        }
        Err(e) if e.kind() == std::io::ErrorKind::PermissionDenied => {
            return Err(SiteError::PermissionDenied { path });
        }
        Err(_) => {
            return Err(SiteError::FileNotFound { path });
        }
    }

    debug!("Resolved local PDF: {}", path.display());
    Ok(path)
}

/// The manifest title for a PDF: its filename without extension.
pub fn document_title(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}
