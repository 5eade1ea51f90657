//! Binding to the pdfium shared library.
//!
//! `pdfium-render` loads pdfium at runtime rather than linking it, so every
//! run has to locate a `libpdfium` first. Lookup order, first match wins:
//!
//! 1. an explicit path from [`crate::SiteConfig::pdfium_library`]
//! 2. `PDFIUM_LIB_PATH`
//! 3. the directory holding the running executable
//! 4. the current working directory
//! 5. the system library search path

use crate::error::SiteError;
use pdfium_render::prelude::*;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Environment variable naming an existing pdfium library file.
pub const PDFIUM_LIB_PATH_ENV: &str = "PDFIUM_LIB_PATH";

/// Platform file name of the pdfium library, e.g. `libpdfium.so`.
pub fn platform_library_name() -> String {
    format!(
        "{}pdfium{}",
        std::env::consts::DLL_PREFIX,
        std::env::consts::DLL_SUFFIX
    )
}

/// Candidate library files, in lookup order, excluding the system search.
pub fn candidate_paths(explicit: Option<&Path>) -> Vec<PathBuf> {
    let mut candidates = Vec::new();

    if let Some(p) = explicit {
        candidates.push(p.to_path_buf());
    }
    if let Ok(p) = std::env::var(PDFIUM_LIB_PATH_ENV) {
        if !p.is_empty() {
            candidates.push(PathBuf::from(p));
        }
    }
    if let Some(dir) = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
    {
        candidates.push(dir.join(platform_library_name()));
    }
    if let Ok(cwd) = std::env::current_dir() {
        candidates.push(cwd.join(platform_library_name()));
    }

    candidates
}

/// Bind to pdfium, trying each candidate before the system library.
///
/// An explicit path that does not exist, or fails to bind, is an error; no
/// other candidate is tried in that case.
pub fn bind_pdfium(explicit: Option<&Path>) -> Result<Pdfium, SiteError> {
    if let Some(p) = explicit {
        if !p.exists() {
            return Err(SiteError::PdfiumBindingFailed(format!(
                "'{}' does not exist",
                p.display()
            )));
        }
    }

    let mut last_error = String::from("no candidate library found");
    for path in candidate_paths(explicit) {
        if !path.exists() {
            continue;
        }
        match Pdfium::bind_to_library(&path) {
            Ok(bindings) => {
                debug!("Bound pdfium from {}", path.display());
                return Ok(Pdfium::new(bindings));
            }
            Err(e) => {
                debug!("Could not bind pdfium from {}: {}", path.display(), e);
                last_error = format!("'{}': {}", path.display(), e);
                if explicit.is_some_and(|x| x == path.as_path()) {
                    return Err(SiteError::PdfiumBindingFailed(last_error));
                }
            }
        }
    }

    Pdfium::bind_to_system_library()
        .map(|bindings| {
            debug!("Bound pdfium from the system library path");
            Pdfium::new(bindings)
        })
        .map_err(|e| SiteError::PdfiumBindingFailed(format!("{last_error}; system library: {e}")))
}
