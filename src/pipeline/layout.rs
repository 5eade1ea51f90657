//! Output directory layout.
//!
//! ```text
//! <output_root>/
//!  ├─ pages/page-01.jpg, page-02.jpg, …
//!  └─ data/pages.json
//! ```
//!
//! Image paths in the manifest are relative to the output root and always
//! use `/`, since they are consumed by a web page rather than the local OS.

use crate::error::SiteError;
use std::path::PathBuf;
use tracing::debug;

pub const PAGES_DIR: &str = "pages";
pub const DATA_DIR: &str = "data";
pub const MANIFEST_FILE: &str = "pages.json";

/// Paths of one generated site.
#[derive(Debug, Clone)]
pub struct SiteLayout {
    root: PathBuf,
}

impl SiteLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn pages_dir(&self) -> PathBuf {
        self.root.join(PAGES_DIR)
    }

    pub fn data_dir(&self) -> PathBuf {
        self.root.join(DATA_DIR)
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.data_dir().join(MANIFEST_FILE)
    }

    /// On-disk path of the JPEG for a 1-indexed page.
    pub fn page_image_path(&self, page_num: usize) -> PathBuf {
        self.pages_dir().join(page_image_name(page_num))
    }

    /// Create `pages/` and `data/`. Succeeds if they already exist.
    pub fn ensure_dirs(&self) -> Result<(), SiteError> {
        for dir in [self.pages_dir(), self.data_dir()] {
            std::fs::create_dir_all(&dir).map_err(|e| SiteError::OutputWriteFailed {
                path: dir.clone(),
                source: e,
            })?;
        }
        debug!("Output directories ready under {}", self.root.display());
        Ok(())
    }
}

/// `page-NN.jpg`, zero-padded to two digits (wider for page 100+).
pub fn page_image_name(page_num: usize) -> String {
    format!("page-{page_num:02}.jpg")
}

/// Manifest image reference for a 1-indexed page, e.g. `pages/page-07.jpg`.
pub fn relative_image_path(page_num: usize) -> String {
    format!("{PAGES_DIR}/{}", page_image_name(page_num))
}
