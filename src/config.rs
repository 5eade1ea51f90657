//! Configuration types for PDF-to-site extraction.
//!
//! All extraction behaviour is controlled through [`SiteConfig`], built via
//! its [`SiteConfigBuilder`]. The input PDF is not part of the config; it is
//! passed to each entry point.

use crate::error::SiteError;
use crate::progress::ProgressCallback;
use std::fmt;
use std::path::PathBuf;

/// Default output root, relative to the working directory.
pub const DEFAULT_OUTPUT_ROOT: &str = "presentation_site";

/// Default zoom factor applied to page dimensions before rasterisation.
pub const DEFAULT_ZOOM: f32 = 2.0;

/// Default JPEG quality (1–100).
pub const DEFAULT_JPEG_QUALITY: u8 = 80;

/// Configuration for a PDF-to-site extraction.
///
/// Built via [`SiteConfig::builder()`] or using [`SiteConfig::default()`].
///
/// # Example
/// ```rust
/// use pdf2site::SiteConfig;
///
/// let config = SiteConfig::builder()
///     .output_root("public/deck")
///     .zoom(1.5)
///     .jpeg_quality(85)
///     .build()
///     .unwrap();
/// assert_eq!(config.jpeg_quality, 85);
/// ```
#[derive(Clone)]
pub struct SiteConfig {
    /// Directory that receives `pages/` and `data/`. Default: `presentation_site`.
    pub output_root: PathBuf,

    /// Scale multiplier applied to the page size in points. Range: 0.1–8.0. Default: 2.0.
    ///
    /// A page of 720 × 405 pt at zoom 2.0 becomes a 1440 × 810 px image.
    pub zoom: f32,

    /// JPEG quality. Range: 1–100. Default: 80.
    pub jpeg_quality: u8,

    /// PDF user password for encrypted documents.
    pub password: Option<String>,

    /// Explicit path to the pdfium shared library.
    ///
    /// When `None` the library is looked up via `PDFIUM_LIB_PATH`, next to
    /// the executable, in the working directory and finally system-wide.
    pub pdfium_library: Option<PathBuf>,

    /// Optional per-page progress events.
    pub progress_callback: Option<ProgressCallback>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            output_root: PathBuf::from(DEFAULT_OUTPUT_ROOT),
            zoom: DEFAULT_ZOOM,
            jpeg_quality: DEFAULT_JPEG_QUALITY,
            password: None,
            pdfium_library: None,
            progress_callback: None,
        }
    }
}

impl fmt::Debug for SiteConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SiteConfig")
            .field("output_root", &self.output_root)
            .field("zoom", &self.zoom)
            .field("jpeg_quality", &self.jpeg_quality)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("pdfium_library", &self.pdfium_library)
            .field(
                "progress_callback",
                &self
                    .progress_callback
                    .as_ref()
                    .map(|_| "<dyn ExtractionProgressCallback>"),
            )
            .finish()
    }
}

impl SiteConfig {
    /// Create a new builder for `SiteConfig`.
    pub fn builder() -> SiteConfigBuilder {
        SiteConfigBuilder {
            config: Self::default(),
        }
    }
}

/// Builder for [`SiteConfig`].
#[derive(Debug)]
pub struct SiteConfigBuilder {
    config: SiteConfig,
}

impl SiteConfigBuilder {
    pub fn output_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.config.output_root = root.into();
        self
    }

    pub fn zoom(mut self, zoom: f32) -> Self {
        self.config.zoom = zoom.clamp(0.1, 8.0);
        self
    }

    pub fn jpeg_quality(mut self, quality: u8) -> Self {
        self.config.jpeg_quality = quality.clamp(1, 100);
        self
    }

    pub fn password(mut self, pwd: impl Into<String>) -> Self {
        self.config.password = Some(pwd.into());
        self
    }

    pub fn pdfium_library(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.pdfium_library = Some(path.into());
        self
    }

    pub fn progress_callback(mut self, cb: ProgressCallback) -> Self {
        self.config.progress_callback = Some(cb);
        self
    }

    /// Build the configuration, validating constraints.
    ///
    /// Zoom and quality are already clamped by their setters; NaN survives
    /// `clamp`, so it is the one zoom value rejected here.
    pub fn build(self) -> Result<SiteConfig, SiteError> {
        let c = &self.config;
        if c.zoom.is_nan() {
            return Err(SiteError::InvalidConfig(
                "Zoom must be a number, got NaN".into(),
            ));
        }
        if c.output_root.as_os_str().is_empty() {
            return Err(SiteError::InvalidConfig(
                "Output root must not be empty".into(),
            ));
        }
        Ok(self.config)
    }
}
