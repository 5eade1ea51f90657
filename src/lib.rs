//! # pdf2site
//!
//! Turn a PDF presentation into a static-site-ready dataset: one JPEG per page
//! plus a JSON manifest of per-page text and image paths.
//!
//! ## Pipeline Overview
//!
//! ```text
//! PDF
//!  │
//!  ├─ 1. Input    check the file exists and starts with %PDF
//!  ├─ 2. Bind     locate libpdfium and open the document
//!  ├─ 3. Layout   create <root>/pages and <root>/data
//!  ├─ 4. Pages    per page, in order: text → rasterise → JPEG
//!  └─ 5. Manifest <root>/data/pages.json
//! ```
//!
//! ## Output
//!
//! ```text
//! presentation_site/
//!  ├─ pages/page-01.jpg
//!  ├─ pages/page-02.jpg
//!  └─ data/pages.json
//! ```
//!
//! ```json
//! {
//!   "title": "Deck",
//!   "pageCount": 2,
//!   "pages": [
//!     { "index": 1, "image": "pages/page-01.jpg", "text": "Welcome" },
//!     { "index": 2, "image": "pages/page-02.jpg", "text": "Agenda" }
//!   ]
//! }
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use pdf2site::{build_site_sync, SiteConfig};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = SiteConfig::builder()
//!         .output_root("presentation_site")
//!         .build()?;
//!     let output = build_site_sync("Deck.pdf", &config)?;
//!     println!("{}", output.summary());
//!     Ok(())
//! }
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli`   | on      | Enables the `pdf2site` binary (clap + anyhow + tracing-subscriber + indicatif) |
//!
//! pdfium itself is loaded at runtime; see [`pipeline::pdfium`] for where it
//! is looked up.

// ── Modules ──────────────────────────────────────────────────────────────

pub mod config;
pub mod error;
pub mod output;
pub mod pipeline;
pub mod progress;
pub mod site;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use config::{SiteConfig, SiteConfigBuilder};
pub use error::SiteError;
pub use output::{DocumentInfo, ExtractionStats, Manifest, PageRecord, SiteOutput};
pub use progress::{ExtractionProgressCallback, NoopProgressCallback, ProgressCallback};
pub use site::{build_site, build_site_sync, inspect, inspect_sync, write_manifest};
