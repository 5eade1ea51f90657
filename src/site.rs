//! Site-building entry points.
//!
//! [`build_site_sync`] is the whole program: validate the input, bind pdfium,
//! open the document, create the output directories, extract every page and
//! write the manifest. [`build_site`] runs the same blocking work on Tokio's
//! blocking pool for async callers; pages are still processed one at a time.
//!
//! Everything that can fail before output exists (missing input, no pdfium,
//! unreadable PDF) is checked before [`SiteLayout::ensure_dirs`] runs, so
//! those failures leave the output root untouched.

use crate::config::SiteConfig;
use crate::error::SiteError;
use crate::output::{DocumentInfo, ExtractionStats, Manifest, SiteOutput};
use crate::pipeline::layout::SiteLayout;
use crate::pipeline::{extract, input, pdfium};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::info;

/// Extract `input_path` into a static-site dataset under `config.output_root`.
///
/// # Errors
/// Every failure is fatal. [`SiteError::FileNotFound`] is returned, naming
/// the path, when the input does not exist; no output is created in that
/// case.
pub fn build_site_sync(
    input_path: impl AsRef<Path>,
    config: &SiteConfig,
) -> Result<SiteOutput, SiteError> {
    let total_start = Instant::now();
    let input_path = input_path.as_ref();
    info!("Starting extraction: {}", input_path.display());

    // ── Step 1: Validate input ───────────────────────────────────────────
    let pdf_path = input::resolve_local(input_path)?;

    // ── Step 2: Bind pdfium and open the document ────────────────────────
    let pdfium = pdfium::bind_pdfium(config.pdfium_library.as_deref())?;
    let document = extract::open_document(&pdfium, &pdf_path, config.password.as_deref())?;

    // ── Step 3: Output directories ───────────────────────────────────────
    let layout = SiteLayout::new(&config.output_root);
    layout.ensure_dirs()?;

    // ── Step 4: Text + JPEG per page ─────────────────────────────────────
    let render_start = Instant::now();
    let manifest = extract::extract_document(&document, &pdf_path, &layout, config)?;
    let render_duration_ms = render_start.elapsed().as_millis() as u64;
    drop(document);

    // ── Step 5: Manifest ─────────────────────────────────────────────────
    let manifest_path = layout.manifest_path();
    write_manifest(&manifest, &manifest_path)?;

    let stats = ExtractionStats {
        total_pages: manifest.page_count,
        text_chars: manifest.pages.iter().map(|p| p.text.chars().count()).sum(),
        render_duration_ms,
        total_duration_ms: total_start.elapsed().as_millis() as u64,
    };

    info!(
        "Extraction complete: {} pages, {}ms total",
        stats.total_pages, stats.total_duration_ms
    );

    Ok(SiteOutput {
        manifest,
        manifest_path,
        stats,
    })
}

/// Async wrapper around [`build_site_sync`].
///
/// pdfium is a blocking C library, so the run is moved onto
/// `tokio::task::spawn_blocking` to keep the async workers free.
pub async fn build_site(
    input_path: impl AsRef<Path>,
    config: &SiteConfig,
) -> Result<SiteOutput, SiteError> {
    let path = input_path.as_ref().to_path_buf();
    let config = config.clone();

    tokio::task::spawn_blocking(move || build_site_sync(&path, &config))
        .await
        .map_err(|e| SiteError::Internal(format!("Extraction task panicked: {}", e)))?
}

/// Read PDF metadata without writing any output.
pub fn inspect_sync(
    input_path: impl AsRef<Path>,
    config: &SiteConfig,
) -> Result<DocumentInfo, SiteError> {
    let pdf_path = input::resolve_local(input_path.as_ref())?;
    let pdfium = pdfium::bind_pdfium(config.pdfium_library.as_deref())?;
    let document = extract::open_document(&pdfium, &pdf_path, config.password.as_deref())?;
    Ok(extract::document_info(&document, &pdf_path))
}

/// Async wrapper around [`inspect_sync`].
pub async fn inspect(
    input_path: impl AsRef<Path>,
    config: &SiteConfig,
) -> Result<DocumentInfo, SiteError> {
    let path = input_path.as_ref().to_path_buf();
    let config = config.clone();

    tokio::task::spawn_blocking(move || inspect_sync(&path, &config))
        .await
        .map_err(|e| SiteError::Internal(format!("Inspect task panicked: {}", e)))?
}

/// Serialise `manifest` as indented JSON and write it to `path`.
///
/// Atomic write: temp file next to `path`, then rename. The temp file is
/// removed if the rename fails.
pub fn write_manifest(manifest: &Manifest, path: &Path) -> Result<(), SiteError> {
    let json = manifest.to_json_pretty()?;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| SiteError::OutputWriteFailed {
            path: path.to_path_buf(),
            source: e,
        })?;
    }

    let tmp_path = tmp_path_for(path);
    std::fs::write(&tmp_path, json.as_bytes()).map_err(|e| SiteError::OutputWriteFailed {
        path: path.to_path_buf(),
        source: e,
    })?;

    if let Err(e) = std::fs::rename(&tmp_path, path) {
        let _ = std::fs::remove_file(&tmp_path);
        return Err(SiteError::OutputWriteFailed {
            path: path.to_path_buf(),
            source: e,
        });
    }

    info!("Wrote manifest: {}", path.display());
    Ok(())
}

fn tmp_path_for(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::PageRecord;

    #[test]
    fn missing_input_creates_no_output() {
        let tmp = tempfile::tempdir().unwrap();
        let root = tmp.path().join("presentation_site");
        let missing = tmp.path().join("presentation.pdf");
        let config = SiteConfig::builder().output_root(&root).build().unwrap();

        let err = build_site_sync(&missing, &config).err().expect("must fail");

        assert!(matches!(err, SiteError::FileNotFound { .. }));
        assert!(err.to_string().contains("presentation.pdf"));
        assert!(!root.exists(), "output root must not be created");
    }

    #[test]
    fn non_pdf_input_creates_no_output() {
        let tmp = tempfile::tempdir().unwrap();
        let root = tmp.path().join("site");
        let bogus = tmp.path().join("slides.pdf");
        std::fs::write(&bogus, b"PK\x03\x04 not a pdf").unwrap();
        let config = SiteConfig::builder().output_root(&root).build().unwrap();

        let err = build_site_sync(&bogus, &config).err().expect("must fail");

        assert!(matches!(err, SiteError::NotAPdf { .. }));
        assert!(!root.exists());
    }

    #[tokio::test]
    async fn async_entry_point_reports_missing_input() {
        let tmp = tempfile::tempdir().unwrap();
        let config = SiteConfig::builder()
            .output_root(tmp.path().join("out"))
            .build()
            .unwrap();

        let err = build_site(tmp.path().join("gone.pdf"), &config)
            .await
            .err()
            .expect("must fail");
        assert!(matches!(err, SiteError::FileNotFound { .. }));
    }

    #[test]
    fn inspect_missing_input_fails() {
        let err = inspect_sync("/definitely/not/a/real/file.pdf", &SiteConfig::default())
            .err()
            .expect("must fail");
        assert!(matches!(err, SiteError::FileNotFound { .. }));
    }

    #[test]
    fn write_manifest_replaces_previous_run() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("data").join("pages.json");

        let first = Manifest::new(
            "Deck",
            vec![PageRecord {
                index: 1,
                image: "pages/page-01.jpg".into(),
                text: "old".into(),
            }],
        );
        write_manifest(&first, &path).unwrap();

        let second = Manifest::new("Deck", Vec::new());
        write_manifest(&second, &path).unwrap();

        let on_disk: Manifest =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(on_disk, second);
        assert!(!tmp_path_for(&path).exists(), "temp file must be renamed away");
    }

    #[test]
    fn failed_rename_leaves_no_temp_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("pages.json");
        std::fs::create_dir(&path).unwrap();
        std::fs::write(path.join("occupied"), b"x").unwrap();

        let err = write_manifest(&Manifest::new("Deck", Vec::new()), &path).unwrap_err();

        assert!(matches!(err, SiteError::OutputWriteFailed { .. }));
        assert!(!tmp_path_for(&path).exists());
    }

    #[test]
    fn tmp_path_sits_next_to_target() {
        assert_eq!(
            tmp_path_for(Path::new("site/data/pages.json")),
            Path::new("site/data/pages.json.tmp")
        );
    }
}
