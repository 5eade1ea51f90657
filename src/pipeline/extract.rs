//! Document extraction: walk every page in order, write its JPEG, and collect
//! the manifest.
//!
//! [`open_document`] returns a handle borrowed from the bound `Pdfium`.
//! Callers hold it in a local binding, so it is dropped (and pdfium's file
//! handle released) on every exit path, including an early `?` return from
//! a failing page.

use crate::config::SiteConfig;
use crate::error::SiteError;
use crate::output::{DocumentInfo, Manifest, PageRecord};
use crate::pipeline::layout::{self, SiteLayout};
use crate::pipeline::{input, render, text};
use pdfium_render::prelude::*;
use std::path::Path;
use tracing::{debug, info};

/// Open `pdf_path`, translating pdfium's error into a [`SiteError`].
pub fn open_document<'a>(
    pdfium: &'a Pdfium,
    pdf_path: &Path,
    password: Option<&'a str>,
) -> Result<PdfDocument<'a>, SiteError> {
    pdfium.load_pdf_from_file(pdf_path, password).map_err(|e| {
        let err_str = format!("{:?}", e);
        if err_str.contains("Password") || err_str.contains("password") {
            if password.is_some() {
                SiteError::WrongPassword {
                    path: pdf_path.to_path_buf(),
                }
            } else {
                SiteError::PasswordRequired {
                    path: pdf_path.to_path_buf(),
                }
            }
        } else {
            SiteError::CorruptPdf {
                path: pdf_path.to_path_buf(),
                detail: err_str,
            }
        }
    })
}

/// Extract every page of an open document into `layout`.
///
/// Output directories must already exist. Returns the manifest with
/// `title` taken from `pdf_path`'s file stem.
pub fn extract_document(
    document: &PdfDocument,
    pdf_path: &Path,
    layout: &SiteLayout,
    config: &SiteConfig,
) -> Result<Manifest, SiteError> {
    let pages = document.pages();
    let total_pages = pages.len() as usize;
    info!("PDF loaded: {} pages", total_pages);

    if let Some(ref cb) = config.progress_callback {
        cb.on_extraction_start(total_pages);
    }

    let mut records = Vec::with_capacity(total_pages);

    for (idx, page) in pages.iter().enumerate() {
        let page_num = idx + 1;
        if let Some(ref cb) = config.progress_callback {
            cb.on_page_start(page_num, total_pages);
        }

        let page_text = text::extract_page_text(&page, page_num)?;

        let out_path = layout.page_image_path(page_num);
        let (width, height) = render::render_page_to_jpeg(
            &page,
            page_num,
            &out_path,
            config.zoom,
            config.jpeg_quality,
        )?;

        let text_chars = page_text.chars().count();
        debug!(
            "Page {}/{}: {}x{} px, {} chars of text",
            page_num, total_pages, width, height, text_chars
        );

        records.push(PageRecord {
            index: page_num,
            image: layout::relative_image_path(page_num),
            text: page_text,
        });

        if let Some(ref cb) = config.progress_callback {
            cb.on_page_complete(page_num, total_pages, text_chars);
        }
    }

    if let Some(ref cb) = config.progress_callback {
        cb.on_extraction_complete(total_pages);
    }

    Ok(Manifest::new(input::document_title(pdf_path), records))
}

/// Read document metadata without rendering anything.
pub fn document_info(document: &PdfDocument, pdf_path: &Path) -> DocumentInfo {
    let metadata = document.metadata();

    let get_meta = |tag: PdfDocumentMetadataTagType| -> Option<String> {
        metadata.get(tag).and_then(|t| {
            let v = t.value().trim().to_string();
            if v.is_empty() {
                None
            } else {
                Some(v)
            }
        })
    };

    DocumentInfo {
        file_title: input::document_title(pdf_path),
        title: get_meta(PdfDocumentMetadataTagType::Title),
        author: get_meta(PdfDocumentMetadataTagType::Author),
        subject: get_meta(PdfDocumentMetadataTagType::Subject),
        creator: get_meta(PdfDocumentMetadataTagType::Creator),
        producer: get_meta(PdfDocumentMetadataTagType::Producer),
        page_count: document.pages().len() as usize,
        pdf_version: format!("{:?}", document.version()),
    }
}
