//! Pipeline stages for PDF-to-site extraction.
//!
//! Each submodule implements one step. The stages that touch pdfium take
//! borrowed page/document handles, so the caller decides how long the
//! document stays open.
//!
//! ## Data Flow
//!
//! ```text
//! input ──▶ pdfium ──▶ layout ──▶ extract ──┬─▶ text
//! (check)   (bind)     (mkdir)    (pages)   └─▶ render ──▶ encode
//!                                                (pdfium)    (JPEG)
//! ```
//!
//! 1. [`input`]   : verify the PDF exists and starts with `%PDF`
//! 2. [`pdfium`]  : locate and bind the pdfium shared library
//! 3. [`layout`]  : output paths and directory creation
//! 4. [`extract`] : open the document and walk its pages in order
//! 5. [`text`]    : page text layer → normalised plain text
//! 6. [`render`]  : rasterise at the configured zoom
//! 7. [`encode`]  : RGB JPEG on disk

pub mod encode;
pub mod extract;
pub mod input;
pub mod layout;
pub mod pdfium;
pub mod render;
pub mod text;
