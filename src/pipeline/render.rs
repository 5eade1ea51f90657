//! Page rasterisation: render one PDF page to a JPEG via pdfium.
//!
//! Resolution is expressed as a zoom factor over the page's size in points
//! (1 pt = 1/72 in), so zoom 1.0 is 72 DPI and the default 2.0 is 144 DPI.
//! Pages keep their own aspect ratio and size; a mixed-size deck produces
//! mixed-size images.

use crate::error::SiteError;
use crate::pipeline::encode;
use image::DynamicImage;
use pdfium_render::prelude::*;
use std::path::Path;
use tracing::debug;

/// Render config scaling every page by `zoom`.
pub fn render_config(zoom: f32) -> PdfRenderConfig {
    PdfRenderConfig::new()
        .scale_page_by_factor(zoom)
        .render_form_data(true)
        .render_annotations(true)
}

/// Rasterise `page` into an in-memory image.
///
/// `page_num` is 1-indexed and only used in error messages.
pub fn rasterize_page(
    page: &PdfPage,
    page_num: usize,
    config: &PdfRenderConfig,
) -> Result<DynamicImage, SiteError> {
    let bitmap =
        page.render_with_config(config)
            .map_err(|e| SiteError::RasterisationFailed {
                page: page_num,
                detail: format!("{:?}", e),
            })?;

    let image = bitmap.as_image();
    if image.width() == 0 || image.height() == 0 {
        return Err(SiteError::RasterisationFailed {
            page: page_num,
            detail: format!("empty bitmap {}x{}", image.width(), image.height()),
        });
    }
    Ok(image)
}

/// Render `page` at `zoom` and write it as a JPEG to `out_path`.
///
/// Returns the pixel dimensions of the written image.
pub fn render_page_to_jpeg(
    page: &PdfPage,
    page_num: usize,
    out_path: &Path,
    zoom: f32,
    quality: u8,
) -> Result<(u32, u32), SiteError> {
    let image = rasterize_page(page, page_num, &render_config(zoom))?;
    let dims = (image.width(), image.height());
    debug!(
        "Rendered page {} ({:.0}x{:.0} pt) → {}x{} px",
        page_num,
        page.width().value,
        page.height().value,
        dims.0,
        dims.1
    );

    encode::write_jpeg(&image, out_path, quality)?;
    Ok(dims)
}
