//! Image encoding: `DynamicImage` → optimised baseline JPEG file on disk.
//!
//! Rendered pages arrive as RGBA (pdfium paints onto an opaque white
//! background, so the alpha channel carries no information). JPEG has no
//! alpha, so the buffer is reduced to RGB before encoding. Huffman tables are
//! computed per image rather than taken from the standard set.

use crate::error::SiteError;
use image::DynamicImage;
use jpeg_encoder::{ColorType, Encoder};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::debug;

/// Write `img` to `out_path` as a JPEG at the given quality (1–100), with
/// optimised Huffman tables.
pub fn write_jpeg(img: &DynamicImage, out_path: &Path, quality: u8) -> Result<(), SiteError> {
    let rgb = img.to_rgb8();
    let (width, height) = match (u16::try_from(rgb.width()), u16::try_from(rgb.height())) {
        (Ok(w), Ok(h)) => (w, h),
        _ => {
            return Err(SiteError::ImageTooLarge {
                path: out_path.to_path_buf(),
                width: rgb.width(),
                height: rgb.height(),
            })
        }
    };

    let file = File::create(out_path).map_err(|e| SiteError::OutputWriteFailed {
        path: out_path.to_path_buf(),
        source: e,
    })?;
    let mut writer = BufWriter::new(file);

    let mut encoder = Encoder::new(&mut writer, quality);
    encoder.set_optimized_huffman_tables(true);
    encoder
        .encode(rgb.as_raw(), width, height, ColorType::Rgb)
        .map_err(|e| SiteError::ImageWriteFailed {
            path: out_path.to_path_buf(),
            source: e,
        })?;

    writer.flush().map_err(|e| SiteError::OutputWriteFailed {
        path: out_path.to_path_buf(),
        source: e,
    })?;

    debug!(
        "Encoded {}x{} JPEG (q={}) → {}",
        rgb.width(),
        rgb.height(),
        quality,
        out_path.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    fn red_square(size: u32) -> DynamicImage {
        DynamicImage::ImageRgba8(RgbaImage::from_pixel(size, size, Rgba([255, 0, 0, 255])))
    }

    #[test]
    fn writes_decodable_jpeg() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("page-01.jpg");

        write_jpeg(&red_square(16), &path, 80).expect("encode should succeed");

        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[..3], &[0xFF, 0xD8, 0xFF], "JPEG SOI marker");
        assert_eq!(
            image::guess_format(&bytes).unwrap(),
            image::ImageFormat::Jpeg
        );
        let decoded = image::load_from_memory(&bytes).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (16, 16));
        assert_eq!(decoded.color(), image::ColorType::Rgb8);
    }

    #[test]
    fn lower_quality_gives_smaller_file() {
        let dir = tempfile::tempdir().unwrap();
        let img = DynamicImage::ImageRgba8(RgbaImage::from_fn(128, 128, |x, y| {
            Rgba([(x * 2) as u8, (y * 2) as u8, ((x ^ y) & 0xFF) as u8, 255])
        }));
        let hi = dir.path().join("hi.jpg");
        let lo = dir.path().join("lo.jpg");

        write_jpeg(&img, &hi, 95).unwrap();
        write_jpeg(&img, &lo, 10).unwrap();

        let hi_len = std::fs::metadata(&hi).unwrap().len();
        let lo_len = std::fs::metadata(&lo).unwrap().len();
        assert!(lo_len < hi_len, "q10 {lo_len} bytes vs q95 {hi_len} bytes");
    }

    #[test]
    fn huffman_tables_are_optimised() {
        let dir = tempfile::tempdir().unwrap();
        let img = DynamicImage::ImageRgba8(RgbaImage::from_fn(320, 240, |x, y| {
            Rgba([(x % 256) as u8, (y % 256) as u8, ((x * y) % 256) as u8, 255])
        }));
        let path = dir.path().join("page-01.jpg");
        write_jpeg(&img, &path, 80).unwrap();
        let ours = std::fs::metadata(&path).unwrap().len() as usize;

        let rgb = img.to_rgb8();
        let mut standard = Vec::new();
        Encoder::new(&mut standard, 80)
            .encode(rgb.as_raw(), 320, 240, ColorType::Rgb)
            .unwrap();

        assert!(
            ours < standard.len(),
            "optimised {ours} bytes vs standard tables {} bytes",
            standard.len()
        );
    }

    #[test]
    fn oversized_image_is_rejected_before_writing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("page-01.jpg");
        let img = DynamicImage::ImageRgba8(RgbaImage::new(70_000, 1));

        let err = write_jpeg(&img, &path, 80).unwrap_err();

        assert!(matches!(err, SiteError::ImageTooLarge { width: 70_000, .. }));
        assert!(!path.exists());
    }

    #[test]
    fn missing_parent_directory_is_an_output_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no-such-dir").join("page-01.jpg");
        let err = write_jpeg(&red_square(4), &path, 80).unwrap_err();
        assert!(matches!(err, SiteError::OutputWriteFailed { .. }));
    }
}
