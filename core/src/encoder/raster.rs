//! Module matrix to PNG rasterizing

use std::io::Cursor;

use image::{DynamicImage, ImageFormat, Rgb, RgbImage};

use crate::constants::MAX_IMAGE_BYTES;
use crate::matrix::ModuleMatrix;
use crate::{Error, Result};

/// Encoded PNG bytes with their pixel dimensions
#[derive(Debug, Clone)]
pub struct RasterImage {
    pub png: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

/// Draw `matrix` with square modules of `module_px` pixels inside a
/// quiet zone of `border` modules, then encode as PNG.
pub fn rasterize_png(
    matrix: &ModuleMatrix,
    module_px: u32,
    border: u32,
    foreground: Rgb<u8>,
    background: Rgb<u8>,
) -> Result<RasterImage> {
    if module_px == 0 {
        return Err(Error::InvalidParameter("module size must be at least 1 pixel".to_string()));
    }

    let span = |modules: usize| -> Result<u32> {
        u32::try_from(modules)
            .ok()
            .and_then(|m| m.checked_add(border.checked_mul(2)?))
            .and_then(|m| m.checked_mul(module_px))
            .ok_or_else(|| Error::InvalidParameter("image dimensions overflow".to_string()))
    };
    let width = span(matrix.width())?;
    let height = span(matrix.height())?;

    let buffer_bytes = u64::from(width) * u64::from(height) * 3;
    if buffer_bytes > MAX_IMAGE_BYTES {
        return Err(Error::InvalidParameter(format!(
            "{}x{} pixel image needs {} bytes, limit is {}",
            width, height, buffer_bytes, MAX_IMAGE_BYTES
        )));
    }

    let mut img = RgbImage::from_pixel(width, height, background);
    for (y, row) in matrix.rows().enumerate() {
        for (x, _) in row.iter().enumerate().filter(|(_, dark)| **dark) {
            let px = (border + x as u32) * module_px;
            let py = (border + y as u32) * module_px;
            for dy in 0..module_px {
                for dx in 0..module_px {
                    img.put_pixel(px + dx, py + dy, foreground);
                }
            }
        }
    }

    let mut png = Vec::new();
    DynamicImage::ImageRgb8(img).write_to(&mut Cursor::new(&mut png), ImageFormat::Png)?;

    Ok(RasterImage { png, width, height })
}
