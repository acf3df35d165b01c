//! Encoder seam between the pipeline and the QR symbol library

mod backend;
mod raster;

pub use backend::QrcodeEncoder;
pub use raster::{rasterize_png, RasterImage};

use image::Rgb;

use crate::matrix::ModuleMatrix;
use crate::params::ErrorCorrection;
use crate::Result;

/// A symbol produced by an encoder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedSymbol {
    /// Version actually used, which may exceed the requested minimum
    pub version: u8,
    pub ec_level: ErrorCorrection,
    pub matrix: ModuleMatrix,
}

/// Narrow interface over a QR encoding library.
///
/// Implementors only need `encode`; rasterizing a module matrix does not
/// depend on how the matrix was produced.
pub trait QrEncoder {
    /// Encode `data` starting at `min_version`. With `allow_grow` the
    /// smallest version from `min_version` upward that fits is chosen.
    fn encode(
        &self,
        data: &str,
        min_version: u8,
        ec_level: ErrorCorrection,
        allow_grow: bool,
    ) -> Result<EncodedSymbol>;

    /// Draw the matrix as a PNG with `module_px` pixels per module and
    /// `border` light modules around it.
    fn rasterize(
        &self,
        matrix: &ModuleMatrix,
        module_px: u32,
        border: u32,
        foreground: Rgb<u8>,
        background: Rgb<u8>,
    ) -> Result<RasterImage> {
        rasterize_png(matrix, module_px, border, foreground, background)
    }
}
