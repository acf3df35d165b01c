//! compact-qr core - compact QR code generation
//!
//! This library selects QR encoding parameters from the input length,
//! rasterizes the symbol to PNG and renders small symbols as half-block
//! glyphs for display in a terminal.

pub mod constants;
pub mod encoder;
pub mod matrix;
pub mod output;
pub mod params;
pub mod pipeline;
pub mod render;

mod error;

pub use error::{Error, Result};

use image::Rgb;

/// Configuration for a generation run
#[derive(Debug, Clone)]
pub struct Config {
    /// Draw the symbol in the terminal when it is small enough
    pub show_terminal: bool,
    /// Symbols with a version at or above this are not drawn
    pub terminal_version_limit: u8,
    /// Dark module colour
    pub foreground: Rgb<u8>,
    /// Light module and quiet zone colour
    pub background: Rgb<u8>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            show_terminal: false,
            terminal_version_limit: constants::DEFAULT_TERMINAL_VERSION_LIMIT,
            foreground: Rgb([0, 0, 0]),
            background: Rgb([255, 255, 255]),
        }
    }
}

// Re-export key types for convenience
pub use encoder::{EncodedSymbol, QrEncoder, QrcodeEncoder, RasterImage};
pub use matrix::ModuleMatrix;
pub use params::{select_params, EncodingParams, EncodingRequest, ErrorCorrection, ParamOverrides};
pub use pipeline::{Generator, SavedImage, Summary, TerminalOutput};
pub use render::{render_half_blocks, RenderedGlyphBlock};
