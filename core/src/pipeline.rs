//! Encode, save and optionally render one QR code

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::encoder::{QrEncoder, QrcodeEncoder};
use crate::output::write_atomic;
use crate::params::{EncodingRequest, ErrorCorrection};
use crate::render::{render_half_blocks, RenderedGlyphBlock};
use crate::{Config, Result};

/// Where the PNG went and how big it is
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedImage {
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
    pub file_size: u64,
}

/// What the terminal display decision came to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminalOutput {
    /// Terminal rendering was not requested
    Disabled,
    /// Symbol was small enough to draw
    Rendered(RenderedGlyphBlock),
    /// Symbol version reached the display limit
    TooLarge { version: u8 },
}

/// Result of a generation run, ready for reporting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub version: u8,
    /// Side length of the module matrix
    pub dimension: usize,
    pub ec_level: ErrorCorrection,
    pub image: Option<SavedImage>,
    pub terminal: TerminalOutput,
}

/// Runs requests through an encoder
pub struct Generator<E = QrcodeEncoder> {
    encoder: E,
    config: Config,
}

impl Generator<QrcodeEncoder> {
    /// Create a generator backed by the `qrcode` crate
    pub fn new(config: Config) -> Self {
        Self::with_encoder(QrcodeEncoder::new(), config)
    }
}

impl<E: QrEncoder> Generator<E> {
    /// Create with a custom encoder
    pub fn with_encoder(encoder: E, config: Config) -> Self {
        Self { encoder, config }
    }

    /// Encode the request, write the PNG to `output` if given, and decide
    /// on terminal output.
    ///
    /// Terminal rendering only happens when `Config::show_terminal` is set,
    /// whether or not an output path is given.
    pub fn generate(&self, request: &EncodingRequest, output: Option<&Path>) -> Result<Summary> {
        let params = request.params();
        debug!(
            len = request.url().chars().count(),
            box_size = params.box_size,
            border = params.border,
            ec = %params.ec_level,
            "selected encoding parameters"
        );

        let symbol = self.encoder.encode(
            request.url(),
            request.min_version(),
            params.ec_level,
            request.allow_grow(),
        )?;

        let image = match output {
            Some(path) => {
                let raster = self.encoder.rasterize(
                    &symbol.matrix,
                    params.box_size,
                    params.border,
                    self.config.foreground,
                    self.config.background,
                )?;
                let file_size = write_atomic(path, &raster.png)?;
                info!(path = %path.display(), version = symbol.version, "saved QR code");
                Some(SavedImage {
                    path: path.to_path_buf(),
                    width: raster.width,
                    height: raster.height,
                    file_size,
                })
            }
            None => None,
        };

        let terminal = if !self.config.show_terminal {
            TerminalOutput::Disabled
        } else if symbol.version < self.config.terminal_version_limit {
            TerminalOutput::Rendered(render_half_blocks(&symbol.matrix))
        } else {
            TerminalOutput::TooLarge { version: symbol.version }
        };

        Ok(Summary {
            version: symbol.version,
            dimension: symbol.matrix.width(),
            ec_level: symbol.ec_level,
            image,
            terminal,
        })
    }
}
