//! `qrcode` crate backed encoder

use qrcode::types::QrError;
use qrcode::{Color, EcLevel, QrCode, Version};
use tracing::debug;

use super::{EncodedSymbol, QrEncoder};
use crate::constants::{MAX_VERSION, MIN_VERSION};
use crate::matrix::ModuleMatrix;
use crate::params::ErrorCorrection;
use crate::{Error, Result};

impl From<ErrorCorrection> for EcLevel {
    fn from(level: ErrorCorrection) -> Self {
        match level {
            ErrorCorrection::L => EcLevel::L,
            ErrorCorrection::M => EcLevel::M,
            ErrorCorrection::Q => EcLevel::Q,
            ErrorCorrection::H => EcLevel::H,
        }
    }
}

/// Encoder using the `qrcode` crate
#[derive(Debug, Clone, Copy, Default)]
pub struct QrcodeEncoder;

impl QrcodeEncoder {
    pub fn new() -> Self {
        Self
    }
}

impl QrEncoder for QrcodeEncoder {
    fn encode(
        &self,
        data: &str,
        min_version: u8,
        ec_level: ErrorCorrection,
        allow_grow: bool,
    ) -> Result<EncodedSymbol> {
        if !(MIN_VERSION..=MAX_VERSION).contains(&min_version) {
            return Err(Error::InvalidParameter(format!(
                "version {} out of range {}..={}",
                min_version, MIN_VERSION, MAX_VERSION
            )));
        }

        if min_version == MIN_VERSION && allow_grow {
            return match QrCode::with_error_correction_level(data.as_bytes(), ec_level.into()) {
                Ok(code) => {
                    let version = match code.version() {
                        Version::Normal(v) => v as u8,
                        Version::Micro(v) => {
                            return Err(Error::Encoding(format!("unexpected micro QR version {}", v)))
                        }
                    };
                    debug!(version, ec = %ec_level, width = code.width(), "encoded QR symbol");
                    symbol_from_code(&code, version, ec_level)
                }
                Err(QrError::DataTooLong) => Err(Error::DataTooLong {
                    len: data.len(),
                    max_version: MAX_VERSION,
                }),
                Err(e) => Err(Error::Encoding(e.to_string())),
            };
        }

        let max_version = if allow_grow { MAX_VERSION } else { min_version };

        for version in min_version..=max_version {
            match QrCode::with_version(data.as_bytes(), Version::Normal(version.into()), ec_level.into()) {
                Ok(code) => {
                    debug!(version, ec = %ec_level, width = code.width(), "encoded QR symbol");
                    return symbol_from_code(&code, version, ec_level);
                }
                Err(QrError::DataTooLong) => continue,
                Err(e) => return Err(Error::Encoding(e.to_string())),
            }
        }

        Err(Error::DataTooLong {
            len: data.len(),
            max_version,
        })
    }
}

fn symbol_from_code(code: &QrCode, version: u8, ec_level: ErrorCorrection) -> Result<EncodedSymbol> {
    let width = code.width();
    let modules = code
        .to_colors()
        .into_iter()
        .map(|c| c == Color::Dark)
        .collect();

    Ok(EncodedSymbol {
        version,
        ec_level,
        matrix: ModuleMatrix::new(width, width, modules)?,
    })
}
