//! Encoding parameter selection
//!
//! The box size shrinks as the input grows so long URLs still produce a
//! reasonably sized image. Boundaries use strict "greater-than" comparisons.

use std::fmt;
use std::str::FromStr;

use crate::constants::{
    DEFAULT_BORDER, LONG_INPUT_BOX_SIZE, LONG_INPUT_THRESHOLD, MEDIUM_INPUT_BOX_SIZE,
    MEDIUM_INPUT_THRESHOLD, MIN_VERSION, SHORT_INPUT_BOX_SIZE,
};
use crate::{Error, Result};

/// QR error-correction tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorCorrection {
    /// ~7% recovery, smallest symbol
    #[default]
    L,
    M,
    Q,
    H,
}

impl fmt::Display for ErrorCorrection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::L => "L",
            Self::M => "M",
            Self::Q => "Q",
            Self::H => "H",
        };
        f.write_str(s)
    }
}

impl FromStr for ErrorCorrection {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "L" => Ok(Self::L),
            "M" => Ok(Self::M),
            "Q" => Ok(Self::Q),
            "H" => Ok(Self::H),
            other => Err(Error::InvalidParameter(format!(
                "unknown error correction level '{}' (expected L, M, Q or H)",
                other
            ))),
        }
    }
}

/// Output of the parameter selector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodingParams {
    pub box_size: u32,
    pub border: u32,
    pub ec_level: ErrorCorrection,
}

/// Pick box size, border and error correction from the input length in characters.
pub fn select_params(len: usize) -> EncodingParams {
    let box_size = if len > LONG_INPUT_THRESHOLD {
        LONG_INPUT_BOX_SIZE
    } else if len > MEDIUM_INPUT_THRESHOLD {
        MEDIUM_INPUT_BOX_SIZE
    } else {
        SHORT_INPUT_BOX_SIZE
    };

    EncodingParams {
        box_size,
        border: DEFAULT_BORDER,
        ec_level: ErrorCorrection::L,
    }
}

/// Field-by-field replacements for the selector's choice
#[derive(Debug, Clone, Copy, Default)]
pub struct ParamOverrides {
    pub box_size: Option<u32>,
    pub border: Option<u32>,
    pub ec_level: Option<ErrorCorrection>,
}

/// Everything needed to encode and rasterize one URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodingRequest {
    url: String,
    params: EncodingParams,
    min_version: u8,
    allow_grow: bool,
}

impl EncodingRequest {
    /// Build a request using the length-based selector.
    pub fn new(url: impl Into<String>) -> Self {
        let url = url.into();
        let params = select_params(url.chars().count());
        Self {
            url,
            params,
            min_version: MIN_VERSION,
            allow_grow: true,
        }
    }

    /// Build a request, replacing any selected parameter that has an override.
    pub fn with_overrides(url: impl Into<String>, overrides: ParamOverrides) -> Result<Self> {
        let mut request = Self::new(url);

        if let Some(box_size) = overrides.box_size {
            if box_size == 0 {
                return Err(Error::InvalidParameter("box size must be at least 1".to_string()));
            }
            request.params.box_size = box_size;
        }
        if let Some(border) = overrides.border {
            request.params.border = border;
        }
        if let Some(ec_level) = overrides.ec_level {
            request.params.ec_level = ec_level;
        }

        Ok(request)
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn params(&self) -> EncodingParams {
        self.params
    }

    pub fn min_version(&self) -> u8 {
        self.min_version
    }

    pub fn allow_grow(&self) -> bool {
        self.allow_grow
    }
}
