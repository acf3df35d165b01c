use std::path::PathBuf;

use thiserror::Error;

/// compact-qr error types
#[derive(Error, Debug)]
pub enum Error {
    #[error("Data too long to encode: {len} bytes do not fit in version {max_version}")]
    DataTooLong { len: usize, max_version: u8 },

    #[error("QR encoding failed: {0}")]
    Encoding(String),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Invalid module matrix: {0}")]
    InvalidMatrix(String),

    #[error("Image encoding failed: {0}")]
    Image(#[from] image::ImageError),

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
