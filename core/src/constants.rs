//! Centralized encoding constants
//!
//! Thresholds and defaults used by parameter selection and by the
//! terminal display policy live here so both stay in one place.

/// Inputs strictly longer than this get the smallest box size
pub const LONG_INPUT_THRESHOLD: usize = 300;

/// Inputs strictly longer than this (and not long) get the medium box size
pub const MEDIUM_INPUT_THRESHOLD: usize = 150;

/// Pixels per module for inputs longer than `LONG_INPUT_THRESHOLD`
pub const LONG_INPUT_BOX_SIZE: u32 = 5;

/// Pixels per module for inputs in the medium band
pub const MEDIUM_INPUT_BOX_SIZE: u32 = 7;

/// Pixels per module for short inputs
pub const SHORT_INPUT_BOX_SIZE: u32 = 10;

/// Quiet zone width in modules
pub const DEFAULT_BORDER: u32 = 1;

/// Smallest QR version
pub const MIN_VERSION: u8 = 1;

/// Largest QR version
pub const MAX_VERSION: u8 = 40;

/// Symbols at or above this version are not drawn in the terminal
pub const DEFAULT_TERMINAL_VERSION_LIMIT: u8 = 10;

/// Environment variable that turns on terminal rendering when set to "1"
pub const SHOW_TERMINAL_ENV: &str = "SHOW_TERMINAL";

/// Upper bound on the RGB pixel buffer a rasterized image may need (256 MiB)
pub const MAX_IMAGE_BYTES: u64 = 256 * 1024 * 1024;
