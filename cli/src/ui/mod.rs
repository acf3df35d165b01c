//! UI utilities for terminal output.

mod qr;
mod report;

pub use qr::print_glyph_block;
pub use report::print_summary;
