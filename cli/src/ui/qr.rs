//! QR code display.

use compact_qr_core::RenderedGlyphBlock;

/// Print a rendered QR code to stderr.
///
/// Each character already holds 2 vertical modules; a blank line above and
/// below keeps the code visually separate from the surrounding output.
pub fn print_glyph_block(block: &RenderedGlyphBlock) {
    eprintln!();
    for line in block.lines() {
        eprintln!("{}", line);
    }
    eprintln!();
}
