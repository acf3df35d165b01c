//! Half-block terminal rendering.
//!
//! Terminal cells are roughly twice as tall as they are wide, so each
//! printed character carries two vertically stacked modules.

use std::fmt;

use crate::matrix::ModuleMatrix;

/// Both modules dark
pub const FULL_BLOCK: char = '█';
/// Top dark, bottom light
pub const UPPER_HALF: char = '▀';
/// Top light, bottom dark
pub const LOWER_HALF: char = '▄';
/// Both modules light
pub const EMPTY: char = ' ';

/// Lines of half-block glyphs derived from a module matrix
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedGlyphBlock {
    lines: Vec<String>,
}

impl RenderedGlyphBlock {
    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

impl fmt::Display for RenderedGlyphBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.lines.join("\n"))
    }
}

/// Map a (top, bottom) module pair to its glyph.
pub fn glyph(top: bool, bottom: bool) -> char {
    match (top, bottom) {
        (true, true) => FULL_BLOCK,
        (true, false) => UPPER_HALF,
        (false, true) => LOWER_HALF,
        (false, false) => EMPTY,
    }
}

/// Render the matrix two rows per line. A trailing odd row pairs with light modules.
pub fn render_half_blocks(matrix: &ModuleMatrix) -> RenderedGlyphBlock {
    let lines = (0..matrix.height())
        .step_by(2)
        .map(|y| {
            (0..matrix.width())
                .map(|x| glyph(matrix.is_dark(x, y), matrix.is_dark(x, y + 1)))
                .collect()
        })
        .collect();

    RenderedGlyphBlock { lines }
}
