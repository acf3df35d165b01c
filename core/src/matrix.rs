//! Boolean module grid produced by the encoder

use crate::{Error, Result};

/// Row-major grid of modules, `true` meaning dark
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleMatrix {
    width: usize,
    height: usize,
    modules: Vec<bool>,
}

impl ModuleMatrix {
    /// Wrap a flat row-major module buffer.
    pub fn new(width: usize, height: usize, modules: Vec<bool>) -> Result<Self> {
        if modules.len() != width * height {
            return Err(Error::InvalidMatrix(format!(
                "expected {} modules for {}x{}, got {}",
                width * height,
                width,
                height,
                modules.len()
            )));
        }
        Ok(Self { width, height, modules })
    }

    /// Build from nested rows; every row must have the same length.
    pub fn from_rows(rows: &[Vec<bool>]) -> Result<Self> {
        let width = rows.first().map(Vec::len).unwrap_or(0);
        if let Some(bad) = rows.iter().position(|row| row.len() != width) {
            return Err(Error::InvalidMatrix(format!(
                "row {} has {} modules, expected {}",
                bad,
                rows[bad].len(),
                width
            )));
        }
        let modules = rows.iter().flatten().copied().collect();
        Self::new(width, rows.len(), modules)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Module at column `x`, row `y`. Out-of-range positions read as light.
    pub fn is_dark(&self, x: usize, y: usize) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        self.modules[y * self.width + x]
    }

    /// Iterate rows as slices.
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> {
        // chunks() panics on zero, and an empty matrix has no rows anyway
        self.modules.chunks(self.width.max(1))
    }
}
