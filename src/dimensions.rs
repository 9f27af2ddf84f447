//! Glyph grid planning with aspect-ratio correction.

use crate::{BrailleError, RenderConfig, Result};

/// Columns used when neither axis is constrained.
pub const DEFAULT_COLUMNS: u32 = 80;

/// Braille cells cover 2x4 sub-pixels and terminal cells are ~1:2.
const CELL_ASPECT_CORRECTION: f64 = 2.0;

/// Output grid in glyphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSize {
    pub cols: u32,
    pub rows: u32,
}

impl GridSize {
    /// Sub-pixel columns covered by the grid.
    pub fn pixel_width(&self) -> u32 {
        self.cols * 2
    }

    /// Sub-pixel rows covered by the grid.
    pub fn pixel_height(&self) -> u32 {
        self.rows * 4
    }
}

/// Compute the glyph grid for a `src_width` x `src_height` pixel image.
///
/// Both targets set: used as-is, aspect ratio is ignored. One target set:
/// the other axis follows the source aspect ratio. Neither: 80 columns.
pub fn plan(src_width: u32, src_height: u32, config: &RenderConfig) -> Result<GridSize> {
    if src_width == 0 || src_height == 0 {
        return Err(BrailleError::InvalidDimensions(format!(
            "source image must be non-empty, got {}x{}",
            src_width, src_height
        )));
    }

    let aspect = src_width as f64 / src_height as f64 * CELL_ASPECT_CORRECTION;

    let (cols, rows) = if config.width > 0 && config.height > 0 {
        (config.width, config.height)
    } else if config.width > 0 {
        (config.width, glyph_count(config.width as f64 / aspect)?)
    } else if config.height > 0 {
        (glyph_count(config.height as f64 * aspect)?, config.height)
    } else {
        (DEFAULT_COLUMNS, glyph_count(DEFAULT_COLUMNS as f64 / aspect)?)
    };

    // The sub-pixel grid must be addressable too
    if cols.checked_mul(2).is_none() || rows.checked_mul(4).is_none() {
        return Err(BrailleError::InvalidDimensions(format!(
            "glyph grid {}x{} is too large",
            cols, rows
        )));
    }

    Ok(GridSize { cols, rows })
}

/// Floor to a whole glyph count, at least 1.
fn glyph_count(value: f64) -> Result<u32> {
    if !value.is_finite() || value >= u32::MAX as f64 {
        return Err(BrailleError::InvalidDimensions(format!(
            "computed glyph count {} is out of range",
            value
        )));
    }
    Ok((value.floor() as u32).max(1))
}
