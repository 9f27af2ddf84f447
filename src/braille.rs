//! Braille glyph rendering: 2x4 sub-pixels packed into U+2800..U+28FF.

use crate::{GridSize, LuminanceField, RenderConfig};

#[cfg(not(target_arch = "wasm32"))]
use rayon::prelude::*;

/// Empty braille pattern.
pub const BRAILLE_BASE: char = '\u{2800}';

/// Bit set for the dot at `[column][row]` of a cell.
///
/// ```text
/// 0 3
/// 1 4
/// 2 5
/// 6 7
/// ```
pub const BIT_POSITIONS: [[u8; 4]; 2] = [[0, 1, 2, 6], [3, 4, 5, 7]];

/// Dot pattern of one glyph, indexed `[column][row]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GlyphCell(pub [[bool; 4]; 2]);

impl GlyphCell {
    /// Sample the cell at glyph (`col`, `row`) from a field already sized to
    /// the sub-pixel grid.
    pub fn sample(field: &LuminanceField, col: u32, row: u32, config: &RenderConfig) -> Self {
        let mut dots = [[false; 4]; 2];
        for (dx, column) in dots.iter_mut().enumerate() {
            for (dy, dot) in column.iter_mut().enumerate() {
                let lum = field.get(col * 2 + dx as u32, row * 4 + dy as u32);
                *dot = (lum > config.threshold) != config.invert;
            }
        }
        Self(dots)
    }

    pub fn bits(&self) -> u8 {
        let mut bits = 0u8;
        for (dx, column) in self.0.iter().enumerate() {
            for (dy, &on) in column.iter().enumerate() {
                if on {
                    bits |= 1 << BIT_POSITIONS[dx][dy];
                }
            }
        }
        bits
    }

    pub fn to_char(&self) -> char {
        // base + u8 always lands inside the braille block
        char::from_u32(BRAILLE_BASE as u32 + self.bits() as u32).unwrap_or(BRAILLE_BASE)
    }

    pub fn inverted(&self) -> Self {
        Self(self.0.map(|column| column.map(|dot| !dot)))
    }
}

/// Render a field sized `grid.pixel_width()` x `grid.pixel_height()` to text,
/// one line per glyph row, each terminated by `\n`.
pub fn render(field: &LuminanceField, grid: GridSize, config: &RenderConfig) -> String {
    #[cfg(not(target_arch = "wasm32"))]
    let rows: Vec<String> = (0..grid.rows)
        .into_par_iter()
        .map(|y| render_row(field, grid.cols, y, config))
        .collect();

    #[cfg(target_arch = "wasm32")]
    let rows: Vec<String> = (0..grid.rows)
        .map(|y| render_row(field, grid.cols, y, config))
        .collect();

    // braille glyphs are 3 bytes in UTF-8
    let mut out = String::with_capacity(grid.rows as usize * (grid.cols as usize * 3 + 1));
    for row in rows {
        out.push_str(&row);
        out.push('\n');
    }
    out
}

fn render_row(field: &LuminanceField, cols: u32, y: u32, config: &RenderConfig) -> String {
    (0..cols)
        .map(|x| GlyphCell::sample(field, x, y, config).to_char())
        .collect()
}
