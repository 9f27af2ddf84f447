//! Image to Unicode braille art converter.

pub mod braille;
pub mod config;
pub mod decode;
pub mod dimensions;
pub mod luminance;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use braille::{GlyphCell, BIT_POSITIONS, BRAILLE_BASE};
pub use config::RenderConfig;
pub use dimensions::GridSize;
pub use luminance::LuminanceField;

use log::debug;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BrailleError {
    #[error("Image error: {0}")]
    Decode(#[from] image::ImageError),
    #[error("Invalid dimensions: {0}")]
    InvalidDimensions(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, BrailleError>;

/// Runs the full pipeline: grayscale, plan, resample, render.
#[derive(Debug, Clone)]
pub struct Converter {
    config: RenderConfig,
}

impl Converter {
    /// Validates `config` once; the converter never mutates it afterwards.
    pub fn new(config: RenderConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Glyph grid the image would be rendered at.
    pub fn grid_size(&self, image: &image::DynamicImage) -> Result<GridSize> {
        dimensions::plan(image.width(), image.height(), &self.config)
    }

    pub fn convert(&self, image: &image::DynamicImage) -> Result<String> {
        let field = LuminanceField::from_image(image);
        debug!("source image {}x{}", field.width(), field.height());

        let grid = dimensions::plan(field.width(), field.height(), &self.config)?;
        debug!("glyph grid {}x{}", grid.cols, grid.rows);

        let resized = field.resize(grid.pixel_width(), grid.pixel_height());
        debug!("resampled to {}x{}", resized.width(), resized.height());

        Ok(braille::render(&resized, grid, &self.config))
    }

    /// Decode the image at `path` and convert it.
    pub fn convert_path(&self, path: impl AsRef<Path>) -> Result<String> {
        let image = decode::open(path)?;
        self.convert(&image)
    }

    /// Convert and persist the text to `output`. The text is fully built
    /// before anything is written.
    pub fn convert_to_file(
        &self,
        image: &image::DynamicImage,
        output: impl AsRef<Path>,
    ) -> Result<String> {
        let text = self.convert(image)?;
        std::fs::write(output.as_ref(), &text)?;
        debug!("wrote {} bytes to {}", text.len(), output.as_ref().display());
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, Rgb, RgbImage};

    fn solid(width: u32, height: u32, value: u8) -> DynamicImage {
        DynamicImage::ImageRgb8(RgbImage::from_pixel(width, height, Rgb([value; 3])))
    }

    #[test]
    fn rejects_invalid_threshold() {
        let config = RenderConfig::default().with_threshold(1.5);
        assert!(matches!(Converter::new(config), Err(BrailleError::InvalidConfig(_))));
    }

    #[test]
    fn black_cell_is_blank_glyph() {
        let converter = Converter::new(RenderConfig::default().with_size(1, 1)).unwrap();
        assert_eq!(converter.convert(&solid(2, 4, 0)).unwrap(), "\u{2800}\n");
    }

    #[test]
    fn white_cell_is_full_glyph() {
        let converter = Converter::new(RenderConfig::default().with_size(1, 1)).unwrap();
        assert_eq!(converter.convert(&solid(2, 4, 255)).unwrap(), "\u{28FF}\n");
    }

    #[test]
    fn zero_height_image_is_rejected() {
        let converter = Converter::new(RenderConfig::default()).unwrap();
        let err = converter.convert(&solid(10, 0, 0)).unwrap_err();
        assert!(matches!(err, BrailleError::InvalidDimensions(_)));
    }

    #[test]
    fn grid_size_uses_planner() {
        let converter = Converter::new(RenderConfig::default().with_width(40)).unwrap();
        let grid = converter.grid_size(&solid(200, 100, 0)).unwrap();
        assert_eq!((grid.cols, grid.rows), (40, 10));
    }
}
