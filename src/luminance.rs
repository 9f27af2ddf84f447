//! Grayscale normalization into a [0, 1] luminance field.

use image::imageops::{self, FilterType};
use image::{DynamicImage, ImageBuffer, Luma};

/// ITU-R BT.601 weights.
const WEIGHT_R: f64 = 0.299;
const WEIGHT_G: f64 = 0.587;
const WEIGHT_B: f64 = 0.114;

const CHANNEL_MAX: f64 = u16::MAX as f64;

/// Row-major luminance values in [0, 1].
#[derive(Debug, Clone, PartialEq)]
pub struct LuminanceField {
    width: u32,
    height: u32,
    data: Vec<f32>,
}

impl LuminanceField {
    /// Compute perceptual luminance at 16 bits per channel. Alpha is
    /// premultiplied, so transparent pixels read as dark.
    pub fn from_image(image: &DynamicImage) -> Self {
        let rgba = image.to_rgba16();
        let data = rgba
            .pixels()
            .map(|p| {
                let [r, g, b, a] = p.0.map(|c| c as f64 / CHANNEL_MAX);
                ((WEIGHT_R * r + WEIGHT_G * g + WEIGHT_B * b) * a).clamp(0.0, 1.0) as f32
            })
            .collect();
        Self { width: rgba.width(), height: rgba.height(), data }
    }

    /// Build a field from raw values; `None` if the length does not match.
    pub fn from_raw(width: u32, height: u32, data: Vec<f32>) -> Option<Self> {
        if data.len() != width as usize * height as usize {
            return None;
        }
        let data = data.into_iter().map(|v| v.clamp(0.0, 1.0)).collect();
        Some(Self { width, height, data })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Luminance at (x, y); 0.0 outside the field.
    pub fn get(&self, x: u32, y: u32) -> f32 {
        if x >= self.width || y >= self.height {
            return 0.0;
        }
        self.data[y as usize * self.width as usize + x as usize]
    }

    /// Lanczos3 resample to exactly `width` x `height`.
    pub fn resize(&self, width: u32, height: u32) -> Self {
        if self.is_empty() {
            let data = vec![0.0; width as usize * height as usize];
            return Self { width, height, data };
        }

        let buffer: ImageBuffer<Luma<f32>, Vec<f32>> =
            ImageBuffer::from_raw(self.width, self.height, self.data.clone())
                .expect("field length matches its dimensions");
        let resized = imageops::resize(&buffer, width, height, FilterType::Lanczos3);
        // Lanczos overshoots near edges
        let data = resized.into_raw().into_iter().map(|v| v.clamp(0.0, 1.0)).collect();
        Self { width, height, data }
    }
}
