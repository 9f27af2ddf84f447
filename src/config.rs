//! Render configuration and input validation.

use crate::{BrailleError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Extensions accepted for input images.
pub const SUPPORTED_EXTENSIONS: [&str; 4] = ["png", "jpg", "jpeg", "webp"];

pub const DEFAULT_THRESHOLD: f32 = 0.5;

/// Immutable rendering options. `width`/`height` are glyph counts, 0 = unset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub width: u32,
    pub height: u32,
    pub threshold: f32,
    pub invert: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self { width: 0, height: 0, threshold: DEFAULT_THRESHOLD, invert: false }
    }
}

impl RenderConfig {
    pub fn with_width(mut self, width: u32) -> Self {
        self.width = width;
        self
    }

    pub fn with_height(mut self, height: u32) -> Self {
        self.height = height;
        self
    }

    /// Fix both axes. Aspect ratio is not preserved.
    pub fn with_size(self, width: u32, height: u32) -> Self {
        self.with_width(width).with_height(height)
    }

    pub fn with_threshold(mut self, threshold: f32) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_invert(mut self, invert: bool) -> Self {
        self.invert = invert;
        self
    }

    pub fn validate(&self) -> Result<()> {
        // NaN fails the range check too
        if !(0.0..=1.0).contains(&self.threshold) {
            return Err(BrailleError::InvalidConfig(format!(
                "threshold must be between 0.0 and 1.0, got {}",
                self.threshold
            )));
        }
        Ok(())
    }
}

/// Check that `path` names an existing regular file with a supported
/// image extension.
pub fn validate_input_path(path: &Path) -> Result<()> {
    let metadata = std::fs::metadata(path)?;
    if metadata.is_dir() {
        return Err(BrailleError::InvalidConfig(format!(
            "input path must be a file, not a directory: {}",
            path.display()
        )));
    }
    if !metadata.is_file() {
        return Err(BrailleError::InvalidConfig(format!(
            "input path is not a regular file: {}",
            path.display()
        )));
    }

    let supported = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| SUPPORTED_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
        .unwrap_or(false);
    if !supported {
        return Err(BrailleError::InvalidConfig(
            "input file must be PNG, JPG, or WEBP".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_values() {
        let config = RenderConfig::default();
        assert_eq!(config.width, 0);
        assert_eq!(config.height, 0);
        assert_eq!(config.threshold, 0.5);
        assert!(!config.invert);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn threshold_bounds_are_inclusive() {
        assert!(RenderConfig::default().with_threshold(0.0).validate().is_ok());
        assert!(RenderConfig::default().with_threshold(1.0).validate().is_ok());
        assert!(RenderConfig::default().with_threshold(-0.1).validate().is_err());
        assert!(RenderConfig::default().with_threshold(f32::NAN).validate().is_err());
    }

    #[test]
    fn deserializes_partial_settings() {
        let config: RenderConfig = serde_json::from_str(r#"{"width": 40, "invert": true}"#).unwrap();
        assert_eq!(config, RenderConfig::default().with_width(40).with_invert(true));
    }

    #[test]
    fn input_path_checks() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(validate_input_path(dir.path()), Err(BrailleError::InvalidConfig(_))));
        assert!(matches!(
            validate_input_path(&dir.path().join("missing.png")),
            Err(BrailleError::Io(_))
        ));

        let text = dir.path().join("notes.txt");
        std::fs::write(&text, "hello").unwrap();
        assert!(matches!(validate_input_path(&text), Err(BrailleError::InvalidConfig(_))));

        let upper = dir.path().join("photo.JPEG");
        std::fs::write(&upper, [0u8; 4]).unwrap();
        assert!(validate_input_path(&upper).is_ok());
    }
}
