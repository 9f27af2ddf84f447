//! Image decoding, format picked by extension or content sniffing.

use crate::Result;
use image::{DynamicImage, ImageFormat, ImageReader};
use log::debug;
use std::path::Path;

const SUPPORTED_FORMATS: [ImageFormat; 3] = [ImageFormat::Png, ImageFormat::Jpeg, ImageFormat::WebP];

/// Format implied by the file extension, if it is one we decode.
pub fn format_from_path(path: &Path) -> Option<ImageFormat> {
    let ext = path.extension()?.to_str()?;
    ImageFormat::from_extension(ext).filter(|format| SUPPORTED_FORMATS.contains(format))
}

/// Decode the image at `path`.
pub fn open(path: impl AsRef<Path>) -> Result<DynamicImage> {
    let path = path.as_ref();
    let mut reader = ImageReader::open(path)?;
    match format_from_path(path) {
        Some(format) => reader.set_format(format),
        None => reader = reader.with_guessed_format()?,
    }
    debug!("decoding {} as {:?}", path.display(), reader.format());
    Ok(reader.decode()?)
}

/// Decode an in-memory image, sniffing its format.
pub fn from_memory(bytes: &[u8]) -> Result<DynamicImage> {
    Ok(image::load_from_memory(bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BrailleError;
    use image::{Rgb, RgbImage};
    use std::io::Cursor;

    fn png_bytes() -> Vec<u8> {
        let img = RgbImage::from_pixel(4, 8, Rgb([200, 10, 10]));
        let mut bytes = Vec::new();
        DynamicImage::ImageRgb8(img)
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .unwrap();
        bytes
    }

    #[test]
    fn formats_by_extension() {
        assert_eq!(format_from_path(Path::new("a.png")), Some(ImageFormat::Png));
        assert_eq!(format_from_path(Path::new("a.JPG")), Some(ImageFormat::Jpeg));
        assert_eq!(format_from_path(Path::new("a.jpeg")), Some(ImageFormat::Jpeg));
        assert_eq!(format_from_path(Path::new("a.webp")), Some(ImageFormat::WebP));
        assert_eq!(format_from_path(Path::new("a.gif")), None);
        assert_eq!(format_from_path(Path::new("noext")), None);
    }

    #[test]
    fn decodes_from_memory() {
        let img = from_memory(&png_bytes()).unwrap();
        assert_eq!((img.width(), img.height()), (4, 8));
    }

    #[test]
    fn sniffs_when_extension_is_unknown() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("image.bin");
        std::fs::write(&path, png_bytes()).unwrap();
        let img = open(&path).unwrap();
        assert_eq!((img.width(), img.height()), (4, 8));
    }

    #[test]
    fn corrupt_data_is_a_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.png");
        std::fs::write(&path, b"not a png").unwrap();
        assert!(matches!(open(&path), Err(BrailleError::Decode(_))));
    }

    #[test]
    fn missing_file_is_io_error() {
        assert!(matches!(open("/nonexistent/picture.png"), Err(BrailleError::Io(_))));
    }
}
