//! Image loading for garment photos
//!
//! Decodes common raster formats through the `image` crate into a
//! `DynamicImage` ready for [`crate::ImageAnalyzer`]. Storage and upload
//! handling belong to the caller; this is only a convenience entry point.
//!
//! ## Supported Formats
//!
//! JPEG, PNG, GIF (first frame), WebP, TIFF, BMP

use std::io::Cursor;
use std::path::Path;

use image::{DynamicImage, ImageReader};

use crate::error::{EngineError, Result};

/// Supported image formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Jpeg,
    Png,
    /// GIF image (first frame only)
    Gif,
    WebP,
    Tiff,
    Bmp,
}

impl ImageFormat {
    /// Detect format from file extension
    pub fn from_extension(path: &Path) -> Option<ImageFormat> {
        let ext = path.extension()?.to_str()?.to_lowercase();
        match ext.as_str() {
            "jpg" | "jpeg" => Some(ImageFormat::Jpeg),
            "png" => Some(ImageFormat::Png),
            "gif" => Some(ImageFormat::Gif),
            "webp" => Some(ImageFormat::WebP),
            "tiff" | "tif" => Some(ImageFormat::Tiff),
            "bmp" => Some(ImageFormat::Bmp),
            _ => None,
        }
    }
}

/// Load an image from disk
///
/// # Errors
///
/// Returns `EngineError::DecodeFailure` if:
/// - The extension is not a supported format
/// - File cannot be opened
/// - Decoding fails
///
/// # Example
///
/// ```rust,no_run
/// use outfit_recommender::image_loader::load_image;
/// use std::path::Path;
///
/// let image = load_image(Path::new("shirt.jpg"))?;
/// println!("Loaded image: {}x{}", image.width(), image.height());
/// # Ok::<(), outfit_recommender::EngineError>(())
/// ```
pub fn load_image(path: &Path) -> Result<DynamicImage> {
    if ImageFormat::from_extension(path).is_none() {
        return Err(EngineError::decode_msg(format!(
            "Unknown image format for file: {}",
            path.display()
        )));
    }

    let reader = ImageReader::open(path).map_err(|e| {
        EngineError::decode(format!("Failed to open image file: {}", path.display()), e)
    })?;

    reader.decode().map_err(|e| {
        EngineError::decode(format!("Failed to decode image: {}", path.display()), e)
    })
}

/// Decode an in-memory image, guessing the format from its content
pub fn load_image_bytes(bytes: &[u8]) -> Result<DynamicImage> {
    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| EngineError::decode("Failed to read image bytes", e))?;

    if reader.format().is_none() {
        return Err(EngineError::decode_msg("Unrecognized image data"));
    }

    reader
        .decode()
        .map_err(|e| EngineError::decode("Failed to decode image bytes", e))
}

/// Get list of all supported file extensions
pub fn supported_extensions() -> &'static [&'static str] {
    &["jpg", "jpeg", "png", "gif", "webp", "tiff", "tif", "bmp"]
}

/// Check if a file extension is supported
pub fn is_supported_extension(ext: &str) -> bool {
    let ext_lower = ext.to_lowercase();
    supported_extensions().contains(&ext_lower.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    #[test]
    fn test_format_detection() {
        assert_eq!(
            ImageFormat::from_extension(Path::new("shirt.jpg")),
            Some(ImageFormat::Jpeg)
        );
        assert_eq!(
            ImageFormat::from_extension(Path::new("shirt.JPEG")),
            Some(ImageFormat::Jpeg)
        );
        assert_eq!(
            ImageFormat::from_extension(Path::new("skirt.png")),
            Some(ImageFormat::Png)
        );
        assert_eq!(
            ImageFormat::from_extension(Path::new("scarf.webp")),
            Some(ImageFormat::WebP)
        );
        assert_eq!(ImageFormat::from_extension(Path::new("notes.txt")), None);
        assert_eq!(ImageFormat::from_extension(Path::new("noext")), None);
    }

    #[test]
    fn test_supported_extensions() {
        assert!(is_supported_extension("jpg"));
        assert!(is_supported_extension("PNG"));
        assert!(is_supported_extension("tif"));
        assert!(!is_supported_extension("heic"));
        assert!(!is_supported_extension("doc"));
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_image(Path::new("does_not_exist.png")).unwrap_err();
        assert!(matches!(err, EngineError::DecodeFailure { .. }));
    }

    #[test]
    fn test_load_unknown_extension() {
        assert!(load_image(Path::new("wardrobe.csv")).is_err());
    }

    #[test]
    fn test_load_png_bytes() {
        let image = RgbImage::from_pixel(4, 3, Rgb([200, 10, 10]));
        let mut bytes = Vec::new();
        DynamicImage::ImageRgb8(image)
            .write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
            .unwrap();

        let decoded = load_image_bytes(&bytes).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (4, 3));
        assert_eq!(decoded.to_rgb8().get_pixel(0, 0), &Rgb([200, 10, 10]));
    }

    #[test]
    fn test_load_garbage_bytes() {
        let err = load_image_bytes(b"definitely not an image").unwrap_err();
        assert!(matches!(err, EngineError::DecodeFailure { .. }));
    }
}
