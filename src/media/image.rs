// SPDX-License-Identifier: MPL-2.0
//! Image loading and decoding from common raster formats (PNG, JPEG, GIF, etc.).

use crate::error::{Error, Result};
use iced::widget::image;
use image_rs::GenericImageView;
use std::path::Path;

/// A decoded image ready for rendering: the renderer handle plus its pixel
/// dimensions, which the comparison layout needs for centering and fit zoom.
#[derive(Debug, Clone)]
pub struct ImageData {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
}

impl ImageData {
    /// Creates a new `ImageData` from RGBA pixels.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        let handle = image::Handle::from_rgba(width, height, pixels);
        Self {
            handle,
            width,
            height,
        }
    }
}

/// Loads and decodes the image at `path`.
///
/// # Errors
///
/// Returns `Error::Io` when the file cannot be read and `Error::Image` when
/// the bytes do not decode as a supported raster format.
pub fn load(path: &Path) -> Result<ImageData> {
    let img = image_rs::open(path)?;
    let (width, height) = img.dimensions();

    if width == 0 || height == 0 {
        return Err(Error::Image(format!(
            "image has degenerate dimensions {}x{}: {}",
            width,
            height,
            path.display()
        )));
    }

    let pixels = img.to_rgba8().into_vec();
    Ok(ImageData::from_rgba(width, height, pixels))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn from_rgba_preserves_dimensions() {
        let pixels = vec![255_u8; 4 * 2 * 3];
        let data = ImageData::from_rgba(2, 3, pixels);
        assert_eq!(data.width, 2);
        assert_eq!(data.height, 3);
    }

    #[test]
    fn load_missing_file_returns_error() {
        let result = load(Path::new("/nonexistent/image.png"));
        assert!(result.is_err());
    }

    #[test]
    fn load_decodes_generated_png() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("tiny.png");

        let mut img = image_rs::RgbaImage::new(4, 2);
        for pixel in img.pixels_mut() {
            *pixel = image_rs::Rgba([10, 20, 30, 255]);
        }
        img.save(&path).expect("failed to write png");

        let data = load(&path).expect("failed to load png");
        assert_eq!(data.width, 4);
        assert_eq!(data.height, 2);
    }

    #[test]
    fn load_rejects_non_image_bytes() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("not_an_image.png");
        std::fs::write(&path, b"plain text").expect("failed to write file");

        match load(&path) {
            Err(Error::Image(_)) | Err(Error::Io(_)) => {}
            other => panic!("expected decode failure, got {:?}", other),
        }
    }
}
