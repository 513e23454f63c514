// SPDX-License-Identifier: MPL-2.0
//! Image loading and decoding for the gallery (PNG, JPEG, GIF, WebP, etc.).

use crate::error::{Error, Result};
use iced::widget::image;
use iced::Size;
use image_rs::GenericImageView;
use std::fs;
use std::path::Path;

/// A decoded picture ready for display.
///
/// The same value feeds the inline thumbnail and its zoom overlay, so cloning
/// only clones the shared `image::Handle`.
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
        Self {
            handle: image::Handle::from_rgba(width, height, pixels),
            width,
            height,
        }
    }

    /// Pixel dimensions as a float size, for content-fit computations.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn size(&self) -> Size {
        Size::new(self.width as f32, self.height as f32)
    }
}

/// Load an image from the given path and return its data.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be read ([`Error::Io`])
/// - The bytes are not a decodable image ([`Error::Image`])
pub fn load_image<P: AsRef<Path>>(path: P) -> Result<ImageData> {
    let path = path.as_ref();
    let img_bytes = fs::read(path)?;
    let img = image_rs::load_from_memory(&img_bytes)?;

    let (width, height) = img.dimensions();
    if width == 0 || height == 0 {
        return Err(Error::Image(format!(
            "{} has empty dimensions",
            path.display()
        )));
    }

    let pixels = img.to_rgba8().into_vec();
    tracing::debug!(path = %path.display(), width, height, "decoded image");

    Ok(ImageData::from_rgba(width, height, pixels))
}
