// SPDX-License-Identifier: MPL-2.0
//! Decoded image data ready for display.

use crate::error::Result;
use iced::widget::image;
use image_rs::imageops::FilterType;
use image_rs::GenericImageView;

/// A decoded image: a renderer handle plus its pixel dimensions.
///
/// Cloning is cheap; the handle is reference-counted.
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

    /// Approximate memory footprint (RGBA, 4 bytes per pixel).
    #[must_use]
    pub fn size_bytes(&self) -> usize {
        (self.width as usize) * (self.height as usize) * 4
    }
}

/// Decodes encoded bytes (JPEG, PNG, WebP, ...) into RGBA image data.
///
/// When `max_width` is set and the image is wider, it is downscaled keeping
/// its aspect ratio.
///
/// # Errors
///
/// Returns [`crate::error::Error::Image`] when the bytes cannot be decoded.
pub fn decode(bytes: &[u8], max_width: Option<u32>) -> Result<ImageData> {
    let mut decoded = image_rs::load_from_memory(bytes)?;

    if let Some(max_width) = max_width.filter(|w| *w > 0) {
        let (width, height) = decoded.dimensions();
        if width > max_width {
            let scaled_height = scaled_height(width, height, max_width);
            decoded = decoded.resize_exact(max_width, scaled_height, FilterType::Triangle);
        }
    }

    let (width, height) = decoded.dimensions();
    let pixels = decoded.to_rgba8().into_vec();
    Ok(ImageData::from_rgba(width, height, pixels))
}

fn scaled_height(width: u32, height: u32, target_width: u32) -> u32 {
    let scaled = u64::from(height) * u64::from(target_width) / u64::from(width.max(1));
    u32::try_from(scaled).unwrap_or(u32::MAX).max(1)
}
