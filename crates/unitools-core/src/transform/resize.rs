//! Image resizing to exact target dimensions.
//!
//! Uses the `image` crate's resampling. The target dimensions are taken as
//! given; aspect-ratio preservation is the dimension form's job, decided
//! before the engine is ever called.

use serde::{Deserialize, Serialize};

use crate::decode::PixelImage;

use super::TransformError;

/// Resampling filter for resize operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ResampleFilter {
    /// Nearest neighbor interpolation (fastest, lowest quality).
    Nearest,
    /// Bilinear interpolation (fast, acceptable quality).
    #[default]
    Bilinear,
    /// Lanczos3 interpolation (slower, highest quality).
    Lanczos3,
}

impl ResampleFilter {
    /// Convert to the image crate's FilterType.
    pub fn to_image_filter(self) -> image::imageops::FilterType {
        match self {
            ResampleFilter::Nearest => image::imageops::FilterType::Nearest,
            ResampleFilter::Bilinear => image::imageops::FilterType::Triangle,
            ResampleFilter::Lanczos3 => image::imageops::FilterType::Lanczos3,
        }
    }
}

/// Resize an image to exact dimensions.
///
/// # Arguments
///
/// * `image` - The source image to resize
/// * `width` - Target width in pixels
/// * `height` - Target height in pixels
/// * `filter` - Resampling filter to use
///
/// # Returns
///
/// A new `PixelImage` with the specified dimensions.
///
/// # Errors
///
/// Returns `TransformError::InvalidDimensions` if either target dimension
/// is zero.
pub fn resize(
    image: &PixelImage,
    width: u32,
    height: u32,
    filter: ResampleFilter,
) -> Result<PixelImage, TransformError> {
    if width == 0 || height == 0 {
        return Err(TransformError::InvalidDimensions { width, height });
    }

    // Fast path: if dimensions match, just clone
    if image.width == width && image.height == height {
        return Ok(image.clone());
    }

    let rgba_image = image
        .to_rgba_image()
        .ok_or(TransformError::InvalidPixelData {
            expected: (image.width as usize) * (image.height as usize) * 4,
            actual: image.pixels.len(),
        })?;

    let resized = image::imageops::resize(&rgba_image, width, height, filter.to_image_filter());

    Ok(PixelImage::from_rgba_image(resized))
}
