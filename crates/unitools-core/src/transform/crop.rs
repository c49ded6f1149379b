//! Image cropping with canvas `drawImage` semantics.
//!
//! The crop region is given in source pixel coordinates and is NOT clamped
//! to the source bounds. A region hanging past the right or bottom edge
//! produces transparent pixels there, exactly what a canvas sized to the
//! region shows after drawing the source at its offset. The interactive
//! selection keeps itself inside the image, so overflow only occurs when a
//! caller computes coordinates some other way; it succeeds by design rather
//! than erroring.

use crate::decode::PixelImage;

use super::TransformError;

/// Extract a rectangular region from an image.
///
/// # Arguments
///
/// * `image` - Source image
/// * `x`, `y` - Top-left corner of the region, in source pixels
/// * `width`, `height` - Region dimensions in pixels
///
/// # Returns
///
/// A new `width x height` image. Pixels of the region that fall outside the
/// source are fully transparent.
///
/// # Errors
///
/// Returns `TransformError::InvalidDimensions` if `width` or `height` is zero.
///
/// # Example
///
/// ```ignore
/// use unitools_core::transform::crop;
///
/// // Take a 100x100 region starting at (25, 25)
/// let region = crop(&image, 25, 25, 100, 100).unwrap();
/// assert_eq!(region.width, 100);
/// ```
pub fn crop(
    image: &PixelImage,
    x: u32,
    y: u32,
    width: u32,
    height: u32,
) -> Result<PixelImage, TransformError> {
    if width == 0 || height == 0 {
        return Err(TransformError::InvalidDimensions { width, height });
    }

    let mut output = PixelImage::blank(width, height);

    // Copy the intersection with the source row by row; everything outside
    // it stays transparent.
    if x < image.width && y < image.height {
        let copy_w = width.min(image.width - x);
        let copy_h = height.min(image.height - y);

        for row in 0..copy_h {
            let src_start = (((y + row) * image.width + x) * 4) as usize;
            let dst_start = (row * width * 4) as usize;
            let len = (copy_w * 4) as usize;
            output.pixels[dst_start..dst_start + len]
                .copy_from_slice(&image.pixels[src_start..src_start + len]);
        }
    }

    Ok(output)
}


// ============================================================================
// Property-Based Tests
// ============================================================================
