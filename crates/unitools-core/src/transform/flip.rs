//! Horizontal mirroring.

use crate::decode::PixelImage;

/// Mirror an image across its vertical axis.
///
/// Each row is reversed in place, so the leftmost pixel swaps with the
/// rightmost. Dimensions and alpha are unchanged.
pub fn flip_horizontal(image: &PixelImage) -> PixelImage {
    // Empty images have nothing to mirror, and chunks_exact rejects a
    // zero row size.
    if image.is_empty() {
        return image.clone();
    }

    let mut pixels = Vec::with_capacity(image.pixels.len());
    let row_bytes = (image.width * 4) as usize;

    for row in image.pixels.chunks_exact(row_bytes) {
        for px in row.chunks_exact(4).rev() {
            pixels.extend_from_slice(px);
        }
    }

    PixelImage::new(image.width, image.height, pixels)
}
