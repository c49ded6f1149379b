//! Pencil-sketch effect via Sobel edge detection.

use crate::decode::PixelImage;
use crate::luma::luma_u8;

/// Render an image as an inverted edge map, like a pencil sketch.
///
/// The 3x3 Sobel kernels run over the BT.601 luma plane and each interior
/// pixel becomes `255 - magnitude`, clamped to `[0, 255]`: flat regions come
/// out white paper, edges come out dark strokes. The outermost one-pixel
/// border has no full 3x3 neighborhood and is left transparent black;
/// interior pixels are fully opaque. Images narrower or shorter than 3
/// pixels have no interior at all and come back fully transparent.
pub fn sketch(image: &PixelImage) -> PixelImage {
    let (w, h) = (image.width as usize, image.height as usize);
    let mut output = PixelImage::blank(image.width, image.height);

    if w < 3 || h < 3 {
        return output;
    }

    // Luma plane, computed once up front.
    let mut plane = Vec::with_capacity(w * h);
    for px in image.pixels.chunks_exact(4) {
        plane.push(luma_u8(px[0], px[1], px[2]) as f32);
    }

    for y in 1..h - 1 {
        for x in 1..w - 1 {
            let l = |px: usize, py: usize| plane[py * w + px];

            let gx = -l(x - 1, y - 1) - 2.0 * l(x - 1, y) - l(x - 1, y + 1)
                + l(x + 1, y - 1)
                + 2.0 * l(x + 1, y)
                + l(x + 1, y + 1);
            let gy = -l(x - 1, y - 1) - 2.0 * l(x, y - 1) - l(x + 1, y - 1)
                + l(x - 1, y + 1)
                + 2.0 * l(x, y + 1)
                + l(x + 1, y + 1);

            let magnitude = (gx * gx + gy * gy).sqrt();
            let value = (255.0 - magnitude).clamp(0.0, 255.0).round() as u8;

            let idx = (y * w + x) * 4;
            output.pixels[idx] = value;
            output.pixels[idx + 1] = value;
            output.pixels[idx + 2] = value;
            output.pixels[idx + 3] = 255;
        }
    }

    output
}


// ============================================================================
// Property-Based Tests
// ============================================================================
