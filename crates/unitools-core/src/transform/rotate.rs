//! Image rotation with canvas semantics.
//!
//! Angles are degrees, positive = clockwise, matching the 2D canvas
//! `rotate` call the editor preview uses. Output sizing follows the canvas
//! the original editor allocates:
//!
//! - 90 and 270 (mod 360) swap the output dimensions
//! - 0 and 180 keep them
//! - every other angle keeps them too, so the rotated corners clip and the
//!   uncovered corners come out transparent
//!
//! Exact right angles are lossless index remaps. Everything else uses
//! inverse mapping with bilinear sampling: for each output pixel, rotate
//! its center back into source space and interpolate the 4 neighbors.

use crate::decode::PixelImage;

/// Rotate an image around its center.
///
/// # Arguments
///
/// * `image` - Source image to rotate
/// * `degrees` - Rotation angle in degrees, positive = clockwise. Any
///   value is accepted; it is normalized into [0, 360).
///
/// # Returns
///
/// A new `PixelImage`. Dimensions are swapped for right-angle rotations of
/// 90 and 270, and unchanged otherwise (non-right angles clip).
///
/// # Example
///
/// ```ignore
/// use unitools_core::transform::rotate;
///
/// let turned = rotate(&image, 90.0);
/// assert_eq!(turned.width, image.height);
/// assert_eq!(turned.height, image.width);
/// ```
pub fn rotate(image: &PixelImage, degrees: f64) -> PixelImage {
    let angle = degrees.rem_euclid(360.0);

    if angle == 0.0 {
        return image.clone();
    }
    if angle == 90.0 {
        return rotate_90(image);
    }
    if angle == 180.0 {
        return rotate_180(image);
    }
    if angle == 270.0 {
        return rotate_270(image);
    }

    rotate_arbitrary(image, angle)
}

#[inline]
fn copy_pixel(src: &PixelImage, sx: u32, sy: u32, dst: &mut PixelImage, dx: u32, dy: u32) {
    let s = ((sy * src.width + sx) * 4) as usize;
    let d = ((dy * dst.width + dx) * 4) as usize;
    dst.pixels[d..d + 4].copy_from_slice(&src.pixels[s..s + 4]);
}

/// Quarter turn clockwise: (x, y) -> (h - 1 - y, x), output is h x w.
fn rotate_90(image: &PixelImage) -> PixelImage {
    let (w, h) = (image.width, image.height);
    let mut output = PixelImage::blank(h, w);

    for dst_y in 0..w {
        for dst_x in 0..h {
            copy_pixel(image, dst_y, h - 1 - dst_x, &mut output, dst_x, dst_y);
        }
    }

    output
}

/// Half turn: reversing the pixel order flips both axes.
fn rotate_180(image: &PixelImage) -> PixelImage {
    let mut pixels = Vec::with_capacity(image.pixels.len());
    for px in image.pixels.chunks_exact(4).rev() {
        pixels.extend_from_slice(px);
    }
    PixelImage::new(image.width, image.height, pixels)
}

/// Quarter turn counter-clockwise: (x, y) -> (y, w - 1 - x), output is h x w.
fn rotate_270(image: &PixelImage) -> PixelImage {
    let (w, h) = (image.width, image.height);
    let mut output = PixelImage::blank(h, w);

    for dst_y in 0..w {
        for dst_x in 0..h {
            copy_pixel(image, w - 1 - dst_y, dst_x, &mut output, dst_x, dst_y);
        }
    }

    output
}

/// Rotate by a non-right angle onto a canvas of the source's size.
fn rotate_arbitrary(image: &PixelImage, angle_degrees: f64) -> PixelImage {
    let (w, h) = (image.width, image.height);
    let mut output = PixelImage::blank(w, h);

    let theta = angle_degrees.to_radians();
    let cos = theta.cos();
    let sin = theta.sin();

    // Rotation center: the middle of the canvas.
    let cx = w as f64 / 2.0;
    let cy = h as f64 / 2.0;

    for dst_y in 0..h {
        for dst_x in 0..w {
            // Destination pixel center relative to the rotation center.
            let dx = dst_x as f64 + 0.5 - cx;
            let dy = dst_y as f64 + 0.5 - cy;

            // Inverse of a clockwise rotation by theta (y grows downward).
            let src_x = dx * cos + dy * sin + cx - 0.5;
            let src_y = -dx * sin + dy * cos + cy - 0.5;

            let pixel = sample_bilinear(image, src_x, src_y);
            let idx = ((dst_y * w + dst_x) * 4) as usize;
            output.pixels[idx..idx + 4].copy_from_slice(&pixel);
        }
    }

    output
}

/// Sample a pixel using bilinear interpolation.
///
/// Neighbors falling outside the source contribute transparent black,
/// which fades the rotated edge out instead of smearing it.
fn sample_bilinear(image: &PixelImage, x: f64, y: f64) -> [u8; 4] {
    let (w, h) = (image.width as i64, image.height as i64);

    // Entirely outside the source: transparent.
    if x <= -1.0 || y <= -1.0 || x >= w as f64 || y >= h as f64 {
        return [0, 0, 0, 0];
    }

    let x0 = x.floor();
    let y0 = y.floor();
    let fx = x - x0;
    let fy = y - y0;
    let x0 = x0 as i64;
    let y0 = y0 as i64;

    let fetch = |px: i64, py: i64| -> [f64; 4] {
        if px < 0 || py < 0 || px >= w || py >= h {
            return [0.0; 4];
        }
        let idx = ((py as u32 * image.width + px as u32) * 4) as usize;
        [
            image.pixels[idx] as f64,
            image.pixels[idx + 1] as f64,
            image.pixels[idx + 2] as f64,
            image.pixels[idx + 3] as f64,
        ]
    };

    let p00 = fetch(x0, y0);
    let p10 = fetch(x0 + 1, y0);
    let p01 = fetch(x0, y0 + 1);
    let p11 = fetch(x0 + 1, y0 + 1);

    let mut result = [0u8; 4];
    for i in 0..4 {
        let v = p00[i] * (1.0 - fx) * (1.0 - fy)
            + p10[i] * fx * (1.0 - fy)
            + p01[i] * (1.0 - fx) * fy
            + p11[i] * fx * fy;
        result[i] = v.clamp(0.0, 255.0).round() as u8;
    }

    result
}


// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn dimensions_strategy() -> impl Strategy<Value = (u32, u32)> {
        (2u32..=32, 2u32..=32)
    }

    fn create_test_image(width: u32, height: u32) -> PixelImage {
        let mut pixels = Vec::with_capacity((width * height * 4) as usize);
        for y in 0..height {
            for x in 0..width {
                let v = ((y * width + x) % 256) as u8;
                pixels.extend_from_slice(&[v, v.wrapping_add(40), v.wrapping_add(80), 255]);
            }
        }
        PixelImage::new(width, height, pixels)
    }

    proptest! {
        /// Property: Right-angle rotations swap or keep dimensions exactly.
        #[test]
        fn prop_right_angle_dimension_rule(
            (width, height) in dimensions_strategy(),
            turns in 0u32..8,
        ) {
            let img = create_test_image(width, height);
            let angle = turns as f64 * 90.0;
            let result = rotate(&img, angle);

            if turns % 2 == 1 {
                prop_assert_eq!(result.width, height);
                prop_assert_eq!(result.height, width);
            } else {
                prop_assert_eq!(result.width, width);
                prop_assert_eq!(result.height, height);
            }
        }

        /// Property: Non-right angles never change dimensions.
        #[test]
        fn prop_arbitrary_angle_keeps_dimensions(
            (width, height) in dimensions_strategy(),
            angle in 0.5f64..89.5,
        ) {
            let img = create_test_image(width, height);
            let result = rotate(&img, angle);

            prop_assert_eq!(result.width, width);
            prop_assert_eq!(result.height, height);
        }

        /// Property: A quarter turn and back is the identity.
        #[test]
        fn prop_quarter_turn_round_trip(
            (width, height) in dimensions_strategy(),
        ) {
            let img = create_test_image(width, height);
            let there = rotate(&img, 90.0);
            let back = rotate(&there, 270.0);

            prop_assert_eq!(back.pixels, img.pixels);
        }

        /// Property: Right-angle rotations permute pixels without loss.
        #[test]
        fn prop_right_angles_preserve_pixel_multiset(
            (width, height) in dimensions_strategy(),
            turns in 1u32..4,
        ) {
            let img = create_test_image(width, height);
            let result = rotate(&img, turns as f64 * 90.0);

            let mut before: Vec<[u8; 4]> = img
                .pixels
                .chunks_exact(4)
                .map(|p| [p[0], p[1], p[2], p[3]])
                .collect();
            let mut after: Vec<[u8; 4]> = result
                .pixels
                .chunks_exact(4)
                .map(|p| [p[0], p[1], p[2], p[3]])
                .collect();
            before.sort_unstable();
            after.sort_unstable();

            prop_assert_eq!(before, after);
        }
    }
}
