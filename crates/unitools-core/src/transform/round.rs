//! Circular cutout.

use crate::decode::PixelImage;

/// Cut the largest centered circle out of an image.
///
/// The output is a `size x size` square where `size = min(width, height)`,
/// cropped from the center of the source. Pixels whose centers fall outside
/// the inscribed circle become transparent black; everything inside is
/// copied through untouched, so the mask is a hard edge rather than a
/// feathered one.
pub fn round_mask(image: &PixelImage) -> PixelImage {
    let size = image.width.min(image.height);
    if size == 0 {
        return PixelImage::new(0, 0, Vec::new());
    }

    let offset_x = (image.width - size) / 2;
    let offset_y = (image.height - size) / 2;

    let radius = size as f64 / 2.0;
    let radius_sq = radius * radius;

    let mut output = PixelImage::blank(size, size);

    for y in 0..size {
        for x in 0..size {
            let dx = x as f64 + 0.5 - radius;
            let dy = y as f64 + 0.5 - radius;
            if dx * dx + dy * dy > radius_sq {
                continue;
            }

            let src = (((y + offset_y) * image.width + (x + offset_x)) * 4) as usize;
            let dst = ((y * size + x) * 4) as usize;
            output.pixels[dst..dst + 4].copy_from_slice(&image.pixels[src..src + 4]);
        }
    }

    output
}


// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn create_test_image(width: u32, height: u32) -> PixelImage {
        let mut pixels = Vec::with_capacity((width * height * 4) as usize);
        for y in 0..height {
            for x in 0..width {
                let v = ((y * width + x) % 256) as u8;
                pixels.extend_from_slice(&[v, v, v, 255]);
            }
        }
        PixelImage::new(width, height, pixels)
    }

    proptest! {
        /// Property: Output is always a square with side min(w, h).
        #[test]
        fn prop_output_is_min_square(
            width in 1u32..=48,
            height in 1u32..=48,
        ) {
            let img = create_test_image(width, height);
            let result = round_mask(&img);
            let size = width.min(height);

            prop_assert_eq!(result.width, size);
            prop_assert_eq!(result.height, size);
        }

        /// Property: From size 4 up, all four corners are fully transparent.
        #[test]
        fn prop_corners_transparent(size in 4u32..=48) {
            let img = create_test_image(size, size);
            let result = round_mask(&img);
            let e = size - 1;

            for (x, y) in [(0, 0), (e, 0), (0, e), (e, e)] {
                let px = result.pixel(x, y).unwrap();
                prop_assert_eq!(px[3], 0);
            }
        }

        /// Property: Pixels kept by the mask match the centered source crop.
        #[test]
        fn prop_kept_pixels_match_source(
            width in 1u32..=32,
            height in 1u32..=32,
        ) {
            let img = create_test_image(width, height);
            let result = round_mask(&img);
            let size = width.min(height);
            let off_x = (width - size) / 2;
            let off_y = (height - size) / 2;

            for y in 0..size {
                for x in 0..size {
                    let px = result.pixel(x, y).unwrap();
                    if px[3] != 0 {
                        prop_assert_eq!(Some(px), img.pixel(x + off_x, y + off_y));
                    }
                }
            }
        }
    }
}
