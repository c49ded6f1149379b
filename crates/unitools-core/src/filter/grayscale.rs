//! Grayscale conversion.

use crate::decode::PixelImage;

/// Convert an image to grayscale using the unweighted channel mean.
///
/// Each of R, G, B is replaced by `round((R + G + B) / 3)`. Alpha is left
/// untouched. The mean is deliberately unweighted rather than luma-based;
/// it reproduces the simple averaging the editor always used, which reads
/// slightly brighter in saturated greens than a perceptual conversion.
pub fn grayscale(image: &PixelImage) -> PixelImage {
    let mut output = image.clone();

    for px in output.pixels.chunks_exact_mut(4) {
        let sum = px[0] as u16 + px[1] as u16 + px[2] as u16;
        let mean = (sum as f32 / 3.0).round() as u8;
        px[0] = mean;
        px[1] = mean;
        px[2] = mean;
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channels_become_equal() {
        let img = PixelImage::new(2, 1, vec![10, 200, 60, 255, 0, 0, 255, 255]);
        let result = grayscale(&img);

        // (10 + 200 + 60) / 3 = 90
        assert_eq!(result.pixel(0, 0), Some([90, 90, 90, 255]));
        // 255 / 3 = 85
        assert_eq!(result.pixel(1, 0), Some([85, 85, 85, 255]));
    }

    #[test]
    fn test_mean_rounds_to_nearest() {
        // (255 + 255 + 254) / 3 = 254.67 rounds up.
        let img = PixelImage::new(1, 1, vec![255, 255, 254, 255]);
        assert_eq!(grayscale(&img).pixel(0, 0), Some([255, 255, 255, 255]));

        // (0 + 0 + 1) / 3 = 0.33 rounds down.
        let img = PixelImage::new(1, 1, vec![0, 0, 1, 255]);
        assert_eq!(grayscale(&img).pixel(0, 0), Some([0, 0, 0, 255]));
    }

    #[test]
    fn test_gray_input_unchanged() {
        let img = PixelImage::new(1, 1, vec![128, 128, 128, 255]);
        assert_eq!(grayscale(&img).pixels, img.pixels);
    }

    #[test]
    fn test_alpha_preserved() {
        let img = PixelImage::new(1, 1, vec![30, 60, 90, 42]);
        let result = grayscale(&img);
        assert_eq!(result.pixel(0, 0).map(|p| p[3]), Some(42));
    }

    #[test]
    fn test_idempotent() {
        let img = PixelImage::new(2, 2, vec![
            1, 2, 3, 255, 100, 150, 200, 255,
            255, 0, 0, 128, 7, 7, 7, 0,
        ]);
        let once = grayscale(&img);
        let twice = grayscale(&once);
        assert_eq!(once.pixels, twice.pixels);
    }

    #[test]
    fn test_dimensions_preserved() {
        let img = PixelImage::blank(5, 3);
        let result = grayscale(&img);
        assert_eq!(result.width, 5);
        assert_eq!(result.height, 3);
    }
}
