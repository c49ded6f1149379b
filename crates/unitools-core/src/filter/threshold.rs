//! Binary threshold filter.

use crate::decode::PixelImage;
use crate::luma::luma_u8;

/// Map every pixel to pure white or pure black against a luma cutoff.
///
/// A pixel whose rounded BT.601 luma is `>= cutoff` becomes white,
/// everything else black. The comparison is inclusive, so mid-gray at the
/// default cutoff of 128 lands on white. Alpha is left untouched.
///
/// Applying the same cutoff twice is a no-op: white (luma 255) stays white
/// and black (luma 0) stays black for every cutoff above zero.
pub fn threshold(image: &PixelImage, cutoff: u8) -> PixelImage {
    let mut output = image.clone();

    for px in output.pixels.chunks_exact_mut(4) {
        let value = if luma_u8(px[0], px[1], px[2]) >= cutoff {
            255
        } else {
            0
        };
        px[0] = value;
        px[1] = value;
        px[2] = value;
    }

    output
}
