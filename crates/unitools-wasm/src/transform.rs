//! WASM bindings for geometric image operations.
//!
//! This module provides JavaScript bindings for the preview pipeline's
//! transforms: resize, crop, rotate, horizontal flip and the circular
//! mask. Each function takes and returns a [`JsPixelImage`]; encoding the
//! result for download is the encode module's job.

use crate::types::{filter_from_u8, JsPixelImage};
use unitools_core::transform::{
    crop as core_crop, flip_horizontal as core_flip, resize as core_resize,
    rotate as core_rotate, round_mask as core_round,
};
use wasm_bindgen::prelude::*;

/// Resize an image to exact dimensions.
///
/// Aspect-ratio preservation is the dimension form's concern; by the time
/// this is called the target numbers are final.
///
/// # Arguments
///
/// * `image` - Source image to resize
/// * `width` - Target width in pixels (must be non-zero)
/// * `height` - Target height in pixels (must be non-zero)
/// * `filter` - Resampling filter: 0 = Nearest, 1 = Bilinear, 2 = Lanczos3.
///   Previews pass 1; exports pass 2.
///
/// # Example (TypeScript)
///
/// ```typescript
/// // Fast preview resize
/// const preview = resize(sourceImage, 640, 480, 1);
///
/// // Export-quality resize
/// const final = resize(sourceImage, 640, 480, 2);
/// ```
#[wasm_bindgen]
pub fn resize(
    image: &JsPixelImage,
    width: u32,
    height: u32,
    filter: u8,
) -> Result<JsPixelImage, JsValue> {
    core_resize(&image.to_image(), width, height, filter_from_u8(filter))
        .map(JsPixelImage::from_image)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Extract a rectangular region, in source pixel coordinates.
///
/// The region is not clamped to the image: parts hanging past the right or
/// bottom edge come out fully transparent, like `drawImage` past the source
/// edge.
///
/// # Arguments
///
/// * `image` - Source image
/// * `x`, `y` - Top-left corner of the region
/// * `width`, `height` - Region dimensions (must be non-zero)
///
/// # Example (TypeScript)
///
/// ```typescript
/// // The committed selection, already rescaled to source pixels
/// const region = crop(sourceImage, sel.x, sel.y, sel.width, sel.height);
/// ```
#[wasm_bindgen]
pub fn crop(
    image: &JsPixelImage,
    x: u32,
    y: u32,
    width: u32,
    height: u32,
) -> Result<JsPixelImage, JsValue> {
    core_crop(&image.to_image(), x, y, width, height)
        .map(JsPixelImage::from_image)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Rotate an image around its center.
///
/// Angles are in degrees, positive = clockwise, any value accepted. Exact
/// right angles swap the dimensions losslessly; every other angle keeps the
/// source canvas size and clips the corners, with bilinear sampling and
/// transparent backfill.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const quarter = rotate(sourceImage, 90);   // dimensions swap
/// const tilted = rotate(sourceImage, 3.5);   // same dimensions, corners clip
/// ```
#[wasm_bindgen]
pub fn rotate(image: &JsPixelImage, degrees: f64) -> JsPixelImage {
    JsPixelImage::from_image(core_rotate(&image.to_image(), degrees))
}

/// Mirror an image left-to-right.
#[wasm_bindgen]
pub fn flip_horizontal(image: &JsPixelImage) -> JsPixelImage {
    JsPixelImage::from_image(core_flip(&image.to_image()))
}

/// Cut an image to a centered circle.
///
/// The output is the centered `min(width, height)` square with everything
/// outside the inscribed circle made transparent. Export as PNG or WebP to
/// keep the transparency.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const avatar = round_mask(sourceImage);
/// const out = encode_image(avatar, 'image/png', 0.92);
/// ```
#[wasm_bindgen]
pub fn round_mask(image: &JsPixelImage) -> JsPixelImage {
    JsPixelImage::from_image(core_round(&image.to_image()))
}
