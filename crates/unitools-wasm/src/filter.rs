//! WASM bindings for pixel filter operations.
//!
//! This module provides JavaScript bindings for the per-pixel filters:
//! grayscale, black-and-white threshold, and the pencil sketch effect.
//! All three are infallible and return a new [`JsPixelImage`] sized like
//! the input, so the preview path can chain them freely.

use crate::types::JsPixelImage;
use unitools_core::filter::{
    grayscale as core_grayscale, sketch as core_sketch, threshold as core_threshold,
};
use wasm_bindgen::prelude::*;

/// Convert an image to grayscale.
///
/// Each pixel becomes the plain average of its RGB channels; alpha is
/// untouched.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const gray = grayscale(sourceImage);
/// ```
#[wasm_bindgen]
pub fn grayscale(image: &JsPixelImage) -> JsPixelImage {
    JsPixelImage::from_image(core_grayscale(&image.to_image()))
}

/// Convert an image to pure black and white.
///
/// Pixels whose perceptual luminance reaches `cutoff` become white,
/// everything else black; alpha is untouched. The editor slider drives
/// `cutoff` over the full 0-255 range with 128 as its default.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const mono = threshold(sourceImage, 128);
/// ```
#[wasm_bindgen]
pub fn threshold(image: &JsPixelImage, cutoff: u8) -> JsPixelImage {
    JsPixelImage::from_image(core_threshold(&image.to_image(), cutoff))
}

/// Render an image as a pencil sketch.
///
/// Edge detection on the luminance plane, inverted so strong edges draw
/// dark strokes on white paper. The one-pixel border is transparent, as is
/// the whole output for images smaller than 3x3.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const drawing = sketch(sourceImage);
/// ```
#[wasm_bindgen]
pub fn sketch(image: &JsPixelImage) -> JsPixelImage {
    JsPixelImage::from_image(core_sketch(&image.to_image()))
}
