//! Image encoding WASM bindings.
//!
//! This module exposes the unitools-core encoders to JavaScript for the
//! export workflow: RGBA pixels in, download Blob bytes out.
//!
//! # Functions
//!
//! - [`encode_image`] - Encode RGBA pixels into a target format
//! - [`export_file_name`] - Suggested download name for an export
//!
//! # Example
//!
//! ```typescript
//! import { encode_image, export_file_name } from '@unitools/wasm';
//!
//! const out = encode_image(image, 'image/jpeg', 0.92);
//! const blob = new Blob([out.bytes()], { type: out.mime_type });
//! download(blob, export_file_name(out.mime_type));
//! ```

use crate::types::{JsEncodedImage, JsPixelImage};
use unitools_core::decode::ImageFormat;
use unitools_core::encode::{self, EncodedImage};
use wasm_bindgen::prelude::*;

/// Encode RGBA pixels into a downloadable file.
///
/// Quality follows the canvas `toBlob` convention: 0.0 to 1.0, honored by
/// JPEG only. PNG, WebP (lossless), GIF and BMP ignore it, exactly like
/// their browser counterparts.
///
/// # Arguments
///
/// * `image` - The pixels to encode
/// * `mime` - Target MIME type: "image/png", "image/jpeg", "image/webp",
///   "image/gif" or "image/bmp"
/// * `quality` - Encode quality in 0.0..=1.0 (out-of-range values are
///   clamped)
///
/// # Returns
///
/// A `JsEncodedImage` carrying the encoded bytes and their MIME type, or an
/// error if encoding fails.
///
/// # Errors
///
/// Returns an error if:
/// - The MIME type is unknown, or names a decode-only format (HEIC)
/// - The underlying codec fails
///
/// # Example
///
/// ```typescript
/// const out = encode_image(image, 'image/jpeg', 0.8);
/// console.log(`${out.byte_length} bytes of ${out.mime_type}`);
/// ```
#[wasm_bindgen]
pub fn encode_image(
    image: &JsPixelImage,
    mime: &str,
    quality: f32,
) -> Result<JsEncodedImage, JsValue> {
    let format = ImageFormat::from_mime(mime)
        .ok_or_else(|| JsValue::from_str(&format!("Unknown image type: {}", mime)))?;

    let pixels = image.to_image();
    let bytes = encode::encode_image(&pixels, format, quality)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    Ok(JsEncodedImage::from_encoded(EncodedImage {
        format,
        width: pixels.width,
        height: pixels.height,
        bytes,
    }))
}

/// Build the suggested download file name for an export.
///
/// Stamped with the current time so repeated exports do not collide, e.g.
/// `unitools-edit-1724380000000.png`. Unknown MIME types fall back to the
/// `.png` extension to keep the download usable.
///
/// # Example
///
/// ```typescript
/// const name = export_file_name('image/jpeg'); // "unitools-edit-<ms>.jpg"
/// ```
#[wasm_bindgen]
pub fn export_file_name(mime: &str) -> String {
    let extension = ImageFormat::from_mime(mime)
        .map(ImageFormat::extension)
        .unwrap_or("png");
    let timestamp = js_sys::Date::now() as u64;
    format!("unitools-edit-{}.{}", timestamp, extension)
}
