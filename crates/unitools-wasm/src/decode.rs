//! Image decoding WASM bindings.
//!
//! This module exposes the unitools-core upload decoding to JavaScript:
//! format sniffing, EXIF orientation handling, and the HEIC conversion
//! detour.
//!
//! # Functions
//!
//! - [`decode_image`] - Decode an uploaded file into RGBA pixels
//! - [`decode_image_with_heic`] - Same, routing HEIC files through a JS converter callback
//! - [`is_heic_file`] - Check if bytes look like a HEIC/HEIF container
//!
//! # Example
//!
//! ```typescript
//! import { decode_image, decode_image_with_heic, is_heic_file } from '@unitools/wasm';
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//!
//! if (is_heic_file(bytes)) {
//!   // heic2any runs first; the callback hands its buffered output back
//!   const jpeg = new Uint8Array(await heicToJpeg(bytes));
//!   const image = decode_image_with_heic(bytes, () => jpeg);
//! } else {
//!   const image = decode_image(bytes);
//!   console.log(`Decoded ${image.width}x${image.height} ${image.mime_type}`);
//! }
//! ```

use crate::types::JsSourceImage;
use unitools_core::decode;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::console;

/// Decode an uploaded image file into RGBA pixels.
///
/// The format is sniffed from the bytes (PNG, JPEG, WebP, GIF, BMP), never
/// trusted from the file name, and EXIF orientation is baked into the
/// pixels the way a browser canvas would.
///
/// # Arguments
///
/// * `bytes` - The raw file bytes as a `Uint8Array`
///
/// # Returns
///
/// A `JsSourceImage` carrying the decoded pixels and the detected MIME
/// type, or an error if decoding fails.
///
/// # Errors
///
/// Returns an error if:
/// - The format is not recognized (HEIC lands here; use
///   [`decode_image_with_heic`] instead)
/// - The file is corrupted or truncated
///
/// The failure is also logged to the browser console.
///
/// # Example
///
/// ```typescript
/// const bytes = new Uint8Array(await file.arrayBuffer());
/// const image = decode_image(bytes);
/// console.log(`Decoded ${image.width}x${image.height} image`);
/// ```
#[wasm_bindgen]
pub fn decode_image(bytes: &[u8]) -> Result<JsSourceImage, JsValue> {
    decode::load_image(bytes)
        .map(JsSourceImage::from_source)
        .map_err(report_decode_error)
}

/// Decode an uploaded image file, converting HEIC through a JS callback.
///
/// Browsers (and this module) cannot decode HEIC natively, so HEIC uploads
/// take a detour: `convert_heic` receives the original bytes as a
/// `Uint8Array` and must return the converted JPEG bytes as a `Uint8Array`,
/// synchronously. On the web shell the heic2any conversion is awaited
/// before this call, so the callback just hands back the buffered result.
///
/// Non-HEIC bytes ignore the callback and decode exactly like
/// [`decode_image`]. A successfully converted upload reports `image/jpeg`
/// as its MIME type, because that is what was actually decoded.
///
/// # Errors
///
/// Returns an error if the conversion fails and the bytes cannot be decoded
/// natively either. The failure is also logged to the browser console.
///
/// # Example
///
/// ```typescript
/// const jpeg = new Uint8Array(await heicToJpeg(bytes));
/// const image = decode_image_with_heic(bytes, () => jpeg);
/// console.log(image.mime_type); // "image/jpeg"
/// ```
#[wasm_bindgen]
pub fn decode_image_with_heic(
    bytes: &[u8],
    convert_heic: &js_sys::Function,
) -> Result<JsSourceImage, JsValue> {
    let converter = CallbackConverter {
        convert: convert_heic,
    };
    decode::load_image_with(bytes, Some(&converter))
        .map(JsSourceImage::from_source)
        .map_err(report_decode_error)
}

/// Check if bytes look like a HEIC/HEIF file.
///
/// Inspects the container's `ftyp` box; the first 32 bytes of the file are
/// enough. The shell uses this to decide whether to run the conversion
/// library before handing the upload to [`decode_image_with_heic`].
///
/// # Example
///
/// ```typescript
/// const head = new Uint8Array(await file.slice(0, 32).arrayBuffer());
/// if (is_heic_file(head)) {
///   // run heic2any first
/// }
/// ```
#[wasm_bindgen]
pub fn is_heic_file(bytes: &[u8]) -> bool {
    decode::is_heic(bytes)
}

/// Log a decode failure to the browser console and box it for JS.
fn report_decode_error(error: decode::DecodeError) -> JsValue {
    let message = error.to_string();
    console::error_1(&JsValue::from_str(&message));
    JsValue::from_str(&message)
}

/// Adapter presenting a JS conversion callback as a core `HeicConverter`.
struct CallbackConverter<'a> {
    convert: &'a js_sys::Function,
}

impl decode::HeicConverter for CallbackConverter<'_> {
    fn convert_to_jpeg(&self, bytes: &[u8]) -> Result<Vec<u8>, String> {
        let input = js_sys::Uint8Array::from(bytes);
        let result = self.convert.call1(&JsValue::NULL, &input).map_err(|e| {
            console::warn_1(&e);
            "HEIC converter threw".to_string()
        })?;
        let output: js_sys::Uint8Array = result
            .dyn_into()
            .map_err(|_| "HEIC converter did not return a Uint8Array".to_string())?;
        Ok(output.to_vec())
    }
}
