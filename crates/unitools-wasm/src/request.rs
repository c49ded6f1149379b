//! WASM bindings for the one-shot edit pipeline.
//!
//! This module exposes the request layer to JavaScript: one decoded upload
//! plus one edit operation in, one encoded download out. The operation
//! arrives as a plain JS object tagged by `op`, mirroring the
//! `EditOperation` enum in unitools-core.

use crate::types::{JsEncodedImage, JsSourceImage};
use unitools_core::request::{apply as core_apply, EditOperation};
use wasm_bindgen::prelude::*;

/// Apply a single edit operation to a decoded upload and encode the result.
///
/// The output format follows the operation: resize keeps the source format,
/// compress turns PNG into JPEG and keeps everything else, convert-format
/// targets what it names, and the rest export as PNG so transparency
/// survives.
///
/// # Arguments
///
/// * `source` - The decoded upload
/// * `operation` - A tagged operation object, e.g.
///   `{ op: "resize", width: 640, height: 480 }`,
///   `{ op: "rotate", degrees: 90 }`,
///   `{ op: "threshold", cutoff: 128 }`,
///   `{ op: "convertFormat", target: "webp" }`,
///   `{ op: "flipHorizontal" }`
///
/// # Errors
///
/// Returns an error if the operation object does not parse, names invalid
/// dimensions, or targets a format that cannot be encoded.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const out = apply_operation(source, { op: 'compress', quality: 0.7 });
/// const blob = new Blob([out.bytes()], { type: out.mime_type });
/// ```
#[wasm_bindgen]
pub fn apply_operation(
    source: &JsSourceImage,
    operation: JsValue,
) -> Result<JsEncodedImage, JsValue> {
    let operation: EditOperation = serde_wasm_bindgen::from_value(operation)
        .map_err(|e| JsValue::from_str(&format!("Invalid operation: {}", e)))?;

    core_apply(&source.to_source(), &operation)
        .map(JsEncodedImage::from_encoded)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}
