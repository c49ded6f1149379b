//! Unitools WASM - WebAssembly bindings for Unitools
//!
//! This crate provides WASM bindings to expose the unitools-core image
//! processing functionality to JavaScript/TypeScript applications.
//!
//! # Module Structure
//!
//! - `types` - WASM-compatible wrapper types for image data
//! - `decode` - Upload decoding bindings (format sniffing, EXIF, HEIC routing)
//! - `encode` - Export encoding bindings (PNG, JPEG, WebP, GIF, BMP)
//! - `transform` - Geometric operations (resize, crop, rotate, flip, round)
//! - `filter` - Pixel filters (grayscale, threshold, sketch)
//! - `request` - The one-shot edit pipeline
//! - `editor` - Interactive crop/resize editor state
//!
//! # Usage
//!
//! ```typescript
//! import init, { decode_image, apply_operation } from '@unitools/wasm';
//!
//! // Initialize WASM module (must call first)
//! await init();
//!
//! // Decode an upload and run one edit
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const source = decode_image(bytes);
//! const out = apply_operation(source, { op: 'grayscale' });
//! console.log(`${out.byte_length} bytes of ${out.mime_type}`);
//! ```

use wasm_bindgen::prelude::*;

mod decode;
mod editor;
mod encode;
mod filter;
mod request;
mod transform;
mod types;

// Re-export public types
pub use decode::{decode_image, decode_image_with_heic, is_heic_file};
pub use editor::{
    fit_display, quality_preview_debounce_ms, threshold_preview_debounce_ms, Editor,
    PreviewSequencer,
};
pub use encode::{encode_image, export_file_name};
pub use filter::{grayscale, sketch, threshold};
pub use request::apply_operation;
pub use transform::{crop, flip_horizontal, resize, rotate, round_mask};
pub use types::{JsEncodedImage, JsPixelImage, JsSourceImage};

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {
    // Future: Set up panic hook for better error messages in browser console
    // when console_error_panic_hook feature is added
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Simple function to verify WASM is working
#[wasm_bindgen]
pub fn greet(name: &str) -> String {
    format!("Hello, {}! Unitools WASM is ready.", name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!version().is_empty());
    }

    #[test]
    fn test_greet() {
        assert_eq!(greet("World"), "Hello, World! Unitools WASM is ready.");
    }
}
