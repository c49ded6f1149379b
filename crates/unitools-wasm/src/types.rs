//! WASM-compatible wrapper types for image data.
//!
//! This module provides JavaScript-friendly types that wrap the core Unitools
//! types, handling the conversion between Rust and JavaScript data
//! representations.

use unitools_core::decode::{ImageFormat, PixelImage, SourceImage};
use unitools_core::encode::EncodedImage;
use unitools_core::transform::ResampleFilter;
use wasm_bindgen::prelude::*;

/// An RGBA image wrapper for JavaScript.
///
/// The pixel layout matches a browser `ImageData`: row-major, 4 bytes per
/// pixel, non-premultiplied alpha. `new ImageData(image.pixels(), image.width)`
/// reconstructs it on the JS side for `putImageData`.
///
/// # Memory Management
///
/// The pixel data is stored in WASM memory. When you call `pixels()`, a copy
/// is made to JavaScript memory as a `Uint8Array`. For performance-critical
/// code, keep the image in WASM memory and only extract pixels when needed.
///
/// The `free()` method can be called to explicitly release WASM memory, but
/// this is optional as wasm-bindgen's finalizer will handle cleanup
/// automatically.
#[wasm_bindgen]
pub struct JsPixelImage {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

#[wasm_bindgen]
impl JsPixelImage {
    /// Create a new JsPixelImage from dimensions and pixel data.
    ///
    /// # Arguments
    /// * `width` - Image width in pixels
    /// * `height` - Image height in pixels
    /// * `pixels` - RGBA pixel data (4 bytes per pixel, row-major order)
    ///
    /// # Errors
    ///
    /// Rejects a pixel buffer whose length is not `width * height * 4`.
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Result<JsPixelImage, JsValue> {
        let expected = (width as usize) * (height as usize) * 4;
        if pixels.len() != expected {
            return Err(JsValue::from_str(&format!(
                "Invalid pixel data: expected {} bytes (width * height * 4), got {}",
                expected,
                pixels.len()
            )));
        }
        Ok(JsPixelImage {
            width,
            height,
            pixels,
        })
    }

    /// Get the image width in pixels
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the image height in pixels
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the number of bytes in the pixel buffer (width * height * 4)
    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.pixels.len()
    }

    /// Returns RGBA pixel data as Uint8Array.
    ///
    /// Note: This creates a copy of the pixel data. For large images, this
    /// can take 10-50ms but is necessary for safe memory management.
    pub fn pixels(&self) -> Vec<u8> {
        self.pixels.clone()
    }

    /// Explicitly free WASM memory.
    ///
    /// This is optional - wasm-bindgen's finalizer will handle cleanup
    /// automatically. Call this if you want to immediately release memory
    /// for a large image.
    pub fn free(self) {
        // Dropping self releases the memory
    }
}

impl JsPixelImage {
    /// Wrap a core PixelImage without copying the pixel buffer.
    ///
    /// This is an internal constructor used by the transform and filter
    /// bindings.
    pub(crate) fn from_image(image: PixelImage) -> Self {
        Self {
            width: image.width,
            height: image.height,
            pixels: image.pixels,
        }
    }

    /// Convert back to a core PixelImage.
    ///
    /// This is used when passing an image to core functions like resize.
    /// Note: This clones the pixel data.
    pub(crate) fn to_image(&self) -> PixelImage {
        PixelImage {
            width: self.width,
            height: self.height,
            pixels: self.pixels.clone(),
        }
    }
}

/// A decoded upload for JavaScript: the pixels plus the detected format.
///
/// The format comes from sniffing the uploaded bytes, never from the file
/// name, and is what the editor's "keep original format" paths read. After
/// HEIC conversion it reports `image/jpeg`, matching what was decoded.
#[wasm_bindgen]
pub struct JsSourceImage {
    format: ImageFormat,
    image: PixelImage,
}

#[wasm_bindgen]
impl JsSourceImage {
    /// Get the image width in pixels
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.image.width
    }

    /// Get the image height in pixels
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.image.height
    }

    /// The MIME type the bytes were decoded from, e.g. "image/png"
    #[wasm_bindgen(getter)]
    pub fn mime_type(&self) -> String {
        self.format.mime_type().to_string()
    }

    /// Returns RGBA pixel data as Uint8Array (a copy).
    pub fn pixels(&self) -> Vec<u8> {
        self.image.pixels.clone()
    }

    /// The pixels as a standalone image for the preview pipeline.
    ///
    /// Note: This clones the pixel data; call it once and reuse the result.
    pub fn image(&self) -> JsPixelImage {
        JsPixelImage::from_image(self.image.clone())
    }
}

impl JsSourceImage {
    /// Wrap a core SourceImage. Internal constructor for the decode bindings.
    pub(crate) fn from_source(source: SourceImage) -> Self {
        Self {
            format: source.format,
            image: source.image,
        }
    }

    /// Convert back to a core SourceImage for the request pipeline.
    /// Note: This clones the pixel data.
    pub(crate) fn to_source(&self) -> SourceImage {
        SourceImage {
            format: self.format,
            image: self.image.clone(),
        }
    }
}

/// An encoded output file for JavaScript: the bytes of the download Blob.
///
/// `byte_length` is available without copying the bytes out, which is what
/// the compression estimate in the UI reads while sliding the quality knob.
#[wasm_bindgen]
pub struct JsEncodedImage {
    format: ImageFormat,
    width: u32,
    height: u32,
    bytes: Vec<u8>,
}

#[wasm_bindgen]
impl JsEncodedImage {
    /// Pixel width of the encoded image
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Pixel height of the encoded image
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The MIME type of the encoded bytes, e.g. "image/jpeg"
    #[wasm_bindgen(getter)]
    pub fn mime_type(&self) -> String {
        self.format.mime_type().to_string()
    }

    /// The encoded size in bytes
    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.bytes.len()
    }

    /// Returns the encoded file bytes as Uint8Array (a copy).
    ///
    /// Hand this to `new Blob([bytes], { type: mime_type })` for download.
    pub fn bytes(&self) -> Vec<u8> {
        self.bytes.clone()
    }
}

impl JsEncodedImage {
    /// Wrap a core EncodedImage. Internal constructor for the encode and
    /// request bindings.
    pub(crate) fn from_encoded(encoded: EncodedImage) -> Self {
        Self {
            format: encoded.format,
            width: encoded.width,
            height: encoded.height,
            bytes: encoded.bytes,
        }
    }
}

/// Convert a u8 filter value to the core ResampleFilter enum.
///
/// Values:
/// - 0 = Nearest (fastest, lowest quality)
/// - 1 = Bilinear (good balance of speed and quality)
/// - 2 = Lanczos3 (best quality, slowest)
///
/// Any other value defaults to Bilinear.
pub(crate) fn filter_from_u8(value: u8) -> ResampleFilter {
    match value {
        0 => ResampleFilter::Nearest,
        2 => ResampleFilter::Lanczos3,
        _ => ResampleFilter::Bilinear, // Default
    }
}
