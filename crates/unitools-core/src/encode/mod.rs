//! Image encoding pipeline for Unitools.
//!
//! This module provides functionality for:
//! - Encoding RGBA pixels to PNG, JPEG, WebP, GIF and BMP
//! - Canvas-style quality handling (0.0..=1.0, honored by JPEG only)
//!
//! # Architecture
//!
//! Encoding runs inside the page's WASM module; all operations are
//! synchronous and single-threaded. The output bytes become the download
//! Blob on the JS side.
//!
//! # Examples
//!
//! ```ignore
//! use unitools_core::decode::{ImageFormat, PixelImage};
//! use unitools_core::encode::encode_image;
//!
//! let image = PixelImage::blank(100, 100);
//! let jpeg_bytes = encode_image(&image, ImageFormat::Jpeg, 0.9).unwrap();
//! println!("Encoded {} bytes", jpeg_bytes.len());
//! ```

mod writer;

pub use writer::{encode_image, EncodeError, EncodedImage, CONVERT_QUALITY, DEFAULT_QUALITY};
