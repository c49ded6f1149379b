//! Image decoding pipeline for Unitools.
//!
//! This module provides functionality for:
//! - Sniffing the real format of an upload from its magic bytes
//! - Decoding browser-supported formats (PNG, JPEG, WebP, GIF, BMP) to RGBA
//! - Applying EXIF orientation, the way a browser bakes it into a canvas
//! - Routing HEIC uploads through an external converter
//!
//! # Architecture
//!
//! Decoding runs inside the page's WASM module; all operations are
//! synchronous and single-threaded. The declared MIME type of an upload is
//! never trusted: the bytes decide. HEIC is the one format handled
//! out-of-crate, via a converter callback supplied by the shell.
//!
//! # Examples
//!
//! ```ignore
//! use unitools_core::decode::load_image;
//!
//! let bytes = std::fs::read("photo.jpg").unwrap();
//! let source = load_image(&bytes).unwrap();
//! println!("Decoded {}x{} {}", source.image.width, source.image.height, source.mime_type());
//! ```

mod heic;
mod loader;
mod types;

pub use heic::{is_heic, HeicConverter};
pub use loader::{load_image, load_image_with};
pub use types::{DecodeError, ImageFormat, Orientation, PixelImage, SourceImage};
