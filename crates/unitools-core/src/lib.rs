//! Unitools Core - Image processing library
//!
//! This crate provides the image processing functionality for Unitools:
//! decoding (with EXIF orientation and HEIC hand-off), encoding, geometric
//! transforms, pixel filters, the single-shot edit request dispatcher, and
//! the interactive crop/resize editor state machines.

pub mod decode;
pub mod editor;
pub mod encode;
pub mod filter;
pub mod luma;
pub mod request;
pub mod transform;

pub use decode::{load_image, load_image_with, DecodeError, ImageFormat, PixelImage, SourceImage};
pub use encode::{encode_image, EncodeError, EncodedImage};
pub use request::{apply, EditOperation, ProcessError};
