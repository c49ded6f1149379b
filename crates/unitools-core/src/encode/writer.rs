//! Multi-format encoding for export.
//!
//! This module turns RGBA pixels into the bytes of a download Blob using
//! the `image` crate's per-codec encoders. Quality follows the canvas
//! convention (0.0 to 1.0) and only the JPEG encoder honors it; PNG, WebP
//! (lossless), GIF and BMP ignore it, exactly like their browser
//! counterparts.

use image::codecs::bmp::BmpEncoder;
use image::codecs::gif::GifEncoder;
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::codecs::webp::WebPEncoder;
use image::ExtendedColorType;
use image::ImageEncoder;
use std::io::Cursor;
use thiserror::Error;

use crate::decode::{ImageFormat, PixelImage};

/// Encode quality used when an operation does not choose one.
/// Matches the browser canvas encoder default.
pub const DEFAULT_QUALITY: f32 = 0.92;

/// Encode quality used by explicit format conversions.
pub const CONVERT_QUALITY: f32 = 0.95;

/// Errors that can occur during encoding.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Pixel data length doesn't match expected dimensions
    #[error("Invalid pixel data: expected {expected} bytes (width * height * 4), got {actual}")]
    InvalidPixelData { expected: usize, actual: usize },

    /// Width or height is zero
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// The requested format cannot be encoded, only decoded
    #[error("Unsupported encode target: {}", .format.mime_type())]
    UnsupportedTarget { format: ImageFormat },

    /// The underlying codec failed
    #[error("Encoding failed: {0}")]
    EncodingFailed(String),
}

/// An encoded output artifact: the bytes of a would-be download Blob plus
/// the format and pixel dimensions they carry.
#[derive(Debug, Clone)]
pub struct EncodedImage {
    /// The format of `bytes`.
    pub format: ImageFormat,
    /// Pixel width of the encoded image.
    pub width: u32,
    /// Pixel height of the encoded image.
    pub height: u32,
    /// The encoded file bytes.
    pub bytes: Vec<u8>,
}

impl EncodedImage {
    /// The MIME type of the encoded bytes.
    pub fn mime_type(&self) -> &'static str {
        self.format.mime_type()
    }

    /// The encoded size in bytes (what the compression estimator reports).
    pub fn byte_len(&self) -> usize {
        self.bytes.len()
    }
}

/// Encode RGBA pixels into the given format.
///
/// # Arguments
///
/// * `image` - RGBA pixel data (4 bytes per pixel, row-major order)
/// * `format` - Target format; `Heic` is decode-only and rejected
/// * `quality` - Canvas-style quality in 0.0..=1.0 (JPEG only; out-of-range
///   values are clamped)
///
/// # Returns
///
/// Encoded file bytes on success.
///
/// # Errors
///
/// - `EncodeError::InvalidDimensions` - width or height is zero
/// - `EncodeError::InvalidPixelData` - buffer length mismatch
/// - `EncodeError::UnsupportedTarget` - format cannot be encoded
/// - `EncodeError::EncodingFailed` - the codec itself failed
pub fn encode_image(
    image: &PixelImage,
    format: ImageFormat,
    quality: f32,
) -> Result<Vec<u8>, EncodeError> {
    if image.width == 0 || image.height == 0 {
        return Err(EncodeError::InvalidDimensions {
            width: image.width,
            height: image.height,
        });
    }

    let expected_len = (image.width as usize) * (image.height as usize) * 4;
    if image.pixels.len() != expected_len {
        return Err(EncodeError::InvalidPixelData {
            expected: expected_len,
            actual: image.pixels.len(),
        });
    }

    match format {
        ImageFormat::Jpeg => encode_jpeg(image, quality),
        ImageFormat::Png => encode_png(image),
        ImageFormat::WebP => encode_webp(image),
        ImageFormat::Gif => encode_gif(image),
        ImageFormat::Bmp => encode_bmp(image),
        ImageFormat::Heic => Err(EncodeError::UnsupportedTarget { format }),
    }
}

/// Map canvas-style quality (0.0..=1.0) onto the JPEG encoder's 1-100 scale.
#[inline]
fn jpeg_quality(quality: f32) -> u8 {
    ((quality.clamp(0.0, 1.0) * 100.0).round() as u8).max(1)
}

fn encode_jpeg(image: &PixelImage, quality: f32) -> Result<Vec<u8>, EncodeError> {
    // JPEG has no alpha channel; drop it, like a canvas export does.
    let rgb = strip_alpha(&image.pixels);

    let mut buffer = Cursor::new(Vec::new());
    let encoder = JpegEncoder::new_with_quality(&mut buffer, jpeg_quality(quality));
    encoder
        .write_image(&rgb, image.width, image.height, ExtendedColorType::Rgb8)
        .map_err(|e| EncodeError::EncodingFailed(e.to_string()))?;

    Ok(buffer.into_inner())
}

fn encode_png(image: &PixelImage) -> Result<Vec<u8>, EncodeError> {
    let mut buffer = Cursor::new(Vec::new());
    let encoder = PngEncoder::new(&mut buffer);
    encoder
        .write_image(
            &image.pixels,
            image.width,
            image.height,
            ExtendedColorType::Rgba8,
        )
        .map_err(|e| EncodeError::EncodingFailed(e.to_string()))?;

    Ok(buffer.into_inner())
}

fn encode_webp(image: &PixelImage) -> Result<Vec<u8>, EncodeError> {
    let mut buffer = Cursor::new(Vec::new());
    let encoder = WebPEncoder::new_lossless(&mut buffer);
    encoder
        .write_image(
            &image.pixels,
            image.width,
            image.height,
            ExtendedColorType::Rgba8,
        )
        .map_err(|e| EncodeError::EncodingFailed(e.to_string()))?;

    Ok(buffer.into_inner())
}

fn encode_gif(image: &PixelImage) -> Result<Vec<u8>, EncodeError> {
    let rgba = image
        .to_rgba_image()
        .ok_or(EncodeError::InvalidPixelData {
            expected: (image.width as usize) * (image.height as usize) * 4,
            actual: image.pixels.len(),
        })?;

    let mut buffer = Cursor::new(Vec::new());
    {
        let mut encoder = GifEncoder::new(&mut buffer);
        encoder
            .encode_frame(image::Frame::new(rgba))
            .map_err(|e| EncodeError::EncodingFailed(e.to_string()))?;
    }

    Ok(buffer.into_inner())
}

fn encode_bmp(image: &PixelImage) -> Result<Vec<u8>, EncodeError> {
    let mut buffer = Cursor::new(Vec::new());
    let encoder = BmpEncoder::new(&mut buffer);
    encoder
        .write_image(
            &image.pixels,
            image.width,
            image.height,
            ExtendedColorType::Rgba8,
        )
        .map_err(|e| EncodeError::EncodingFailed(e.to_string()))?;

    Ok(buffer.into_inner())
}

/// Drop the alpha channel from an RGBA buffer.
fn strip_alpha(pixels: &[u8]) -> Vec<u8> {
    let mut rgb = Vec::with_capacity(pixels.len() / 4 * 3);
    for px in pixels.chunks_exact(4) {
        rgb.extend_from_slice(&px[..3]);
    }
    rgb
}


// ============================================================================
// Property-Based Tests
// ============================================================================
