//! Edit operation dispatch.
//!
//! Every edit the tools offer is one [`EditOperation`] value applied to one
//! decoded source, producing one encoded output. Requests are stateless and
//! independent; the interactive editor state lives in [`crate::editor`] and
//! only ever reaches this module as a finished operation.
//!
//! Output format follows the original tools' export behavior:
//!
//! - `Resize` re-encodes in the source format
//! - `Compress` keeps the source format, except PNG sources become JPEG
//!   (PNG encoding ignores quality, so compressing a PNG substitutes a
//!   lossy format; transparency is flattened in the process)
//! - `ConvertFormat` uses the requested target
//! - everything else exports PNG, the editor's download default

use thiserror::Error;

use crate::decode::{ImageFormat, PixelImage, SourceImage};
use crate::encode::{encode_image, EncodeError, EncodedImage, CONVERT_QUALITY, DEFAULT_QUALITY};
use crate::filter::{grayscale, sketch, threshold};
use crate::transform::{
    crop, flip_horizontal, resize, rotate, round_mask, ResampleFilter, TransformError,
};

/// One self-contained edit request.
///
/// Serialized with an `op` tag so the web shell can pass plain objects like
/// `{ "op": "rotate", "degrees": 90 }` across the boundary. Dispatch is an
/// exhaustive match; adding a variant without handling it fails to compile.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum EditOperation {
    /// Resample to exactly the given dimensions, ignoring aspect ratio.
    Resize { width: u32, height: u32 },
    /// Re-encode with the given quality (0.0 to 1.0).
    Compress { quality: f32 },
    /// Cut the largest centered circle out of the image.
    Round,
    /// Mirror across the vertical axis.
    FlipHorizontal,
    /// Rotate clockwise by the given angle in degrees.
    Rotate { degrees: f64 },
    /// Extract a rectangle given in source pixels.
    Crop { x: u32, y: u32, width: u32, height: u32 },
    /// Replace each channel with the unweighted RGB mean.
    Grayscale,
    /// Binarize against a luma cutoff.
    Threshold { cutoff: u8 },
    /// Sobel edge sketch.
    Sketch,
    /// Re-encode in another format.
    ConvertFormat { target: ImageFormat },
}

/// Failure of a single edit request.
#[derive(Debug, Error)]
pub enum ProcessError {
    #[error(transparent)]
    Transform(#[from] TransformError),
    #[error(transparent)]
    Encode(#[from] EncodeError),
}

/// Apply one operation to a decoded source and encode the result.
pub fn apply(
    source: &SourceImage,
    operation: &EditOperation,
) -> Result<EncodedImage, ProcessError> {
    match operation {
        EditOperation::Resize { width, height } => {
            let resized = resize(&source.image, *width, *height, ResampleFilter::Lanczos3)?;
            encode_output(&resized, source.format, DEFAULT_QUALITY)
        }
        EditOperation::Compress { quality } => {
            encode_output(&source.image, compress_target(source.format), *quality)
        }
        EditOperation::Round => {
            encode_output(&round_mask(&source.image), ImageFormat::Png, DEFAULT_QUALITY)
        }
        EditOperation::FlipHorizontal => encode_output(
            &flip_horizontal(&source.image),
            ImageFormat::Png,
            DEFAULT_QUALITY,
        ),
        EditOperation::Rotate { degrees } => encode_output(
            &rotate(&source.image, *degrees),
            ImageFormat::Png,
            DEFAULT_QUALITY,
        ),
        EditOperation::Crop {
            x,
            y,
            width,
            height,
        } => {
            let cropped = crop(&source.image, *x, *y, *width, *height)?;
            encode_output(&cropped, ImageFormat::Png, DEFAULT_QUALITY)
        }
        EditOperation::Grayscale => {
            encode_output(&grayscale(&source.image), ImageFormat::Png, DEFAULT_QUALITY)
        }
        EditOperation::Threshold { cutoff } => encode_output(
            &threshold(&source.image, *cutoff),
            ImageFormat::Png,
            DEFAULT_QUALITY,
        ),
        EditOperation::Sketch => {
            encode_output(&sketch(&source.image), ImageFormat::Png, DEFAULT_QUALITY)
        }
        EditOperation::ConvertFormat { target } => {
            encode_output(&source.image, *target, CONVERT_QUALITY)
        }
    }
}

/// Encode the final pixels and pair the bytes with the shape they describe.
fn encode_output(
    image: &PixelImage,
    format: ImageFormat,
    quality: f32,
) -> Result<EncodedImage, ProcessError> {
    let bytes = encode_image(image, format, quality)?;
    Ok(EncodedImage {
        format,
        width: image.width,
        height: image.height,
        bytes,
    })
}

/// Compressing a PNG substitutes JPEG; PNG encoders have no quality knob.
fn compress_target(format: ImageFormat) -> ImageFormat {
    if format == ImageFormat::Png {
        ImageFormat::Jpeg
    } else {
        format
    }
}
