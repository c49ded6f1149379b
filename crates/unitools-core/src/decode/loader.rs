//! Image loading with format sniffing and EXIF orientation handling.

use std::io::Cursor;

use exif::{In, Reader, Tag};
use image::DynamicImage;
use image::ImageReader;

use super::{is_heic, DecodeError, HeicConverter, ImageFormat, Orientation, PixelImage, SourceImage};

/// Decode an uploaded image into RGBA pixels, applying EXIF orientation.
///
/// The format is sniffed from the bytes, never trusted from a file name or
/// declared MIME type. HEIC uploads fail with `UnsupportedFormat` here; use
/// [`load_image_with`] to route them through an external converter.
///
/// # Arguments
///
/// * `bytes` - Raw file bytes
///
/// # Returns
///
/// A `SourceImage` carrying the decoded pixels and the detected format.
///
/// # Errors
///
/// Returns `DecodeError::UnsupportedFormat` if the format is not recognized.
/// Returns `DecodeError::DecodeFailed` if the file is corrupted.
pub fn load_image(bytes: &[u8]) -> Result<SourceImage, DecodeError> {
    load_image_with(bytes, None)
}

/// Decode an uploaded image, converting HEIC through an external converter.
///
/// HEIC bytes are first handed to `converter` (the heic2any stand-in) and
/// the produced JPEG is decoded in its place; the recorded source format is
/// then `Jpeg`, which is what the rest of the pipeline sees. If the
/// converter is absent or fails, the bytes fall through to native decoding,
/// whose failure surfaces as `UnsupportedFormat`.
pub fn load_image_with(
    bytes: &[u8],
    converter: Option<&dyn HeicConverter>,
) -> Result<SourceImage, DecodeError> {
    if is_heic(bytes) {
        if let Some(converter) = converter {
            if let Ok(jpeg) = converter.convert_to_jpeg(bytes) {
                let image = decode_pixels(&jpeg)?;
                return Ok(SourceImage {
                    format: ImageFormat::Jpeg,
                    image,
                });
            }
        }
        // No converter (or it failed): attempt native decode anyway, and
        // report the failure as an unsupported format rather than corruption.
        return match decode_native(bytes) {
            Ok(source) => Ok(source),
            Err(_) => Err(DecodeError::UnsupportedFormat),
        };
    }

    decode_native(bytes)
}

/// Decode bytes the image crate understands, recording the sniffed format.
fn decode_native(bytes: &[u8]) -> Result<SourceImage, DecodeError> {
    let sniffed = ImageFormat::sniff(bytes);

    let cursor = Cursor::new(bytes);
    let reader = ImageReader::new(cursor)
        .with_guessed_format()
        .map_err(|e| DecodeError::DecodeFailed(e.to_string()))?;

    let format = reader
        .format()
        .and_then(ImageFormat::from_image_format)
        .or(sniffed)
        .ok_or(DecodeError::UnsupportedFormat)?;

    let orientation = extract_orientation(bytes);

    let img = reader
        .decode()
        .map_err(|e| DecodeError::DecodeFailed(e.to_string()))?;

    let oriented = apply_orientation(img, orientation);

    Ok(SourceImage {
        format,
        image: PixelImage::from_rgba_image(oriented.into_rgba8()),
    })
}

/// Decode bytes to pixels only (used for converter output, where the format
/// is already known).
fn decode_pixels(bytes: &[u8]) -> Result<PixelImage, DecodeError> {
    let orientation = extract_orientation(bytes);

    let cursor = Cursor::new(bytes);
    let reader = ImageReader::new(cursor)
        .with_guessed_format()
        .map_err(|e| DecodeError::DecodeFailed(e.to_string()))?;

    let img = reader
        .decode()
        .map_err(|e| DecodeError::DecodeFailed(e.to_string()))?;

    let oriented = apply_orientation(img, orientation);
    Ok(PixelImage::from_rgba_image(oriented.into_rgba8()))
}

/// Extract EXIF orientation from image bytes.
///
/// Returns `Orientation::Normal` if no EXIF data is found or orientation
/// cannot be determined.
fn extract_orientation(bytes: &[u8]) -> Orientation {
    let exif_reader = Reader::new();
    let mut cursor = Cursor::new(bytes);

    match exif_reader.read_from_container(&mut cursor) {
        Ok(exif) => {
            if let Some(field) = exif.get_field(Tag::Orientation, In::PRIMARY) {
                if let Some(value) = field.value.get_uint(0) {
                    return Orientation::from(value);
                }
            }
            Orientation::Normal
        }
        Err(_) => Orientation::Normal,
    }
}

/// Apply EXIF orientation transformation to an image.
///
/// Browsers bake the orientation into the pixels they hand to a canvas, so
/// the pipeline does the same before anything else sees the image.
fn apply_orientation(img: DynamicImage, orientation: Orientation) -> DynamicImage {
    match orientation {
        Orientation::Normal => img,
        Orientation::FlipHorizontal => img.fliph(),
        Orientation::Rotate180 => img.rotate180(),
        Orientation::FlipVertical => img.flipv(),
        Orientation::Transpose => img.rotate90().fliph(),
        Orientation::Rotate90CW => img.rotate90(),
        Orientation::Transverse => img.rotate270().fliph(),
        Orientation::Rotate270CW => img.rotate270(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Minimal valid JPEG bytes (1x1 pixel)
    const MINIMAL_JPEG: &[u8] = &[
        0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, 0x4A, 0x46, 0x49, 0x46, 0x00, 0x01, 0x01, 0x00, 0x00,
        0x01, 0x00, 0x01, 0x00, 0x00, 0xFF, 0xDB, 0x00, 0x43, 0x00, 0x08, 0x06, 0x06, 0x07, 0x06,
        0x05, 0x08, 0x07, 0x07, 0x07, 0x09, 0x09, 0x08, 0x0A, 0x0C, 0x14, 0x0D, 0x0C, 0x0B, 0x0B,
        0x0C, 0x19, 0x12, 0x13, 0x0F, 0x14, 0x1D, 0x1A, 0x1F, 0x1E, 0x1D, 0x1A, 0x1C, 0x1C, 0x20,
        0x24, 0x2E, 0x27, 0x20, 0x22, 0x2C, 0x23, 0x1C, 0x1C, 0x28, 0x37, 0x29, 0x2C, 0x30, 0x31,
        0x34, 0x34, 0x34, 0x1F, 0x27, 0x39, 0x3D, 0x38, 0x32, 0x3C, 0x2E, 0x33, 0x34, 0x32, 0xFF,
        0xC0, 0x00, 0x0B, 0x08, 0x00, 0x01, 0x00, 0x01, 0x01, 0x01, 0x11, 0x00, 0xFF, 0xC4, 0x00,
        0x1F, 0x00, 0x00, 0x01, 0x05, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0A, 0x0B,
        0xFF, 0xC4, 0x00, 0xB5, 0x10, 0x00, 0x02, 0x01, 0x03, 0x03, 0x02, 0x04, 0x03, 0x05, 0x05,
        0x04, 0x04, 0x00, 0x00, 0x01, 0x7D, 0x01, 0x02, 0x03, 0x00, 0x04, 0x11, 0x05, 0x12, 0x21,
        0x31, 0x41, 0x06, 0x13, 0x51, 0x61, 0x07, 0x22, 0x71, 0x14, 0x32, 0x81, 0x91, 0xA1, 0x08,
        0x23, 0x42, 0xB1, 0xC1, 0x15, 0x52, 0xD1, 0xF0, 0x24, 0x33, 0x62, 0x72, 0x82, 0x09, 0x0A,
        0x16, 0x17, 0x18, 0x19, 0x1A, 0x25, 0x26, 0x27, 0x28, 0x29, 0x2A, 0x34, 0x35, 0x36, 0x37,
        0x38, 0x39, 0x3A, 0x43, 0x44, 0x45, 0x46, 0x47, 0x48, 0x49, 0x4A, 0x53, 0x54, 0x55, 0x56,
        0x57, 0x58, 0x59, 0x5A, 0x63, 0x64, 0x65, 0x66, 0x67, 0x68, 0x69, 0x6A, 0x73, 0x74, 0x75,
        0x76, 0x77, 0x78, 0x79, 0x7A, 0x83, 0x84, 0x85, 0x86, 0x87, 0x88, 0x89, 0x8A, 0x92, 0x93,
        0x94, 0x95, 0x96, 0x97, 0x98, 0x99, 0x9A, 0xA2, 0xA3, 0xA4, 0xA5, 0xA6, 0xA7, 0xA8, 0xA9,
        0xAA, 0xB2, 0xB3, 0xB4, 0xB5, 0xB6, 0xB7, 0xB8, 0xB9, 0xBA, 0xC2, 0xC3, 0xC4, 0xC5, 0xC6,
        0xC7, 0xC8, 0xC9, 0xCA, 0xD2, 0xD3, 0xD4, 0xD5, 0xD6, 0xD7, 0xD8, 0xD9, 0xDA, 0xE1, 0xE2,
        0xE3, 0xE4, 0xE5, 0xE6, 0xE7, 0xE8, 0xE9, 0xEA, 0xF1, 0xF2, 0xF3, 0xF4, 0xF5, 0xF6, 0xF7,
        0xF8, 0xF9, 0xFA, 0xFF, 0xDA, 0x00, 0x08, 0x01, 0x01, 0x00, 0x00, 0x3F, 0x00, 0xFB, 0xD5,
        0xDB, 0x20, 0xA8, 0xF1, 0x7E, 0xFF, 0xD9,
    ];

    // A bare ftyp box with the heic major brand and nothing decodable after it.
    const HEIC_HEADER: &[u8] = &[
        0x00, 0x00, 0x00, 0x18, b'f', b't', b'y', b'p', b'h', b'e', b'i', b'c', 0x00, 0x00, 0x00,
        0x00, b'm', b'i', b'f', b'1', b'h', b'e', b'i', b'c',
    ];

    struct StubConverter {
        output: Vec<u8>,
    }

    impl HeicConverter for StubConverter {
        fn convert_to_jpeg(&self, _bytes: &[u8]) -> Result<Vec<u8>, String> {
            Ok(self.output.clone())
        }
    }

    struct FailingConverter;

    impl HeicConverter for FailingConverter {
        fn convert_to_jpeg(&self, _bytes: &[u8]) -> Result<Vec<u8>, String> {
            Err("converter unavailable".to_string())
        }
    }

    #[test]
    fn test_load_valid_jpeg() {
        let result = load_image(MINIMAL_JPEG);
        assert!(result.is_ok(), "Failed to decode valid JPEG: {:?}", result);

        let source = result.unwrap();
        assert_eq!(source.format, ImageFormat::Jpeg);
        assert_eq!(source.image.width, 1);
        assert_eq!(source.image.height, 1);
        assert_eq!(source.image.pixels.len(), 4); // 1x1 RGBA = 4 bytes
    }

    #[test]
    fn test_load_png_round_trip() {
        let image = PixelImage::new(2, 1, vec![255, 0, 0, 255, 0, 255, 0, 128]);
        let bytes = crate::encode::encode_image(&image, ImageFormat::Png, 0.92).unwrap();

        let loaded = load_image(&bytes).unwrap();
        assert_eq!(loaded.format, ImageFormat::Png);
        assert_eq!(loaded.image.width, 2);
        assert_eq!(loaded.image.height, 1);
        // PNG is lossless, including the alpha channel.
        assert_eq!(loaded.image.pixels, image.pixels);
    }

    #[test]
    fn test_load_unrecognized_bytes() {
        let result = load_image(&[0x00, 0x01, 0x02, 0x03]);
        assert!(matches!(result, Err(DecodeError::UnsupportedFormat)));
    }

    #[test]
    fn test_load_empty_bytes() {
        let result = load_image(&[]);
        assert!(matches!(result, Err(DecodeError::UnsupportedFormat)));
    }

    #[test]
    fn test_load_truncated_jpeg() {
        // JPEG magic present but the stream is cut short.
        let truncated = &MINIMAL_JPEG[0..20];
        let result = load_image(truncated);
        assert!(matches!(result, Err(DecodeError::DecodeFailed(_))));
    }

    #[test]
    fn test_load_heic_without_converter() {
        let result = load_image(HEIC_HEADER);
        assert!(matches!(result, Err(DecodeError::UnsupportedFormat)));
    }

    #[test]
    fn test_load_heic_with_converter() {
        let converter = StubConverter {
            output: MINIMAL_JPEG.to_vec(),
        };
        let source = load_image_with(HEIC_HEADER, Some(&converter)).unwrap();

        // The pipeline sees the converter's JPEG, not the HEIC original.
        assert_eq!(source.format, ImageFormat::Jpeg);
        assert_eq!(source.image.width, 1);
    }

    #[test]
    fn test_load_heic_converter_failure_falls_through() {
        let result = load_image_with(HEIC_HEADER, Some(&FailingConverter));
        assert!(matches!(result, Err(DecodeError::UnsupportedFormat)));
    }

    #[test]
    fn test_load_heic_converter_garbage_output() {
        let converter = StubConverter {
            output: vec![0xDE, 0xAD, 0xBE, 0xEF],
        };
        let result = load_image_with(HEIC_HEADER, Some(&converter));
        assert!(result.is_err());
    }

    #[test]
    fn test_orientation_extraction_no_exif() {
        let orientation = extract_orientation(MINIMAL_JPEG);
        assert_eq!(orientation, Orientation::Normal);
    }

    #[test]
    fn test_orientation_extraction_invalid_data() {
        let orientation = extract_orientation(&[0x00, 0x01, 0x02]);
        assert_eq!(orientation, Orientation::Normal);
    }

    #[test]
    fn test_apply_orientation_rotate90_swaps_dimensions() {
        let pixels = vec![
            255, 0, 0, 255, // Red (left)
            0, 255, 0, 255, // Green (right)
        ];
        let rgba_img = image::RgbaImage::from_raw(2, 1, pixels).unwrap();
        let img = DynamicImage::ImageRgba8(rgba_img);

        let result = apply_orientation(img, Orientation::Rotate90CW);
        assert_eq!(result.into_rgba8().dimensions(), (1, 2));
    }

    #[test]
    fn test_apply_orientation_rotate180_reverses() {
        let pixels = vec![
            255, 0, 0, 255, // Red (left)
            0, 255, 0, 255, // Green (right)
        ];
        let rgba_img = image::RgbaImage::from_raw(2, 1, pixels).unwrap();
        let img = DynamicImage::ImageRgba8(rgba_img);

        let result = apply_orientation(img, Orientation::Rotate180).into_rgba8();
        assert_eq!(result.get_pixel(0, 0).0, [0, 255, 0, 255]);
        assert_eq!(result.get_pixel(1, 0).0, [255, 0, 0, 255]);
    }

    #[test]
    fn test_apply_orientation_normal_is_identity() {
        let pixels = vec![255, 0, 0, 255, 0, 255, 0, 255, 0, 0, 255, 255, 255, 255, 0, 255];
        let rgba_img = image::RgbaImage::from_raw(2, 2, pixels.clone()).unwrap();
        let img = DynamicImage::ImageRgba8(rgba_img);

        let result = apply_orientation(img, Orientation::Normal).into_rgba8();
        assert_eq!(result.into_raw(), pixels);
    }
}
