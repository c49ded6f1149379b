//! HEIC/HEIF upload detection and conversion plumbing.
//!
//! Browsers cannot decode HEIC natively, so uploads carrying it are routed
//! through an external converter (heic2any on the web shell) before the
//! normal decode path runs. This module provides the quick detection check
//! the shell uses to pick that path, and the trait the converter is
//! consumed through on this side of the boundary.
//!
//! HEIC files are ISO Base Media containers: the first box is `ftyp`,
//! whose major brand (and compatible-brand list) identifies the content.

const FTYP: &[u8; 4] = b"ftyp";

// HEVC still images, HEVC image sequences, and the generic HEIF brands.
const HEIC_BRANDS: [&[u8; 4]; 10] = [
    b"heic", b"heix", b"hevc", b"hevx", b"heim", b"heis", b"hevm", b"hevs", b"mif1", b"msf1",
];

#[inline]
fn is_heic_brand(brand: &[u8]) -> bool {
    HEIC_BRANDS.iter().any(|b| brand == b.as_slice())
}

/// Check if a file appears to be HEIC/HEIF based on its `ftyp` box.
///
/// This is a quick check that doesn't fully parse the container.
///
/// # Arguments
///
/// * `bytes` - First few bytes of the file (at least 12 bytes recommended)
///
/// # Returns
///
/// `true` if the major brand or any compatible brand is a HEIC/HEIF brand.
pub fn is_heic(bytes: &[u8]) -> bool {
    if bytes.len() < 12 || &bytes[4..8] != FTYP {
        return false;
    }

    if is_heic_brand(&bytes[8..12]) {
        return true;
    }

    // Compatible brands follow the 4-byte minor version, packed to the
    // end of the ftyp box.
    let box_size = u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]) as usize;
    let end = box_size.min(bytes.len());
    let mut offset = 16;
    while offset + 4 <= end {
        if is_heic_brand(&bytes[offset..offset + 4]) {
            return true;
        }
        offset += 4;
    }

    false
}

/// External HEIC-to-JPEG converter.
///
/// On the web this is the heic2any library, handed across the WASM boundary
/// as a callback and consumed as a black box: HEIC bytes in, JPEG bytes out.
/// A converter failure is not fatal; the loader falls through to native
/// decoding, whose failure surfaces as an unsupported-format error.
pub trait HeicConverter {
    /// Convert HEIC bytes to JPEG bytes.
    fn convert_to_jpeg(&self, bytes: &[u8]) -> Result<Vec<u8>, String>;
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Build an ftyp box with the given major brand and compatible brands.
    fn make_ftyp(major: &[u8; 4], compatible: &[&[u8; 4]]) -> Vec<u8> {
        let size = 16 + compatible.len() * 4;
        let mut data = Vec::with_capacity(size);
        data.extend_from_slice(&(size as u32).to_be_bytes());
        data.extend_from_slice(FTYP);
        data.extend_from_slice(major);
        data.extend_from_slice(&[0, 0, 0, 0]); // minor version
        for brand in compatible {
            data.extend_from_slice(*brand);
        }
        data
    }

    #[test]
    fn test_is_heic_major_brand() {
        assert!(is_heic(&make_ftyp(b"heic", &[])));
        assert!(is_heic(&make_ftyp(b"heix", &[])));
        assert!(is_heic(&make_ftyp(b"mif1", &[b"heic"])));
    }

    #[test]
    fn test_is_heic_compatible_brand() {
        // iPhone exports often use a generic major brand with heic in the
        // compatible list.
        assert!(is_heic(&make_ftyp(b"heic", &[b"mif1", b"heic"])));

        let mut data = make_ftyp(b"abcd", &[b"iso8", b"heic"]);
        assert!(is_heic(&data));

        // Truncated compatible list is still handled.
        data.truncate(18);
        assert!(!is_heic(&data));
    }

    #[test]
    fn test_is_heic_rejects_mp4() {
        assert!(!is_heic(&make_ftyp(b"isom", &[b"iso2", b"avc1", b"mp41"])));
    }

    #[test]
    fn test_is_heic_rejects_other_formats() {
        // JPEG magic bytes
        assert!(!is_heic(&[0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, 0x4A, 0x46, 0x49, 0x46, 0x00, 0x01]));

        // PNG signature
        assert!(!is_heic(&[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0, 0, 0, 0]));

        // Too short
        assert!(!is_heic(&[0, 0, 0, 16, b'f', b't', b'y', b'p']));
        assert!(!is_heic(&[]));
    }

    #[test]
    fn test_is_heic_bogus_box_size() {
        // A declared box size far beyond the buffer must not panic.
        let mut data = make_ftyp(b"abcd", &[b"heic"]);
        data[0..4].copy_from_slice(&u32::MAX.to_be_bytes());
        assert!(is_heic(&data));
    }
}
