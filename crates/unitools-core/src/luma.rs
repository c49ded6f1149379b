//! Luma calculation utilities using ITU-R BT.601 coefficients.
//!
//! This module provides the shared luma function the threshold and sketch
//! filters build on. BT.601 matches the weighting the browser editor used,
//! so thresholded output is bit-identical across both.

/// ITU-R BT.601 coefficient for red channel in luma calculation.
pub const LUMA_R: f32 = 0.299;

/// ITU-R BT.601 coefficient for green channel in luma calculation.
pub const LUMA_G: f32 = 0.587;

/// ITU-R BT.601 coefficient for blue channel in luma calculation.
pub const LUMA_B: f32 = 0.114;

/// Calculate luma from normalized RGB values (0.0 to 1.0).
#[inline]
pub fn luma(r: f32, g: f32, b: f32) -> f32 {
    LUMA_R * r + LUMA_G * g + LUMA_B * b
}

/// Calculate luma from u8 RGB values, rounded to the nearest integer.
///
/// Rounding before any comparison keeps filters deterministic: a pixel
/// either reaches a cutoff or it does not, with no float-epsilon cases.
#[inline]
pub fn luma_u8(r: u8, g: u8, b: u8) -> u8 {
    let value = LUMA_R * r as f32 + LUMA_G * g as f32 + LUMA_B * b as f32;
    value.clamp(0.0, 255.0).round() as u8
}
