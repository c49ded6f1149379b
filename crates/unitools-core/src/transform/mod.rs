//! Geometric image operations: resize, rotate, crop, flip, round mask.
//!
//! Every function here is a pure transformation from RGBA pixels to RGBA
//! pixels; encoding the result is the request layer's job. The semantics
//! deliberately match what a 2D canvas produces, since that is what the
//! editor's preview shows:
//!
//! - Crop regions are source pixels and are NOT clamped; overflow comes out
//!   transparent, like `drawImage` past the source edge.
//! - Right-angle rotations swap dimensions exactly; arbitrary angles keep
//!   the source canvas size and clip at the corners.
//! - The round mask zeroes alpha outside the inscribed circle of the
//!   centered square crop.
//!
//! # Coordinate System
//!
//! - Origin is the top-left corner, y grows downward
//! - Rotation angles are in degrees, positive = clockwise (canvas `rotate`)

mod crop;
mod flip;
mod resize;
mod rotate;
mod round;

pub use crop::crop;
pub use flip::flip_horizontal;
pub use resize::{resize, ResampleFilter};
pub use rotate::rotate;
pub use round::round_mask;

use thiserror::Error;

/// Errors for transforms that take target dimensions.
#[derive(Debug, Error)]
pub enum TransformError {
    /// Width or height is zero
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// Pixel buffer doesn't match the declared dimensions
    #[error("Invalid pixel data: expected {expected} bytes, got {actual}")]
    InvalidPixelData { expected: usize, actual: usize },
}
