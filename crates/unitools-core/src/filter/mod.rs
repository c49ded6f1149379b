//! Whole-image pixel filters.
//!
//! Each filter takes a `PixelImage` and returns a new one with the same
//! dimensions. Grayscale and threshold are pure per-pixel maps; sketch is a
//! 3x3 neighborhood pass. Threshold and sketch share the BT.601 luma
//! weights from [`crate::luma`].

mod grayscale;
mod sketch;
mod threshold;

pub use grayscale::grayscale;
pub use sketch::sketch;
pub use threshold::threshold;
