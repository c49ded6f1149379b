//! Interactive editor state.
//!
//! Pure state machines behind the crop and resize tools: raw pointer
//! positions and field edits go in, validated selections and dimensions
//! come out. Nothing here touches pixels, timers or the DOM; the wasm
//! layer forwards events and reads state back, and the pixel work happens
//! in [`crate::request`] once an operation is committed.

mod crop_box;
mod preview;
mod resize_form;
mod session;

pub use crop_box::{
    AspectRatio, CropEditor, Handle, PixelRect, SelectionRect, MIN_SELECTION_SIZE,
};
pub use preview::{
    fit_display, PreviewSequencer, QUALITY_PREVIEW_DEBOUNCE_MS, THRESHOLD_PREVIEW_DEBOUNCE_MS,
};
pub use resize_form::{DimensionError, DimensionForm, Unit, PX_PER_CM};
pub use session::{EditorSession, DEFAULT_THRESHOLD_CUTOFF};
