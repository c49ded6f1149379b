//! WASM bindings for the interactive editor state.
//!
//! The crop/resize editor keeps its state on this side of the boundary: one
//! [`Editor`] object holds the crop selection drag machine, the dimension
//! form, rotation, and the export sliders. The JS shell forwards pointer
//! and input events to it, then asks for operation objects to feed through
//! `apply_operation`.
//!
//! # Example
//!
//! ```typescript
//! import { Editor, fit_display } from '@unitools/wasm';
//!
//! const editor = new Editor(source.width, source.height);
//! const [w, h] = fit_display(source.width, source.height, 800, 600);
//! editor.set_display(w, h);
//!
//! overlay.onpointerdown = (e) => editor.begin_drag(e.target.dataset.handle, e.x, e.y);
//! overlay.onpointermove = (e) => { editor.drag_to(e.x, e.y); draw(editor.selection()); };
//! overlay.onpointerup = () => editor.end_drag();
//!
//! exportButton.onclick = () => {
//!   const out = apply_operation(source, editor.crop_operation());
//! };
//! ```

use unitools_core::editor::{
    fit_display as core_fit_display, AspectRatio, EditorSession, Handle,
    PreviewSequencer as CorePreviewSequencer, Unit, QUALITY_PREVIEW_DEBOUNCE_MS,
    THRESHOLD_PREVIEW_DEBOUNCE_MS,
};
use wasm_bindgen::prelude::*;

/// Interactive editor state for one loaded image.
///
/// Pointer events drive the crop selection, text events drive the
/// dimension form, and the `*_operation` methods produce the tagged
/// operation objects `apply_operation` consumes. All coordinates are
/// display pixels; rescaling to source pixels happens when an operation is
/// built.
#[wasm_bindgen]
pub struct Editor {
    session: EditorSession,
}

#[wasm_bindgen]
impl Editor {
    /// Create an editor for a source image of the given pixel size.
    #[wasm_bindgen(constructor)]
    pub fn new(source_width: u32, source_height: u32) -> Editor {
        Editor {
            session: EditorSession::new(source_width, source_height),
        }
    }

    /// Record the laid-out preview size.
    ///
    /// Resets the crop selection to the default centered box; call it again
    /// whenever the preview element is re-measured.
    pub fn set_display(&mut self, width: f32, height: f32) {
        self.session.set_display(width, height);
    }

    /// Start dragging a crop handle at a raw pointer position.
    ///
    /// Handles use the overlay's names: `"move"`, `"nw"`, `"ne"`, `"sw"`,
    /// `"se"`, `"e"`, `"s"`. Unknown names are ignored.
    pub fn begin_drag(&mut self, handle: &str, x: f32, y: f32) {
        if let Some(handle) = parse_handle(handle) {
            self.session.crop_mut().begin_drag(handle, x, y);
        }
    }

    /// Feed a pointer-move event. No-op unless a drag is active.
    pub fn drag_to(&mut self, x: f32, y: f32) {
        self.session.crop_mut().drag_to(x, y);
    }

    /// End the active drag. Wire both pointerup and pointercancel here.
    pub fn end_drag(&mut self) {
        self.session.crop_mut().end_drag();
    }

    /// Whether a crop drag is in progress.
    pub fn is_dragging(&self) -> bool {
        self.session.crop().is_dragging()
    }

    /// Switch the aspect preset: `"free"`, `"1:1"`, `"16:9"`, `"9:16"`,
    /// `"4:3"` or `"3:4"`. Unknown names are ignored, as are calls while a
    /// drag is in progress.
    pub fn set_aspect(&mut self, aspect: &str) {
        if let Some(aspect) = parse_aspect(aspect) {
            self.session.crop_mut().set_aspect(aspect);
        }
    }

    /// The current selection as `{x, y, width, height}` in display
    /// coordinates, for drawing the overlay.
    pub fn selection(&self) -> Result<JsValue, JsValue> {
        serialize(&self.session.crop().selection())
    }

    /// Set the width field text. With the aspect lock on, the height field
    /// is recomputed from the original ratio.
    pub fn set_width_text(&mut self, text: &str) {
        self.session.dimensions_mut().set_width(text);
    }

    /// Set the height field text. With the aspect lock on, the width field
    /// is recomputed from the original ratio.
    pub fn set_height_text(&mut self, text: &str) {
        self.session.dimensions_mut().set_height(text);
    }

    /// Current width field text, exactly as it should render in the input.
    pub fn width_text(&self) -> String {
        self.session.dimensions().width_text().to_string()
    }

    /// Current height field text, exactly as it should render in the input.
    pub fn height_text(&self) -> String {
        self.session.dimensions().height_text().to_string()
    }

    /// Switch the dimension unit: `"px"`, `"percent"` or `"cm"`. Both
    /// fields snap to the original size expressed in the new unit. Unknown
    /// names are ignored.
    pub fn set_unit(&mut self, unit: &str) {
        if let Some(unit) = parse_unit(unit) {
            self.session.dimensions_mut().set_unit(unit);
        }
    }

    /// Toggle the aspect-ratio lock on the dimension form.
    pub fn set_lock_aspect(&mut self, locked: bool) {
        self.session.dimensions_mut().set_lock_aspect(locked);
    }

    /// Whether the dimension form keeps the original aspect ratio.
    pub fn lock_aspect(&self) -> bool {
        self.session.dimensions().lock_aspect()
    }

    /// Advance the rotation by 90 degrees clockwise.
    pub fn rotate_cw(&mut self) {
        self.session.rotate_cw();
    }

    /// Accumulated rotation in degrees: 0, 90, 180 or 270.
    pub fn rotation_degrees(&self) -> u32 {
        self.session.rotation_degrees()
    }

    /// Set the JPEG quality slider value (0.0..=1.0, clamped).
    pub fn set_quality(&mut self, quality: f32) {
        self.session.set_quality(quality);
    }

    /// Current JPEG quality slider value.
    pub fn quality(&self) -> f32 {
        self.session.quality()
    }

    /// Set the black-and-white threshold slider value.
    pub fn set_threshold_cutoff(&mut self, cutoff: u8) {
        self.session.set_threshold_cutoff(cutoff);
    }

    /// Current black-and-white threshold slider value.
    pub fn threshold_cutoff(&self) -> u8 {
        self.session.threshold_cutoff()
    }

    /// Build the resize operation from the dimension form.
    ///
    /// # Errors
    ///
    /// Returns the user-facing alert message when the fields don't resolve
    /// to valid pixel dimensions.
    pub fn resize_operation(&self) -> Result<JsValue, JsValue> {
        let operation = self
            .session
            .resize_operation()
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        serialize(&operation)
    }

    /// Build the crop operation from the committed selection, rescaled to
    /// source pixels. Returns `null` until the display has been measured.
    pub fn crop_operation(&self) -> Result<JsValue, JsValue> {
        match self.session.crop_operation() {
            Some(operation) => serialize(&operation),
            None => Ok(JsValue::NULL),
        }
    }

    /// Build the rotate operation for the accumulated right-angle turns.
    pub fn rotate_operation(&self) -> Result<JsValue, JsValue> {
        serialize(&self.session.rotate_operation())
    }

    /// Build the compress operation at the current quality.
    pub fn compress_operation(&self) -> Result<JsValue, JsValue> {
        serialize(&self.session.compress_operation())
    }

    /// Build the threshold operation at the current cutoff.
    pub fn threshold_operation(&self) -> Result<JsValue, JsValue> {
        serialize(&self.session.threshold_operation())
    }
}

/// Monotonic token source for async preview renders.
///
/// Ask for a token before kicking off a render, check it when the result
/// arrives; a stale token means a newer render was requested in between
/// and this result must be dropped, never drawn.
///
/// # Example
///
/// ```typescript
/// const seq = new PreviewSequencer();
///
/// async function renderPreview() {
///   const token = seq.begin();
///   const pixels = await worker.render(editor);
///   if (seq.is_current(token)) canvas.draw(pixels);
/// }
/// ```
#[wasm_bindgen]
pub struct PreviewSequencer {
    inner: CorePreviewSequencer,
}

#[wasm_bindgen]
impl PreviewSequencer {
    #[wasm_bindgen(constructor)]
    pub fn new() -> PreviewSequencer {
        PreviewSequencer {
            inner: CorePreviewSequencer::new(),
        }
    }

    /// Take the token for a new render; all older tokens become stale.
    pub fn begin(&mut self) -> u64 {
        self.inner.begin()
    }

    /// Whether this token still names the latest render.
    pub fn is_current(&self, token: u64) -> bool {
        self.inner.is_current(token)
    }
}

impl Default for PreviewSequencer {
    fn default() -> Self {
        Self::new()
    }
}

/// Debounce for threshold slider preview renders, in milliseconds.
#[wasm_bindgen]
pub fn threshold_preview_debounce_ms() -> u32 {
    THRESHOLD_PREVIEW_DEBOUNCE_MS
}

/// Debounce for quality slider preview renders, in milliseconds.
#[wasm_bindgen]
pub fn quality_preview_debounce_ms() -> u32 {
    QUALITY_PREVIEW_DEBOUNCE_MS
}

/// Fit source dimensions inside a viewport, preserving aspect ratio and
/// never upscaling. Returns `[width, height]`.
///
/// # Example
///
/// ```typescript
/// const [w, h] = fit_display(4000, 3000, 800, 600); // [800, 600]
/// ```
#[wasm_bindgen]
pub fn fit_display(
    source_width: u32,
    source_height: u32,
    max_width: u32,
    max_height: u32,
) -> Vec<u32> {
    let (width, height) = core_fit_display(source_width, source_height, max_width, max_height);
    vec![width, height]
}

/// Map an overlay handle name onto the drag machine's handle.
fn parse_handle(name: &str) -> Option<Handle> {
    match name {
        "move" => Some(Handle::Move),
        "nw" => Some(Handle::NorthWest),
        "ne" => Some(Handle::NorthEast),
        "sw" => Some(Handle::SouthWest),
        "se" => Some(Handle::SouthEast),
        "e" => Some(Handle::East),
        "s" => Some(Handle::South),
        _ => None,
    }
}

/// Map an aspect preset label onto the ratio enum.
fn parse_aspect(name: &str) -> Option<AspectRatio> {
    match name {
        "free" => Some(AspectRatio::Free),
        "1:1" => Some(AspectRatio::Square),
        "16:9" => Some(AspectRatio::Wide16x9),
        "9:16" => Some(AspectRatio::Tall9x16),
        "4:3" => Some(AspectRatio::Photo4x3),
        "3:4" => Some(AspectRatio::Portrait3x4),
        _ => None,
    }
}

/// Map a unit select value onto the unit enum.
fn parse_unit(name: &str) -> Option<Unit> {
    match name {
        "px" => Some(Unit::Px),
        "percent" | "%" => Some(Unit::Percent),
        "cm" => Some(Unit::Cm),
        _ => None,
    }
}

fn serialize<T: serde::Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|e| JsValue::from_str(&e.to_string()))
}
