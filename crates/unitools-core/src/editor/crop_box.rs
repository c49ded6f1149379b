//! Interactive crop selection state machine.
//!
//! The selection lives in display space (the CSS-scaled preview the user
//! actually drags on) and is converted to source pixels only when the crop
//! is committed. Pointer handling is deliberately dumb: the shell feeds raw
//! pointer positions in, and every mutation bounds its per-axis delta
//! before applying it, so the selection can never leave the display bounds
//! or shrink below the minimum no matter what sequence of events arrives.

/// Smallest selection side, in display pixels.
pub const MIN_SELECTION_SIZE: f32 = 20.0;

/// The crop selection in display coordinates.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SelectionRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// A committed selection, rescaled into source pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PixelRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Draggable parts of the selection.
///
/// This is the set the overlay actually wires up: four corners, the east
/// and south edges, and the rectangle body. There are no north or west
/// edge handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Handle {
    Move,
    NorthWest,
    NorthEast,
    SouthWest,
    SouthEast,
    East,
    South,
}

/// Aspect ratio presets for the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AspectRatio {
    Free,
    Square,
    Wide16x9,
    Tall9x16,
    Photo4x3,
    Portrait3x4,
}

impl AspectRatio {
    /// Width over height, or `None` for an unconstrained selection.
    pub fn ratio(self) -> Option<f32> {
        match self {
            AspectRatio::Free => None,
            AspectRatio::Square => Some(1.0),
            AspectRatio::Wide16x9 => Some(16.0 / 9.0),
            AspectRatio::Tall9x16 => Some(9.0 / 16.0),
            AspectRatio::Photo4x3 => Some(4.0 / 3.0),
            AspectRatio::Portrait3x4 => Some(3.0 / 4.0),
        }
    }
}

/// Pointer interaction state.
#[derive(Debug, Clone, Copy, PartialEq)]
enum DragState {
    Idle,
    Dragging {
        handle: Handle,
        last_x: f32,
        last_y: f32,
    },
}

/// The crop tool's selection controller.
///
/// Holds the display dimensions, the selection rectangle, the aspect
/// preset and the active drag. All pointer coordinates are raw display
/// positions; deltas are computed against the previous pointer position.
#[derive(Debug, Clone, PartialEq)]
pub struct CropEditor {
    selection: SelectionRect,
    display_width: f32,
    display_height: f32,
    aspect: AspectRatio,
    drag: DragState,
}

impl CropEditor {
    /// Create an editor with no measured display yet.
    ///
    /// The selection stays empty until [`CropEditor::set_display`] is
    /// called with the laid-out preview size.
    pub fn new() -> Self {
        Self {
            selection: SelectionRect {
                x: 0.0,
                y: 0.0,
                width: 0.0,
                height: 0.0,
            },
            display_width: 0.0,
            display_height: 0.0,
            aspect: AspectRatio::Free,
            drag: DragState::Idle,
        }
    }

    /// Record the laid-out preview size and reset the selection to the
    /// default centered box.
    pub fn set_display(&mut self, width: f32, height: f32) {
        self.display_width = width;
        self.display_height = height;
        self.drag = DragState::Idle;
        self.selection = self.default_selection();
    }

    pub fn selection(&self) -> SelectionRect {
        self.selection
    }

    pub fn aspect(&self) -> AspectRatio {
        self.aspect
    }

    pub fn display(&self) -> (f32, f32) {
        (self.display_width, self.display_height)
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.drag, DragState::Dragging { .. })
    }

    /// Start a drag on the given handle at a raw pointer position.
    pub fn begin_drag(&mut self, handle: Handle, x: f32, y: f32) {
        self.drag = DragState::Dragging {
            handle,
            last_x: x,
            last_y: y,
        };
    }

    /// Feed a pointer-move event. No-op while idle.
    ///
    /// The delta is the difference from the previous raw pointer position;
    /// each axis is bounded before being applied so the selection respects
    /// the display bounds and the minimum size after every event.
    pub fn drag_to(&mut self, x: f32, y: f32) {
        let (handle, last_x, last_y) = match self.drag {
            DragState::Dragging {
                handle,
                last_x,
                last_y,
            } => (handle, last_x, last_y),
            DragState::Idle => return,
        };

        let dx = x - last_x;
        let dy = y - last_y;

        match handle {
            Handle::Move => self.translate(dx, dy),
            _ => self.resize_edges(handle, dx, dy),
        }

        self.drag = DragState::Dragging {
            handle,
            last_x: x,
            last_y: y,
        };
    }

    /// End the drag. Pointer-up and pointer-cancel both land here.
    pub fn end_drag(&mut self) {
        self.drag = DragState::Idle;
    }

    /// Switch the aspect preset.
    ///
    /// Only applies while idle. The previous selection is discarded and
    /// replaced with the default centered box at the new ratio.
    pub fn set_aspect(&mut self, aspect: AspectRatio) {
        if self.is_dragging() {
            return;
        }
        self.aspect = aspect;
        if self.display_width > 0.0 && self.display_height > 0.0 {
            self.selection = self.default_selection();
        }
    }

    /// Rescale the selection into source pixels.
    ///
    /// Returns `None` until the display has been measured. Values round to
    /// the nearest pixel with a floor of 1 on width and height; rounding
    /// can overshoot the source edge by a pixel, which the crop operation
    /// tolerates.
    pub fn selection_in_source(&self, source_width: u32, source_height: u32) -> Option<PixelRect> {
        if self.display_width <= 0.0 || self.display_height <= 0.0 {
            return None;
        }

        let scale_x = source_width as f32 / self.display_width;
        let scale_y = source_height as f32 / self.display_height;
        let rect = self.selection;

        Some(PixelRect {
            x: (rect.x * scale_x).round() as u32,
            y: (rect.y * scale_y).round() as u32,
            width: ((rect.width * scale_x).round() as u32).max(1),
            height: ((rect.height * scale_y).round() as u32).max(1),
        })
    }

    /// The largest box at the current ratio filling 80% of the display,
    /// centered.
    fn default_selection(&self) -> SelectionRect {
        let max_w = self.display_width * 0.8;
        let max_h = self.display_height * 0.8;

        let (width, height) = match self.aspect.ratio() {
            None => (max_w, max_h),
            Some(ratio) => {
                let mut width = max_w;
                let mut height = width / ratio;
                if height > max_h {
                    height = max_h;
                    width = height * ratio;
                }
                (width, height)
            }
        };

        SelectionRect {
            x: (self.display_width - width) / 2.0,
            y: (self.display_height - height) / 2.0,
            width,
            height,
        }
    }

    fn translate(&mut self, dx: f32, dy: f32) {
        let rect = &mut self.selection;
        let dx = bound(dx, -rect.x, self.display_width - rect.x - rect.width);
        let dy = bound(dy, -rect.y, self.display_height - rect.y - rect.height);
        rect.x += dx;
        rect.y += dy;
    }

    fn resize_edges(&mut self, handle: Handle, dx: f32, dy: f32) {
        let ratio = self.aspect.ratio();
        let display_width = self.display_width;
        let display_height = self.display_height;
        let rect = &mut self.selection;

        // Horizontal edge.
        match handle {
            Handle::NorthWest | Handle::SouthWest => {
                let dx = bound(dx, -rect.x, rect.width - MIN_SELECTION_SIZE);
                rect.x += dx;
                rect.width -= dx;
            }
            Handle::NorthEast | Handle::SouthEast | Handle::East => {
                let mut min_dx = MIN_SELECTION_SIZE - rect.width;
                let mut max_dx = display_width - rect.x - rect.width;
                if let Some(ratio) = ratio {
                    // Width will drive height on these handles, so keep
                    // the derived height inside its own bounds too.
                    if matches!(handle, Handle::SouthEast | Handle::East) {
                        min_dx = min_dx.max(MIN_SELECTION_SIZE * ratio - rect.width);
                        max_dx = max_dx.min((display_height - rect.y) * ratio - rect.width);
                    }
                }
                let dx = bound(dx, min_dx, max_dx);
                rect.width += dx;
            }
            _ => {}
        }

        // Vertical edge.
        match handle {
            Handle::NorthWest | Handle::NorthEast => {
                let dy = bound(dy, -rect.y, rect.height - MIN_SELECTION_SIZE);
                rect.y += dy;
                rect.height -= dy;
            }
            Handle::SouthWest | Handle::SouthEast | Handle::South => {
                let mut min_dy = MIN_SELECTION_SIZE - rect.height;
                let mut max_dy = display_height - rect.y - rect.height;
                if let Some(ratio) = ratio {
                    if handle == Handle::South {
                        min_dy = min_dy.max(MIN_SELECTION_SIZE / ratio - rect.height);
                        max_dy = max_dy.min((display_width - rect.x) / ratio - rect.height);
                    }
                }
                let dy = bound(dy, min_dy, max_dy);
                rect.height += dy;
            }
            _ => {}
        }

        // Ratio re-coupling is handle-specific: the east-side handles drive
        // height from width and the south handle drives width from height,
        // while the remaining corners leave the ratio alone. This matches
        // the overlay's long-standing behavior, quirk included.
        if let Some(ratio) = ratio {
            match handle {
                Handle::SouthEast | Handle::East => rect.height = rect.width / ratio,
                Handle::South => rect.width = rect.height * ratio,
                _ => {}
            }
        }
    }
}

impl Default for CropEditor {
    fn default() -> Self {
        Self::new()
    }
}

/// Bound a delta to `[min, max]` without panicking when the range is
/// empty; the upper bound wins, freezing the axis.
#[inline]
fn bound(delta: f32, min: f32, max: f32) -> f32 {
    delta.max(min).min(max)
}


// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    #[derive(Debug, Clone)]
    enum DragEvent {
        Begin(Handle, f32, f32),
        Move(f32, f32),
        End,
    }

    fn handle_strategy() -> impl Strategy<Value = Handle> {
        prop_oneof![
            Just(Handle::Move),
            Just(Handle::NorthWest),
            Just(Handle::NorthEast),
            Just(Handle::SouthWest),
            Just(Handle::SouthEast),
            Just(Handle::East),
            Just(Handle::South),
        ]
    }

    fn event_strategy() -> impl Strategy<Value = DragEvent> {
        prop_oneof![
            (handle_strategy(), -100.0f32..900.0, -100.0f32..900.0)
                .prop_map(|(h, x, y)| DragEvent::Begin(h, x, y)),
            (-100.0f32..900.0, -100.0f32..900.0).prop_map(|(x, y)| DragEvent::Move(x, y)),
            Just(DragEvent::End),
        ]
    }

    fn check_invariant(editor: &CropEditor) -> Result<(), TestCaseError> {
        let rect = editor.selection();
        let (dw, dh) = editor.display();
        prop_assert!(rect.x >= -1e-3);
        prop_assert!(rect.y >= -1e-3);
        prop_assert!(rect.x + rect.width <= dw + 1e-2);
        prop_assert!(rect.y + rect.height <= dh + 1e-2);
        prop_assert!(rect.width >= MIN_SELECTION_SIZE - 1e-2);
        prop_assert!(rect.height >= MIN_SELECTION_SIZE - 1e-2);
        Ok(())
    }

    proptest! {
        /// Property: The selection stays inside the display and above the
        /// minimum size for every sequence of pointer events.
        #[test]
        fn prop_selection_always_clamped(
            display_w in 100.0f32..800.0,
            display_h in 100.0f32..800.0,
            events in prop::collection::vec(event_strategy(), 1..60),
        ) {
            let mut editor = CropEditor::new();
            editor.set_display(display_w, display_h);
            check_invariant(&editor)?;

            for event in events {
                match event {
                    DragEvent::Begin(handle, x, y) => editor.begin_drag(handle, x, y),
                    DragEvent::Move(x, y) => editor.drag_to(x, y),
                    DragEvent::End => editor.end_drag(),
                }
                check_invariant(&editor)?;
            }
        }

        /// Property: The clamp invariant also survives with a locked
        /// aspect, and east/south drags keep the ratio coupled.
        #[test]
        fn prop_locked_ratio_stays_coupled(
            display_w in 150.0f32..800.0,
            display_h in 150.0f32..800.0,
            moves in prop::collection::vec((-200.0f32..1000.0, -200.0f32..1000.0), 1..40),
        ) {
            let mut editor = CropEditor::new();
            editor.set_display(display_w, display_h);
            editor.set_aspect(AspectRatio::Square);

            editor.begin_drag(Handle::East, 0.0, 0.0);
            for (x, y) in moves {
                editor.drag_to(x, y);
                check_invariant(&editor)?;

                let rect = editor.selection();
                prop_assert!(
                    (rect.width - rect.height).abs() < 1e-2,
                    "ratio drifted: {} x {}",
                    rect.width,
                    rect.height
                );
            }
        }
    }
}
