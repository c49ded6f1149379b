//! Live preview sequencing.
//!
//! The threshold slider and the quality estimator re-render while the user
//! drags. The shell debounces those renders with the windows below, and
//! tags each render with a token from [`PreviewSequencer`] so a slow stale
//! render can never overwrite a newer one: only the most recently issued
//! token is current.

/// Debounce window for the black/white threshold slider, in milliseconds.
pub const THRESHOLD_PREVIEW_DEBOUNCE_MS: u32 = 100;

/// Debounce window for the compression quality estimator, in milliseconds.
pub const QUALITY_PREVIEW_DEBOUNCE_MS: u32 = 300;

/// Monotonic token issuer for preview renders.
#[derive(Debug, Clone, Default)]
pub struct PreviewSequencer {
    latest: u64,
}

impl PreviewSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a token for a new render, invalidating all earlier ones.
    pub fn begin(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    /// Whether a finished render is still the one the UI wants.
    pub fn is_current(&self, token: u64) -> bool {
        token == self.latest
    }
}

/// Fit source dimensions inside a bounding box, preserving aspect ratio.
///
/// Never upscales: a source smaller than the box displays at its own size,
/// matching the CSS max-width/max-height pair the preview is styled with.
/// Returns zeros only for a degenerate zero-sized source.
pub fn fit_display(
    source_width: u32,
    source_height: u32,
    max_width: u32,
    max_height: u32,
) -> (u32, u32) {
    if source_width == 0 || source_height == 0 {
        return (0, 0);
    }

    let scale_w = max_width as f64 / source_width as f64;
    let scale_h = max_height as f64 / source_height as f64;
    let scale = scale_w.min(scale_h).min(1.0);

    let width = (source_width as f64 * scale).round() as u32;
    let height = (source_height as f64 * scale).round() as u32;
    (width.max(1), height.max(1))
}
