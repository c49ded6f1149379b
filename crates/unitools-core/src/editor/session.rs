//! Per-tool editor session state.

use crate::encode::DEFAULT_QUALITY;
use crate::request::EditOperation;

use super::crop_box::CropEditor;
use super::resize_form::{DimensionError, DimensionForm};

/// Threshold cutoff a fresh session starts with.
pub const DEFAULT_THRESHOLD_CUTOFF: u8 = 128;

/// All adjustable state for one editing tool on one image.
///
/// A session is constructed fresh when an image loads or the user switches
/// tools, so there is no cross-tool state to reset: dropping the old value
/// and building a new one is the reset. The shell reads operations off the
/// session and hands them to [`crate::request::apply`].
#[derive(Debug, Clone, PartialEq)]
pub struct EditorSession {
    crop: CropEditor,
    dimensions: DimensionForm,
    rotation_degrees: u32,
    quality: f32,
    threshold_cutoff: u8,
    source_width: u32,
    source_height: u32,
}

impl EditorSession {
    /// Start a session for a newly decoded image.
    pub fn new(source_width: u32, source_height: u32) -> Self {
        Self {
            crop: CropEditor::new(),
            dimensions: DimensionForm::new(source_width, source_height),
            rotation_degrees: 0,
            quality: DEFAULT_QUALITY,
            threshold_cutoff: DEFAULT_THRESHOLD_CUTOFF,
            source_width,
            source_height,
        }
    }

    /// Record the laid-out preview size for the crop overlay.
    pub fn set_display(&mut self, width: f32, height: f32) {
        self.crop.set_display(width, height);
    }

    pub fn crop(&self) -> &CropEditor {
        &self.crop
    }

    pub fn crop_mut(&mut self) -> &mut CropEditor {
        &mut self.crop
    }

    pub fn dimensions(&self) -> &DimensionForm {
        &self.dimensions
    }

    pub fn dimensions_mut(&mut self) -> &mut DimensionForm {
        &mut self.dimensions
    }

    pub fn source_dimensions(&self) -> (u32, u32) {
        (self.source_width, self.source_height)
    }

    /// Accumulate a quarter turn clockwise.
    pub fn rotate_cw(&mut self) {
        self.rotation_degrees = (self.rotation_degrees + 90) % 360;
    }

    pub fn rotation_degrees(&self) -> u32 {
        self.rotation_degrees
    }

    pub fn set_quality(&mut self, quality: f32) {
        self.quality = quality.clamp(0.0, 1.0);
    }

    pub fn quality(&self) -> f32 {
        self.quality
    }

    pub fn set_threshold_cutoff(&mut self, cutoff: u8) {
        self.threshold_cutoff = cutoff;
    }

    pub fn threshold_cutoff(&self) -> u8 {
        self.threshold_cutoff
    }

    /// Resize request from the dimension form; invalid input is rejected
    /// here, before any pixel work happens.
    pub fn resize_operation(&self) -> Result<EditOperation, DimensionError> {
        let (width, height) = self.dimensions.resolve()?;
        Ok(EditOperation::Resize { width, height })
    }

    /// Crop request from the current selection, or `None` while the
    /// preview has not been measured yet.
    pub fn crop_operation(&self) -> Option<EditOperation> {
        let rect = self
            .crop
            .selection_in_source(self.source_width, self.source_height)?;
        Some(EditOperation::Crop {
            x: rect.x,
            y: rect.y,
            width: rect.width,
            height: rect.height,
        })
    }

    pub fn rotate_operation(&self) -> EditOperation {
        EditOperation::Rotate {
            degrees: self.rotation_degrees as f64,
        }
    }

    pub fn compress_operation(&self) -> EditOperation {
        EditOperation::Compress {
            quality: self.quality,
        }
    }

    pub fn threshold_operation(&self) -> EditOperation {
        EditOperation::Threshold {
            cutoff: self.threshold_cutoff,
        }
    }
}
