//! Resize panel field model.
//!
//! Width and height are kept as the raw strings the user typed; parsing
//! and validation happen only in [`DimensionForm::resolve`], at the moment
//! the resize is requested. With the aspect lock on, editing one field
//! recomputes the other from the original image ratio, whatever unit is
//! active, matching how the panel has always behaved.

use thiserror::Error;

/// Pixels per centimeter at the 96 dpi CSS reference (96 / 2.54).
pub const PX_PER_CM: f32 = 37.795;

/// Measurement unit for the dimension fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    Px,
    Percent,
    Cm,
}

/// Rejected dimension input.
///
/// Raised before the engine is ever invoked; the message doubles as the
/// user-facing alert text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DimensionError {
    #[error("Please enter valid dimensions")]
    Invalid,
}

/// The resize tool's input state.
#[derive(Debug, Clone, PartialEq)]
pub struct DimensionForm {
    width: String,
    height: String,
    unit: Unit,
    lock_aspect: bool,
    original_width: u32,
    original_height: u32,
}

impl DimensionForm {
    /// Build the form for a newly loaded image: pixel unit, aspect locked,
    /// fields pre-filled with the original dimensions.
    pub fn new(original_width: u32, original_height: u32) -> Self {
        Self {
            width: original_width.to_string(),
            height: original_height.to_string(),
            unit: Unit::Px,
            lock_aspect: true,
            original_width,
            original_height,
        }
    }

    pub fn width_text(&self) -> &str {
        &self.width
    }

    pub fn height_text(&self) -> &str {
        &self.height
    }

    pub fn unit(&self) -> Unit {
        self.unit
    }

    pub fn lock_aspect(&self) -> bool {
        self.lock_aspect
    }

    pub fn original_dimensions(&self) -> (u32, u32) {
        (self.original_width, self.original_height)
    }

    /// Store a width edit. With the lock on and a parseable value, the
    /// height field is recomputed from the original ratio and formatted
    /// for the active unit.
    pub fn set_width(&mut self, text: &str) {
        self.width = text.to_string();
        if self.lock_aspect {
            if let Ok(width) = text.trim().parse::<f32>() {
                if width.is_finite() {
                    self.height = format_value(width / self.original_ratio(), self.unit);
                }
            }
        }
    }

    /// Store a height edit, recomputing width under the lock.
    pub fn set_height(&mut self, text: &str) {
        self.height = text.to_string();
        if self.lock_aspect {
            if let Ok(height) = text.trim().parse::<f32>() {
                if height.is_finite() {
                    self.width = format_value(height * self.original_ratio(), self.unit);
                }
            }
        }
    }

    /// Toggle the aspect lock. Fields are left as they are; the next edit
    /// re-couples them.
    pub fn set_lock_aspect(&mut self, locked: bool) {
        self.lock_aspect = locked;
    }

    /// Switch units, snapping both fields to the unit's natural default:
    /// the original dimensions for px, 100/100 for percent, and the
    /// original size in centimeters for cm.
    pub fn set_unit(&mut self, unit: Unit) {
        self.unit = unit;
        match unit {
            Unit::Px => {
                self.width = self.original_width.to_string();
                self.height = self.original_height.to_string();
            }
            Unit::Percent => {
                self.width = "100".to_string();
                self.height = "100".to_string();
            }
            Unit::Cm => {
                self.width = format!("{:.2}", self.original_width as f32 / PX_PER_CM);
                self.height = format!("{:.2}", self.original_height as f32 / PX_PER_CM);
            }
        }
    }

    /// Convert the current fields into target pixels.
    ///
    /// Empty, non-numeric, non-finite or non-positive input is rejected,
    /// as is anything that rounds to zero pixels.
    pub fn resolve(&self) -> Result<(u32, u32), DimensionError> {
        let width = parse_dimension(&self.width)?;
        let height = parse_dimension(&self.height)?;

        let (width_px, height_px) = match self.unit {
            Unit::Px => (width, height),
            Unit::Percent => (
                self.original_width as f32 * width / 100.0,
                self.original_height as f32 * height / 100.0,
            ),
            Unit::Cm => (width * PX_PER_CM, height * PX_PER_CM),
        };

        let width = width_px.round() as u32;
        let height = height_px.round() as u32;
        if width == 0 || height == 0 {
            return Err(DimensionError::Invalid);
        }

        Ok((width, height))
    }

    fn original_ratio(&self) -> f32 {
        self.original_width as f32 / self.original_height as f32
    }
}

fn parse_dimension(text: &str) -> Result<f32, DimensionError> {
    let value: f32 = text.trim().parse().map_err(|_| DimensionError::Invalid)?;
    if !value.is_finite() || value <= 0.0 {
        return Err(DimensionError::Invalid);
    }
    Ok(value)
}

/// Integer formatting for px and percent, two decimals for cm.
fn format_value(value: f32, unit: Unit) -> String {
    match unit {
        Unit::Px | Unit::Percent => format!("{}", value.round() as i64),
        Unit::Cm => format!("{:.2}", value),
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================
