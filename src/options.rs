//! Conversion options and validation.

use crate::error::{Error, Result};
use crate::layout::{DEFAULT_LINE_TOLERANCE, PARAGRAPH_SPACING_FACTOR};

/// Options controlling layout reconstruction and rendering.
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// Vertical-center tolerance for line clustering, in page units.
    pub line_tolerance: f32,

    /// Paragraph gap threshold as a multiple of the median line height.
    pub spacing_factor: f32,

    /// Whether to render pages on the rayon thread pool.
    pub parallel: bool,
}

impl ConvertOptions {
    /// Create options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the line clustering tolerance.
    pub fn with_line_tolerance(mut self, tolerance: f32) -> Self {
        self.line_tolerance = tolerance;
        self
    }

    /// Set the paragraph spacing factor.
    pub fn with_spacing_factor(mut self, factor: f32) -> Self {
        self.spacing_factor = factor;
        self
    }

    /// Enable or disable parallel page rendering.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Disable parallel page rendering.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }

    /// Reject out-of-range values before any processing begins.
    pub fn validate(&self) -> Result<()> {
        if self.line_tolerance.is_nan() || self.line_tolerance < 1.0 {
            return Err(Error::InvalidConfig(format!(
                "line tolerance must be at least 1, got {}",
                self.line_tolerance
            )));
        }
        if self.spacing_factor.is_nan() || self.spacing_factor < 1.0 {
            return Err(Error::InvalidConfig(format!(
                "spacing factor must be at least 1, got {}",
                self.spacing_factor
            )));
        }
        Ok(())
    }
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            line_tolerance: DEFAULT_LINE_TOLERANCE,
            spacing_factor: PARAGRAPH_SPACING_FACTOR,
            parallel: true,
        }
    }
}
