//! Geometric primitives.

use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box in page coordinates.
///
/// The vertical axis grows downward: `top` is the distance from the
/// top edge of the page, and `top <= bottom` for any well-formed box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BBox {
    /// Left edge
    pub x0: f32,
    /// Distance from the top of the page to the upper edge
    pub top: f32,
    /// Right edge
    pub x1: f32,
    /// Distance from the top of the page to the lower edge
    pub bottom: f32,
}

impl BBox {
    /// Create a new bounding box.
    pub fn new(x0: f32, top: f32, x1: f32, bottom: f32) -> Self {
        Self { x0, top, x1, bottom }
    }

    /// Smallest box covering both `self` and `other`.
    pub fn union(&self, other: &BBox) -> BBox {
        BBox {
            x0: self.x0.min(other.x0),
            top: self.top.min(other.top),
            x1: self.x1.max(other.x1),
            bottom: self.bottom.max(other.bottom),
        }
    }

    /// Box width.
    pub fn width(&self) -> f32 {
        self.x1 - self.x0
    }

    /// Box height.
    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }
}
