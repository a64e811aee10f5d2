//! Element geometry and pointer normalization.

use crate::error::GeometryError;

/// Pointer position as a fraction of the card's width and height.
///
/// Both components stay within `[0, 1]`; `(0.5, 0.5)` is the card center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerState {
    pub x: f64,
    pub y: f64,
}

impl PointerState {
    /// Rest position.
    pub const CENTER: PointerState = PointerState { x: 0.5, y: 0.5 };
}

impl Default for PointerState {
    fn default() -> Self {
        Self::CENTER
    }
}

/// On-screen rectangle of a laid-out element, in client pixels.
///
/// Only rects with finite components and a positive area can be built, so
/// normalization never divides by zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    left: f64,
    top: f64,
    width: f64,
    height: f64,
}

impl BoundingBox {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Result<Self, GeometryError> {
        if ![left, top, width, height].iter().all(|v| v.is_finite()) {
            return Err(GeometryError::NotFinite);
        }
        if width <= 0.0 || height <= 0.0 {
            return Err(GeometryError::Degenerate { width, height });
        }
        Ok(Self {
            left,
            top,
            width,
            height,
        })
    }

    pub fn left(&self) -> f64 {
        self.left
    }

    pub fn top(&self) -> f64 {
        self.top
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// Map client coordinates into this rect, clamped to `[0, 1]` on both axes.
    ///
    /// Returns `None` for NaN or infinite input.
    pub fn normalize(&self, raw_x: f64, raw_y: f64) -> Option<PointerState> {
        if !(raw_x.is_finite() && raw_y.is_finite()) {
            return None;
        }
        let x = (raw_x - self.left) / self.width;
        let y = (raw_y - self.top) / self.height;
        Some(PointerState {
            x: x.clamp(0.0, 1.0),
            y: y.clamp(0.0, 1.0),
        })
    }
}
