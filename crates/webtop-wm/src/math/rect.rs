use serde::{Deserialize, Serialize};

use super::{Point, Size};

/// Window geometry: `{top, left, width, height}`
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub top: f64,
    pub left: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Create a new rectangle
    pub const fn new(top: f64, left: f64, width: f64, height: f64) -> Self {
        Self {
            top,
            left,
            width,
            height,
        }
    }

    /// Get the right edge
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    /// Get the bottom edge
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Get size
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Check if a point is inside the rectangle
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.left && p.x < self.right() && p.y >= self.top && p.y < self.bottom()
    }

    /// Move by a displacement
    pub fn translate(&self, delta: Point) -> Rect {
        Rect::new(self.top + delta.y, self.left + delta.x, self.width, self.height)
    }

    /// All four components are finite numbers
    pub fn is_finite(&self) -> bool {
        self.top.is_finite()
            && self.left.is_finite()
            && self.width.is_finite()
            && self.height.is_finite()
    }
}
