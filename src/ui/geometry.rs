//! Screen rectangles in display pixel coordinates.

use embedded_graphics::prelude::{Point, Size};
use embedded_graphics::primitives::Rectangle;

/// Axis-aligned box. Plain value, copied freely.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Bounds {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Bounds {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Zero-sized box at the origin, used by elements that cannot take focus.
    pub const fn empty() -> Self {
        Self::new(0, 0, 0, 0)
    }

    pub fn is_empty(&self) -> bool {
        self.w <= 0 || self.h <= 0
    }

    /// Grow by `margin` pixels on every side.
    #[must_use]
    pub fn extend(self, margin: i32) -> Self {
        Self {
            x: self.x - margin,
            y: self.y - margin,
            w: self.w + margin * 2,
            h: self.h + margin * 2,
        }
    }

    pub fn top_left(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

impl From<Bounds> for Rectangle {
    fn from(b: Bounds) -> Self {
        // Negative sizes collapse to nothing instead of wrapping.
        Rectangle::new(
            b.top_left(),
            Size::new(b.w.max(0) as u32, b.h.max(0) as u32),
        )
    }
}
