//! Axis-aligned rectangles
//!
//! Every body on the field (ball, paddles, center-line dashes) is a rectangle
//! described by its top-left corner and size.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle (top-left origin, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// Vertical center line
    #[inline]
    pub fn center_y(&self) -> f32 {
        self.pos.y + self.size.y / 2.0
    }

    /// Closed-interval vertical overlap (touching edges count)
    #[inline]
    pub fn overlaps_vertically(&self, other: &Rect) -> bool {
        self.top() <= other.bottom() && other.top() <= self.bottom()
    }

    /// Closed-interval horizontal overlap (touching edges count)
    #[inline]
    pub fn overlaps_horizontally(&self, other: &Rect) -> bool {
        self.left() <= other.right() && other.left() <= self.right()
    }
}
