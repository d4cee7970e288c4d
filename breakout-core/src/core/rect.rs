//! Axis-Aligned Rectangles
//!
//! Every collision in the game is a bounding-box test between two of these.
//! Edges are inclusive: rectangles that merely touch count as overlapping.

use serde::{Serialize, Deserialize};

use super::vec2::Vec2;

/// Axis-aligned rectangle in screen space (top-left origin).
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge
    pub x: f32,
    /// Top edge
    pub y: f32,
    /// Width
    pub w: f32,
    /// Height
    pub h: f32,
}

impl Rect {
    /// Create a rectangle from its top-left corner and size.
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Create a rectangle from a top-left position and a square side.
    #[inline]
    pub fn square(top_left: Vec2, side: f32) -> Self {
        Self::new(top_left.x, top_left.y, side, side)
    }

    /// Right edge.
    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    /// Bottom edge.
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    /// Center point.
    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    /// Horizontal projections intersect (inclusive).
    #[inline]
    pub fn overlaps_x(&self, other: &Rect) -> bool {
        self.right() >= other.x && self.x <= other.right()
    }

    /// Vertical projections intersect (inclusive).
    #[inline]
    pub fn overlaps_y(&self, other: &Rect) -> bool {
        self.bottom() >= other.y && self.y <= other.bottom()
    }

    /// Both projections intersect.
    #[inline]
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.overlaps_x(other) && self.overlaps_y(other)
    }
}
