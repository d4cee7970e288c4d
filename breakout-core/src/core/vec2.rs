//! 2D Vector
//!
//! Plain `f32` pair used for ball position and velocity.
//! Screen space: origin at the top-left corner, Y grows downward.

use std::fmt;
use std::ops::AddAssign;
use serde::{Serialize, Deserialize};

/// 2D vector with `f32` components.
#[derive(Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec2 {
    /// X component (pixels, rightward)
    pub x: f32,
    /// Y component (pixels, downward)
    pub y: f32,
}

impl Vec2 {
    /// Zero vector
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Create a new vector.
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Flip the sign of the X component.
    #[inline]
    pub fn flip_x(self) -> Self {
        Self { x: -self.x, y: self.y }
    }

    /// Flip the sign of the Y component.
    #[inline]
    pub fn flip_y(self) -> Self {
        Self { x: self.x, y: -self.y }
    }

    /// Grow the magnitude of each component by `amount`, keeping its sign.
    ///
    /// A zero component is treated as negative, so it grows toward `-amount`.
    #[inline]
    pub fn grow_magnitude(self, amount: f32) -> Self {
        let grow = |v: f32| if v > 0.0 { v + amount } else { v - amount };
        Self {
            x: grow(self.x),
            y: grow(self.y),
        }
    }
}

impl AddAssign for Vec2 {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl fmt::Debug for Vec2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vec2({:.3}, {:.3})", self.x, self.y)
    }
}

impl fmt::Display for Vec2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.3}, {:.3})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec2_add_assign() {
        let mut a = Vec2::new(440.0, 290.0);
        a += Vec2::new(3.0, -3.0);
        assert_eq!(a, Vec2::new(443.0, 287.0));
    }

    #[test]
    fn test_vec2_flip() {
        let v = Vec2::new(3.0, -3.0);
        assert_eq!(v.flip_x(), Vec2::new(-3.0, -3.0));
        assert_eq!(v.flip_y(), Vec2::new(3.0, 3.0));
        assert_eq!(v.flip_x().flip_y(), Vec2::new(-3.0, 3.0));
    }

    #[test]
    fn test_grow_magnitude_keeps_sign() {
        let v = Vec2::new(3.0, -3.0).grow_magnitude(0.5);
        assert_eq!(v, Vec2::new(3.5, -3.5));

        let v = Vec2::new(-3.5, 3.5).grow_magnitude(0.5);
        assert_eq!(v, Vec2::new(-4.0, 4.0));
    }

    #[test]
    fn test_vec2_display() {
        assert_eq!(Vec2::new(1.0, -2.5).to_string(), "(1.000, -2.500)");
    }
}
