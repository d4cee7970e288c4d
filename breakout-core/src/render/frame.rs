//! Frame Model
//!
//! A frame is an ordered list of draw commands, back to front, in screen
//! space (top-left origin, Y down). Front-ends present a frame however
//! their graphics stack allows; the list itself carries no platform types.

use serde::{Serialize, Deserialize};

use crate::core::{Rect, Vec2};

/// 8-bit RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const WHITE: Self = Self::new(255, 255, 255);
    pub const RED: Self = Self::new(255, 0, 0);
    pub const LIGHT_GRAY: Self = Self::new(192, 192, 192);
    pub const DARK_GRAY: Self = Self::new(64, 64, 64);

    /// Create a color.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Linear blend toward `other`; `t` is clamped to `0.0..=1.0`.
    pub fn lerp(self, other: Self, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
        Self::new(mix(self.r, other.r), mix(self.g, other.g), mix(self.b, other.b))
    }

    /// Components as floats in `0.0..=1.0`.
    pub fn to_unit(self) -> [f32; 3] {
        [self.r as f32 / 255.0, self.g as f32 / 255.0, self.b as f32 / 255.0]
    }
}

/// How a shape is filled.
///
/// Gradients are cosmetic; a front-end may approximate them.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum Fill {
    Solid(Rgb),
    /// From the shape's top-left corner to its bottom-right corner
    LinearGradient { from: Rgb, to: Rgb },
    /// From the center outward
    RadialGradient { inner: Rgb, outer: Rgb },
}

impl Fill {
    /// Single representative color (midpoint for gradients).
    pub fn average(&self) -> Rgb {
        match *self {
            Fill::Solid(color) => color,
            Fill::LinearGradient { from, to } => from.lerp(to, 0.5),
            Fill::RadialGradient { inner, outer } => inner.lerp(outer, 0.5),
        }
    }
}

/// Horizontal text anchoring.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextAlign {
    /// `position.x` is the left edge
    Left,
    /// `position.x` is the horizontal center
    Center,
}

/// A single drawing operation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    /// Filled axis-aligned rectangle
    FillRect { rect: Rect, fill: Fill },
    /// One-pixel rectangle outline
    StrokeRect { rect: Rect, color: Rgb },
    /// Filled circle
    FillCircle { center: Vec2, radius: f32, fill: Fill },
    /// Bold text; `position.y` is the baseline
    Text {
        text: String,
        position: Vec2,
        size: f32,
        color: Rgb,
        align: TextAlign,
    },
}

/// An ordered list of draw commands, back to front.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    /// Surface width
    pub width: f32,
    /// Surface height
    pub height: f32,
    commands: Vec<DrawCommand>,
}

impl Frame {
    /// Empty frame.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            commands: Vec::with_capacity(64),
        }
    }

    /// Append a command on top of everything drawn so far.
    pub fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    /// Commands, back to front.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Number of commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// No commands.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Text strings in draw order.
    pub fn texts(&self) -> impl Iterator<Item = &str> + '_ {
        self.commands.iter().filter_map(|cmd| match cmd {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_lerp() {
        assert_eq!(Rgb::BLACK.lerp(Rgb::WHITE, 0.0), Rgb::BLACK);
        assert_eq!(Rgb::BLACK.lerp(Rgb::WHITE, 1.0), Rgb::WHITE);
        assert_eq!(Rgb::LIGHT_GRAY.lerp(Rgb::DARK_GRAY, 0.5), Rgb::new(128, 128, 128));
        assert_eq!(Rgb::BLACK.lerp(Rgb::WHITE, 7.0), Rgb::WHITE);
    }

    #[test]
    fn test_fill_average() {
        assert_eq!(Fill::Solid(Rgb::RED).average(), Rgb::RED);
        let radial = Fill::RadialGradient { inner: Rgb::RED, outer: Rgb::new(255, 51, 51) };
        assert_eq!(radial.average(), Rgb::new(255, 26, 26));
    }

    #[test]
    fn test_frame_texts() {
        let mut frame = Frame::new(900.0, 600.0);
        assert!(frame.is_empty());

        frame.push(DrawCommand::FillRect {
            rect: Rect::new(0.0, 0.0, 900.0, 600.0),
            fill: Fill::Solid(Rgb::BLACK),
        });
        frame.push(DrawCommand::Text {
            text: "Score: 0".into(),
            position: Vec2::new(10.0, 20.0),
            size: 20.0,
            color: Rgb::WHITE,
            align: TextAlign::Left,
        });

        assert_eq!(frame.len(), 2);
        assert_eq!(frame.texts().collect::<Vec<_>>(), vec!["Score: 0"]);
    }
}
