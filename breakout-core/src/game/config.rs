//! Game Configuration
//!
//! Every dimension, speed and timing value the simulation reads.
//! `GameConfig::default()` reproduces the classic 900x600 board.

use std::time::Duration;

use serde::{Serialize, Deserialize};

use crate::core::{Rect, Vec2};
use crate::error::ConfigError;

/// Window width in pixels.
pub const WINDOW_WIDTH: i32 = 900;
/// Window height in pixels.
pub const WINDOW_HEIGHT: i32 = 600;
/// Window title.
pub const WINDOW_TITLE: &str = "Breakout Game";

/// Tunable parameters for a game.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Board width (pixels)
    pub window_width: i32,
    /// Board height (pixels)
    pub window_height: i32,

    /// Paddle width
    pub paddle_width: i32,
    /// Paddle height
    pub paddle_height: i32,
    /// Gap between the paddle's bottom edge and the bottom of the board
    pub paddle_bottom_margin: i32,
    /// Distance moved per key press
    pub paddle_step: i32,
    /// Extra space kept between the paddle and the right wall.
    /// The left wall has no such margin.
    pub paddle_right_margin: i32,

    /// Side of the ball's bounding square
    pub ball_size: i32,
    /// Velocity at game start (pixels per tick)
    pub ball_velocity: Vec2,
    /// Added to |dx| and |dy| on every level clear
    pub speed_increment: f32,

    /// Brick width
    pub brick_width: i32,
    /// Brick height
    pub brick_height: i32,
    /// Number of brick rows
    pub brick_rows: usize,
    /// Number of brick columns
    pub brick_cols: usize,
    /// Left edge of column 0
    pub brick_offset_x: i32,
    /// Top edge of row 0
    pub brick_offset_y: i32,
    /// Score awarded per brick
    pub brick_points: u32,

    /// Fixed tick period (milliseconds)
    pub tick_interval_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            window_width: WINDOW_WIDTH,
            window_height: WINDOW_HEIGHT,
            paddle_width: 100,
            paddle_height: 20,
            paddle_bottom_margin: 100,
            paddle_step: 30,
            paddle_right_margin: 15,
            ball_size: 20,
            ball_velocity: Vec2::new(3.0, -3.0),
            speed_increment: 0.5,
            brick_width: 80,
            brick_height: 20,
            brick_rows: 5,
            brick_cols: 10,
            brick_offset_x: 50,
            brick_offset_y: 50,
            brick_points: 10,
            tick_interval_ms: 10,
        }
    }
}

impl GameConfig {
    /// Check that the values describe a playable board.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("window_width", self.window_width),
            ("window_height", self.window_height),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("paddle_step", self.paddle_step),
            ("ball_size", self.ball_size),
            ("brick_width", self.brick_width),
            ("brick_height", self.brick_height),
        ] {
            if value <= 0 {
                return Err(ConfigError::NonPositive { field, value });
            }
        }

        if self.paddle_max_x() < 0 {
            return Err(ConfigError::PaddleTooWide {
                paddle_width: self.paddle_width,
                window_width: self.window_width,
                margin: self.paddle_right_margin,
            });
        }

        if self.brick_rows == 0 || self.brick_cols == 0 {
            return Err(ConfigError::EmptyBrickGrid {
                rows: self.brick_rows,
                cols: self.brick_cols,
            });
        }

        let last = self.brick_rect(self.brick_rows - 1, self.brick_cols - 1);
        let (right, bottom) = (last.right() as i32, last.bottom() as i32);
        if self.brick_offset_x < 0
            || self.brick_offset_y < 0
            || right > self.window_width
            || bottom > self.paddle_top()
        {
            return Err(ConfigError::BrickGridOutOfBounds {
                right,
                bottom,
                max_right: self.window_width,
                max_bottom: self.paddle_top(),
            });
        }

        for (field, value) in [
            ("ball_velocity.x", self.ball_velocity.x.abs()),
            ("ball_velocity.y", self.ball_velocity.y.abs()),
            ("speed_increment", self.speed_increment),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidSpeed { field, value });
            }
        }

        if self.tick_interval_ms == 0 {
            return Err(ConfigError::ZeroTickInterval);
        }

        Ok(())
    }

    /// Top edge of the paddle band.
    #[inline]
    pub fn paddle_top(&self) -> i32 {
        self.window_height - self.paddle_height - self.paddle_bottom_margin
    }

    /// Paddle's starting left edge (centered).
    #[inline]
    pub fn paddle_start_x(&self) -> i32 {
        self.window_width / 2 - self.paddle_width / 2
    }

    /// Largest allowed paddle left edge.
    #[inline]
    pub fn paddle_max_x(&self) -> i32 {
        self.window_width - self.paddle_right_margin - self.paddle_width
    }

    /// Paddle bounding box for a given left edge.
    #[inline]
    pub fn paddle_rect(&self, paddle_x: i32) -> Rect {
        Rect::new(
            paddle_x as f32,
            self.paddle_top() as f32,
            self.paddle_width as f32,
            self.paddle_height as f32,
        )
    }

    /// Ball's starting top-left corner (centered on the board).
    #[inline]
    pub fn ball_start(&self) -> Vec2 {
        Vec2::new(
            (self.window_width / 2 - self.ball_size / 2) as f32,
            (self.window_height / 2 - self.ball_size / 2) as f32,
        )
    }

    /// Bounding box of the brick at `(row, col)`.
    #[inline]
    pub fn brick_rect(&self, row: usize, col: usize) -> Rect {
        Rect::new(
            (col as i32 * self.brick_width + self.brick_offset_x) as f32,
            (row as i32 * self.brick_height + self.brick_offset_y) as f32,
            self.brick_width as f32,
            self.brick_height as f32,
        )
    }

    /// Fixed tick period.
    #[inline]
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}
