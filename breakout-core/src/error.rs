//! Error types.

use thiserror::Error;

/// Reasons a [`GameConfig`](crate::game::config::GameConfig) is rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// A size that must be strictly positive is zero or negative.
    #[error("{field} must be positive, got {value}")]
    NonPositive {
        /// Offending field name.
        field: &'static str,
        /// Value found.
        value: i32,
    },

    /// The paddle cannot fit between the left wall and the right clamp margin.
    #[error("paddle width {paddle_width} leaves no travel in a {window_width} px window with a {margin} px right margin")]
    PaddleTooWide {
        /// Paddle width.
        paddle_width: i32,
        /// Window width.
        window_width: i32,
        /// Right clamp margin.
        margin: i32,
    },

    /// The brick grid has no cells.
    #[error("brick grid must have at least one row and one column, got {rows}x{cols}")]
    EmptyBrickGrid {
        /// Row count.
        rows: usize,
        /// Column count.
        cols: usize,
    },

    /// The brick grid does not fit between the window edges and the paddle.
    #[error("brick grid spans {right}x{bottom} px, outside the {max_right}x{max_bottom} px play area")]
    BrickGridOutOfBounds {
        /// Right edge of the last column.
        right: i32,
        /// Bottom edge of the last row.
        bottom: i32,
        /// Window width.
        max_right: i32,
        /// Top of the paddle band.
        max_bottom: i32,
    },

    /// A speed value is NaN, infinite or negative where it must not be.
    #[error("{field} must be a finite non-negative speed, got {value}")]
    InvalidSpeed {
        /// Offending field name.
        field: &'static str,
        /// Value found.
        value: f32,
    },

    /// The fixed tick period is zero.
    #[error("tick interval must be at least 1 ms")]
    ZeroTickInterval,
}

/// Reasons a deserialized snapshot is rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SnapshotError {
    /// The brick cell list does not match the grid dimensions.
    #[error("brick grid {rows}x{cols} needs {expected} cells, got {actual}")]
    BrickCellCount {
        /// Row count.
        rows: usize,
        /// Column count.
        cols: usize,
        /// `rows * cols`, or `usize::MAX` on overflow.
        expected: usize,
        /// Cells found.
        actual: usize,
    },
}
