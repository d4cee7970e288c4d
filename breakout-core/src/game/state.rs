//! Game State Definitions
//!
//! One `GameState` lives for the whole window lifetime. It is owned by the
//! caller and passed by reference to the update step, the input handler and
//! the renderer; there is no global state.

use serde::{Serialize, Deserialize};

use crate::core::{Rect, StateHash, Vec2, compute_state_hash};
use crate::error::{ConfigError, SnapshotError};
use crate::game::config::GameConfig;
use crate::game::events::GameEvent;

// =============================================================================
// BALL
// =============================================================================

/// Ball kinematics.
///
/// `position` is the top-left corner of the ball's bounding square.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    /// Top-left corner (pixels)
    pub position: Vec2,
    /// Displacement per tick (pixels)
    pub velocity: Vec2,
}

impl Ball {
    /// Create a ball.
    pub const fn new(position: Vec2, velocity: Vec2) -> Self {
        Self { position, velocity }
    }

    /// Bounding square.
    #[inline]
    pub fn rect(&self, size: i32) -> Rect {
        Rect::square(self.position, size as f32)
    }
}

// =============================================================================
// BRICK GRID
// =============================================================================

/// Row-major grid of brick presence flags.
///
/// `cells.len() == rows * cols` always holds; snapshots that break it are
/// rejected on deserialization.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawBrickGrid")]
pub struct BrickGrid {
    rows: usize,
    cols: usize,
    cells: Vec<bool>,
}

/// Unchecked wire form of `BrickGrid`.
#[derive(Deserialize)]
struct RawBrickGrid {
    rows: usize,
    cols: usize,
    cells: Vec<bool>,
}

impl TryFrom<RawBrickGrid> for BrickGrid {
    type Error = SnapshotError;

    fn try_from(raw: RawBrickGrid) -> Result<Self, Self::Error> {
        let expected = raw.rows.checked_mul(raw.cols).unwrap_or(usize::MAX);
        if raw.cells.len() != expected {
            return Err(SnapshotError::BrickCellCount {
                rows: raw.rows,
                cols: raw.cols,
                expected,
                actual: raw.cells.len(),
            });
        }

        Ok(Self {
            rows: raw.rows,
            cols: raw.cols,
            cells: raw.cells,
        })
    }
}

impl BrickGrid {
    /// Grid with every brick present.
    pub fn full(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![true; rows * cols],
        }
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Whether the brick at `(row, col)` is present.
    /// Out-of-range cells are reported absent.
    pub fn is_present(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols && self.cells[row * self.cols + col]
    }

    /// Remove the brick at `(row, col)`.
    ///
    /// Returns `true` if a brick was there.
    pub fn remove(&mut self, row: usize, col: usize) -> bool {
        if !self.is_present(row, col) {
            return false;
        }
        self.cells[row * self.cols + col] = false;
        true
    }

    /// Put every brick back.
    pub fn refill(&mut self) {
        self.cells.iter_mut().for_each(|cell| *cell = true);
    }

    /// Number of present bricks.
    pub fn present_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell).count()
    }

    /// No brick is present.
    pub fn is_cleared(&self) -> bool {
        !self.cells.iter().any(|&cell| cell)
    }

    /// Present bricks as `(row, col)`, row-major.
    pub fn iter_present(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, &present)| present)
            .map(move |(i, _)| (i / cols, i % cols))
    }
}

// =============================================================================
// GAME STATE
// =============================================================================

/// Complete state of a game.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// Paddle left edge (pixels).
    /// Kept in `0..=window_width - paddle_right_margin - paddle_width`.
    pub paddle_x: i32,

    /// The ball
    pub ball: Ball,

    /// Remaining bricks
    pub bricks: BrickGrid,

    /// Accumulated score (never reset)
    pub score: u32,

    /// `false` once the ball reached the bottom edge. Never becomes `true` again.
    pub is_playing: bool,

    /// Update steps applied while playing
    pub tick: u32,

    /// Current level (1-based; incremented on each level clear)
    pub level: u32,

    /// Events generated this tick (drained by `tick`)
    #[serde(skip)]
    pub pending_events: Vec<GameEvent>,
}

impl GameState {
    /// Create the start-of-game state for `config`.
    ///
    /// Assumes the config has passed [`GameConfig::validate`];
    /// use [`GameState::try_new`] when that is not known.
    pub fn new(config: &GameConfig) -> Self {
        Self {
            paddle_x: config.paddle_start_x(),
            ball: Ball::new(config.ball_start(), config.ball_velocity),
            bricks: BrickGrid::full(config.brick_rows, config.brick_cols),
            score: 0,
            is_playing: true,
            tick: 0,
            level: 1,
            pending_events: Vec::new(),
        }
    }

    /// Validate `config`, then create the start-of-game state.
    pub fn try_new(config: &GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(config))
    }

    /// Whether the game reached its terminal state.
    pub fn is_game_over(&self) -> bool {
        !self.is_playing
    }

    /// Number of bricks still standing.
    pub fn bricks_remaining(&self) -> usize {
        self.bricks.present_count()
    }

    /// Compute hash of current state for verification.
    pub fn compute_hash(&self) -> StateHash {
        compute_state_hash(self.tick, |hasher| {
            hasher.update_i32(self.paddle_x);
            hasher.update_vec2(self.ball.position);
            hasher.update_vec2(self.ball.velocity);

            hasher.update_u32(self.bricks.rows() as u32);
            hasher.update_u32(self.bricks.cols() as u32);
            for row in 0..self.bricks.rows() {
                for col in 0..self.bricks.cols() {
                    hasher.update_bool(self.bricks.is_present(row, col));
                }
            }

            hasher.update_u32(self.score);
            hasher.update_bool(self.is_playing);
            hasher.update_u32(self.level);
        })
    }

    /// Serialize a snapshot of the state as JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Take pending events (consumes them).
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.pending_events)
    }

    /// Push a game event.
    pub fn push_event(&mut self, event: GameEvent) {
        self.pending_events.push(event);
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = GameState::new(&GameConfig::default());

        assert_eq!(state.paddle_x, 400);
        assert_eq!(state.ball.position, Vec2::new(440.0, 290.0));
        assert_eq!(state.ball.velocity, Vec2::new(3.0, -3.0));
        assert_eq!(state.bricks_remaining(), 50);
        assert_eq!(state.score, 0);
        assert!(state.is_playing);
        assert_eq!(state.level, 1);
    }

    #[test]
    fn test_try_new_rejects_invalid_config() {
        let config = GameConfig { brick_rows: 0, ..GameConfig::default() };
        assert!(GameState::try_new(&config).is_err());
        assert!(GameState::try_new(&GameConfig::default()).is_ok());
    }

    #[test]
    fn test_brick_grid_remove_and_refill() {
        let mut grid = BrickGrid::full(5, 10);
        assert!(grid.remove(2, 3));
        assert!(!grid.remove(2, 3), "second removal finds nothing");
        assert!(!grid.is_present(2, 3));
        assert_eq!(grid.present_count(), 49);

        grid.refill();
        assert_eq!(grid.present_count(), 50);
    }

    #[test]
    fn test_brick_grid_out_of_range() {
        let mut grid = BrickGrid::full(5, 10);
        assert!(!grid.is_present(5, 0));
        assert!(!grid.is_present(0, 10));
        assert!(!grid.remove(9, 9));
    }

    #[test]
    fn test_brick_grid_cleared() {
        let mut grid = BrickGrid::full(2, 2);
        for (row, col) in [(0, 0), (0, 1), (1, 0)] {
            grid.remove(row, col);
        }
        assert!(!grid.is_cleared());
        assert_eq!(grid.iter_present().collect::<Vec<_>>(), vec![(1, 1)]);

        grid.remove(1, 1);
        assert!(grid.is_cleared());
    }

    #[test]
    fn test_state_hash_determinism() {
        let config = GameConfig::default();
        let state1 = GameState::new(&config);
        let mut state2 = GameState::new(&config);
        assert_eq!(state1.compute_hash(), state2.compute_hash());

        state2.bricks.remove(0, 0);
        assert_ne!(state1.compute_hash(), state2.compute_hash());
    }

    #[test]
    fn test_json_snapshot_skips_events() {
        let mut state = GameState::new(&GameConfig::default());
        state.push_event(GameEvent::paddle_bounce(1, 400));

        let json = state.to_json().unwrap();
        assert!(!json.contains("pending_events"));

        let restored: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.paddle_x, state.paddle_x);
        assert!(restored.pending_events.is_empty());
    }

    #[test]
    fn test_brick_grid_rejects_wrong_cell_count() {
        let short = r#"{ "rows": 5, "cols": 10, "cells": [true, false, true] }"#;
        let err = serde_json::from_str::<BrickGrid>(short).unwrap_err();
        assert!(err.to_string().contains("needs 50 cells, got 3"));

        let overflow = format!(r#"{{ "rows": {}, "cols": 2, "cells": [] }}"#, usize::MAX);
        assert!(serde_json::from_str::<BrickGrid>(&overflow).is_err());

        let ok = r#"{ "rows": 1, "cols": 2, "cells": [true, false] }"#;
        let grid: BrickGrid = serde_json::from_str(ok).unwrap();
        assert!(grid.is_present(0, 0));
        assert!(!grid.is_present(0, 1));
    }
}
