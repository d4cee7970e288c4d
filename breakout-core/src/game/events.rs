//! Game Events
//!
//! Emitted by the update step for logging, replay and tests.
//! Events are informational: nothing in the simulation reads them back.

use serde::{Serialize, Deserialize};
use crate::core::Vec2;

/// Wall the ball bounced off.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Wall {
    /// Left window edge
    Left,
    /// Right window edge
    Right,
    /// Top window edge
    Top,
}

/// Game event data.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum GameEventData {
    /// Ball's vertical velocity was flipped by the paddle.
    PaddleBounce {
        /// Paddle left edge at the time of the bounce
        paddle_x: i32,
    },

    /// A brick was removed.
    BrickDestroyed {
        row: usize,
        col: usize,
        points: u32,
        new_score: u32,
    },

    /// Every brick was gone; the grid was refilled and the ball sped up.
    LevelCleared {
        /// Level number now starting
        level: u32,
        /// Velocity after the speed increase
        velocity: Vec2,
    },

    /// Ball bounced off a window edge.
    WallBounce { wall: Wall },

    /// Ball reached the bottom edge. Terminal.
    GameOver { final_score: u32 },
}

/// A game event stamped with the tick it happened on.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameEvent {
    /// Tick when event occurred
    pub tick: u32,

    /// Event data
    pub data: GameEventData,
}

impl GameEvent {
    /// Create a new event.
    pub fn new(tick: u32, data: GameEventData) -> Self {
        Self { tick, data }
    }

    /// Create paddle bounce event.
    pub fn paddle_bounce(tick: u32, paddle_x: i32) -> Self {
        Self::new(tick, GameEventData::PaddleBounce { paddle_x })
    }

    /// Create brick destroyed event.
    pub fn brick_destroyed(tick: u32, row: usize, col: usize, points: u32, new_score: u32) -> Self {
        Self::new(
            tick,
            GameEventData::BrickDestroyed {
                row,
                col,
                points,
                new_score,
            },
        )
    }

    /// Create level cleared event.
    pub fn level_cleared(tick: u32, level: u32, velocity: Vec2) -> Self {
        Self::new(tick, GameEventData::LevelCleared { level, velocity })
    }

    /// Create wall bounce event.
    pub fn wall_bounce(tick: u32, wall: Wall) -> Self {
        Self::new(tick, GameEventData::WallBounce { wall })
    }

    /// Create game over event.
    pub fn game_over(tick: u32, final_score: u32) -> Self {
        Self::new(tick, GameEventData::GameOver { final_score })
    }

    /// Whether this event removed a brick.
    pub fn is_brick_destroyed(&self) -> bool {
        matches!(self.data, GameEventData::BrickDestroyed { .. })
    }

    /// Whether this event is a paddle bounce.
    pub fn is_paddle_bounce(&self) -> bool {
        matches!(self.data, GameEventData::PaddleBounce { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_predicates() {
        let hit = GameEvent::brick_destroyed(7, 4, 2, 10, 10);
        assert!(hit.is_brick_destroyed());
        assert!(!hit.is_paddle_bounce());

        let bounce = GameEvent::paddle_bounce(8, 400);
        assert!(bounce.is_paddle_bounce());
        assert_eq!(bounce.tick, 8);
    }

    #[test]
    fn test_event_json_shape() {
        let event = GameEvent::wall_bounce(3, Wall::Top);
        let json = serde_json::to_string(&event).unwrap();
        assert_eq!(json, r#"{"tick":3,"data":{"WallBounce":{"wall":"Top"}}}"#);
    }
}
