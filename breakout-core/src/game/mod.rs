//! Game Logic Module
//!
//! All game simulation code. Deterministic.
//!
//! ## Module Structure
//!
//! - `config`: Board dimensions, speeds, tick period
//! - `state`: Game state, ball, brick grid
//! - `tick`: Fixed-step update and replay
//! - `collision`: Bounding-box contact tests
//! - `input`: Paddle commands and input scripts
//! - `events`: Game events for logging and replay

pub mod config;
pub mod state;
pub mod tick;
pub mod collision;
pub mod input;
pub mod events;

// Re-export key types
pub use config::GameConfig;
pub use state::{Ball, BrickGrid, GameState};
pub use tick::{TickResult, replay, tick};
pub use input::{InputEvent, InputScript, KeyState, PaddleCommand, apply_input, handle_input_event};
pub use events::{GameEvent, GameEventData, Wall};
