//! # Breakout
//!
//! Deterministic simulation for a paddle-and-ball brick-breaker.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                       BREAKOUT CORE                          │
//! ├─────────────────────────────────────────────────────────────┤
//! │  core/           - Primitives                                │
//! │  ├── vec2.rs     - 2D vector                                 │
//! │  ├── rect.rs     - Axis-aligned bounding boxes               │
//! │  └── hash.rs     - State hashing for replay checks           │
//! │                                                              │
//! │  game/           - Game logic (deterministic)                │
//! │  ├── config.rs   - Dimensions, speeds, tick period           │
//! │  ├── state.rs    - Ball, brick grid, score, play flag        │
//! │  ├── tick.rs     - Fixed-step update and replay              │
//! │  ├── collision.rs- Bounding-box contact tests                │
//! │  ├── input.rs    - Paddle commands and input scripts         │
//! │  └── events.rs   - Events for logging and replay             │
//! │                                                              │
//! │  render/         - Pure renderer                             │
//! │  ├── mod.rs      - GameState -> Frame                        │
//! │  └── frame.rs    - Draw commands                             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Determinism
//!
//! `game::tick` has no delta-time parameter and no randomness. Given the
//! same starting state and the same paddle commands at the same ticks, two
//! runs produce identical states (checked with `GameState::compute_hash`).
//!
//! The window, timer and keyboard live in the `breakout-bevy` front-end.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod core;
pub mod error;
pub mod game;
pub mod render;

// Re-export commonly used types
pub use crate::core::{Rect, Vec2};
pub use error::{ConfigError, SnapshotError};
pub use game::config::{GameConfig, WINDOW_HEIGHT, WINDOW_TITLE, WINDOW_WIDTH};
pub use game::input::{InputEvent, InputScript, KeyState, PaddleCommand};
pub use game::state::GameState;
pub use game::tick::{TickResult, replay, tick};
pub use render::{Frame, render};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
