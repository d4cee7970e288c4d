//! Input Handling
//!
//! Maps discrete paddle commands onto paddle displacement, and records
//! per-tick command scripts for replay.
//!
//! Every key-down moves the paddle one fixed step, including platform
//! auto-repeat; key-up is ignored. There is no smooth movement.

use std::collections::BTreeMap;

use serde::{Serialize, Deserialize};
use tracing::trace;

use crate::game::config::GameConfig;
use crate::game::state::GameState;

// =============================================================================
// INPUT TYPES
// =============================================================================

/// The two recognized paddle commands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaddleCommand {
    /// Move the paddle one step toward the left wall
    Left,
    /// Move the paddle one step toward the right wall
    Right,
}

/// Whether a key went down or up.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeyState {
    /// Key-down, including auto-repeat
    Pressed,
    /// Key-up
    Released,
}

/// A key signal already mapped to a paddle command.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputEvent {
    pub command: PaddleCommand,
    pub state: KeyState,
}

impl InputEvent {
    /// Key-down for `command`.
    pub const fn pressed(command: PaddleCommand) -> Self {
        Self { command, state: KeyState::Pressed }
    }

    /// Key-up for `command`.
    pub const fn released(command: PaddleCommand) -> Self {
        Self { command, state: KeyState::Released }
    }
}

// =============================================================================
// APPLYING INPUT
// =============================================================================

/// Move the paddle one step.
///
/// The left bound is `0`; the right bound keeps
/// `paddle_x + paddle_width <= window_width - paddle_right_margin`.
/// Returns `true` if the paddle moved.
pub fn apply_input(state: &mut GameState, command: PaddleCommand, config: &GameConfig) -> bool {
    let before = state.paddle_x;

    state.paddle_x = match command {
        PaddleCommand::Left => (before - config.paddle_step).max(0),
        PaddleCommand::Right => (before + config.paddle_step).min(config.paddle_max_x()),
    };

    trace!(?command, from = before, to = state.paddle_x, "paddle input");
    state.paddle_x != before
}

/// Apply a key signal. Releases produce no state change.
pub fn handle_input_event(state: &mut GameState, event: InputEvent, config: &GameConfig) -> bool {
    match event.state {
        KeyState::Pressed => apply_input(state, event.command, config),
        KeyState::Released => false,
    }
}

// =============================================================================
// INPUT SCRIPT
// =============================================================================

/// Paddle commands keyed by the tick they are applied before.
///
/// BTreeMap keeps iteration in tick order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputScript {
    frames: BTreeMap<u32, Vec<PaddleCommand>>,
}

impl InputScript {
    /// Empty script.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a command to apply just before tick `tick` runs.
    pub fn record(&mut self, tick: u32, command: PaddleCommand) {
        self.frames.entry(tick).or_default().push(command);
    }

    /// Builder form of [`InputScript::record`].
    pub fn with(mut self, tick: u32, command: PaddleCommand) -> Self {
        self.record(tick, command);
        self
    }

    /// Commands for `tick`, in recording order.
    pub fn commands_at(&self, tick: u32) -> &[PaddleCommand] {
        self.frames.get(&tick).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Total number of recorded commands.
    pub fn len(&self) -> usize {
        self.frames.values().map(Vec::len).sum()
    }

    /// No commands recorded.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Last tick with a recorded command.
    pub fn last_tick(&self) -> Option<u32> {
        self.frames.keys().next_back().copied()
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn setup() -> (GameState, GameConfig) {
        let config = GameConfig::default();
        (GameState::new(&config), config)
    }

    #[test]
    fn test_single_steps() {
        let (mut state, config) = setup();

        assert!(apply_input(&mut state, PaddleCommand::Left, &config));
        assert_eq!(state.paddle_x, 370);

        assert!(apply_input(&mut state, PaddleCommand::Right, &config));
        assert!(apply_input(&mut state, PaddleCommand::Right, &config));
        assert_eq!(state.paddle_x, 430);
    }

    #[test]
    fn test_left_clamp_at_zero() {
        let (mut state, config) = setup();
        for _ in 0..20 {
            apply_input(&mut state, PaddleCommand::Left, &config);
        }
        assert_eq!(state.paddle_x, 0);
        assert!(!apply_input(&mut state, PaddleCommand::Left, &config));
    }

    #[test]
    fn test_right_clamp_keeps_margin() {
        let (mut state, config) = setup();
        for _ in 0..20 {
            apply_input(&mut state, PaddleCommand::Right, &config);
        }
        assert_eq!(state.paddle_x, 785);
        assert_eq!(state.paddle_x + config.paddle_width, config.window_width - config.paddle_right_margin);
    }

    #[test]
    fn test_release_is_ignored() {
        let (mut state, config) = setup();
        let moved = handle_input_event(&mut state, InputEvent::released(PaddleCommand::Left), &config);
        assert!(!moved);
        assert_eq!(state.paddle_x, 400);

        let moved = handle_input_event(&mut state, InputEvent::pressed(PaddleCommand::Left), &config);
        assert!(moved);
        assert_eq!(state.paddle_x, 370);
    }

    #[test]
    fn test_input_moves_paddle_after_game_over() {
        let (mut state, config) = setup();
        state.is_playing = false;
        assert!(apply_input(&mut state, PaddleCommand::Right, &config));
        assert_eq!(state.paddle_x, 430);
    }

    #[test]
    fn test_input_script() {
        let script = InputScript::new()
            .with(5, PaddleCommand::Left)
            .with(5, PaddleCommand::Right)
            .with(2, PaddleCommand::Left);

        assert_eq!(script.len(), 3);
        assert_eq!(script.commands_at(5), &[PaddleCommand::Left, PaddleCommand::Right]);
        assert!(script.commands_at(3).is_empty());
        assert_eq!(script.last_tick(), Some(5));
        assert!(InputScript::new().is_empty());
    }

    fn command() -> impl Strategy<Value = PaddleCommand> {
        prop_oneof![Just(PaddleCommand::Left), Just(PaddleCommand::Right)]
    }

    proptest! {
        #[test]
        fn prop_paddle_stays_in_bounds(commands in prop::collection::vec(command(), 0..200)) {
            let (mut state, config) = setup();
            for command in commands {
                apply_input(&mut state, command, &config);
                prop_assert!(state.paddle_x >= 0);
                prop_assert!(state.paddle_x + config.paddle_width <= config.window_width - config.paddle_right_margin);
            }
        }

        #[test]
        fn prop_releases_never_move(commands in prop::collection::vec(command(), 0..50)) {
            let (mut state, config) = setup();
            for command in commands {
                handle_input_event(&mut state, InputEvent::released(command), &config);
            }
            prop_assert_eq!(state.paddle_x, config.paddle_start_x());
        }
    }
}
