//! Keyboard input - arrow keys to paddle commands

use bevy::input::keyboard::KeyboardInput;
use bevy::input::ButtonState;
use bevy::prelude::*;

use breakout::game::input::handle_input_event;
use breakout::{InputEvent, KeyState, PaddleCommand};

use super::{Game, GameSettings};

/// Paddle command bound to a key, if any.
pub fn paddle_command(key: KeyCode) -> Option<PaddleCommand> {
    match key {
        KeyCode::ArrowLeft => Some(PaddleCommand::Left),
        KeyCode::ArrowRight => Some(PaddleCommand::Right),
        _ => None,
    }
}

/// Translate a raw key transition into a game input event.
pub fn input_event(key: KeyCode, state: ButtonState) -> Option<InputEvent> {
    let command = paddle_command(key)?;
    let state = match state {
        ButtonState::Pressed => KeyState::Pressed,
        ButtonState::Released => KeyState::Released,
    };
    Some(InputEvent { command, state })
}

/// Apply every arrow-key press since the last frame.
///
/// Reads raw keyboard events rather than `ButtonInput<KeyCode>` so OS
/// auto-repeat presses each move the paddle one step.
pub fn read_paddle_input(
    mut keys: EventReader<KeyboardInput>,
    settings: Res<GameSettings>,
    mut game: ResMut<Game>,
) {
    for key in keys.read() {
        let Some(event) = input_event(key.key_code, key.state) else {
            continue;
        };

        if handle_input_event(&mut game.state, event, &settings.0) {
            debug!("Paddle {:?} -> x={}", event.command, game.state.paddle_x);
        }
    }
}
