//! Game module - owns the simulation state and drives it
//!
//! Flow per app update:
//! - `FixedUpdate`: zero or more simulation ticks (one per elapsed tick period)
//! - `Update`: keyboard input, then the frame is rebuilt from the state and presented
//!
//! Every system touching `Game` runs on Bevy's schedule, so ticks and
//! key events never interleave mid-mutation.

use bevy::prelude::*;

use breakout::game::events::GameEventData;
use breakout::{render, tick, Frame, GameConfig, GameState};

pub mod input;
pub mod visuals;

pub use input::read_paddle_input;
pub use visuals::{present_shapes, setup_shape_assets};

// ============================================================================
// RESOURCES
// ============================================================================

/// Validated game configuration
#[derive(Resource, Debug, Clone)]
pub struct GameSettings(pub GameConfig);

/// The single simulation state
#[derive(Resource, Debug)]
pub struct Game {
    pub state: GameState,
}

/// Most recently rendered frame
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct CurrentFrame(pub Frame);

// ============================================================================
// SYSTEM SETS
// ============================================================================

/// Ordering of the per-frame systems.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrameSet {
    /// Keyboard to paddle
    Input,
    /// State to frame
    Render,
    /// Frame to screen
    Present,
}

// ============================================================================
// GAME PLUGIN
// ============================================================================

pub struct GamePlugin;

impl Plugin for GamePlugin {
    fn build(&self, app: &mut App) {
        app
            .configure_sets(
                Update,
                (FrameSet::Input, FrameSet::Render, FrameSet::Present)
                    .chain()
                    .run_if(resource_exists::<Game>),
            )

            // Game setup
            .add_systems(Startup, (setup_game, setup_shape_assets))

            // Simulation (fixed timestep)
            .add_systems(FixedUpdate, advance_game.run_if(resource_exists::<Game>))

            // Per-frame
            .add_systems(Update, (
                read_paddle_input.in_set(FrameSet::Input),
                build_frame.in_set(FrameSet::Render),
                present_shapes
                    .run_if(resource_exists_and_changed::<CurrentFrame>)
                    .in_set(FrameSet::Present),
            ));
    }
}

// ============================================================================
// GAME SETUP
// ============================================================================

/// Validate the configuration and create the game, or exit with an error.
fn setup_game(
    mut commands: Commands,
    settings: Res<GameSettings>,
    mut exit: EventWriter<AppExit>,
) {
    match GameState::try_new(&settings.0) {
        Ok(state) => {
            let frame = render(&state, &settings.0);
            info!(
                "Game ready: {} bricks, paddle at x={}",
                state.bricks_remaining(),
                state.paddle_x
            );
            commands.insert_resource(Game { state });
            commands.insert_resource(CurrentFrame(frame));
        }
        Err(err) => {
            error!("Invalid game configuration: {}", err);
            exit.send(AppExit::error());
        }
    }
}

// ============================================================================
// SIMULATION
// ============================================================================

/// One simulation tick. A no-op once the game is over.
pub fn advance_game(settings: Res<GameSettings>, mut game: ResMut<Game>) {
    if game.state.is_game_over() {
        return;
    }

    let result = tick(&mut game.state, &settings.0);

    for event in &result.events {
        match &event.data {
            GameEventData::LevelCleared { level, velocity } => {
                info!("Level {} - ball velocity now {}", level, velocity);
            }
            GameEventData::GameOver { final_score } => {
                info!("Game Over! Final score: {}", final_score);
                match game.state.to_json() {
                    Ok(snapshot) => debug!("Final state: {}", snapshot),
                    Err(err) => warn!("Could not serialize final state: {}", err),
                }
            }
            _ => {}
        }
    }
}

/// Rebuild the frame from the current state.
///
/// Only marks `CurrentFrame` changed when the picture actually differs,
/// so a frozen game-over board is not re-presented every frame.
pub fn build_frame(
    settings: Res<GameSettings>,
    game: Res<Game>,
    mut current: ResMut<CurrentFrame>,
) {
    let frame = render(&game.state, &settings.0);
    current.set_if_neq(CurrentFrame(frame));
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::ecs::system::RunSystemOnce;
    use breakout::Vec2;

    fn world_with_game() -> World {
        let config = GameConfig::default();
        let state = GameState::new(&config);
        let frame = render(&state, &config);

        let mut world = World::new();
        world.insert_resource(GameSettings(config));
        world.insert_resource(Game { state });
        world.insert_resource(CurrentFrame(frame));
        world
    }

    #[test]
    fn test_advance_game_ticks_state() {
        let mut world = world_with_game();
        world.run_system_once(advance_game).unwrap();

        let game = world.resource::<Game>();
        assert_eq!(game.state.tick, 1);
        assert_eq!(game.state.ball.position, Vec2::new(443.0, 287.0));
    }

    #[test]
    fn test_advance_game_frozen_after_game_over() {
        let mut world = world_with_game();
        world.resource_mut::<Game>().state.is_playing = false;

        for _ in 0..10 {
            world.run_system_once(advance_game).unwrap();
        }

        assert_eq!(world.resource::<Game>().state.tick, 0);
    }

    #[test]
    fn test_build_frame_tracks_state() {
        let mut world = world_with_game();
        world.resource_mut::<Game>().state.score = 120;
        world.run_system_once(build_frame).unwrap();

        let frame = &world.resource::<CurrentFrame>().0;
        assert!(frame.texts().any(|t| t == "Score: 120"));
    }
}
