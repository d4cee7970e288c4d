//! Breakout - paddle-and-ball brick-breaker
//!
//! Bevy front-end: opens the window, drives the fixed-period tick,
//! forwards arrow keys to the paddle and presents each rendered frame.

mod game;
mod ui;

use bevy::prelude::*;
use bevy::core_pipeline::tonemapping::Tonemapping;
use bevy::window::{WindowMode, WindowResolution};

use breakout::{GameConfig, WINDOW_TITLE};

use game::{GamePlugin, GameSettings};
use ui::UiPlugin;

fn main() -> AppExit {
    let config = GameConfig::default();

    App::new()
        // Bevy defaults with a fixed-size window
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: WINDOW_TITLE.into(),
                resolution: WindowResolution::new(
                    config.window_width as f32,
                    config.window_height as f32,
                ),
                resizable: false,
                mode: WindowMode::Windowed,
                ..default()
            }),
            ..default()
        }))
        // Background fill is part of every frame; clear to the same color
        .insert_resource(ClearColor(Color::BLACK))
        // One simulation step per tick period
        .insert_resource(Time::<Fixed>::from_duration(config.tick_interval()))
        .insert_resource(GameSettings(config))
        // Our plugins
        .add_plugins((
            GamePlugin,
            UiPlugin,
        ))
        // Startup
        .add_systems(Startup, setup_2d_camera)
        .run()
}

/// 2D camera: one world unit per logical pixel, origin at the window center.
fn setup_2d_camera(mut commands: Commands) {
    commands.spawn((
        Camera2d,
        Tonemapping::None,
    ));

    info!("Breakout v{} initialized", breakout::VERSION);
}
