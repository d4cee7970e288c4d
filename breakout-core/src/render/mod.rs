//! Renderer
//!
//! Builds a [`Frame`] from a [`GameState`]. Pure: reads the state, never
//! mutates it. Layers, back to front:
//!
//! 1. background
//! 2. score text
//! 3. paddle
//! 4. ball
//! 5. bricks
//! 6. "Game Over" label (only once the game has ended)
//!
//! The board is not cleared for the label, so the game-over frame is the
//! last playing frame with one extra command on top.

pub mod frame;

pub use frame::{DrawCommand, Fill, Frame, Rgb, TextAlign};

use crate::core::{Rect, Vec2};
use crate::game::{GameConfig, GameState};

/// Score label font size
pub const SCORE_FONT_SIZE: f32 = 20.0;
/// Score label baseline origin
pub const SCORE_POSITION: Vec2 = Vec2::new(10.0, 20.0);
/// Game-over label font size
pub const GAME_OVER_FONT_SIZE: f32 = 30.0;
/// Game-over label text
pub const GAME_OVER_TEXT: &str = "Game Over";

/// Ball shading: center color
pub const BALL_INNER: Rgb = Rgb::RED;
/// Ball shading: rim color
pub const BALL_OUTER: Rgb = Rgb::new(255, 51, 51);

/// Render the current state.
pub fn render(state: &GameState, config: &GameConfig) -> Frame {
    let mut frame = Frame::new(config.window_width as f32, config.window_height as f32);

    draw_background(&mut frame);
    draw_score(&mut frame, state.score);
    draw_paddle(&mut frame, state, config);
    draw_ball(&mut frame, state, config);
    draw_bricks(&mut frame, state, config);

    if state.is_game_over() {
        draw_game_over(&mut frame, config);
    }

    frame
}

fn draw_background(frame: &mut Frame) {
    let rect = Rect::new(0.0, 0.0, frame.width, frame.height);
    frame.push(DrawCommand::FillRect { rect, fill: Fill::Solid(Rgb::BLACK) });
}

fn draw_score(frame: &mut Frame, score: u32) {
    frame.push(DrawCommand::Text {
        text: format!("Score: {score}"),
        position: SCORE_POSITION,
        size: SCORE_FONT_SIZE,
        color: Rgb::WHITE,
        align: TextAlign::Left,
    });
}

fn draw_paddle(frame: &mut Frame, state: &GameState, config: &GameConfig) {
    let rect = config.paddle_rect(state.paddle_x);
    frame.push(DrawCommand::FillRect { rect, fill: Fill::Solid(Rgb::WHITE) });
    frame.push(DrawCommand::StrokeRect { rect, color: Rgb::WHITE });
}

fn draw_ball(frame: &mut Frame, state: &GameState, config: &GameConfig) {
    let rect = state.ball.rect(config.ball_size);
    frame.push(DrawCommand::FillCircle {
        center: rect.center(),
        radius: rect.w / 2.0,
        fill: Fill::RadialGradient { inner: BALL_INNER, outer: BALL_OUTER },
    });
}

fn draw_bricks(frame: &mut Frame, state: &GameState, config: &GameConfig) {
    for (row, col) in state.bricks.iter_present() {
        let rect = config.brick_rect(row, col);
        frame.push(DrawCommand::FillRect {
            rect,
            fill: Fill::LinearGradient { from: Rgb::LIGHT_GRAY, to: Rgb::DARK_GRAY },
        });
        frame.push(DrawCommand::StrokeRect { rect, color: Rgb::WHITE });
    }
}

fn draw_game_over(frame: &mut Frame, config: &GameConfig) {
    frame.push(DrawCommand::Text {
        text: GAME_OVER_TEXT.to_string(),
        position: Vec2::new(
            config.window_width as f32 / 2.0,
            (config.window_height / 2) as f32,
        ),
        size: GAME_OVER_FONT_SIZE,
        color: Rgb::WHITE,
        align: TextAlign::Center,
    });
}
