//! Simulation Tick
//!
//! One fixed step of the game. There is no delta-time: every call advances
//! the ball by exactly one velocity step. Deterministic, no randomness.

use tracing::{debug, info};

use crate::game::collision::{
    ball_hits_paddle,
    check_all_brick_collisions,
    check_bottom_edge,
    check_side_wall,
    check_top_wall,
};
use crate::game::config::GameConfig;
use crate::game::events::{GameEvent, Wall};
use crate::game::input::{InputScript, apply_input};
use crate::game::state::GameState;

/// Result of a tick.
#[derive(Debug, Default)]
pub struct TickResult {
    /// Events generated this tick
    pub events: Vec<GameEvent>,
    /// Whether the game is over (ended this tick or earlier)
    pub game_over: bool,
}

impl TickResult {
    /// Number of bricks destroyed this tick.
    pub fn bricks_destroyed(&self) -> usize {
        self.events.iter().filter(|e| e.is_brick_destroyed()).count()
    }

    /// Whether the paddle bounced the ball this tick.
    pub fn paddle_bounced(&self) -> bool {
        self.events.iter().any(|e| e.is_paddle_bounce())
    }
}

/// Run one simulation tick.
///
/// Order:
/// 1. integrate ball position (single Euler step, no sub-stepping)
/// 2. paddle bounce
/// 3. brick sweep (every present brick)
/// 4. level clear, if the sweep found no brick at all
/// 5. wall bounces
/// 6. game-over check
///
/// A no-op once the game is over.
pub fn tick(state: &mut GameState, config: &GameConfig) -> TickResult {
    let mut result = TickResult::default();

    if state.is_game_over() {
        result.game_over = true;
        return result;
    }

    state.tick = state.tick.wrapping_add(1);

    // 1. Move ball
    integrate(state);

    // 2. Paddle
    process_paddle_collision(state, config);

    // 3. Bricks
    let had_bricks = process_brick_collisions(state, config);

    // 4. Level clear
    if !had_bricks {
        process_level_clear(state, config);
    }

    // 5. Walls
    process_wall_collisions(state, config);

    // 6. Bottom edge
    check_end_conditions(state, config, &mut result);

    result.events = state.take_events();
    result
}

/// Advance the ball by its velocity.
fn integrate(state: &mut GameState) {
    let velocity = state.ball.velocity;
    state.ball.position += velocity;
}

/// Flip vertical velocity if the ball is in the paddle band.
///
/// No cooldown: the flip repeats every tick the condition holds.
fn process_paddle_collision(state: &mut GameState, config: &GameConfig) {
    let ball = state.ball.rect(config.ball_size);
    let paddle = config.paddle_rect(state.paddle_x);

    if ball_hits_paddle(&ball, &paddle) {
        state.ball.velocity = state.ball.velocity.flip_y();
        let event = GameEvent::paddle_bounce(state.tick, state.paddle_x);
        state.push_event(event);
    }
}

/// Remove every brick the ball overlaps.
///
/// Each hit flips vertical velocity and scores independently.
/// Returns whether any brick was present when the sweep started, so the
/// tick that removes the last brick leaves the grid empty until the next one.
fn process_brick_collisions(state: &mut GameState, config: &GameConfig) -> bool {
    let had_bricks = !state.bricks.is_cleared();
    let collisions = check_all_brick_collisions(state, config);

    for hit in collisions {
        if !state.bricks.remove(hit.row, hit.col) {
            continue;
        }

        state.ball.velocity = state.ball.velocity.flip_y();
        state.score += config.brick_points;

        let event = GameEvent::brick_destroyed(
            state.tick,
            hit.row,
            hit.col,
            config.brick_points,
            state.score,
        );
        debug!(tick = state.tick, row = hit.row, col = hit.col, score = state.score, "brick destroyed");
        state.push_event(event);
    }

    had_bricks
}

/// Refill the grid and speed the ball up.
fn process_level_clear(state: &mut GameState, config: &GameConfig) {
    state.bricks.refill();
    state.ball.velocity = state.ball.velocity.grow_magnitude(config.speed_increment);
    state.level += 1;

    info!(
        tick = state.tick,
        level = state.level,
        velocity = %state.ball.velocity,
        "level cleared"
    );
    let event = GameEvent::level_cleared(state.tick, state.level, state.ball.velocity);
    state.push_event(event);
}

/// Bounce off the left, right and top edges.
fn process_wall_collisions(state: &mut GameState, config: &GameConfig) {
    let ball = state.ball.rect(config.ball_size);

    if let Some(wall) = check_side_wall(&ball, config) {
        state.ball.velocity = state.ball.velocity.flip_x();
        let event = GameEvent::wall_bounce(state.tick, wall);
        state.push_event(event);
    }

    if check_top_wall(&ball) {
        state.ball.velocity = state.ball.velocity.flip_y();
        let event = GameEvent::wall_bounce(state.tick, Wall::Top);
        state.push_event(event);
    }
}

/// End the game once the ball reaches the bottom edge.
fn check_end_conditions(state: &mut GameState, config: &GameConfig, result: &mut TickResult) {
    let ball = state.ball.rect(config.ball_size);

    if check_bottom_edge(&ball, config) {
        state.is_playing = false;
        result.game_over = true;

        info!(tick = state.tick, score = state.score, "game over");
        let event = GameEvent::game_over(state.tick, state.score);
        state.push_event(event);
    }
}

/// Replay a game from a recorded input script.
///
/// Before tick `t` (0-based) runs, the commands recorded at `t` are applied.
/// Stops after `tick_count` ticks or at game over, whichever comes first.
pub fn replay(
    initial_state: GameState,
    script: &InputScript,
    tick_count: u32,
    config: &GameConfig,
) -> (GameState, Vec<GameEvent>) {
    let mut state = initial_state;
    let mut all_events = Vec::new();

    for t in 0..tick_count {
        for &command in script.commands_at(t) {
            apply_input(&mut state, command, config);
        }

        let result = tick(&mut state, config);
        all_events.extend(result.events);

        if result.game_over {
            break;
        }
    }

    (state, all_events)
}
