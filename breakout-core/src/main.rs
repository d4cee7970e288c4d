//! Breakout headless simulator
//!
//! Plays a scripted game without a window, logs what happens and verifies
//! that replaying the same script reproduces the same final state.

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use breakout::{
    VERSION,
    GameConfig, GameState, InputScript, PaddleCommand,
    game::events::GameEventData,
    replay, tick,
};

/// Upper bound on simulated ticks (100 s at the default 10 ms period).
const DEMO_TICKS: u32 = 10_000;

fn main() -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;

    info!("Breakout simulator v{}", VERSION);

    let config = GameConfig::default();
    config.validate().context("default game config is invalid")?;
    info!(
        "Board {}x{}, tick {} ms",
        config.window_width, config.window_height, config.tick_interval_ms
    );

    demo_game(&config)
}

/// Paddle script: chase the ball's landing column every few ticks.
///
/// Recorded while playing so the replay can feed back the same commands.
fn steer(state: &GameState, config: &GameConfig) -> Option<PaddleCommand> {
    let ball_center = state.ball.position.x + config.ball_size as f32 / 2.0;
    let paddle_center = (state.paddle_x + config.paddle_width / 2) as f32;
    let dead_zone = config.paddle_step as f32;

    if ball_center < paddle_center - dead_zone {
        Some(PaddleCommand::Left)
    } else if ball_center > paddle_center + dead_zone {
        Some(PaddleCommand::Right)
    } else {
        None
    }
}

fn demo_game(config: &GameConfig) -> Result<()> {
    info!("=== Starting Demo Game ===");

    let mut state = GameState::try_new(config)?;
    let mut script = InputScript::new();
    let mut total_events = 0;

    for t in 0..DEMO_TICKS {
        if t % 4 == 0 {
            if let Some(command) = steer(&state, config) {
                script.record(t, command);
                breakout::game::apply_input(&mut state, command, config);
            }
        }

        let result = tick(&mut state, config);
        total_events += result.events.len();

        for event in &result.events {
            match &event.data {
                GameEventData::LevelCleared { level, velocity } => {
                    info!("Tick {}: level {} begins, ball velocity {}", event.tick, level, velocity);
                }
                GameEventData::GameOver { final_score } => {
                    info!("Tick {}: game over with score {}", event.tick, final_score);
                }
                _ => {}
            }
        }

        if t % 1000 == 0 {
            info!(
                "Tick {}: score {}, {} bricks left",
                t,
                state.score,
                state.bricks_remaining()
            );
        }

        if result.game_over {
            break;
        }
    }

    info!("=== Results ===");
    info!("Score: {}", state.score);
    info!("Level: {}", state.level);
    info!("Ticks: {}", state.tick);
    info!("Commands recorded: {}", script.len());
    info!("Total events: {}", total_events);

    let hash = state.compute_hash();
    info!("Final State Hash: {}", hex::encode(hash));

    info!("=== Verifying Determinism ===");
    let (replayed, _) = replay(GameState::new(config), &script, DEMO_TICKS, config);
    let replay_hash = replayed.compute_hash();
    info!("Replay State Hash: {}", hex::encode(replay_hash));

    if hash != replay_hash {
        anyhow::bail!("determinism failure: replay hash differs");
    }
    info!("DETERMINISM VERIFIED: Hashes match!");

    Ok(())
}
