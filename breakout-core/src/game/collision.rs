//! Collision Detection
//!
//! Axis-aligned bounding-box tests between the ball and everything else.
//! These functions only detect; `tick` decides what each contact does.

use crate::core::Rect;
use crate::game::config::GameConfig;
use crate::game::events::Wall;
use crate::game::state::GameState;

/// Check whether the ball is in the paddle band.
///
/// The band has no lower bound: once the ball's bottom edge is at or below
/// the paddle's top edge and the horizontal ranges overlap, this keeps
/// reporting a hit every tick.
#[inline]
pub fn ball_hits_paddle(ball: &Rect, paddle: &Rect) -> bool {
    ball.bottom() >= paddle.y && ball.overlaps_x(paddle)
}

/// A brick overlapped by the ball.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BrickCollision {
    pub row: usize,
    pub col: usize,
}

/// Find every present brick overlapping the ball, in row-major order.
///
/// No early exit: a ball straddling several bricks hits all of them.
pub fn check_all_brick_collisions(state: &GameState, config: &GameConfig) -> Vec<BrickCollision> {
    let ball = state.ball.rect(config.ball_size);

    state
        .bricks
        .iter_present()
        .filter(|&(row, col)| ball.overlaps(&config.brick_rect(row, col)))
        .map(|(row, col)| BrickCollision { row, col })
        .collect()
}

/// Side wall the ball touches or crosses, if any.
///
/// Left is checked first; a ball wider than the window reports `Left`.
#[inline]
pub fn check_side_wall(ball: &Rect, config: &GameConfig) -> Option<Wall> {
    if ball.x <= 0.0 {
        Some(Wall::Left)
    } else if ball.right() >= config.window_width as f32 {
        Some(Wall::Right)
    } else {
        None
    }
}

/// Ball touches or crosses the top edge.
#[inline]
pub fn check_top_wall(ball: &Rect) -> bool {
    ball.y <= 0.0
}

/// Ball's bottom edge reached the bottom of the window.
#[inline]
pub fn check_bottom_edge(ball: &Rect, config: &GameConfig) -> bool {
    ball.bottom() >= config.window_height as f32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Vec2;

    fn config() -> GameConfig {
        GameConfig::default()
    }

    #[test]
    fn test_paddle_hit_band() {
        let config = config();
        let paddle = config.paddle_rect(400);

        // Bottom edge exactly on the paddle top
        assert!(ball_hits_paddle(&Rect::new(450.0, 460.0, 20.0, 20.0), &paddle));
        // Above the band
        assert!(!ball_hits_paddle(&Rect::new(450.0, 459.0, 20.0, 20.0), &paddle));
        // Below the paddle still counts
        assert!(ball_hits_paddle(&Rect::new(450.0, 550.0, 20.0, 20.0), &paddle));
    }

    #[test]
    fn test_paddle_hit_horizontal_edges() {
        let config = config();
        let paddle = config.paddle_rect(400);

        // Ball's right edge touching paddle's left edge
        assert!(ball_hits_paddle(&Rect::new(380.0, 470.0, 20.0, 20.0), &paddle));
        // Ball's left edge touching paddle's right edge
        assert!(ball_hits_paddle(&Rect::new(500.0, 470.0, 20.0, 20.0), &paddle));
        // Just clear on either side
        assert!(!ball_hits_paddle(&Rect::new(379.0, 470.0, 20.0, 20.0), &paddle));
        assert!(!ball_hits_paddle(&Rect::new(501.0, 470.0, 20.0, 20.0), &paddle));
    }

    #[test]
    fn test_brick_collisions_checks_every_brick() {
        let config = config();
        let mut state = GameState::new(&config);

        // Corner shared by bricks (0,0), (0,1), (1,0), (1,1)
        state.ball.position = Vec2::new(120.0, 60.0);
        let hits = check_all_brick_collisions(&state, &config);
        assert_eq!(
            hits,
            vec![
                BrickCollision { row: 0, col: 0 },
                BrickCollision { row: 0, col: 1 },
                BrickCollision { row: 1, col: 0 },
                BrickCollision { row: 1, col: 1 },
            ]
        );
    }

    #[test]
    fn test_brick_collisions_skip_absent_bricks() {
        let config = config();
        let mut state = GameState::new(&config);
        state.ball.position = Vec2::new(60.0, 45.0);
        assert_eq!(check_all_brick_collisions(&state, &config).len(), 1);

        state.bricks.remove(0, 0);
        assert!(check_all_brick_collisions(&state, &config).is_empty());
    }

    #[test]
    fn test_walls() {
        let config = config();
        assert_eq!(check_side_wall(&Rect::new(0.0, 100.0, 20.0, 20.0), &config), Some(Wall::Left));
        assert_eq!(check_side_wall(&Rect::new(880.0, 100.0, 20.0, 20.0), &config), Some(Wall::Right));
        assert_eq!(check_side_wall(&Rect::new(1.0, 100.0, 20.0, 20.0), &config), None);

        assert!(check_top_wall(&Rect::new(100.0, 0.0, 20.0, 20.0)));
        assert!(!check_top_wall(&Rect::new(100.0, 0.5, 20.0, 20.0)));

        assert!(check_bottom_edge(&Rect::new(100.0, 580.0, 20.0, 20.0), &config));
        assert!(!check_bottom_edge(&Rect::new(100.0, 579.0, 20.0, 20.0), &config));
    }
}
