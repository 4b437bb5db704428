//! AI paddle controller
//!
//! Purely reactive: each tick the paddle takes one fixed step toward the
//! ball's current height. No prediction, no memory between ticks, so fast
//! diagonal balls can outrun it.

use super::state::{Ball, Paddle, clamp_paddle_y};

/// Next top-edge position for a paddle chasing the ball
///
/// Moves by `step` toward the ball's vertical center, or stays put when the
/// centers line up exactly. The result is clamped to the field.
pub fn track_ball(ball: &Ball, paddle: &Paddle, step: f32) -> f32 {
    let ball_center = ball.rect().center_y();
    let paddle_center = paddle.rect().center_y();

    let y = if ball_center > paddle_center {
        paddle.y + step
    } else if ball_center < paddle_center {
        paddle.y - step
    } else {
        paddle.y
    };

    clamp_paddle_y(y)
}
