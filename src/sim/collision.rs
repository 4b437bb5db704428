//! Collision detection and response
//!
//! Contacts only flip velocity signs. There is no push-out: the ball may sit
//! inside a wall or paddle for up to one tick of travel, and a ball that gets
//! behind a paddle's face keeps bouncing there until it leaves the paddle's
//! vertical span.

use rand::Rng;

use super::rect::Rect;
use super::state::{GameEvent, GameState, Side};
use crate::consts::*;

/// Whether two rectangles intersect; touching edges count as contact
#[inline]
pub fn overlaps(a: &Rect, b: &Rect) -> bool {
    a.overlaps_horizontally(b) && a.overlaps_vertically(b)
}

/// Reverse one velocity component
#[inline]
pub fn reflect(component: f32) -> f32 {
    -component
}

/// Ball touches the top or bottom wall
pub fn hits_wall(ball: &Rect) -> bool {
    ball.top() <= 0.0 || ball.bottom() >= FIELD_HEIGHT
}

/// Ball reached the right (human) paddle's face
pub fn hits_human_paddle(ball: &Rect, paddle: &Rect) -> bool {
    ball.right() >= paddle.left() && ball.overlaps_vertically(paddle)
}

/// Ball reached the left (AI) paddle's face
pub fn hits_ai_paddle(ball: &Rect, paddle: &Rect) -> bool {
    ball.left() <= paddle.right() && ball.overlaps_vertically(paddle)
}

/// Run the full collision pass for one tick
///
/// Order is fixed: walls, human paddle, AI paddle, left exit, right exit.
/// Each check sees the ball as left by the previous one.
pub fn resolve<R: Rng + ?Sized>(state: &mut GameState, rng: &mut R, events: &mut Vec<GameEvent>) {
    if hits_wall(&state.ball.rect()) {
        state.ball.vel.y = reflect(state.ball.vel.y);
        events.push(GameEvent::WallBounce);
    }

    if hits_human_paddle(&state.ball.rect(), &state.human_paddle.rect()) {
        state.ball.vel.x = reflect(state.ball.vel.x);
        events.push(GameEvent::PaddleHit(Side::Human));
    }

    if hits_ai_paddle(&state.ball.rect(), &state.ai_paddle.rect()) {
        state.ball.vel.x = reflect(state.ball.vel.x);
        events.push(GameEvent::PaddleHit(Side::Ai));
    }

    // Left exit is checked first; a re-served ball can never trip the right one
    if state.ball.rect().left() < 0.0 {
        score_point(state, Side::Human, rng, events);
    }
    if state.ball.rect().right() > FIELD_WIDTH {
        score_point(state, Side::Ai, rng, events);
    }
}

fn score_point<R: Rng + ?Sized>(
    state: &mut GameState,
    side: Side,
    rng: &mut R,
    events: &mut Vec<GameEvent>,
) {
    state.score.award(side);
    log::debug!("{} scored ({})", side, state.score);
    events.push(GameEvent::Scored(side));
    state.ball.reserve(rng);
}
