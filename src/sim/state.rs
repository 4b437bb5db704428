//! Game state and core simulation types
//!
//! Everything the Match Loop mutates lives in [`GameState`]. The RNG is not
//! part of the state; callers inject it so that serves are reproducible.

use std::fmt;

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::consts::*;

/// Which paddle a point, hit or win belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// Left paddle, driven by the AI
    Ai,
    /// Right paddle, driven by the pointer
    Human,
}

impl Side {
    pub fn opponent(self) -> Self {
        match self {
            Side::Ai => Side::Human,
            Side::Human => Side::Ai,
        }
    }

    /// Name shown to the player
    pub fn display_name(self) -> &'static str {
        match self {
            Side::Ai => "AI Cat",
            Side::Human => "You",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Round status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundState {
    Playing,
    Finished(Side),
}

impl RoundState {
    pub fn winner(self) -> Option<Side> {
        match self {
            RoundState::Playing => None,
            RoundState::Finished(side) => Some(side),
        }
    }

    pub fn is_finished(self) -> bool {
        matches!(self, RoundState::Finished(_))
    }
}

/// Something that happened during a tick, in the order it happened
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Ball bounced off the top or bottom wall
    WallBounce,
    /// Ball bounced off a paddle
    PaddleHit(Side),
    /// A side scored a point (ball re-served)
    Scored(Side),
    /// Round ended with this winner
    RoundOver(Side),
}

/// The ball
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    /// Top-left corner
    pub pos: Vec2,
    /// Per-tick displacement; each component is always +/- BALL_SPEED
    pub vel: Vec2,
}

impl Ball {
    /// New ball at the serve point with a random direction on both axes
    pub fn serve<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut ball = Self {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
        };
        ball.reserve(rng);
        ball
    }

    /// Put the ball back at the serve point with a fresh random direction
    pub fn reserve<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.pos = Vec2::new(FIELD_WIDTH / 2.0, FIELD_HEIGHT / 2.0);
        let dx = random_sign(rng) * BALL_SPEED;
        let dy = random_sign(rng) * BALL_SPEED;
        self.vel = Vec2::new(dx, dy);
    }

    pub fn rect(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: Vec2::splat(BALL_SIZE),
        }
    }

    pub fn advance(&mut self) {
        self.pos += self.vel;
    }
}

fn random_sign<R: Rng + ?Sized>(rng: &mut R) -> f32 {
    if rng.random_bool(0.5) { 1.0 } else { -1.0 }
}

/// A paddle; only its vertical position moves
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    /// Fixed horizontal position of the left edge
    pub x: f32,
    /// Top edge, always within [0, PADDLE_MAX_Y]
    pub y: f32,
}

impl Paddle {
    /// A vertically centered paddle at the given column
    pub fn centered(x: f32) -> Self {
        Self {
            x,
            y: FIELD_HEIGHT / 2.0 - PADDLE_HEIGHT / 2.0,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, PADDLE_WIDTH, PADDLE_HEIGHT)
    }

    /// Set the top edge, clamped to the field
    pub fn set_y(&mut self, y: f32) {
        self.y = clamp_paddle_y(y);
    }

    /// Center the paddle on a pointer position
    pub fn follow_pointer(&mut self, pointer_y: f32) {
        self.set_y(pointer_y - PADDLE_HEIGHT / 2.0);
    }
}

/// Keep a paddle top edge inside the field
#[inline]
pub fn clamp_paddle_y(y: f32) -> f32 {
    y.clamp(0.0, PADDLE_MAX_Y)
}

/// Points per side
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub ai: u32,
    pub human: u32,
}

impl Score {
    pub fn get(&self, side: Side) -> u32 {
        match side {
            Side::Ai => self.ai,
            Side::Human => self.human,
        }
    }

    pub fn award(&mut self, side: Side) {
        match side {
            Side::Ai => self.ai += 1,
            Side::Human => self.human += 1,
        }
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.ai, self.human)
    }
}

/// Complete round state (deterministic, serializable)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub ball: Ball,
    /// Left paddle
    pub ai_paddle: Paddle,
    /// Right paddle
    pub human_paddle: Paddle,
    pub score: Score,
    pub round: RoundState,
    /// Ticks advanced in this round
    pub time_ticks: u64,
}

impl GameState {
    /// Create a fresh round
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            ball: Ball::serve(rng),
            ai_paddle: Paddle::centered(AI_PADDLE_X),
            human_paddle: Paddle::centered(HUMAN_PADDLE_X),
            score: Score::default(),
            round: RoundState::Playing,
            time_ticks: 0,
        }
    }

    /// Reinitialize everything for a new round (start or rematch)
    pub fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        *self = Self::new(rng);
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        match side {
            Side::Ai => &self.ai_paddle,
            Side::Human => &self.human_paddle,
        }
    }
}
