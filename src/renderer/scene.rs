//! Shape generation for a frame

use glam::Vec2;

use super::FieldSnapshot;
use crate::consts::*;
use crate::sim::Rect;

/// 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

pub const WHITE: Rgb = Rgb(240, 240, 240);
pub const BLACK: Rgb = Rgb(15, 15, 15);
pub const RED: Rgb = Rgb(255, 32, 32);

/// Center-line dash geometry
const DASH_WIDTH: f32 = 4.0;
const DASH_HEIGHT: f32 = 18.0;
const DASH_START: f32 = 10.0;
const DASH_SPACING: f32 = 30.0;

/// Top edge of the score text
const SCORE_Y: f32 = 15.0;

/// A draw primitive in field coordinates
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Rect { rect: Rect, color: Rgb },
    /// Text anchored at its top-left corner
    Text { pos: Vec2, text: String, color: Rgb },
}

/// Everything to draw for one frame, back to front
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub background: Rgb,
    pub shapes: Vec<Shape>,
}

impl Scene {
    /// Draw list for a snapshot: paddles, ball, center line, scores
    pub fn build(snapshot: &FieldSnapshot<'_>) -> Self {
        let mut shapes = vec![
            Shape::Rect {
                rect: snapshot.ai_paddle().rect(),
                color: WHITE,
            },
            Shape::Rect {
                rect: snapshot.human_paddle().rect(),
                color: WHITE,
            },
            Shape::Rect {
                rect: snapshot.ball().rect(),
                color: RED,
            },
        ];

        shapes.extend(center_line().into_iter().map(|rect| Shape::Rect { rect, color: WHITE }));

        let score = snapshot.score();
        shapes.push(Shape::Text {
            pos: Vec2::new(FIELD_WIDTH / 4.0, SCORE_Y),
            text: score.ai.to_string(),
            color: WHITE,
        });
        shapes.push(Shape::Text {
            pos: Vec2::new(3.0 * FIELD_WIDTH / 4.0, SCORE_Y),
            text: score.human.to_string(),
            color: WHITE,
        });

        Self {
            background: BLACK,
            shapes,
        }
    }
}

/// Dashes down the middle of the field
pub fn center_line() -> Vec<Rect> {
    let x = FIELD_WIDTH / 2.0 - DASH_WIDTH / 2.0;
    let mut dashes = Vec::new();
    let mut y = DASH_START;
    while y < FIELD_HEIGHT {
        dashes.push(Rect::new(x, y, DASH_WIDTH, DASH_HEIGHT));
        y += DASH_SPACING;
    }
    dashes
}
