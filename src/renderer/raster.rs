//! Scene rasterization into character cells
//!
//! The 600x400 field is stretched over whatever grid the terminal offers. A
//! cell is painted when a rectangle covers any part of it, so thin shapes
//! (paddles, dashes) never vanish at small sizes.

use super::scene::{Rgb, Scene, Shape};
use crate::consts::*;
use crate::sim::Rect;

/// Glyph used for filled rectangles
pub const BLOCK: char = '█';

/// Field-to-cell mapping for a grid of `cols` x `rows`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub cols: u16,
    pub rows: u16,
}

impl Viewport {
    pub fn new(cols: u16, rows: u16) -> Self {
        Self {
            cols: cols.max(1),
            rows: rows.max(1),
        }
    }

    /// Field pixels per column
    pub fn cell_width(&self) -> f32 {
        FIELD_WIDTH / self.cols as f32
    }

    /// Field pixels per row
    pub fn cell_height(&self) -> f32 {
        FIELD_HEIGHT / self.rows as f32
    }

    /// Field y at the middle of a row (pointer mapping)
    pub fn to_field_y(&self, row: u16) -> f32 {
        let row = row.min(self.rows - 1);
        (row as f32 + 0.5) * self.cell_height()
    }

    /// Column containing field x, clipped to the grid
    pub fn col_of(&self, x: f32) -> u16 {
        clip_index(x / self.cell_width(), self.cols)
    }

    /// Row containing field y, clipped to the grid
    pub fn row_of(&self, y: f32) -> u16 {
        clip_index(y / self.cell_height(), self.rows)
    }

    /// Inclusive (first, last) columns touched by a horizontal span
    fn col_span(&self, lo: f32, hi: f32) -> Option<(u16, u16)> {
        cell_span(lo / self.cell_width(), hi / self.cell_width(), self.cols)
    }

    /// Inclusive (first, last) rows touched by a vertical span
    fn row_span(&self, lo: f32, hi: f32) -> Option<(u16, u16)> {
        cell_span(lo / self.cell_height(), hi / self.cell_height(), self.rows)
    }
}

fn clip_index(v: f32, count: u16) -> u16 {
    (v.floor().max(0.0) as u16).min(count - 1)
}

fn cell_span(lo: f32, hi: f32, count: u16) -> Option<(u16, u16)> {
    if hi <= 0.0 || lo >= count as f32 {
        return None;
    }
    let first = lo.floor().max(0.0);
    let last = (hi.ceil() - 1.0).max(first).min(count as f32 - 1.0);
    Some((first as u16, last as u16))
}

/// One character cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub fg: Rgb,
    pub bg: Rgb,
}

/// A rasterized frame
#[derive(Debug, Clone, PartialEq)]
pub struct CellGrid {
    pub cols: u16,
    pub rows: u16,
    cells: Vec<Cell>,
}

impl CellGrid {
    /// Paint a scene onto a fresh grid sized by the viewport
    pub fn rasterize(scene: &Scene, viewport: &Viewport) -> Self {
        let blank = Cell {
            ch: ' ',
            fg: scene.background,
            bg: scene.background,
        };
        let mut grid = Self {
            cols: viewport.cols,
            rows: viewport.rows,
            cells: vec![blank; viewport.cols as usize * viewport.rows as usize],
        };

        for shape in &scene.shapes {
            match shape {
                Shape::Rect { rect, color } => grid.fill_rect(viewport, rect, *color),
                Shape::Text { pos, text, color } => {
                    let col = viewport.col_of(pos.x);
                    let row = viewport.row_of(pos.y);
                    grid.put_text(col, row, text, *color);
                }
            }
        }

        grid
    }

    fn fill_rect(&mut self, viewport: &Viewport, rect: &Rect, color: Rgb) {
        let Some((c0, c1)) = viewport.col_span(rect.left(), rect.right()) else {
            return;
        };
        let Some((r0, r1)) = viewport.row_span(rect.top(), rect.bottom()) else {
            return;
        };
        for row in r0..=r1 {
            for col in c0..=c1 {
                self.set(col, row, BLOCK, color);
            }
        }
    }

    fn put_text(&mut self, col: u16, row: u16, text: &str, color: Rgb) {
        for (i, ch) in text.chars().enumerate() {
            let c = col as usize + i;
            if c >= self.cols as usize {
                break;
            }
            self.set(c as u16, row, ch, color);
        }
    }

    fn set(&mut self, col: u16, row: u16, ch: char, fg: Rgb) {
        let idx = row as usize * self.cols as usize + col as usize;
        if let Some(cell) = self.cells.get_mut(idx) {
            cell.ch = ch;
            cell.fg = fg;
        }
    }

    pub fn get(&self, col: u16, row: u16) -> Option<&Cell> {
        if col >= self.cols || row >= self.rows {
            return None;
        }
        self.cells.get(row as usize * self.cols as usize + col as usize)
    }

    /// Cells of one row, left to right
    pub fn row(&self, row: u16) -> &[Cell] {
        let start = row as usize * self.cols as usize;
        let end = (start + self.cols as usize).min(self.cells.len());
        self.cells.get(start..end).unwrap_or(&[])
    }

    /// Characters of one row
    pub fn row_text(&self, row: u16) -> String {
        self.row(row).iter().map(|c| c.ch).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::FieldSnapshot;
    use crate::renderer::scene::{BLACK, RED, WHITE};
    use crate::sim::{GameState, Score};
    use glam::Vec2;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_pointer_mapping() {
        let vp = Viewport::new(60, 40);
        assert_eq!(vp.to_field_y(0), 5.0);
        assert_eq!(vp.to_field_y(39), 395.0);
        // Out-of-grid rows clamp to the last row
        assert_eq!(vp.to_field_y(200), 395.0);
    }

    #[test]
    fn test_cell_lookup_clips() {
        let vp = Viewport::new(60, 40);
        assert_eq!(vp.col_of(-20.0), 0);
        assert_eq!(vp.col_of(599.9), 59);
        assert_eq!(vp.col_of(1000.0), 59);
        assert_eq!(vp.row_of(15.0), 1);
    }

    #[test]
    fn test_thin_rect_still_visible() {
        let vp = Viewport::new(10, 10);
        let scene = Scene {
            background: BLACK,
            shapes: vec![Shape::Rect {
                rect: Rect::new(298.0, 10.0, 4.0, 18.0),
                color: WHITE,
            }],
        };
        let grid = CellGrid::rasterize(&scene, &vp);

        assert_eq!(grid.get(4, 0).map(|c| c.ch), Some(BLOCK));
        assert_eq!(grid.get(5, 0).map(|c| c.ch), Some(BLOCK));
        assert_eq!(grid.get(3, 0).map(|c| c.ch), Some(' '));
        assert_eq!(grid.get(4, 1).map(|c| c.ch), Some(' '));
    }

    #[test]
    fn test_offscreen_rect_is_clipped() {
        let vp = Viewport::new(60, 40);
        let scene = Scene {
            background: BLACK,
            shapes: vec![Shape::Rect {
                rect: Rect::new(300.0, -4.0, 10.0, 10.0),
                color: RED,
            }],
        };
        let grid = CellGrid::rasterize(&scene, &vp);
        assert_eq!(grid.get(30, 0).map(|c| c.fg), Some(RED));
        assert_eq!(grid.get(30, 1).map(|c| c.ch), Some(' '));
    }

    #[test]
    fn test_full_frame() {
        let mut state = GameState::new(&mut Pcg32::seed_from_u64(11));
        state.score = Score { ai: 4, human: 2 };
        state.ball.pos = Vec2::new(100.0, 300.0);
        let scene = Scene::build(&FieldSnapshot::new(&state));
        let grid = CellGrid::rasterize(&scene, &Viewport::new(60, 40));

        // Scores on row 1 at a quarter and three quarters across
        assert_eq!(grid.get(15, 1).map(|c| c.ch), Some('4'));
        assert_eq!(grid.get(45, 1).map(|c| c.ch), Some('2'));
        // Paddles
        assert_eq!(grid.get(1, 20).map(|c| c.ch), Some(BLOCK));
        assert_eq!(grid.get(58, 20).map(|c| c.ch), Some(BLOCK));
        // Ball
        let ball = grid.get(10, 30).copied();
        assert_eq!(ball.map(|c| (c.ch, c.fg)), Some((BLOCK, RED)));
        // Background
        assert_eq!(grid.get(20, 20).map(|c| (c.ch, c.bg)), Some((' ', BLACK)));
        assert_eq!(grid.row_text(20).chars().count(), 60);
    }
}
