//! Terminal frontend
//!
//! Alternate screen in raw mode with mouse capture. The field fills every row
//! but the last, which carries a status line. The mouse row drives the
//! pointer; arrow keys nudge it for terminals without mouse reporting.

use std::io::{self, Stdout, Write};
use std::time::Duration;

use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
    KeyModifiers, MouseEventKind,
};
use crossterm::style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor};
use crossterm::terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{cursor, execute, queue};

use super::{InputFrame, InputSource, Presenter, RematchPrompt, rematch_message};
use crate::audio::{AudioManager, SoundEffect};
use crate::consts::*;
use crate::error::{PresentError, PromptError};
use crate::renderer::scene::{BLACK, WHITE};
use crate::renderer::{CellGrid, FieldSnapshot, Rgb, Scene, Viewport};
use crate::settings::Settings;
use crate::sim::Side;

/// Window title
pub const TITLE: &str = "Pong - Cat-san Edition!";

/// Smallest usable terminal (columns, rows including the status line)
pub const MIN_COLS: u16 = 40;
pub const MIN_ROWS: u16 = 12;

/// Pointer movement per arrow key press
pub const KEY_NUDGE: f32 = PADDLE_HEIGHT / 4.0;

/// Grid for the field given the full terminal size
fn field_viewport(cols: u16, rows: u16) -> Viewport {
    Viewport::new(cols, rows.saturating_sub(1))
}

fn term_color(c: Rgb) -> Color {
    Color::Rgb {
        r: c.0,
        g: c.1,
        b: c.2,
    }
}

/// Fold one terminal event into the tick's input
pub fn apply_event(frame: &mut InputFrame, event: &Event, viewport: &Viewport) {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => apply_key(frame, key),
        Event::Mouse(mouse) => match mouse.kind {
            MouseEventKind::Moved | MouseEventKind::Drag(_) | MouseEventKind::Down(_) => {
                if mouse.row < viewport.rows {
                    frame.pointer_y = Some(viewport.to_field_y(mouse.row));
                }
            }
            _ => {}
        },
        _ => {}
    }
}

fn apply_key(frame: &mut InputFrame, key: &KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => frame.quit = true,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => frame.quit = true,
        KeyCode::Up => nudge(frame, -KEY_NUDGE),
        KeyCode::Down => nudge(frame, KEY_NUDGE),
        _ => {}
    }
}

fn nudge(frame: &mut InputFrame, dy: f32) {
    let y = frame.pointer_y.unwrap_or(FIELD_HEIGHT / 2.0) + dy;
    frame.pointer_y = Some(y.clamp(0.0, FIELD_HEIGHT));
}

/// Crossterm-backed presenter, input source and prompt
pub struct TerminalPlatform {
    out: Stdout,
    audio: AudioManager<Stdout>,
    viewport: Viewport,
    pointer_y: Option<f32>,
    needs_clear: bool,
    active: bool,
}

impl TerminalPlatform {
    /// Take over the terminal. Restored on drop.
    pub fn new(settings: &Settings) -> Result<Self, PresentError> {
        let (cols, rows) = terminal::size()?;
        if cols < MIN_COLS || rows < MIN_ROWS {
            return Err(PresentError::TooSmall {
                cols,
                rows,
                min_cols: MIN_COLS,
                min_rows: MIN_ROWS,
            });
        }

        terminal::enable_raw_mode()?;
        let mut audio = AudioManager::new(io::stdout());
        audio.set_muted(!settings.sound);

        let mut platform = Self {
            out: io::stdout(),
            audio,
            viewport: field_viewport(cols, rows),
            pointer_y: None,
            needs_clear: true,
            active: true,
        };
        execute!(
            platform.out,
            EnterAlternateScreen,
            EnableMouseCapture,
            cursor::Hide,
            terminal::SetTitle(TITLE)
        )?;
        log::info!("Terminal frontend ready ({}x{})", cols, rows);
        Ok(platform)
    }

    /// Give the terminal back: leave the alternate screen, drop raw mode
    pub fn restore(&mut self) {
        if !self.active {
            return;
        }
        self.active = false;
        let _ = execute!(
            self.out,
            ResetColor,
            cursor::Show,
            DisableMouseCapture,
            LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
        log::debug!("Terminal restored");
    }

    fn resize(&mut self, cols: u16, rows: u16) {
        self.viewport = field_viewport(cols, rows);
        self.needs_clear = true;
    }

    fn draw_grid(&mut self, grid: &CellGrid) -> io::Result<()> {
        if self.needs_clear {
            queue!(self.out, Clear(ClearType::All))?;
            self.needs_clear = false;
        }
        for row in 0..grid.rows {
            queue!(self.out, cursor::MoveTo(0, row))?;
            let mut colors = None;
            let mut run = String::new();
            for cell in grid.row(row) {
                if colors != Some((cell.fg, cell.bg)) {
                    if !run.is_empty() {
                        queue!(self.out, Print(&run))?;
                        run.clear();
                    }
                    queue!(
                        self.out,
                        SetForegroundColor(term_color(cell.fg)),
                        SetBackgroundColor(term_color(cell.bg))
                    )?;
                    colors = Some((cell.fg, cell.bg));
                }
                run.push(cell.ch);
            }
            if !run.is_empty() {
                queue!(self.out, Print(&run))?;
            }
        }
        queue!(self.out, ResetColor)
    }

    fn draw_status(&mut self, frame: &FieldSnapshot<'_>) -> io::Result<()> {
        let score = frame.score();
        let text = format!(
            " {} {} : {} {}  |  move: mouse or Up/Down  |  quit: q",
            Side::Ai,
            score.ai,
            score.human,
            Side::Human
        );
        let line = fit_to_width(&text, self.viewport.cols);
        queue!(
            self.out,
            cursor::MoveTo(0, self.viewport.rows),
            Clear(ClearType::CurrentLine),
            Print(line)
        )
    }

    fn draw_prompt(&mut self, winner: Side) -> io::Result<()> {
        let lines = [rematch_message(winner), "(y/n)".to_string()];
        let mid = self.viewport.rows / 2;
        queue!(
            self.out,
            SetForegroundColor(term_color(WHITE)),
            SetBackgroundColor(term_color(BLACK))
        )?;
        for (i, text) in lines.iter().enumerate() {
            let line = fit_to_width(text, self.viewport.cols);
            let width = line.chars().count() as u16;
            let col = self.viewport.cols.saturating_sub(width) / 2;
            let row = (mid + i as u16).saturating_sub(1);
            queue!(self.out, cursor::MoveTo(col, row), Print(line))?;
        }
        queue!(self.out, ResetColor)?;
        self.out.flush()
    }

    /// Throw away input that arrived during play
    fn drain_pending(&mut self) -> io::Result<()> {
        while event::poll(Duration::ZERO)? {
            if let Event::Resize(cols, rows) = event::read()? {
                self.resize(cols, rows);
            }
        }
        Ok(())
    }
}

fn fit_to_width(text: &str, cols: u16) -> String {
    text.chars().take(cols as usize).collect()
}

impl Drop for TerminalPlatform {
    fn drop(&mut self) {
        self.restore();
    }
}

impl InputSource for TerminalPlatform {
    fn poll(&mut self) -> InputFrame {
        let mut frame = InputFrame {
            pointer_y: self.pointer_y,
            quit: false,
        };
        loop {
            match event::poll(Duration::ZERO) {
                Ok(true) => {}
                Ok(false) => break,
                Err(e) => {
                    log::warn!("Input poll failed: {}", e);
                    break;
                }
            }
            match event::read() {
                Ok(Event::Resize(cols, rows)) => self.resize(cols, rows),
                Ok(ev) => apply_event(&mut frame, &ev, &self.viewport),
                Err(e) => {
                    log::warn!("Input read failed: {}", e);
                    break;
                }
            }
        }
        self.pointer_y = frame.pointer_y;
        frame
    }
}

impl Presenter for TerminalPlatform {
    fn render(&mut self, frame: &FieldSnapshot<'_>) -> Result<(), PresentError> {
        let scene = Scene::build(frame);
        let grid = CellGrid::rasterize(&scene, &self.viewport);
        self.draw_grid(&grid)?;
        self.draw_status(frame)?;
        self.out.flush()?;
        Ok(())
    }

    fn play_cue(&mut self, effect: SoundEffect) {
        self.audio.play(effect);
    }
}

impl RematchPrompt for TerminalPlatform {
    fn ask_rematch(&mut self, winner: Side) -> Result<bool, PromptError> {
        if !self.active {
            return Err(PromptError::Unavailable);
        }
        self.drain_pending()?;
        self.draw_prompt(winner)?;
        loop {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    return Ok(matches!(key.code, KeyCode::Char('y') | KeyCode::Char('Y')));
                }
                Event::Resize(cols, rows) => {
                    self.resize(cols, rows);
                    self.draw_prompt(winner)?;
                }
                _ => {}
            }
        }
    }
}
