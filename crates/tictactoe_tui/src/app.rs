//! Application state and event handling.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use tictactoe_engine::{Game, Position};
use tracing::{debug, info, instrument};

use crate::{input, ui};

/// What the event loop should do after handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Keep running.
    Continue,
    /// Leave the event loop.
    Quit,
}

/// Main application state: the running game plus the keyboard cursor.
#[derive(Debug, Clone)]
pub struct App {
    game: Game,
    cursor: Position,
    title: String,
}

impl App {
    /// Creates an application with a fresh game.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            game: Game::new(),
            cursor: Position::Center,
            title: title.into(),
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Gets the cell under the keyboard cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Gets the title shown above the board.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Handles a key press.
    #[instrument(skip(self), fields(code = ?key.code))]
    pub fn handle_key(&mut self, key: KeyEvent) -> Action {
        if key.kind != KeyEventKind::Press {
            return Action::Continue;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                info!("User quit");
                return Action::Quit;
            }
            KeyCode::Char('r') => self.restart(),
            KeyCode::Enter | KeyCode::Char(' ') => self.play(self.cursor),
            KeyCode::Char(c) => {
                if let Some(pos) = input::digit_position(c) {
                    self.play(pos);
                }
            }
            code => self.cursor = input::move_cursor(self.cursor, code),
        }
        Action::Continue
    }

    /// Handles a mouse event; a left click on a cell plays it.
    ///
    /// `area` is the full frame the game is drawn into.
    #[instrument(skip(self, mouse), fields(column = mouse.column, row = mouse.row))]
    pub fn handle_mouse(&mut self, mouse: MouseEvent, area: Rect) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        if let Some(pos) = ui::cell_at(area, mouse.column, mouse.row) {
            self.play(pos);
        }
    }

    /// Plays `pos` for the current player. Rejected moves are ignored.
    pub fn play(&mut self, pos: Position) {
        self.cursor = pos;
        match self.game.apply_move(pos.index()) {
            Ok(_) => debug!(position = %pos, status = %self.game.status(), "Move applied to UI state"),
            Err(e) => debug!(error = %e, "Ignoring rejected move"),
        }
    }

    /// Starts a new game.
    pub fn restart(&mut self) {
        debug!("Restarting game");
        self.game.reset();
        self.cursor = Position::Center;
    }
}
