use crate::game::{GameSession, GameStatus, MoveError, MoveOutcome};
use crossterm::event::{self, Event, KeyCode, KeyEvent};
use ratatui::{backend::Backend, Terminal};
use std::io;

pub struct App {
    session: GameSession,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(session: GameSession) -> Self {
        let selected_column = session.board().cols() / 2;
        App {
            session,
            selected_column,
            should_quit: false,
            message: None,
        }
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                self.handle_key(key);
            }
        }
        Ok(())
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                // The abort event: the session ends immediately and any
                // unfinished game stays unscored.
                if !self.session.is_over() {
                    self.session.abort();
                }
                self.should_quit = true;
            }
            KeyCode::Left => {
                if self.selected_column > 0 {
                    self.selected_column -= 1;
                }
            }
            KeyCode::Right => {
                if self.selected_column + 1 < self.session.board().cols() {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                if self.session.status() == GameStatus::InProgress {
                    self.drop_token();
                } else {
                    self.next_game();
                }
            }
            KeyCode::Char('n') => {
                self.next_game();
            }
            _ => {}
        }
    }

    /// Drop the current player's token in the selected column
    fn drop_token(&mut self) {
        self.message = None;

        match self.session.play_move(self.selected_column) {
            MoveOutcome::Continued => {}
            MoveOutcome::ColumnRejected(MoveError::ColumnFull) => {
                self.message = Some(format!("Column {} is full", self.selected_column + 1));
            }
            MoveOutcome::ColumnRejected(MoveError::InvalidColumn) => {
                self.message = Some("Invalid column".to_string());
            }
            MoveOutcome::ColumnRejected(MoveError::GameOver) => {
                self.message = Some("Game is over".to_string());
            }
            MoveOutcome::GameWon(seat) => {
                let winner = self.session.player(seat);
                self.message = Some(if self.session.is_over() {
                    format!("Player {} won  |  Game over!", winner.name)
                } else {
                    format!("Player {} won  |  Press Enter for the next game", winner.name)
                });
            }
            MoveOutcome::GameDrawn => {
                self.message = Some(if self.session.is_over() {
                    "It is a draw  |  Game over!".to_string()
                } else {
                    "It is a draw  |  Press Enter for the next game".to_string()
                });
            }
        }
    }

    /// Advance to the next game of the session, if one remains
    fn next_game(&mut self) {
        if self.session.start_next_game() {
            self.selected_column = self.session.board().cols() / 2;
            self.message = Some(format!("Game #{}", self.session.game_number()));
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(frame, &self.session, self.selected_column, &self.message);
    }
}
