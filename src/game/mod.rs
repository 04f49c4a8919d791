//! Core game logic: board with gravity drops, origin-centered win detection,
//! and the multi-game session state machine.

mod board;
mod player;
mod session;
mod win;

pub use board::{Board, Cell, Position, MAX_DIM, MIN_DIM};
pub use player::{Player, Seat};
pub use session::{GameSession, GameStatus, MoveError, MoveOutcome, Score};
pub use win::{evaluate, Verdict, WIN_LENGTH};
