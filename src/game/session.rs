use super::board::{self, Board};
use super::player::{Player, Seat};
use super::win::{self, Verdict};

/// Why a move was refused. Board-level failures plus the session-level case
/// of moving after the current game has already ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    ColumnFull,
    InvalidColumn,
    GameOver,
}

/// Cumulative session score, one field per seat. Explicit record rather than
/// a positional pair. Mutated only when a game ends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub one: u32,
    pub two: u32,
}

impl Score {
    pub fn get(&self, seat: Seat) -> u32 {
        match seat {
            Seat::One => self.one,
            Seat::Two => self.two,
        }
    }
}

/// Per-game state machine. A session ends when the last configured game
/// finishes, or immediately on `Aborted`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    WonBy(Seat),
    Drawn,
    Aborted,
}

/// What a single call to [`GameSession::play_move`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Token placed, game goes on; the active seat has switched.
    Continued,
    /// Move refused; board, score, and active seat are unchanged.
    ColumnRejected(MoveError),
    /// The mover completed a line. +2 to the mover; mover stays current.
    GameWon(Seat),
    /// Board filled with no line. +1 to each seat; mover stays current.
    GameDrawn,
}

/// Orchestrates a session of one or more games: turn order, scoring, and
/// game sequencing. Each game gets a freshly allocated board; the first mover
/// of game k is seat one when k is odd, seat two when k is even.
#[derive(Debug, Clone)]
pub struct GameSession {
    player_one: Player,
    player_two: Player,
    rows: usize,
    cols: usize,
    games_total: usize,
    game_number: usize,
    board: Board,
    current: Seat,
    score: Score,
    status: GameStatus,
}

impl GameSession {
    /// Start a session with game 1 in progress. Dimensions must already be
    /// validated by the config layer; `games_total` must be at least 1.
    pub fn new(
        player_one: Player,
        player_two: Player,
        rows: usize,
        cols: usize,
        games_total: usize,
    ) -> Self {
        debug_assert!(games_total >= 1);
        GameSession {
            player_one,
            player_two,
            rows,
            cols,
            games_total,
            game_number: 1,
            board: Board::new(rows, cols),
            current: first_mover(1),
            score: Score::default(),
            status: GameStatus::InProgress,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn player(&self, seat: Seat) -> &Player {
        match seat {
            Seat::One => &self.player_one,
            Seat::Two => &self.player_two,
        }
    }

    /// The seat that moves next, or moved last if the game just ended.
    pub fn current_seat(&self) -> Seat {
        self.current
    }

    pub fn current_player(&self) -> &Player {
        self.player(self.current)
    }

    pub fn score(&self) -> Score {
        self.score
    }

    /// 1-based index of the game being (or just) played.
    pub fn game_number(&self) -> usize {
        self.game_number
    }

    pub fn games_total(&self) -> usize {
        self.games_total
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// True once the last game has finished or the session was aborted.
    pub fn is_over(&self) -> bool {
        match self.status {
            GameStatus::InProgress => false,
            GameStatus::Aborted => true,
            GameStatus::WonBy(_) | GameStatus::Drawn => self.game_number >= self.games_total,
        }
    }

    /// Drop the current player's token into `column` and advance the state
    /// machine. A rejected column changes nothing; the same player moves
    /// again. On a win or draw the mover stays current and the score updates.
    pub fn play_move(&mut self, column: usize) -> MoveOutcome {
        if self.status != GameStatus::InProgress {
            return MoveOutcome::ColumnRejected(MoveError::GameOver);
        }

        let origin = match self.board.drop_token(column, self.current.to_cell()) {
            Ok(pos) => pos,
            Err(err) => {
                return MoveOutcome::ColumnRejected(match err {
                    board::MoveError::ColumnFull => MoveError::ColumnFull,
                    board::MoveError::InvalidColumn => MoveError::InvalidColumn,
                })
            }
        };

        match win::evaluate(&self.board, origin, self.current) {
            Verdict::Win(seat) => {
                match seat {
                    Seat::One => self.score.one += 2,
                    Seat::Two => self.score.two += 2,
                }
                self.status = GameStatus::WonBy(seat);
                MoveOutcome::GameWon(seat)
            }
            Verdict::Draw => {
                self.score.one += 1;
                self.score.two += 1;
                self.status = GameStatus::Drawn;
                MoveOutcome::GameDrawn
            }
            Verdict::Continue => {
                self.current = self.current.other();
                MoveOutcome::Continued
            }
        }
    }

    /// Begin the next game with a fresh board, if one remains. Returns false
    /// when the previous game is still running, the session was aborted, or
    /// all configured games have been played.
    pub fn start_next_game(&mut self) -> bool {
        match self.status {
            GameStatus::WonBy(_) | GameStatus::Drawn => {}
            GameStatus::InProgress | GameStatus::Aborted => return false,
        }
        if self.game_number >= self.games_total {
            return false;
        }

        self.game_number += 1;
        self.board = Board::new(self.rows, self.cols);
        self.current = first_mover(self.game_number);
        self.status = GameStatus::InProgress;
        true
    }

    /// Cooperative early exit. The session ends immediately; an unfinished
    /// game contributes nothing to the score.
    pub fn abort(&mut self) {
        self.status = GameStatus::Aborted;
    }
}

fn first_mover(game_number: usize) -> Seat {
    if game_number % 2 == 1 {
        Seat::One
    } else {
        Seat::Two
    }
}
