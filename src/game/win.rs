use super::board::{Board, Cell, Position};
use super::player::Seat;

/// Minimum contiguous run length that wins a game. Counted with `>=` on every
/// axis so a token placed inside a broken run of five still registers.
pub const WIN_LENGTH: usize = 4;

/// The four line axes, as (delta row, delta col) unit steps. Each axis is
/// walked in both the listed direction and its negation.
const AXES: [(isize, isize); 4] = [
    (0, 1),  // horizontal
    (1, 0),  // vertical
    (1, 1),  // diagonal "\"
    (1, -1), // diagonal "/"
];

/// Outcome of evaluating the most recent placement. `Win` outranks `Draw`:
/// a winning move that also fills the board is a win.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Win(Seat),
    Draw,
    Continue,
}

/// Decide whether the token just placed at `origin` by `mover` completes a
/// line through that cell, or whether the board is now full with no winner.
pub fn evaluate(board: &Board, origin: Position, mover: Seat) -> Verdict {
    let token = mover.to_cell();
    debug_assert_eq!(board.get(origin.row, origin.col), token);

    for (dr, dc) in AXES {
        if run_through(board, origin, token, dr, dc) >= WIN_LENGTH {
            return Verdict::Win(mover);
        }
    }

    if board.is_full() {
        Verdict::Draw
    } else {
        Verdict::Continue
    }
}

/// Length of the contiguous same-token run through `origin` along one axis:
/// the origin itself plus the walks in both directions.
fn run_through(board: &Board, origin: Position, token: Cell, dr: isize, dc: isize) -> usize {
    1 + walk(board, origin, token, dr, dc) + walk(board, origin, token, -dr, -dc)
}

/// Count matching tokens stepping outward from `origin` (exclusive) in one
/// direction, stopping at the first mismatch or board edge.
fn walk(board: &Board, origin: Position, token: Cell, dr: isize, dc: isize) -> usize {
    let mut count = 0;
    let mut row = origin.row as isize + dr;
    let mut col = origin.col as isize + dc;

    while row >= 0
        && col >= 0
        && (row as usize) < board.rows()
        && (col as usize) < board.cols()
        && board.get(row as usize, col as usize) == token
    {
        count += 1;
        row += dr;
        col += dc;
    }

    count
}
