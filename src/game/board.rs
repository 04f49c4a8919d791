/// Smallest allowed board dimension (rows or columns).
pub const MIN_DIM: usize = 5;
/// Largest allowed board dimension (rows or columns).
pub const MAX_DIM: usize = 9;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    One,
    Two,
}

/// Absolute board coordinates of a placed token. Row 0 is the top row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    ColumnFull,
    InvalidColumn,
}

/// Grid occupancy with gravity-based placement. Dimensions are fixed at
/// construction; the only mutation is [`Board::drop_token`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board. Dimensions must already be validated to lie
    /// in `[MIN_DIM, MAX_DIM]` by the caller (the config layer).
    pub fn new(rows: usize, cols: usize) -> Self {
        debug_assert!((MIN_DIM..=MAX_DIM).contains(&rows));
        debug_assert!((MIN_DIM..=MAX_DIM).contains(&cols));
        Board {
            rows,
            cols,
            cells: vec![Cell::Empty; rows * cols],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Get the cell at a specific position.
    /// Row 0 is the top, row `rows - 1` is the bottom.
    /// Panics if the position is outside the grid.
    pub fn get(&self, row: usize, col: usize) -> Cell {
        assert!(
            row < self.rows && col < self.cols,
            "cell ({row}, {col}) out of bounds for {}x{} board",
            self.rows,
            self.cols
        );
        self.cells[row * self.cols + col]
    }

    /// Check if a column is full (or out of range).
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= self.cols {
            return true;
        }
        self.get(0, col) != Cell::Empty
    }

    /// Drop a token in a column, returning the position where it landed.
    /// On failure the grid is left untouched.
    pub fn drop_token(&mut self, col: usize, token: Cell) -> Result<Position, MoveError> {
        debug_assert!(token != Cell::Empty);

        if col >= self.cols {
            return Err(MoveError::InvalidColumn);
        }

        // Find the lowest empty row in this column
        for row in (0..self.rows).rev() {
            if self.get(row, col) == Cell::Empty {
                self.cells[row * self.cols + col] = token;
                return Ok(Position { row, col });
            }
        }

        Err(MoveError::ColumnFull)
    }

    /// Check if the board is completely full. Gravity guarantees a full top
    /// row implies a full board.
    pub fn is_full(&self) -> bool {
        (0..self.cols).all(|col| self.get(0, col) != Cell::Empty)
    }
}
