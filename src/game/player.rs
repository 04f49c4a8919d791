use super::board::Cell;

/// Which of the two chairs at the table. Identity (name, symbol) lives in
/// [`Player`]; `Seat` is what the board and session state machine track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Seat {
    One,
    Two,
}

impl Seat {
    /// Get the other seat
    pub fn other(self) -> Seat {
        match self {
            Seat::One => Seat::Two,
            Seat::Two => Seat::One,
        }
    }

    /// Convert seat to cell type
    pub fn to_cell(self) -> Cell {
        match self {
            Seat::One => Cell::One,
            Seat::Two => Cell::Two,
        }
    }
}

/// A player's identity: display name plus the token symbol used on the board.
/// Fixed for the whole session once assigned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub name: String,
    pub symbol: char,
}

impl Player {
    pub fn new(name: impl Into<String>, symbol: char) -> Self {
        Player {
            name: name.into(),
            symbol,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other_seat() {
        assert_eq!(Seat::One.other(), Seat::Two);
        assert_eq!(Seat::Two.other(), Seat::One);
    }

    #[test]
    fn test_seat_to_cell() {
        assert_eq!(Seat::One.to_cell(), Cell::One);
        assert_eq!(Seat::Two.to_cell(), Cell::Two);
    }

    #[test]
    fn test_player_record() {
        let p = Player::new("Jane", 'o');
        assert_eq!(p.name, "Jane");
        assert_eq!(p.symbol, 'o');
    }
}
