//! Core domain types for Blink Tac Toe.

use super::position::Position;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// One of the two seats at the table.
///
/// Seat one always acts on even turns, seat two on odd turns.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum Seat {
    /// First player (acts on turn 0).
    One,
    /// Second player.
    Two,
}

impl Seat {
    /// Both seats in turn order.
    pub const ALL: [Seat; 2] = [Seat::One, Seat::Two];

    /// Returns the other seat.
    pub fn opponent(self) -> Self {
        match self {
            Seat::One => Seat::Two,
            Seat::Two => Seat::One,
        }
    }

    /// Zero-based index, used for per-seat arrays.
    pub fn index(self) -> usize {
        match self {
            Seat::One => 0,
            Seat::Two => 1,
        }
    }

    /// One-based number used in user-facing messages.
    pub fn number(self) -> usize {
        self.index() + 1
    }
}

impl std::fmt::Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.number())
    }
}

/// A piece symbol drawn from a category, usually a single emoji.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display, derive_more::From,
)]
#[serde(transparent)]
pub struct Symbol(String);

impl Symbol {
    /// Returns the symbol text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Symbol {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// A square on the board.
///
/// The board records only the symbol; ownership of a filled square is
/// tracked by the players' queues.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Nothing here.
    #[default]
    Empty,
    /// Holds a symbol.
    Filled(Symbol),
}

impl Square {
    /// Returns the symbol, if any.
    pub fn symbol(&self) -> Option<&Symbol> {
        match self {
            Square::Empty => None,
            Square::Filled(symbol) => Some(symbol),
        }
    }

    /// True when the square holds a symbol.
    pub fn is_filled(&self) -> bool {
        matches!(self, Square::Filled(_))
    }
}

/// 3x3 board in row-major order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    squares: [Square; 9],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the square at a position.
    pub fn get(&self, pos: Position) -> &Square {
        &self.squares[pos.to_index()]
    }

    /// Writes a square.
    pub(crate) fn set(&mut self, pos: Position, square: Square) {
        self.squares[pos.to_index()] = square;
    }

    /// Empties a square, returning what was there.
    pub(crate) fn clear(&mut self, pos: Position) -> Square {
        std::mem::take(&mut self.squares[pos.to_index()])
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        !self.get(pos).is_filled()
    }

    /// Returns all squares.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Number of squares holding a symbol.
    pub fn occupied_count(&self) -> usize {
        self.squares.iter().filter(|s| s.is_filled()).count()
    }

    /// Formats the board as text. Empty squares show their index so a
    /// player can see which number to type.
    #[instrument(skip(self))]
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                let cell = match &self.squares[pos] {
                    Square::Empty => format!(" {} ", pos),
                    Square::Filled(symbol) => format!(" {} ", symbol),
                };
                result.push_str(&cell);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n---+---+---\n");
            }
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seats_alternate() {
        assert_eq!(Seat::One.opponent(), Seat::Two);
        assert_eq!(Seat::Two.opponent(), Seat::One);
        assert_eq!(Seat::Two.to_string(), "Player 2");
    }

    #[test]
    fn clear_returns_previous_square() {
        let mut board = Board::new();
        board.set(Position::Center, Square::Filled("🐶".into()));
        assert_eq!(board.occupied_count(), 1);

        let old = board.clear(Position::Center);
        assert_eq!(old.symbol().map(Symbol::as_str), Some("🐶"));
        assert!(board.is_empty(Position::Center));
        assert_eq!(board.occupied_count(), 0);
    }

    #[test]
    fn display_shows_indices_for_empty_squares() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Square::Filled("🍕".into()));
        let text = board.display();
        assert!(text.starts_with(" 🍕 | 1 | 2 "));
        assert!(text.ends_with(" 6 | 7 | 8 "));
    }
}
