//! Named board positions.

use super::types::Board;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A cell on the board, numbered 0-8 in row-major order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Position {
    /// Top-left (0)
    TopLeft,
    /// Top-center (1)
    TopCenter,
    /// Top-right (2)
    TopRight,
    /// Middle-left (3)
    MiddleLeft,
    /// Center (4)
    Center,
    /// Middle-right (5)
    MiddleRight,
    /// Bottom-left (6)
    BottomLeft,
    /// Bottom-center (7)
    BottomCenter,
    /// Bottom-right (8)
    BottomRight,
}

impl Position {
    /// All 9 positions in index order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Label for display.
    pub fn label(&self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Board index (0-8).
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// Position for a board index, `None` outside 0-8.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Parses a board index or a label.
    ///
    /// Labels match case-insensitively and ignore spaces, dashes and
    /// underscores, so "top left", "TopLeft" and "top-left" all work.
    #[instrument]
    pub fn parse(s: &str) -> Option<Position> {
        let s = s.trim();
        if let Ok(num) = s.parse::<usize>() {
            return Self::from_index(num);
        }

        let wanted = normalize(s);
        if wanted.is_empty() {
            return None;
        }
        Self::ALL
            .iter()
            .copied()
            .find(|pos| normalize(pos.label()) == wanted)
    }

    /// Empty positions on a board.
    #[instrument(skip(board))]
    pub fn valid_moves(board: &Board) -> Vec<Position> {
        Self::ALL
            .iter()
            .copied()
            .filter(|pos| board.is_empty(*pos))
            .collect()
    }
}

fn normalize(s: &str) -> String {
    s.chars()
        .filter(|c| !matches!(c, ' ' | '-' | '_'))
        .flat_map(char::to_lowercase)
        .collect()
}

impl TryFrom<usize> for Position {
    type Error = usize;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Self::from_index(index).ok_or(index)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Square, Symbol};
    use strum::IntoEnumIterator;

    #[test]
    fn index_round_trips_for_every_position() {
        for (i, pos) in Position::iter().enumerate() {
            assert_eq!(pos.to_index(), i);
            assert_eq!(Position::from_index(i), Some(pos));
        }
        assert_eq!(Position::from_index(9), None);
        assert_eq!(Position::try_from(12), Err(12));
    }

    #[test]
    fn parse_accepts_numbers_and_labels() {
        assert_eq!(Position::parse("4"), Some(Position::Center));
        assert_eq!(Position::parse(" 8 "), Some(Position::BottomRight));
        assert_eq!(Position::parse("top left"), Some(Position::TopLeft));
        assert_eq!(Position::parse("Middle-Right"), Some(Position::MiddleRight));
        assert_eq!(Position::parse("bottom_center"), Some(Position::BottomCenter));
    }

    #[test]
    fn valid_moves_lists_empty_squares_in_order() {
        let mut board = Board::new();
        assert_eq!(Position::valid_moves(&board), Position::ALL.to_vec());

        board.set(Position::Center, Square::Filled(Symbol::from("🐶")));
        board.set(Position::TopLeft, Square::Filled(Symbol::from("🍕")));
        let open = Position::valid_moves(&board);
        assert_eq!(open.len(), 7);
        assert_eq!(open.first(), Some(&Position::TopCenter));
        assert!(!open.contains(&Position::Center));
    }

    #[test]
    fn parse_rejects_garbage() {
        assert_eq!(Position::parse("9"), None);
        assert_eq!(Position::parse("-1"), None);
        assert_eq!(Position::parse("top"), None);
        assert_eq!(Position::parse(""), None);
    }
}
