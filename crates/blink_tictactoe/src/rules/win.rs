//! Win detection against the mover's queue.

use super::super::{Board, PlayerQueue, Position};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Three positions forming a row, column or diagonal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Line(pub [Position; 3]);

impl Line {
    /// Positions on the line.
    pub fn positions(&self) -> [Position; 3] {
        self.0
    }

    /// Board indices on the line.
    pub fn indices(&self) -> [usize; 3] {
        self.0.map(Position::to_index)
    }

    /// Whether `pos` lies on the line.
    pub fn contains(&self, pos: Position) -> bool {
        self.0.contains(&pos)
    }
}

/// The eight winning lines, checked in this order: rows top to bottom,
/// columns left to right, then the two diagonals.
pub const LINES: [Line; 8] = [
    // Rows
    Line([Position::TopLeft, Position::TopCenter, Position::TopRight]),
    Line([Position::MiddleLeft, Position::Center, Position::MiddleRight]),
    Line([Position::BottomLeft, Position::BottomCenter, Position::BottomRight]),
    // Columns
    Line([Position::TopLeft, Position::MiddleLeft, Position::BottomLeft]),
    Line([Position::TopCenter, Position::Center, Position::BottomCenter]),
    Line([Position::TopRight, Position::MiddleRight, Position::BottomRight]),
    // Diagonals
    Line([Position::TopLeft, Position::Center, Position::BottomRight]),
    Line([Position::TopRight, Position::Center, Position::BottomLeft]),
];

/// Returns the first line the mover owns outright.
///
/// A line counts when every square on it is filled and every position is in
/// the mover's queue. Ownership comes from the queue, not from comparing
/// symbols, since both players may draw the same emoji. When one move
/// completes two lines only the first in [`LINES`] order is reported.
#[instrument(skip(board, queue))]
pub fn check_win(board: &Board, queue: &PlayerQueue) -> Option<Line> {
    LINES.iter().copied().find(|line| {
        line.0
            .iter()
            .all(|&pos| !board.is_empty(pos) && queue.contains(pos))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Square, Symbol};

    fn place(board: &mut Board, queue: &mut PlayerQueue, cells: &[Position]) {
        for &pos in cells {
            board.set(pos, Square::Filled(Symbol::from("🐶")));
            queue.push(pos, Symbol::from("🐶"));
        }
    }

    #[test]
    fn no_winner_on_empty_board() {
        assert_eq!(check_win(&Board::new(), &PlayerQueue::new()), None);
    }

    #[test]
    fn column_win() {
        let mut board = Board::new();
        let mut queue = PlayerQueue::new();
        place(
            &mut board,
            &mut queue,
            &[Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
        );
        assert_eq!(check_win(&board, &queue), Some(LINES[3]));
        assert_eq!(LINES[3].indices(), [0, 3, 6]);
    }

    #[test]
    fn same_symbols_owned_by_opponent_do_not_count() {
        let mut board = Board::new();
        let mut mine = PlayerQueue::new();
        let mut theirs = PlayerQueue::new();
        place(&mut board, &mut mine, &[Position::TopLeft, Position::TopCenter]);
        place(&mut board, &mut theirs, &[Position::TopRight]);

        assert_eq!(check_win(&board, &mine), None);
    }

    #[test]
    fn membership_without_board_symbol_does_not_count() {
        let mut board = Board::new();
        let mut queue = PlayerQueue::new();
        place(
            &mut board,
            &mut queue,
            &[Position::TopLeft, Position::Center, Position::BottomRight],
        );
        board.clear(Position::Center);

        assert_eq!(check_win(&board, &queue), None);
    }

    #[test]
    fn anti_diagonal_win() {
        let mut board = Board::new();
        let mut queue = PlayerQueue::new();
        place(
            &mut board,
            &mut queue,
            &[Position::TopRight, Position::Center, Position::BottomLeft],
        );
        assert_eq!(check_win(&board, &queue), Some(LINES[7]));
    }
}
