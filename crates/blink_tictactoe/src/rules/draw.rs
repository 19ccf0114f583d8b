//! Draw detection.
//!
//! The draw rule is a full board with no winner. Each player holds at most
//! [`PlayerQueue::CAPACITY`] pieces, so at most [`MAX_OCCUPIED`] squares are
//! ever filled and this check never fires in a legal game. It is kept as
//! written; no substitute draw condition is invented.

use super::super::{Board, PlayerQueue};
use tracing::instrument;

/// Most squares two players can fill at once under the vanishing rule.
pub const MAX_OCCUPIED: usize = 2 * PlayerQueue::CAPACITY;

/// Checks if every square is filled.
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| s.is_filled())
}
