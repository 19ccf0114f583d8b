//! Moves and the ways they are rejected.

use super::position::Position;
use super::types::Seat;
use serde::{Deserialize, Serialize};

/// A seat placing a piece at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Move {
    /// The seat making the move.
    pub seat: Seat,
    /// Target cell.
    pub position: Position,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.seat, self.position.label())
    }
}

/// Why a move was rejected. A rejected move leaves the state untouched.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// Names or categories are missing; the match has not started.
    #[display("Both players need a name and a category before moving")]
    SetupIncomplete,

    /// Cell index outside 0-8.
    #[display("Cell {} is off the board (must be 0-8)", _0)]
    OutOfBounds(usize),

    /// Target cell already holds a piece.
    #[display("{} is already occupied", _0)]
    CellOccupied(Position),

    /// A winner or draw is already recorded.
    #[display("Game is already over")]
    GameAlreadyOver,

    /// Target is the mover's own oldest piece, which this move would evict.
    #[display("{} is about to vanish and cannot be reused this move", _0)]
    ConflictingVanish(Position),

    /// The mover's category is missing from the catalogue.
    #[display("Unknown category {}", _0)]
    UnknownCategory(String),

    /// The mover's category has nothing to draw.
    #[display("Category {} has no symbols", _0)]
    EmptyCategory(String),

    /// A postcondition failed after the move was applied.
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}
