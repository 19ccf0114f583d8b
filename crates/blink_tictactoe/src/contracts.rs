//! Contract-based validation for moves.
//!
//! Preconditions decide whether a move may be attempted at all; they are
//! always checked. Postconditions compare the state before and after a
//! commit and run in debug builds.

use super::action::{Move, MoveError};
use super::invariants::{BlinkInvariants, InvariantSet};
use super::state::GameState;
use super::turn::advance;
use tracing::{instrument, warn};

/// Preconditions and postconditions for a state transition.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

/// Precondition: both seats have a name and a category.
pub struct SetupComplete;

impl SetupComplete {
    /// Rejects moves on a match whose players were never fully set up.
    #[instrument(skip(state))]
    pub fn check(state: &GameState) -> Result<(), MoveError> {
        if state.players.iter().all(|p| p.is_complete()) {
            Ok(())
        } else {
            warn!("Move attempted with incomplete player setup");
            Err(MoveError::SetupIncomplete)
        }
    }
}

/// Precondition: no winner or draw recorded yet.
pub struct GameNotOver;

impl GameNotOver {
    /// Rejects moves on a finished game.
    #[instrument(skip(state))]
    pub fn check(state: &GameState) -> Result<(), MoveError> {
        if state.is_over() {
            Err(MoveError::GameAlreadyOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: the target is not the mover's own piece that this move
/// would evict.
///
/// Checked before [`SquareIsEmpty`] so that aiming at the vanishing piece
/// reports the specific reason instead of a plain occupied cell.
pub struct NoConflictingVanish;

impl NoConflictingVanish {
    /// Rejects a placement into the cell about to vanish.
    #[instrument(skip(state))]
    pub fn check(mov: &Move, state: &GameState) -> Result<(), MoveError> {
        if state.queue(mov.seat).vanish_target() == Some(mov.position) {
            warn!(position = %mov.position, "Move targets the vanishing piece");
            Err(MoveError::ConflictingVanish(mov.position))
        } else {
            Ok(())
        }
    }
}

/// Precondition: the target square is empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Rejects occupied targets.
    #[instrument(skip(state))]
    pub fn check(mov: &Move, state: &GameState) -> Result<(), MoveError> {
        if state.board().is_empty(mov.position) {
            Ok(())
        } else {
            Err(MoveError::CellOccupied(mov.position))
        }
    }
}

/// Composite precondition for a legal move.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions in rejection-priority order.
    #[instrument(skip(state))]
    pub fn check(mov: &Move, state: &GameState) -> Result<(), MoveError> {
        SetupComplete::check(state)?;
        GameNotOver::check(state)?;
        NoConflictingVanish::check(mov, state)?;
        SquareIsEmpty::check(mov, state)?;
        Ok(())
    }
}

/// Contract for placing a piece.
///
/// Postconditions:
/// - every [`BlinkInvariants`] member holds
/// - the turn advanced by one, or stayed put because the game ended
/// - players and scores from before are carried over
pub struct MoveContract;

impl Contract<GameState, Move> for MoveContract {
    fn pre(state: &GameState, action: &Move) -> Result<(), MoveError> {
        LegalMove::check(action, state)
    }

    fn post(before: &GameState, after: &GameState) -> Result<(), MoveError> {
        BlinkInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })?;

        let turn_ok = if after.is_over() {
            after.turn() == before.turn()
        } else {
            after.turn() == advance(before.turn())
        };
        if !turn_ok {
            return Err(MoveError::InvariantViolation(format!(
                "Turn moved from {} to {}",
                before.turn(),
                after.turn()
            )));
        }

        if before.players != after.players {
            return Err(MoveError::InvariantViolation(
                "Players changed during a move".to_string(),
            ));
        }

        let finished = u32::from(after.is_over());
        let total = |s: &GameState| {
            s.scores().wins(crate::Seat::One) + s.scores().wins(crate::Seat::Two) + s.scores().draws()
        };
        if total(after) != total(before) + finished {
            return Err(MoveError::InvariantViolation(
                "Scores changed without a finished game".to_string(),
            ));
        }

        Ok(())
    }
}
