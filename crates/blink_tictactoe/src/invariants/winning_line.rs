//! Winning line membership.

use super::super::{GameState, Outcome};
use super::Invariant;

/// Invariant: a winning line is present exactly when a seat has won, and
/// every position on it is filled and in the winner's queue.
pub struct WinningLineInvariant;

impl Invariant<GameState> for WinningLineInvariant {
    fn holds(state: &GameState) -> bool {
        match (state.outcome(), state.winning_line()) {
            (None | Some(Outcome::Draw), None) => true,
            (Some(Outcome::Winner(seat)), Some(line)) => line
                .positions()
                .into_iter()
                .all(|pos| !state.board().is_empty(pos) && state.queue(seat).contains(pos)),
            _ => false,
        }
    }

    fn description() -> &'static str {
        "Winning line belongs to the winner"
    }
}
