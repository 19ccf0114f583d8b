//! Board/queue consistency.

use super::super::{GameState, Position, Seat};
use super::Invariant;

/// Invariant: a square is filled exactly when one queue lists it, and the
/// symbol on the board is the one that queue recorded.
///
/// Implies the occupied-square count equals the sum of queue lengths.
pub struct BoardConsistentInvariant;

impl Invariant<GameState> for BoardConsistentInvariant {
    fn holds(state: &GameState) -> bool {
        let cells_agree = Position::ALL.into_iter().all(|pos| {
            let owners: Vec<_> = Seat::ALL
                .into_iter()
                .filter_map(|seat| {
                    state
                        .queue(seat)
                        .entries()
                        .find(|(p, _)| *p == pos)
                        .map(|(_, symbol)| symbol)
                })
                .collect();

            match (state.board().get(pos).symbol(), owners.as_slice()) {
                (None, []) => true,
                (Some(on_board), [recorded]) => on_board == *recorded,
                _ => false,
            }
        });

        let queued: usize = Seat::ALL.into_iter().map(|s| state.queue(s).len()).sum();
        cells_agree && queued == state.board().occupied_count()
    }

    fn description() -> &'static str {
        "Filled squares match exactly one queue entry"
    }
}
