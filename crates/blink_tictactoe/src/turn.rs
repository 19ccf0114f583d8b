//! Turn scheduling.
//!
//! The acting seat is derived from the turn counter alone: seat one on even
//! turns, seat two on odd. The counter only moves when a move commits without
//! ending the game.

use super::types::Seat;

/// Seat that acts on `turn`.
pub fn acting_seat(turn: u32) -> Seat {
    if turn % 2 == 0 { Seat::One } else { Seat::Two }
}

/// Counter value after a committed, non-terminal move.
pub fn advance(turn: u32) -> u32 {
    turn.saturating_add(1)
}
