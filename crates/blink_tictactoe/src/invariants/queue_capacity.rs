//! Queue capacity: no player holds more than three pieces.

use super::super::{GameState, PlayerQueue, Seat};
use super::Invariant;

/// Invariant: each queue holds at most [`PlayerQueue::CAPACITY`] entries, and
/// its positions and symbols have the same length.
pub struct QueueCapacityInvariant;

impl Invariant<GameState> for QueueCapacityInvariant {
    fn holds(state: &GameState) -> bool {
        Seat::ALL.into_iter().all(|seat| {
            let queue = state.queue(seat);
            queue.len() <= PlayerQueue::CAPACITY && queue.symbols().len() == queue.len()
        })
    }

    fn description() -> &'static str {
        "Each player holds at most three pieces"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{PlayerProfile, Position, Symbol};

    #[test]
    fn overfull_queue_violates() {
        let mut state = GameState::new([
            PlayerProfile::new("Ada", "Animals"),
            PlayerProfile::new("Bo", "Food"),
        ]);
        assert!(QueueCapacityInvariant::holds(&state));

        let queue = &mut state.queues[Seat::Two.index()];
        for pos in [Position::TopLeft, Position::TopCenter, Position::TopRight] {
            queue.push(pos, Symbol::from("🍕"));
        }
        assert!(QueueCapacityInvariant::holds(&state));

        // Bypass push's guard to build an impossible queue.
        let mut overfull = state.clone();
        overfull.queues[Seat::Two.index()] = serde_json::from_value(serde_json::json!({
            "cells": ["TopLeft", "TopCenter", "TopRight", "Center"],
            "symbols": ["🍕", "🍕", "🍕", "🍕"],
        }))
        .expect("queue json");
        assert!(!QueueCapacityInvariant::holds(&overfull));
    }
}
