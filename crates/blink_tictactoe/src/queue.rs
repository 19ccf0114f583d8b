//! Per-player FIFO of on-board pieces.

use super::position::Position;
use super::types::Symbol;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Ordered record of one player's pieces, oldest first.
///
/// Cell positions and the symbols placed on them are stored in lock-step:
/// every push and pop touches both. The queue never holds more than
/// [`PlayerQueue::CAPACITY`] entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerQueue {
    cells: VecDeque<Position>,
    symbols: VecDeque<Symbol>,
}

impl PlayerQueue {
    /// Maximum number of pieces a player may have on the board.
    pub const CAPACITY: usize = 3;

    /// Creates an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of pieces on the board.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// True when the player has no pieces on the board.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// True when the next placement must evict the oldest piece.
    pub fn is_full(&self) -> bool {
        self.cells.len() >= Self::CAPACITY
    }

    /// Oldest piece's position.
    pub fn oldest(&self) -> Option<Position> {
        self.cells.front().copied()
    }

    /// The cell that would vanish if this player placed another piece now.
    pub fn vanish_target(&self) -> Option<Position> {
        if self.is_full() { self.oldest() } else { None }
    }

    /// Whether the player owns a piece at `pos`.
    pub fn contains(&self, pos: Position) -> bool {
        self.cells.contains(&pos)
    }

    /// Positions, oldest first.
    pub fn cells(&self) -> impl ExactSizeIterator<Item = Position> + '_ {
        self.cells.iter().copied()
    }

    /// Symbols, parallel to [`PlayerQueue::cells`].
    pub fn symbols(&self) -> impl ExactSizeIterator<Item = &Symbol> + '_ {
        self.symbols.iter()
    }

    /// Positions paired with their symbols, oldest first.
    pub fn entries(&self) -> impl Iterator<Item = (Position, &Symbol)> + '_ {
        self.cells.iter().copied().zip(self.symbols.iter())
    }

    /// Removes the oldest entry from both sequences.
    pub(crate) fn pop_oldest(&mut self) -> Option<(Position, Symbol)> {
        let pos = self.cells.pop_front()?;
        let symbol = self.symbols.pop_front()?;
        Some((pos, symbol))
    }

    /// Appends a new entry. Callers evict first when the queue is full.
    pub(crate) fn push(&mut self, pos: Position, symbol: Symbol) {
        debug_assert!(!self.is_full(), "push onto a full queue");
        self.cells.push_back(pos);
        self.symbols.push_back(symbol);
    }
}
