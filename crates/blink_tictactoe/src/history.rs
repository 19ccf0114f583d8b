//! Display history with an undo/redo cursor.
//!
//! The log only ever grows. Moving the cursor changes which snapshot is shown
//! and nothing else: the authoritative [`GameState`](crate::GameState) keeps
//! its turn, queues and scores no matter where the cursor points.

use super::rules::Line;
use super::types::Board;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Immutable capture of what the board looked like after a committed change.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize, derive_new::new)]
pub struct Snapshot {
    /// Board contents.
    board: Board,
    /// Highlighted line, if the change ended the game.
    winning_line: Option<Line>,
}

/// Append-only snapshot log plus a cursor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryLog {
    snapshots: Vec<Snapshot>,
    cursor: usize,
}

impl HistoryLog {
    /// Starts a log at an initial snapshot.
    pub fn new(initial: Snapshot) -> Self {
        Self {
            snapshots: vec![initial],
            cursor: 0,
        }
    }

    /// Appends a snapshot at the tail and points the cursor at it.
    ///
    /// Entries after the cursor are kept even if the cursor was rewound.
    #[instrument(skip(self, snapshot), fields(len = self.snapshots.len()))]
    pub fn record(&mut self, snapshot: Snapshot) {
        self.snapshots.push(snapshot);
        self.cursor = self.snapshots.len() - 1;
        debug!(cursor = self.cursor, "Snapshot recorded");
    }

    /// Moves the cursor back one step. Returns false at the first entry.
    #[instrument(skip(self), fields(cursor = self.cursor))]
    pub fn undo(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        true
    }

    /// Moves the cursor forward one step. Returns false at the tail.
    #[instrument(skip(self), fields(cursor = self.cursor))]
    pub fn redo(&mut self) -> bool {
        if self.is_at_tail() {
            return false;
        }
        self.cursor += 1;
        true
    }

    /// Snapshot under the cursor.
    pub fn current(&self) -> &Snapshot {
        &self.snapshots[self.cursor]
    }

    /// Most recent snapshot, regardless of the cursor.
    pub fn latest(&self) -> &Snapshot {
        &self.snapshots[self.snapshots.len() - 1]
    }

    /// Cursor position.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of snapshots.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Never true; the log always holds its initial snapshot.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Whether the cursor is on the newest snapshot.
    pub fn is_at_tail(&self) -> bool {
        self.cursor + 1 == self.snapshots.len()
    }

    /// All snapshots, oldest first.
    pub fn snapshots(&self) -> &[Snapshot] {
        &self.snapshots
    }
}
