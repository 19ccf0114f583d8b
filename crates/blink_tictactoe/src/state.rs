//! Authoritative game state.

use super::history::Snapshot;
use super::position::Position;
use super::queue::PlayerQueue;
use super::rules::Line;
use super::turn::acting_seat;
use super::types::{Board, Seat};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

/// A player's display name and chosen category, fixed for the match.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize, derive_new::new)]
pub struct PlayerProfile {
    /// Display name.
    #[new(into)]
    name: String,
    /// Category the player draws symbols from.
    #[new(into)]
    category: String,
}

impl PlayerProfile {
    /// True when both the name and the category are non-blank.
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty() && !self.category.trim().is_empty()
    }
}

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// A seat completed a line.
    Winner(Seat),
    /// Full board with no winner. Unreachable under the vanishing rule.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Seat> {
        match self {
            Outcome::Winner(seat) => Some(*seat),
            Outcome::Draw => None,
        }
    }
}

/// Wins per seat and draws, carried across resets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    wins: [u32; 2],
    draws: u32,
}

impl Scoreboard {
    /// Wins for a seat.
    pub fn wins(&self, seat: Seat) -> u32 {
        self.wins[seat.index()]
    }

    /// Drawn games.
    pub fn draws(&self) -> u32 {
        self.draws
    }

    pub(crate) fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Winner(seat) => self.wins[seat.index()] += 1,
            Outcome::Draw => self.draws += 1,
        }
    }
}

/// Complete rules state of a match.
///
/// Only the move engine and [`GameState::reset`] change it. Undo and redo
/// never touch it; they move a cursor over [`Snapshot`]s instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub(crate) players: [PlayerProfile; 2],
    pub(crate) board: Board,
    pub(crate) queues: [PlayerQueue; 2],
    pub(crate) turn: u32,
    pub(crate) outcome: Option<Outcome>,
    pub(crate) winning_line: Option<Line>,
    pub(crate) scores: Scoreboard,
}

impl GameState {
    /// Creates a fresh match for two players.
    #[instrument(skip(players))]
    pub fn new(players: [PlayerProfile; 2]) -> Self {
        Self {
            players,
            board: Board::new(),
            queues: Default::default(),
            turn: 0,
            outcome: None,
            winning_line: None,
            scores: Scoreboard::default(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns a seat's queue.
    pub fn queue(&self, seat: Seat) -> &PlayerQueue {
        &self.queues[seat.index()]
    }

    /// Returns a seat's profile.
    pub fn player(&self, seat: Seat) -> &PlayerProfile {
        &self.players[seat.index()]
    }

    /// Turn counter.
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// Seat whose move it is.
    pub fn to_move(&self) -> Seat {
        acting_seat(self.turn)
    }

    /// Outcome, once the game is over.
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Winner, if any.
    pub fn winner(&self) -> Option<Seat> {
        self.outcome.and_then(|o| o.winner())
    }

    /// Line that won the game.
    pub fn winning_line(&self) -> Option<Line> {
        self.winning_line
    }

    /// Cumulative scores.
    pub fn scores(&self) -> &Scoreboard {
        &self.scores
    }

    /// True once a winner or draw is recorded.
    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// Owner of the piece at `pos`.
    pub fn owner(&self, pos: Position) -> Option<Seat> {
        Seat::ALL.into_iter().find(|&seat| self.queue(seat).contains(pos))
    }

    /// Display capture of the board and winning line.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::new(self.board.clone(), self.winning_line)
    }

    /// One-line status: whose turn it is, or how the game ended.
    pub fn status_line(&self) -> String {
        match self.outcome {
            None => format!("{}'s turn", self.player(self.to_move()).name()),
            Some(Outcome::Winner(seat)) => format!("{} Wins!", self.player(seat).name()),
            Some(Outcome::Draw) => "Draw".to_string(),
        }
    }

    /// Scoreboard lines, one per seat.
    pub fn score_lines(&self) -> [String; 2] {
        Seat::ALL.map(|seat| format!("{}: {}", self.player(seat).name(), self.scores.wins(seat)))
    }

    /// Clears the board for a new game, keeping players and scores.
    #[instrument(skip(self), fields(turn = self.turn))]
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.queues = Default::default();
        self.turn = 0;
        self.outcome = None;
        self.winning_line = None;
        info!("Board reset");
    }
}
