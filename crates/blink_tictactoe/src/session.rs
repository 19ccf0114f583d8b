//! Event-driven session controller.
//!
//! A [`Session`] owns everything one table needs: the category catalogue,
//! setup rules, the random source and the current phase. Front ends feed it
//! [`Event`]s one at a time and render what comes back.

use super::action::MoveError;
use super::config::{Categories, SetupRules};
use super::engine::{MoveReport, apply_move};
use super::history::{HistoryLog, Snapshot};
use super::notification::Notification;
use super::setup::{MatchSetup, SetupError};
use super::state::GameState;
use super::types::Seat;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Player input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Event {
    /// Set a seat's display name.
    SetName {
        /// Seat being named.
        seat: Seat,
        /// New name.
        name: String,
    },
    /// Pick a seat's category.
    SelectCategory {
        /// Seat choosing.
        seat: Seat,
        /// Category name.
        category: String,
    },
    /// Leave setup and begin the match.
    Start,
    /// Place a piece at a board index.
    CellClick(usize),
    /// Clear the board for a new game.
    Reset,
    /// Show the previous snapshot.
    Undo,
    /// Show the next snapshot.
    Redo,
}

/// Why an event was refused.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::From)]
pub enum SessionError {
    /// Setup problem.
    #[display("{}", _0)]
    Setup(SetupError),

    /// Move rejected.
    #[display("{}", _0)]
    Move(MoveError),

    /// Names and categories are fixed once the match begins.
    #[display("The match has already started")]
    AlreadyStarted,
}

impl std::error::Error for SessionError {}

impl SessionError {
    /// Notification to show the player, if any.
    pub fn notification(&self) -> Option<Notification> {
        match self {
            SessionError::Setup(err) => Some(err.notification()),
            SessionError::Move(err) => Notification::for_rejection(err),
            SessionError::AlreadyStarted => None,
        }
    }
}

#[derive(Debug, Clone)]
enum Phase {
    Setup(MatchSetup),
    Active {
        state: GameState,
        history: HistoryLog,
    },
}

/// One table: setup, then a match that can be reset any number of times.
#[derive(Debug)]
pub struct Session<R> {
    categories: Categories,
    rules: SetupRules,
    rng: R,
    phase: Phase,
}

impl<R: Rng> Session<R> {
    /// Creates a session in the setup phase.
    #[instrument(skip(categories, rng))]
    pub fn new(categories: Categories, rules: SetupRules, rng: R) -> Self {
        Self {
            categories,
            rules,
            rng,
            phase: Phase::Setup(MatchSetup::new()),
        }
    }

    /// Processes one event to completion.
    #[instrument(skip(self))]
    pub fn handle(&mut self, event: Event) -> Result<Vec<Notification>, SessionError> {
        match event {
            Event::SetName { seat, name } => {
                self.set_name(seat, &name)?;
                Ok(Vec::new())
            }
            Event::SelectCategory { seat, category } => {
                Ok(vec![self.select_category(seat, &category)?])
            }
            Event::Start => {
                self.start()?;
                Ok(Vec::new())
            }
            Event::CellClick(index) => self.click(index).map(|(_, notes)| notes),
            Event::Reset => {
                self.reset();
                Ok(Vec::new())
            }
            Event::Undo => {
                self.undo();
                Ok(Vec::new())
            }
            Event::Redo => {
                self.redo();
                Ok(Vec::new())
            }
        }
    }

    /// Sets a seat's name during setup.
    pub fn set_name(&mut self, seat: Seat, name: &str) -> Result<(), SessionError> {
        self.setup_mut()?.set_name(seat, name);
        Ok(())
    }

    /// Picks a seat's category during setup.
    pub fn select_category(&mut self, seat: Seat, category: &str) -> Result<Notification, SessionError> {
        let Phase::Setup(setup) = &mut self.phase else {
            return Err(SessionError::AlreadyStarted);
        };
        Ok(setup.select_category(seat, category, &self.categories)?)
    }

    /// Moves from setup to an active match.
    #[instrument(skip(self))]
    pub fn start(&mut self) -> Result<(), SessionError> {
        let Phase::Setup(setup) = &self.phase else {
            return Err(SessionError::AlreadyStarted);
        };
        let state = setup.start(&self.categories, &self.rules)?;
        let history = HistoryLog::new(state.snapshot());
        self.phase = Phase::Active { state, history };
        Ok(())
    }

    /// Places a piece for the seat to move.
    ///
    /// On success the new state is committed, its snapshot appended to the
    /// history, and any vanish or win notifications returned.
    #[instrument(skip(self))]
    pub fn click(&mut self, index: usize) -> Result<(MoveReport, Vec<Notification>), SessionError> {
        let Phase::Active { state, history } = &mut self.phase else {
            warn!("Move attempted before setup finished");
            return Err(MoveError::SetupIncomplete.into());
        };

        let (next, report) = apply_move(state, index, &self.categories, &mut self.rng).map_err(|err| {
            debug!(%err, "Move rejected");
            SessionError::from(err)
        })?;
        *state = next;
        history.record(state.snapshot());

        let name = state.player(report.seat).name();
        let mut notes = Vec::new();
        if report.vanished.is_some() {
            notes.push(Notification::vanished(name));
        }
        if report.outcome.and_then(|o| o.winner()).is_some() {
            info!(winner = %name, "Game won");
            notes.push(Notification::won(name));
        }
        Ok((report, notes))
    }

    /// Clears the board, keeping players and scores. No-op during setup.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        if let Phase::Active { state, history } = &mut self.phase {
            state.reset();
            history.record(state.snapshot());
        }
    }

    /// Steps the display back one snapshot. Returns false if nothing moved.
    pub fn undo(&mut self) -> bool {
        match &mut self.phase {
            Phase::Active { history, .. } => history.undo(),
            Phase::Setup(_) => false,
        }
    }

    /// Steps the display forward one snapshot. Returns false if nothing moved.
    pub fn redo(&mut self) -> bool {
        match &mut self.phase {
            Phase::Active { history, .. } => history.redo(),
            Phase::Setup(_) => false,
        }
    }

    fn setup_mut(&mut self) -> Result<&mut MatchSetup, SessionError> {
        match &mut self.phase {
            Phase::Setup(setup) => Ok(setup),
            Phase::Active { .. } => Err(SessionError::AlreadyStarted),
        }
    }
}

impl<R> Session<R> {
    /// Category catalogue.
    pub fn categories(&self) -> &Categories {
        &self.categories
    }

    /// Setup rules.
    pub fn rules(&self) -> &SetupRules {
        &self.rules
    }

    /// Setup in progress, if the match has not started.
    pub fn setup(&self) -> Option<&MatchSetup> {
        match &self.phase {
            Phase::Setup(setup) => Some(setup),
            Phase::Active { .. } => None,
        }
    }

    /// True once the match has started.
    pub fn is_active(&self) -> bool {
        matches!(self.phase, Phase::Active { .. })
    }

    /// Authoritative rules state.
    pub fn state(&self) -> Option<&GameState> {
        match &self.phase {
            Phase::Active { state, .. } => Some(state),
            Phase::Setup(_) => None,
        }
    }

    /// Snapshot log.
    pub fn history(&self) -> Option<&HistoryLog> {
        match &self.phase {
            Phase::Active { history, .. } => Some(history),
            Phase::Setup(_) => None,
        }
    }

    /// Snapshot under the history cursor; what the board view should show.
    pub fn displayed(&self) -> Option<&Snapshot> {
        self.history().map(HistoryLog::current)
    }
}
