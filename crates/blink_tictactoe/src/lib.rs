//! Blink Tac Toe rules engine.
//!
//! Tic-tac-toe on a 3x3 board where each player's pieces are random symbols
//! from a chosen category and nobody may hold more than three pieces at once:
//! placing a fourth makes the oldest vanish.
//!
//! # Architecture
//!
//! - **Config**: [`Categories`] maps category names to symbol sets
//! - **PlayerQueue**: per-seat FIFO backing the vanishing rule
//! - **Engine**: [`apply_move`] validates and commits one move atomically
//! - **Rules**: [`check_win`] over the mover's queue, [`is_full`] for draws
//! - **Turns**: [`acting_seat`] from the turn counter's parity
//! - **History**: [`HistoryLog`] of display snapshots with undo/redo
//! - **Session**: [`Session`] drives setup and play from input [`Event`]s
//!
//! # Example
//!
//! ```
//! use blink_tictactoe::{Categories, Event, Seat, Session, SetupRules};
//! use rand::SeedableRng;
//!
//! # fn main() -> Result<(), blink_tictactoe::SessionError> {
//! let rng = rand::rngs::StdRng::seed_from_u64(1);
//! let mut session = Session::new(Categories::builtin(), SetupRules::default(), rng);
//! session.set_name(Seat::One, "Ada")?;
//! session.set_name(Seat::Two, "Bo")?;
//! session.select_category(Seat::One, "Animals")?;
//! session.select_category(Seat::Two, "Food")?;
//! session.start()?;
//!
//! session.handle(Event::CellClick(4))?;
//! assert_eq!(session.state().map(|s| s.turn()), Some(1));
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod config;
pub mod contracts;
mod engine;
mod history;
pub mod invariants;
mod notification;
mod position;
mod queue;
pub mod rules;
mod session;
mod setup;
mod state;
mod turn;
mod types;

pub use action::{Move, MoveError};
pub use config::{CatalogError, Categories, Category, SetupRules};
pub use engine::{MoveReport, apply_move, replay};
pub use history::{HistoryLog, Snapshot};
pub use notification::{Notification, Severity};
pub use position::Position;
pub use queue::PlayerQueue;
pub use rules::{LINES, Line, MAX_OCCUPIED, check_win, is_full};
pub use session::{Event, Session, SessionError};
pub use setup::{MatchSetup, SetupError};
pub use state::{GameState, Outcome, PlayerProfile, Scoreboard};
pub use turn::{acting_seat, advance};
pub use types::{Board, Seat, Square, Symbol};
