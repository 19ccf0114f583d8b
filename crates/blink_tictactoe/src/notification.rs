//! User-facing notifications emitted by the engine.
//!
//! The engine only produces these; showing them is the front end's job.

use super::action::MoveError;
use super::types::Seat;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// How prominent a notification is.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Severity {
    /// Something happened that the player may want to know.
    Info,
    /// The player's action was refused.
    Warning,
    /// The player must fix something before continuing.
    Error,
    /// Something good happened.
    Success,
}

/// A message for the player.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize, derive_new::new)]
pub struct Notification {
    /// Text to show.
    #[new(into)]
    message: String,
    /// Severity level.
    severity: Severity,
}

impl Notification {
    /// A player's oldest piece was removed.
    pub fn vanished(name: &str) -> Self {
        Self::new(format!("{}'s oldest emoji vanished!", name), Severity::Info)
    }

    /// A placement into the vanishing cell was refused.
    pub fn conflicting_vanish() -> Self {
        Self::new(
            "Cannot place emoji on the same spot where one just vanished!",
            Severity::Warning,
        )
    }

    /// Setup is missing a name or category.
    pub fn setup_incomplete() -> Self {
        Self::new(
            "Please enter names and choose categories for both players.",
            Severity::Error,
        )
    }

    /// A player won.
    pub fn won(name: &str) -> Self {
        Self::new(format!("{} wins the game!", name), Severity::Success)
    }

    /// A player picked a category.
    pub fn category_selected(seat: Seat, category: &str) -> Self {
        Self::new(
            format!("Player {} selected {} emojis!", seat.number(), category),
            Severity::Success,
        )
    }

    /// Notification for a rejected move, if the player should see one.
    ///
    /// Clicks on occupied cells or on a finished board are ignored silently.
    pub fn for_rejection(err: &MoveError) -> Option<Self> {
        match err {
            MoveError::ConflictingVanish(_) => Some(Self::conflicting_vanish()),
            MoveError::SetupIncomplete => Some(Self::setup_incomplete()),
            MoveError::CellOccupied(_) | MoveError::GameAlreadyOver | MoveError::OutOfBounds(_) => {
                None
            }
            MoveError::UnknownCategory(_)
            | MoveError::EmptyCategory(_)
            | MoveError::InvariantViolation(_) => Some(Self::new(err.to_string(), Severity::Error)),
        }
    }
}

impl std::fmt::Display for Notification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.severity, self.message)
    }
}
