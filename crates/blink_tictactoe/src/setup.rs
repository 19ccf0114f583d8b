//! Setup phase: collecting names and categories before the first move.
//!
//! A [`MatchSetup`] is the only place names and categories can change.
//! [`MatchSetup::start`] turns a complete setup into a [`GameState`], after
//! which both are fixed for the match.

use super::config::{Categories, SetupRules};
use super::notification::Notification;
use super::state::{GameState, PlayerProfile};
use super::types::Seat;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

/// Why setup could not proceed.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum SetupError {
    /// A name or category is still missing.
    #[display("Both players need a name and a category")]
    SetupIncomplete,

    /// The category is not in the catalogue.
    #[display("Unknown category {}", _0)]
    UnknownCategory(String),

    /// Both players picked the same category while that is disallowed.
    #[display("Both players picked {}; choose different categories", _0)]
    SharedCategory(String),
}

impl std::error::Error for SetupError {}

impl SetupError {
    /// Notification for the player.
    pub fn notification(&self) -> Notification {
        match self {
            SetupError::SetupIncomplete => Notification::setup_incomplete(),
            other => Notification::new(other.to_string(), super::notification::Severity::Error),
        }
    }
}

/// Names and categories gathered so far.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSetup {
    names: [Option<String>; 2],
    categories: [Option<String>; 2],
}

impl MatchSetup {
    /// Creates an empty setup.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a seat's display name. Surrounding whitespace is dropped and a
    /// blank name clears the entry.
    #[instrument(skip(self, name))]
    pub fn set_name(&mut self, seat: Seat, name: &str) {
        let name = name.trim();
        self.names[seat.index()] = (!name.is_empty()).then(|| name.to_string());
    }

    /// Picks a category for a seat.
    ///
    /// Whether both seats may share a category is checked at
    /// [`MatchSetup::start`], so players can swap picks freely until then.
    #[instrument(skip(self, categories))]
    pub fn select_category(
        &mut self,
        seat: Seat,
        category: &str,
        categories: &Categories,
    ) -> Result<Notification, SetupError> {
        if !categories.contains(category) {
            warn!(category, "Unknown category selected");
            return Err(SetupError::UnknownCategory(category.to_string()));
        }
        self.categories[seat.index()] = Some(category.to_string());
        info!(category, "Category selected");
        Ok(Notification::category_selected(seat, category))
    }

    /// Name chosen for a seat.
    pub fn name(&self, seat: Seat) -> Option<&str> {
        self.names[seat.index()].as_deref()
    }

    /// Category chosen for a seat.
    pub fn category(&self, seat: Seat) -> Option<&str> {
        self.categories[seat.index()].as_deref()
    }

    /// True once both seats have a name and a category.
    pub fn is_complete(&self) -> bool {
        self.names.iter().all(Option::is_some) && self.categories.iter().all(Option::is_some)
    }

    /// Starts the match.
    ///
    /// Categories are checked against `categories` again in case the
    /// catalogue changed since they were picked.
    #[instrument(skip(self, categories))]
    pub fn start(&self, categories: &Categories, rules: &SetupRules) -> Result<GameState, SetupError> {
        let profile = |seat: Seat| -> Result<PlayerProfile, SetupError> {
            let name = self.name(seat).ok_or(SetupError::SetupIncomplete)?;
            let category = self.category(seat).ok_or(SetupError::SetupIncomplete)?;
            if !categories.contains(category) {
                return Err(SetupError::UnknownCategory(category.to_string()));
            }
            Ok(PlayerProfile::new(name, category))
        };

        let one = profile(Seat::One)?;
        let two = profile(Seat::Two)?;

        if !rules.allow_shared_category && one.category() == two.category() {
            warn!(category = %one.category(), "Shared category rejected");
            return Err(SetupError::SharedCategory(one.category().clone()));
        }

        info!(
            player_one = %one.name(),
            player_two = %two.name(),
            "Match started"
        );
        Ok(GameState::new([one, two]))
    }
}
