//! Symbol categories and setup rules.
//!
//! The catalogue is built once before any match and is read-only from then
//! on. It is handed to the move engine explicitly rather than living in a
//! global.

use super::types::Symbol;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// A named set of candidate symbols.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Category {
    /// Category label, e.g. "Animals".
    name: String,
    /// Symbols a player of this category draws from. Never empty once validated.
    symbols: Vec<Symbol>,
}

impl Category {
    /// Creates a category.
    pub fn new(name: impl Into<String>, symbols: impl IntoIterator<Item = impl Into<Symbol>>) -> Self {
        Self {
            name: name.into(),
            symbols: symbols.into_iter().map(Into::into).collect(),
        }
    }
}

/// Errors found while validating a category catalogue.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum CatalogError {
    /// No categories at all.
    #[display("Category catalogue is empty")]
    Empty,

    /// A category has a blank name.
    #[display("Category names must not be blank")]
    BlankName,

    /// Two categories share a name.
    #[display("Category {} is defined twice", _0)]
    Duplicate(String),

    /// A category has no symbols.
    #[display("Category {} has no symbols", _0)]
    NoSymbols(String),
}

impl std::error::Error for CatalogError {}

/// Ordered, validated category catalogue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Categories {
    categories: Vec<Category>,
}

impl Categories {
    /// Validates and wraps a list of categories, keeping their order.
    #[instrument(skip(categories))]
    pub fn new(categories: Vec<Category>) -> Result<Self, CatalogError> {
        if categories.is_empty() {
            return Err(CatalogError::Empty);
        }

        for (i, category) in categories.iter().enumerate() {
            if category.name.trim().is_empty() {
                return Err(CatalogError::BlankName);
            }
            if category.symbols.is_empty() {
                return Err(CatalogError::NoSymbols(category.name.clone()));
            }
            if categories[..i].iter().any(|c| c.name == category.name) {
                return Err(CatalogError::Duplicate(category.name.clone()));
            }
        }

        debug!(count = categories.len(), "Category catalogue validated");
        Ok(Self { categories })
    }

    /// The six stock categories.
    pub fn builtin() -> Self {
        Self {
            categories: vec![
                Category::new("Animals", ["🐶", "🐱", "🐵", "🐰", "🦊", "🐼"]),
                Category::new("Food", ["🍕", "🍟", "🍔", "🍩", "🍦", "🍫"]),
                Category::new("Sports", ["⚽️", "🏀", "🏈", "🎾", "🏐", "⚾️"]),
                Category::new("Plants", ["🌵", "🌴", "🌲", "🌸", "🌹", "🍄"]),
                Category::new("Weather", ["☀️", "☁️", "⛈️", "❄️", "🌈", "⭐"]),
                Category::new("Vehicles", ["🚗", "🚕", "🚂", "✈️", "🚁", "🚢"]),
            ],
        }
    }

    /// Looks up a category by exact name.
    pub fn get(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name == name)
    }

    /// Symbols of a category.
    pub fn symbols(&self, name: &str) -> Option<&[Symbol]> {
        self.get(name).map(|c| c.symbols.as_slice())
    }

    /// True if the category exists.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Category names in catalogue order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(|c| c.name.as_str())
    }

    /// All categories in catalogue order.
    pub fn iter(&self) -> impl Iterator<Item = &Category> {
        self.categories.iter()
    }

    /// Number of categories.
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// Always false for a validated catalogue.
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

impl Default for Categories {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Rules applied when players pick their categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetupRules {
    /// Whether both players may draw from the same category.
    pub allow_shared_category: bool,
}

impl Default for SetupRules {
    fn default() -> Self {
        Self {
            allow_shared_category: true,
        }
    }
}
