//! Settings file: symbol categories and setup rules.

use blink_tictactoe::{Categories, Category, SetupRules};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// One `[[category]]` table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryEntry {
    /// Category label.
    pub name: String,
    /// Candidate symbols.
    pub symbols: Vec<String>,
}

/// Contents of a settings file.
///
/// ```toml
/// allow_shared_category = false
///
/// [[category]]
/// name = "Shapes"
/// symbols = ["■", "●", "▲"]
/// ```
///
/// With no `[[category]]` tables the built-in categories are used.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Whether both players may choose the same category.
    #[serde(default = "default_allow_shared_category")]
    pub allow_shared_category: bool,

    /// Custom categories, replacing the built-in ones when present.
    #[serde(default, rename = "category")]
    pub categories: Vec<CategoryEntry>,
}

#[instrument]
fn default_allow_shared_category() -> bool {
    SetupRules::default().allow_shared_category
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            allow_shared_category: default_allow_shared_category(),
            categories: Vec::new(),
        }
    }
}

impl Settings {
    /// Loads settings from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading settings from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read settings file: {}", e)))?;
        let settings = Self::from_toml_str(&content)?;
        info!(
            categories = settings.categories.len(),
            allow_shared_category = settings.allow_shared_category,
            "Settings loaded"
        );
        Ok(settings)
    }

    /// Parses settings from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::new(format!("Failed to parse settings: {}", e)))
    }

    /// Loads from `path`, or returns defaults when no path is given.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Validated category catalogue.
    #[instrument(skip(self))]
    pub fn catalogue(&self) -> Result<Categories, ConfigError> {
        if self.categories.is_empty() {
            return Ok(Categories::builtin());
        }
        let categories = self
            .categories
            .iter()
            .map(|entry| Category::new(entry.name.clone(), entry.symbols.iter().map(String::as_str)))
            .collect();
        Categories::new(categories).map_err(|e| ConfigError::new(format!("Invalid categories: {}", e)))
    }

    /// Setup rules.
    pub fn rules(&self) -> SetupRules {
        SetupRules {
            allow_shared_category: self.allow_shared_category,
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new config error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
