//! Demo configuration
//!
//! Loaded from TOML or built in code; every field has a default so an empty
//! file is a valid configuration.

use crate::error::{DemoError, DemoResult};
use crate::scoped::read_file;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Which of the three progressively expanded demos to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    /// First-class functions and composition
    Basics,
    /// Adds the decorator and duplication comprehensions
    Decorators,
    /// Adds the scoped read and the container classes
    #[default]
    Full,
}

impl Stage {
    /// All stages, in teaching order
    pub const ALL: [Stage; 3] = [Stage::Basics, Stage::Decorators, Stage::Full];

    /// Name used in config files and on the command line
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Stage::Basics => "basics",
            Stage::Decorators => "decorators",
            Stage::Full => "full",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Stage {
    type Err = DemoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "basics" | "1" => Ok(Stage::Basics),
            "decorators" | "2" => Ok(Stage::Decorators),
            "full" | "3" => Ok(Stage::Full),
            other => Err(DemoError::Config(format!("unknown stage: '{other}'"))),
        }
    }
}

/// Demo configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Print `Debugged` before anything else and log at debug level
    pub debug: bool,
    /// Demo stage to run
    pub stage: Stage,
    /// File read by the scoped-read section, if any
    ///
    /// Only the [`Stage::Full`] demo has that section; earlier stages skip the
    /// file without opening it and log that at debug level.
    pub input_file: Option<PathBuf>,
    /// String passed through the decorator
    pub decorator_input: String,
    /// Item duplicated by the comprehension section
    pub duplicate_item: String,
    /// How many copies to make
    pub duplicate_count: i64,
}

impl DemoConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse from TOML text
    ///
    /// # Errors
    /// [`DemoError::Config`] if the text is not valid TOML for this struct.
    pub fn from_toml_str(text: &str) -> DemoResult<Self> {
        toml::from_str(text).map_err(|e| DemoError::Config(e.to_string()))
    }

    /// Read and parse a TOML file
    ///
    /// # Errors
    /// Read failures from [`read_file`], or [`DemoError::Config`].
    pub fn load(path: impl AsRef<Path>) -> DemoResult<Self> {
        let text = read_file(path)?;
        Self::from_toml_str(&text)
    }

    /// With debug flag
    #[inline]
    #[must_use]
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// With stage
    #[inline]
    #[must_use]
    pub fn with_stage(mut self, stage: Stage) -> Self {
        self.stage = stage;
        self
    }

    /// With input file
    #[must_use]
    pub fn with_input_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.input_file = Some(path.into());
        self
    }

    /// With duplication item and count
    #[must_use]
    pub fn with_duplicate(mut self, item: impl Into<String>, count: i64) -> Self {
        self.duplicate_item = item.into();
        self.duplicate_count = count;
        self
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            debug: false,
            stage: Stage::Full,
            input_file: None,
            decorator_input: "Look at this string.".to_string(),
            duplicate_item: "cat".to_string(),
            duplicate_count: 5,
        }
    }
}
