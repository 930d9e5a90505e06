//! Game configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tictactoe_engine::{Difficulty, TicTacToeBot};
use tracing::{debug, info, instrument};

/// Settings for one game against the computer.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Opponent strength.
    #[serde(default)]
    difficulty: Difficulty,

    /// Seed for reproducible random moves. Entropy from the OS when unset.
    #[serde(default)]
    seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(Difficulty::default(), None)
    }
}

impl GameConfig {
    /// Creates a new game configuration.
    #[instrument]
    pub fn new(difficulty: Difficulty, seed: Option<u64>) -> Self {
        Self { difficulty, seed }
    }

    /// Reads `difficulty` and `seed` from a TOML game config.
    ///
    /// Missing keys take their defaults; an unreadable file, bad TOML or a
    /// difficulty other than easy, medium or hard is an error naming the file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::new(path, format!("cannot read game config: {}", e)))?;

        let config: Self = toml::from_str(&content).map_err(|e| {
            ConfigError::new(
                path,
                format!(
                    "invalid game config (difficulty must be easy, medium or hard, seed an unsigned integer): {}",
                    e
                ),
            )
        })?;

        debug!(difficulty = %config.difficulty, seed = ?config.seed, "Game config read");
        Ok(config)
    }

    /// Loads the file if it exists, otherwise falls back to defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Replaces settings given on the command line.
    #[instrument(skip(self))]
    pub fn with_overrides(mut self, difficulty: Option<Difficulty>, seed: Option<u64>) -> Self {
        if let Some(difficulty) = difficulty {
            self.difficulty = difficulty;
        }
        if seed.is_some() {
            self.seed = seed;
        }
        self
    }

    /// Starts a game with these settings.
    #[instrument(skip(self), fields(difficulty = %self.difficulty, seed = ?self.seed))]
    pub fn new_game(&self) -> TicTacToeBot {
        match self.seed {
            Some(seed) => TicTacToeBot::with_seed(self.difficulty, seed),
            None => TicTacToeBot::new(self.difficulty),
        }
    }
}

/// A game config file that could not be used.
#[derive(Debug, Clone, Display, Error)]
#[display("{}: {} (raised at {}:{})", path.display(), message, file, line)]
pub struct ConfigError {
    /// File that was being loaded.
    pub path: PathBuf,
    /// What was wrong with it.
    pub message: String,
    /// Line of the code that raised the error.
    pub line: u32,
    /// Source file of the code that raised the error.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates an error for `path`, recording where it was raised.
    #[track_caller]
    #[instrument(skip(path, message), fields(path = %path.display()))]
    pub fn new(path: &Path, message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            path: path.to_path_buf(),
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
