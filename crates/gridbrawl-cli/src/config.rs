//! Game setup: board size, obstacle count, round cap, seed and roster.
//!
//! A [`GameSetup`] is read from JSON (every field optional) and then patched
//! by command-line flags before [`GameSetup::validate`] runs.

use std::path::{Path, PathBuf};

use gridbrawl_core::battlefield::AGENT_SYMBOLS;
use gridbrawl_core::AgentRegistry;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Smallest accepted board side.
pub const MIN_SIDE: usize = 10;

/// Fewest agents that make a game.
pub const MIN_ROSTER: usize = 2;

/// Everything needed to start one game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameSetup {
    /// Board rows.
    pub height: usize,
    /// Board columns.
    pub width: usize,
    /// Hazards scattered on interior cells.
    pub obstacles: usize,
    /// Round cap; the game is a draw if more than one agent survives it.
    pub max_rounds: u64,
    /// Seed for placement, damage rolls and per-agent strategy seeds.
    pub seed: u64,
    /// Strategy names, one per agent, in seating order.
    pub roster: Vec<String>,
}

impl Default for GameSetup {
    fn default() -> Self {
        Self {
            height: 20,
            width: 20,
            obstacles: 20,
            max_rounds: 100,
            seed: 0,
            roster: vec!["sweeper".into(), "brawler".into(), "pyro".into()],
        }
    }
}

/// Why a setup was rejected.
#[derive(Debug, Error)]
pub enum SetupError {
    /// Board side below [`MIN_SIDE`].
    #[error("{axis} must be at least {MIN_SIDE}, got {value}")]
    TooSmall {
        /// "height" or "width".
        axis: &'static str,
        /// Value supplied.
        value: usize,
    },

    /// Obstacles would cover the whole board.
    #[error("obstacle count {obstacles} must be below the cell count {cells}")]
    TooManyObstacles {
        /// Requested obstacles.
        obstacles: usize,
        /// Cells on the board.
        cells: usize,
    },

    /// A game needs at least one round.
    #[error("max_rounds must be greater than zero")]
    NoRounds,

    /// Roster size outside `MIN_ROSTER..=12`.
    #[error("roster needs between {MIN_ROSTER} and {max} agents, got {count}")]
    RosterSize {
        /// Entries supplied.
        count: usize,
        /// Map symbols available.
        max: usize,
    },

    /// A roster entry names no registered strategy.
    #[error("unknown strategy '{0}'")]
    UnknownStrategy(String),

    /// The config file could not be read.
    #[error("cannot read {path}")]
    Io {
        /// File that failed.
        path: PathBuf,
        /// Underlying failure.
        #[source]
        source: std::io::Error,
    },

    /// The config file is not a valid setup.
    #[error("invalid setup: {0}")]
    Parse(#[from] serde_json::Error),
}

impl GameSetup {
    /// Parse a setup from JSON text. Missing fields keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`SetupError::Parse`] on malformed JSON or unknown fields.
    pub fn from_json(text: &str) -> Result<Self, SetupError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Read a setup from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`SetupError::Io`] if the file is unreadable and
    /// [`SetupError::Parse`] if its content is not a setup.
    pub fn load(path: &Path) -> Result<Self, SetupError> {
        let text = std::fs::read_to_string(path).map_err(|source| SetupError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }

    /// Check the setup against the board limits and the registered kinds.
    ///
    /// # Errors
    ///
    /// Returns the first violated rule.
    pub fn validate(&self, registry: &AgentRegistry) -> Result<(), SetupError> {
        if self.height < MIN_SIDE {
            return Err(SetupError::TooSmall {
                axis: "height",
                value: self.height,
            });
        }
        if self.width < MIN_SIDE {
            return Err(SetupError::TooSmall {
                axis: "width",
                value: self.width,
            });
        }
        let cells = self.height * self.width;
        if self.obstacles >= cells {
            return Err(SetupError::TooManyObstacles {
                obstacles: self.obstacles,
                cells,
            });
        }
        if self.max_rounds == 0 {
            return Err(SetupError::NoRounds);
        }
        if !(MIN_ROSTER..=AGENT_SYMBOLS.len()).contains(&self.roster.len()) {
            return Err(SetupError::RosterSize {
                count: self.roster.len(),
                max: AGENT_SYMBOLS.len(),
            });
        }
        if let Some(unknown) = self.roster.iter().find(|name| !registry.contains(name)) {
            return Err(SetupError::UnknownStrategy(unknown.clone()));
        }
        Ok(())
    }

    /// Seed handed to the factory of roster entry `index`.
    ///
    /// Distinct per entry so two copies of one strategy don't mirror each other.
    #[must_use]
    pub fn agent_seed(&self, index: usize) -> u64 {
        const GOLDEN: u64 = 0x9E37_79B9_7F4A_7C15;
        self.seed
            .wrapping_add((index as u64).wrapping_add(1).wrapping_mul(GOLDEN))
    }
}
