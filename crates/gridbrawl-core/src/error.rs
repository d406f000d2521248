//! Error types for arena construction and agent registration.

use thiserror::Error;

use gridbrawl_grid::{Coord, GridError};

/// Errors raised while building an [`Arena`](crate::arena::Arena).
///
/// Once an arena exists, nothing during play returns an error: bad requests
/// from agents are silently ignored.
#[derive(Debug, Error)]
pub enum ArenaError {
    /// The board dimensions were rejected.
    #[error(transparent)]
    Grid(#[from] GridError),

    /// More obstacles than interior cells.
    #[error("{obstacles} obstacles do not fit in {interior} interior cells")]
    TooManyObstacles {
        /// Obstacles requested.
        obstacles: usize,
        /// Interior cells available.
        interior: usize,
    },

    /// Obstacles plus agents must leave at least one cell free.
    #[error("{occupants} occupants leave no free cell on a board of {cells}")]
    Overcrowded {
        /// Obstacles plus agents.
        occupants: usize,
        /// Total cells.
        cells: usize,
    },

    /// More agents than distinct map symbols.
    #[error("{count} agents exceed the limit of {max}")]
    TooManyAgents {
        /// Agents supplied.
        count: usize,
        /// Maximum supported.
        max: usize,
    },

    /// A fixed layout put an agent off the board or on an occupied cell.
    #[error("cannot place agent at {at}")]
    InvalidPlacement {
        /// The rejected cell.
        at: Coord,
    },

    /// Random placement ran out of free cells.
    #[error("no free cell left while placing items")]
    PlacementExhausted,
}

/// Errors raised by the [`AgentRegistry`](crate::registry::AgentRegistry).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// A factory is already registered under this name.
    #[error("agent kind '{0}' is already registered")]
    Duplicate(String),

    /// No factory is registered under this name.
    #[error("unknown agent kind '{0}'")]
    Unknown(String),
}
