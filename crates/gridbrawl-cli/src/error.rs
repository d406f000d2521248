//! Failures that stop a game before it starts.

use gridbrawl_core::{ArenaError, RegistryError};
use thiserror::Error;

use crate::config::SetupError;

/// Why a game or batch could not run.
#[derive(Debug, Error)]
pub enum RunError {
    /// The setup was rejected.
    #[error(transparent)]
    Setup(#[from] SetupError),

    /// A roster entry could not be built.
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// The arena refused the board or the roster.
    #[error(transparent)]
    Arena(#[from] ArenaError),
}
