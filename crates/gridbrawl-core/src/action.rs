//! Actions an agent commits to once per turn.
//!
//! After its radar sweep, an agent either fires or moves. The scheduler wraps
//! the choice in an [`ActionEnvelope`] and routes it to whichever resolver
//! handles that [`ActionKind`].
//!
//! # Example
//!
//! ```
//! use gridbrawl_core::action::{Action, ActionEnvelope, ActionKind};
//! use gridbrawl_core::agent::{AgentId, Weapon};
//! use gridbrawl_grid::Coord;
//!
//! let envelope = ActionEnvelope::new(
//!     AgentId::new(3),
//!     7,
//!     Action::Shoot { weapon: Weapon::Hammer, target: Coord::new(2, 2) },
//! );
//! assert_eq!(envelope.kind(), ActionKind::Shoot);
//! ```

use serde::{Deserialize, Serialize};

use gridbrawl_grid::Coord;

use crate::agent::{AgentId, Weapon};

/// Routing key for resolvers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionKind {
    /// Weapon fire.
    Shoot,
    /// Stepwise movement.
    Move,
}

/// The one thing an agent does with its turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    /// Fire `weapon` at `target`.
    Shoot {
        /// Weapon fired; always the shooter's own.
        weapon: Weapon,
        /// Aim point, not necessarily on the board.
        target: Coord,
    },
    /// Walk up to `distance` cells in compass `direction` (1–8).
    Move {
        /// Raw direction code as the agent returned it.
        direction: u8,
        /// Requested number of unit steps.
        distance: u32,
    },
}

impl Action {
    /// Routing key for this action.
    #[must_use]
    pub const fn kind(&self) -> ActionKind {
        match self {
            Self::Shoot { .. } => ActionKind::Shoot,
            Self::Move { .. } => ActionKind::Move,
        }
    }
}

/// An action together with who took it and when.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionEnvelope {
    actor: AgentId,
    round: u64,
    action: Action,
}

impl ActionEnvelope {
    /// Wrap an action.
    #[must_use]
    pub const fn new(actor: AgentId, round: u64, action: Action) -> Self {
        Self {
            actor,
            round,
            action,
        }
    }

    /// The acting agent.
    #[must_use]
    pub const fn actor(&self) -> AgentId {
        self.actor
    }

    /// Round in which the action was taken (1-based).
    #[must_use]
    pub const fn round(&self) -> u64 {
        self.round
    }

    /// The wrapped action.
    #[must_use]
    pub const fn action(&self) -> &Action {
        &self.action
    }

    /// Routing key.
    #[must_use]
    pub const fn kind(&self) -> ActionKind {
        self.action.kind()
    }
}
