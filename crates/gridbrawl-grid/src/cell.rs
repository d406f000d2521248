//! Cell tokens.
//!
//! Every grid position holds exactly one [`Cell`]. Agents are referenced by
//! [`AgentId`] so the grid never owns agent state.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Unique identifier for an agent in an arena.
///
/// Ids are ordered; the turn scheduler walks agents in ascending id order.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AgentId(u32);

impl AgentId {
    /// Creates an id from its raw value.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Returns the raw value.
    #[must_use]
    pub const fn as_u32(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AgentId({})", self.0)
    }
}

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for AgentId {
    fn from(id: u32) -> Self {
        Self::new(id)
    }
}

/// Static obstacle kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Hazard {
    /// Blocks entry.
    Mound,
    /// Traps the entering agent for the rest of the game.
    Pit,
    /// Burns the entering agent; never blocks, never consumed.
    Flame,
}

impl Hazard {
    /// All hazard kinds, in sampling order.
    pub const ALL: [Hazard; 3] = [Hazard::Pit, Hazard::Mound, Hazard::Flame];

    /// Single-character board glyph.
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Self::Mound => 'M',
            Self::Pit => 'P',
            Self::Flame => 'F',
        }
    }
}

impl fmt::Display for Hazard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mound => write!(f, "Mound"),
            Self::Pit => write!(f, "Pit"),
            Self::Flame => write!(f, "Flame"),
        }
    }
}

/// The token occupying one grid position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Nothing here.
    #[default]
    Empty,
    /// A static obstacle.
    Hazard(Hazard),
    /// An agent's token.
    ///
    /// `alive` is false once the agent is dead or trapped in a pit: the token
    /// keeps its identity and still blocks movement, but it can no longer be
    /// damaged.
    Agent {
        /// Which agent this token belongs to.
        id: AgentId,
        /// Whether the token is a live, damageable combatant.
        alive: bool,
    },
}

impl Cell {
    /// Live agent token for `id`.
    #[must_use]
    pub const fn live(id: AgentId) -> Self {
        Self::Agent { id, alive: true }
    }

    /// Inert agent token for `id`.
    #[must_use]
    pub const fn wreck(id: AgentId) -> Self {
        Self::Agent { id, alive: false }
    }

    /// True for [`Cell::Empty`].
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Self::Empty)
    }

    /// True for any agent token, live or not.
    #[must_use]
    pub const fn is_agent(self) -> bool {
        matches!(self, Self::Agent { .. })
    }

    /// The agent id if this is any agent token.
    #[must_use]
    pub const fn agent(self) -> Option<AgentId> {
        match self {
            Self::Agent { id, .. } => Some(id),
            _ => None,
        }
    }

    /// The agent id if this is a live agent token.
    #[must_use]
    pub const fn live_agent(self) -> Option<AgentId> {
        match self {
            Self::Agent { id, alive: true } => Some(id),
            _ => None,
        }
    }

    /// The hazard kind if this is a hazard.
    #[must_use]
    pub const fn hazard(self) -> Option<Hazard> {
        match self {
            Self::Hazard(kind) => Some(kind),
            _ => None,
        }
    }
}
