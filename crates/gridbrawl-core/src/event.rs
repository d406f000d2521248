//! Things that happened during a round.
//!
//! The arena records an [`ArenaEvent`] for every visible effect so callers can
//! replay or summarize a round without diffing boards. Events never feed back
//! into the simulation.

use serde::{Deserialize, Serialize};

use gridbrawl_grid::Coord;

use crate::agent::{AgentId, Weapon};

/// Why a shot produced no effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FizzleReason {
    /// The shooter is stuck in a pit.
    Trapped,
    /// Grenade carrier with no charges left.
    NoCharges,
    /// Hammer aimed at a cell that is not adjacent or not on the board.
    OutOfReach,
}

/// One observable effect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ArenaEvent {
    /// An agent swept its radar.
    RadarSwept {
        /// Who looked.
        agent: AgentId,
        /// Requested direction code.
        direction: u8,
        /// Number of contacts delivered.
        contacts: usize,
    },
    /// A shot went off and touched `cells` cells.
    ShotFired {
        /// Who fired.
        shooter: AgentId,
        /// What was fired.
        weapon: Weapon,
        /// Aim point.
        target: Coord,
        /// Cells in the trajectory, duplicates included.
        cells: usize,
    },
    /// A shot request was refused.
    ShotFizzled {
        /// Who tried to fire.
        shooter: AgentId,
        /// What they tried to fire.
        weapon: Weapon,
        /// Why nothing happened.
        reason: FizzleReason,
    },
    /// A live agent took weapon damage.
    Damaged {
        /// Who was hit.
        agent: AgentId,
        /// Where.
        at: Coord,
        /// Rolled damage before armor.
        rolled: i32,
        /// Damage actually subtracted.
        dealt: i32,
    },
    /// An agent walked onto a flame tile.
    Burned {
        /// Who stepped in.
        agent: AgentId,
        /// The flame tile.
        at: Coord,
        /// Damage taken; armor does not apply.
        amount: i32,
    },
    /// An agent's health reached zero.
    Destroyed {
        /// Who died.
        agent: AgentId,
        /// Where the wreck lies.
        at: Coord,
    },
    /// An agent finished a move somewhere new.
    Moved {
        /// Who moved.
        agent: AgentId,
        /// Start cell.
        from: Coord,
        /// End cell.
        to: Coord,
    },
    /// An agent fell into a pit.
    Trapped {
        /// Who fell.
        agent: AgentId,
        /// The pit.
        at: Coord,
    },
}

impl ArenaEvent {
    /// The agent this event is about.
    #[must_use]
    pub const fn agent(&self) -> AgentId {
        match self {
            Self::RadarSwept { agent, .. }
            | Self::Damaged { agent, .. }
            | Self::Burned { agent, .. }
            | Self::Destroyed { agent, .. }
            | Self::Moved { agent, .. }
            | Self::Trapped { agent, .. } => *agent,
            Self::ShotFired { shooter, .. } | Self::ShotFizzled { shooter, .. } => *shooter,
        }
    }
}
