//! Agent capability interface.
//!
//! Every combatant implements [`Agent`]. The arena drives agents only through
//! this trait: it asks for decisions (radar, shot, move) and reports effects
//! back (location, damage, armor loss, disabled movement). It never reaches
//! into an implementation's private state.
//!
//! # Architecture
//!
//! - Strategy methods (`radar_direction`, `process_radar_results`,
//!   `shot_location`, `move_direction`) are required; they are the agent's
//!   decision logic.
//! - Bookkeeping methods (`health`, `take_damage`, `move_to`, ...) have
//!   provided implementations backed by the agent's [`Chassis`].
//!
//! # Example
//!
//! ```
//! use gridbrawl_core::agent::{Agent, Chassis, RadarObservation, Weapon};
//! use gridbrawl_grid::Coord;
//!
//! struct Turret {
//!     chassis: Chassis,
//! }
//!
//! impl Agent for Turret {
//!     fn chassis(&self) -> &Chassis {
//!         &self.chassis
//!     }
//!     fn chassis_mut(&mut self) -> &mut Chassis {
//!         &mut self.chassis
//!     }
//!     fn radar_direction(&mut self) -> u8 {
//!         0
//!     }
//!     fn process_radar_results(&mut self, _observations: &[RadarObservation]) {}
//!     fn shot_location(&mut self) -> Option<Coord> {
//!         None
//!     }
//!     fn move_direction(&mut self) -> (u8, u32) {
//!         (1, 0)
//!     }
//! }
//!
//! let turret = Turret { chassis: Chassis::new("turret", 0, 4, Weapon::Railgun) };
//! assert_eq!(turret.health(), 100);
//! assert!(turret.is_alive());
//! ```

pub mod chassis;

use std::fmt;

use serde::{Deserialize, Serialize};

use gridbrawl_grid::{Cell, Coord, Hazard};

pub use chassis::Chassis;
pub use gridbrawl_grid::AgentId;

/// Weapon an agent carries for the whole game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Weapon {
    /// Piercing line shot to the edge of the arena.
    Railgun,
    /// Short 3-wide cone, four cells deep.
    Flamethrower,
    /// 3×3 blast at the target; limited charges.
    Grenade,
    /// Heavy blow to one adjacent cell.
    Hammer,
}

impl fmt::Display for Weapon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Railgun => write!(f, "railgun"),
            Self::Flamethrower => write!(f, "flamethrower"),
            Self::Grenade => write!(f, "grenade"),
            Self::Hammer => write!(f, "hammer"),
        }
    }
}

/// What a radar contact turned out to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObservedKind {
    /// A live agent.
    Agent,
    /// A dead or pit-trapped agent's token.
    Wreck,
    /// A mound.
    Mound,
    /// A pit.
    Pit,
    /// A flame tile.
    Flame,
}

impl ObservedKind {
    /// Classify a cell token. Empty cells produce no contact.
    #[must_use]
    pub const fn from_cell(cell: Cell) -> Option<Self> {
        match cell {
            Cell::Empty => None,
            Cell::Agent { alive: true, .. } => Some(Self::Agent),
            Cell::Agent { alive: false, .. } => Some(Self::Wreck),
            Cell::Hazard(Hazard::Mound) => Some(Self::Mound),
            Cell::Hazard(Hazard::Pit) => Some(Self::Pit),
            Cell::Hazard(Hazard::Flame) => Some(Self::Flame),
        }
    }
}

/// One radar contact, valid only for the turn it was delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RadarObservation {
    /// What was seen.
    pub kind: ObservedKind,
    /// Where it was seen.
    pub at: Coord,
}

impl RadarObservation {
    /// Create an observation.
    #[must_use]
    pub const fn new(kind: ObservedKind, at: Coord) -> Self {
        Self { kind, at }
    }
}

/// The capability set every combatant provides.
///
/// Agents must be `Send` so independent arenas can run on worker threads.
/// A single arena never calls into two agents at once.
pub trait Agent: Send {
    /// The stat record backing the provided methods.
    fn chassis(&self) -> &Chassis;

    /// Mutable access to the stat record.
    fn chassis_mut(&mut self) -> &mut Chassis;

    /// Radar direction for this turn: 0 scans the eight neighbors, 1–8 sweep
    /// a compass direction (1 = north, clockwise).
    fn radar_direction(&mut self) -> u8;

    /// Receive the contacts from this turn's sweep, in sweep order.
    fn process_radar_results(&mut self, observations: &[RadarObservation]);

    /// Cell to fire at, or `None` to move instead.
    fn shot_location(&mut self) -> Option<Coord>;

    /// Movement request as `(direction 1–8, distance)`.
    fn move_direction(&mut self) -> (u8, u32);

    /// Display name.
    fn name(&self) -> &str {
        self.chassis().name()
    }

    /// Weapon carried.
    fn weapon(&self) -> Weapon {
        self.chassis().weapon()
    }

    /// Remaining grenade charges.
    fn grenades(&self) -> u32 {
        self.chassis().grenades()
    }

    /// Spend one grenade charge.
    fn decrement_grenades(&mut self) {
        self.chassis_mut().decrement_grenades();
    }

    /// Current cell.
    fn current_location(&self) -> Coord {
        self.chassis().location()
    }

    /// Record a new cell. Called by the arena after it moves the token.
    fn move_to(&mut self, at: Coord) {
        self.chassis_mut().set_location(at);
    }

    /// Current health.
    fn health(&self) -> i32 {
        self.chassis().health()
    }

    /// True while health is above zero.
    fn is_alive(&self) -> bool {
        self.health() > 0
    }

    /// Subtract health.
    fn take_damage(&mut self, amount: i32) {
        self.chassis_mut().take_damage(amount);
    }

    /// Current armor.
    fn armor(&self) -> i32 {
        self.chassis().armor()
    }

    /// Subtract armor, never below zero.
    fn reduce_armor(&mut self, amount: i32) {
        self.chassis_mut().reduce_armor(amount);
    }

    /// Permanently stop this agent from moving.
    fn disable_movement(&mut self) {
        self.chassis_mut().disable_movement();
    }

    /// Cells per turn this agent intends to move at most.
    fn move_speed(&self) -> u32 {
        self.chassis().move_speed()
    }

    /// Tell the agent how large the arena is.
    fn set_boundaries(&mut self, height: i32, width: i32) {
        self.chassis_mut().set_boundaries(height, width);
    }
}
