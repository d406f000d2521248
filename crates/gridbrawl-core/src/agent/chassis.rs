//! The per-agent stat record.
//!
//! A [`Chassis`] holds everything the arena needs to know about an agent:
//! health, armor, weapon, grenade charges, position and the board size the
//! agent was told about. Strategies embed one and expose it through
//! [`Agent::chassis`](super::Agent::chassis).

use std::fmt;

use serde::{Deserialize, Serialize};

use gridbrawl_grid::Coord;

use super::Weapon;

/// Health every chassis starts with.
pub const STARTING_HEALTH: i32 = 100;

/// Grenade charges issued to grenade carriers.
pub const STARTING_GRENADES: u32 = 10;

/// Stat record for one agent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chassis {
    name: String,
    health: i32,
    armor: i32,
    move_speed: u32,
    weapon: Weapon,
    grenades: u32,
    location: Coord,
    board: (i32, i32),
    movement_disabled: bool,
}

impl Chassis {
    /// Build a fresh chassis at full health.
    ///
    /// Grenade carriers start with [`STARTING_GRENADES`] charges; everyone
    /// else carries none. Negative armor is clamped to zero.
    #[must_use]
    pub fn new(name: impl Into<String>, move_speed: u32, armor: i32, weapon: Weapon) -> Self {
        Self {
            name: name.into(),
            health: STARTING_HEALTH,
            armor: armor.max(0),
            move_speed,
            weapon,
            grenades: if weapon == Weapon::Grenade {
                STARTING_GRENADES
            } else {
                0
            },
            location: Coord::new(0, 0),
            board: (0, 0),
            movement_disabled: false,
        }
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current health; may go negative.
    #[must_use]
    pub const fn health(&self) -> i32 {
        self.health
    }

    /// Current armor.
    #[must_use]
    pub const fn armor(&self) -> i32 {
        self.armor
    }

    /// Movement speed, zero once movement is disabled.
    #[must_use]
    pub const fn move_speed(&self) -> u32 {
        if self.movement_disabled {
            0
        } else {
            self.move_speed
        }
    }

    /// Weapon carried.
    #[must_use]
    pub const fn weapon(&self) -> Weapon {
        self.weapon
    }

    /// Remaining grenade charges.
    #[must_use]
    pub const fn grenades(&self) -> u32 {
        self.grenades
    }

    /// Current cell.
    #[must_use]
    pub const fn location(&self) -> Coord {
        self.location
    }

    /// Board `(height, width)` as reported by the arena.
    #[must_use]
    pub const fn board(&self) -> (i32, i32) {
        self.board
    }

    /// True once movement has been disabled.
    #[must_use]
    pub const fn is_movement_disabled(&self) -> bool {
        self.movement_disabled
    }

    /// Record a new cell.
    pub fn set_location(&mut self, at: Coord) {
        self.location = at;
    }

    /// Record the board size.
    pub fn set_boundaries(&mut self, height: i32, width: i32) {
        self.board = (height, width);
    }

    /// Subtract health.
    pub fn take_damage(&mut self, amount: i32) {
        self.health = self.health.saturating_sub(amount);
    }

    /// Subtract armor, never below zero.
    pub fn reduce_armor(&mut self, amount: i32) {
        self.armor = self.armor.saturating_sub(amount).max(0);
    }

    /// Spend one grenade charge, if any remain.
    pub fn decrement_grenades(&mut self) {
        self.grenades = self.grenades.saturating_sub(1);
    }

    /// Permanently stop movement.
    pub fn disable_movement(&mut self) {
        self.movement_disabled = true;
    }

    /// True if `at` lies inside the reported board.
    #[must_use]
    pub const fn on_board(&self, at: Coord) -> bool {
        at.row >= 0 && at.row < self.board.0 && at.col >= 0 && at.col < self.board.1
    }
}

impl fmt::Display for Chassis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} at {} health {} armor {} weapon {}",
            self.name, self.location, self.health, self.armor, self.weapon
        )?;
        if self.weapon == Weapon::Grenade {
            write!(f, " grenades {}", self.grenades)?;
        }
        Ok(())
    }
}
