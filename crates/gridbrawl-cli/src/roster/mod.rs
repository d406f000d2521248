//! Built-in strategies and the registry that names them.
//!
//! | Kind      | Weapon        | Behaviour                                      |
//! |-----------|---------------|------------------------------------------------|
//! | `sweeper` | railgun       | rotating sweep, fires at the nearest contact   |
//! | `brawler` | hammer        | hunts the last contact and swings when adjacent |
//! | `pyro`    | flamethrower  | burns anything within four cells               |
//!
//! All three share [`Memory`]: hazards and wrecks never move once seen, so
//! they are remembered for the whole game and routed around.

pub mod brawler;
pub mod pyro;
pub mod sweeper;

use std::collections::BTreeSet;

use gridbrawl_core::agent::{ObservedKind, RadarObservation};
use gridbrawl_core::{AgentFactory, AgentRegistry, Chassis, RegistryError};
use gridbrawl_grid::{Coord, Direction};

/// Built-in kinds as `(name, description, factory)`.
pub const BUILTINS: [(&str, &str, AgentFactory); 3] = [
    ("brawler", "closes in and swings a hammer", brawler::build),
    ("pyro", "flamethrower at anything within four cells", pyro::build),
    ("sweeper", "rotating radar, railgun at the nearest contact", sweeper::build),
];

/// Add every built-in kind to `registry`.
///
/// # Errors
///
/// Fails if `registry` already has a kind with a built-in name.
pub fn register_builtins(registry: &mut AgentRegistry) -> Result<(), RegistryError> {
    for (name, description, factory) in BUILTINS {
        registry.register(name, description, factory)?;
    }
    Ok(())
}

/// A registry holding only the built-in kinds.
#[must_use]
pub fn builtin_registry() -> AgentRegistry {
    let mut registry = AgentRegistry::new();
    if let Err(err) = register_builtins(&mut registry) {
        tracing::warn!(%err, "built-in registration incomplete");
    }
    registry
}

/// What a strategy has learned from its sweeps.
#[derive(Debug, Clone, Default)]
pub struct Memory {
    blocked: BTreeSet<Coord>,
    contacts: Vec<Coord>,
    last_contact: Option<Coord>,
}

impl Memory {
    /// Fold one sweep into memory.
    ///
    /// Live contacts are replaced wholesale each sweep; hazards and wrecks
    /// accumulate.
    pub fn absorb(&mut self, observations: &[RadarObservation]) {
        self.contacts.clear();
        for obs in observations {
            match obs.kind {
                ObservedKind::Agent => {
                    if !self.contacts.contains(&obs.at) {
                        self.contacts.push(obs.at);
                    }
                }
                _ => {
                    self.blocked.insert(obs.at);
                }
            }
        }
    }

    /// Live agents seen in the latest sweep.
    #[must_use]
    pub fn contacts(&self) -> &[Coord] {
        &self.contacts
    }

    /// Closest contact from the latest sweep, ties broken by cell order.
    ///
    /// Also remembered as the last known contact.
    pub fn nearest_contact(&mut self, from: Coord) -> Option<Coord> {
        let nearest = self
            .contacts
            .iter()
            .copied()
            .min_by_key(|at| (from.chebyshev(*at), *at));
        if nearest.is_some() {
            self.last_contact = nearest;
        }
        nearest
    }

    /// Where a contact was last seen, if anywhere.
    #[must_use]
    pub const fn last_contact(&self) -> Option<Coord> {
        self.last_contact
    }

    /// Forget the last known contact.
    pub fn lose_contact(&mut self) {
        self.last_contact = None;
    }

    /// True if `at` holds a remembered hazard or wreck, or a current contact.
    #[must_use]
    pub fn is_blocked(&self, at: Coord) -> bool {
        self.blocked.contains(&at) || self.contacts.contains(&at)
    }
}

/// How many steps from the chassis along `dir` stay on the board and off
/// remembered cells, up to `limit`.
#[must_use]
pub fn safe_steps(memory: &Memory, chassis: &Chassis, dir: Direction, limit: u32) -> u32 {
    let (dr, dc) = dir.offset();
    let mut at = chassis.location();
    let mut steps = 0;
    while steps < limit {
        at = at.offset(dr, dc);
        if !chassis.on_board(at) || memory.is_blocked(at) {
            break;
        }
        steps += 1;
    }
    steps
}

/// Fan out from `preferred` (straight, then ever wider turns) and take the
/// first heading with at least one safe step.
///
/// Returns `(0, 0)`, a no-op, when boxed in.
#[must_use]
pub fn route(memory: &Memory, chassis: &Chassis, preferred: Direction, limit: u32) -> (u8, u32) {
    const FAN: [u8; 8] = [0, 1, 7, 2, 6, 3, 5, 4];
    for turn in FAN {
        let dir = preferred.turned(turn);
        let steps = safe_steps(memory, chassis, dir, limit);
        if steps > 0 {
            return (dir.index(), steps);
        }
    }
    (0, 0)
}
