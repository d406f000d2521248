//! Combat resolver for weapon fire and damage.
//!
//! The `CombatResolver` handles:
//! - Trajectory lookup per weapon (railgun line, flame cone, grenade blast,
//!   hammer blow)
//! - Damage rolls against every cell in the trajectory
//! - Armor mitigation and decay
//! - The death transition (live token flips to a wreck)
//!
//! # Damage Table
//!
//! | Weapon | Range |
//! |---|---|
//! | railgun | 10–20 |
//! | flamethrower | 30–50 |
//! | grenade | 10–40 |
//! | hammer | 50–60 |

use gridbrawl_grid::{trajectory, Coord};

use crate::action::{Action, ActionEnvelope, ActionKind};
use crate::agent::{AgentId, Weapon};
use crate::battlefield::Battlefield;
use crate::event::{ArenaEvent, FizzleReason};

use super::Resolver;

/// Inclusive damage range rolled per hit.
#[must_use]
pub const fn weapon_damage(weapon: Weapon) -> (i32, i32) {
    match weapon {
        Weapon::Railgun => (10, 20),
        Weapon::Flamethrower => (30, 50),
        Weapon::Grenade => (10, 40),
        Weapon::Hammer => (50, 60),
    }
}

/// Damage left after armor: `floor(base × max(0, 1 − 0.1 × armor))`.
///
/// Computed in tenths so exact multiples never lose a point to float error.
#[must_use]
pub fn mitigate(base: i32, armor: i32) -> i32 {
    let tenths = (10 - i64::from(armor)).max(0);
    let scaled = (i64::from(base) * tenths).div_euclid(10);
    i32::try_from(scaled).unwrap_or(if scaled < 0 { i32::MIN } else { i32::MAX })
}

/// Resolver for shots.
///
/// # Example
///
/// ```
/// use gridbrawl_core::action::ActionKind;
/// use gridbrawl_core::resolver::{CombatResolver, Resolver};
///
/// let resolver = CombatResolver::new();
/// assert!(resolver.handles().contains(&ActionKind::Shoot));
/// ```
#[derive(Debug, Clone, Default)]
pub struct CombatResolver;

impl CombatResolver {
    /// Creates a new combat resolver.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Roll damage against whatever live agent stands on `at`.
    ///
    /// No-op unless the cell holds a live token. Armor drops by one on every
    /// hit, even when it absorbed everything.
    pub fn apply_damage_to_cell(field: &mut Battlefield, at: Coord, min: i32, max: i32) {
        let Some(id) = field.grid().get(at).and_then(|cell| cell.live_agent()) else {
            return;
        };
        let rolled = field.roll(min, max);
        let Some(slot) = field.slot_mut(id) else {
            return;
        };
        let agent = slot.agent_mut();
        let dealt = mitigate(rolled, agent.armor());
        agent.take_damage(dealt);
        agent.reduce_armor(1);
        let dead = agent.health() <= 0;
        tracing::trace!(%id, %at, rolled, dealt, health = agent.health(), "hit");

        field.record(ArenaEvent::Damaged {
            agent: id,
            at,
            rolled,
            dealt,
        });
        if dead {
            field.wreck(id, at);
            tracing::debug!(%id, %at, "agent destroyed");
            field.record(ArenaEvent::Destroyed { agent: id, at });
        }
    }

    /// Fire `weapon` from `shooter`'s position toward `target`.
    ///
    /// Silently does nothing for an unknown or trapped shooter, a grenade
    /// with no charges, or a hammer swing that is not one king-move away on
    /// the board.
    pub fn handle_shot(field: &mut Battlefield, shooter: AgentId, weapon: Weapon, target: Coord) {
        let Some(slot) = field.slot(shooter) else {
            return;
        };
        if slot.is_trapped() {
            Self::fizzle(field, shooter, weapon, FizzleReason::Trapped);
            return;
        }
        let origin = slot.agent().current_location();
        let bounds = field.grid().bounds();

        let cells = match weapon {
            Weapon::Railgun => trajectory::railgun_path(bounds, origin, target),
            Weapon::Flamethrower => trajectory::flame_path(bounds, origin, target),
            Weapon::Grenade => {
                if slot.agent().grenades() == 0 {
                    Self::fizzle(field, shooter, weapon, FizzleReason::NoCharges);
                    return;
                }
                if let Some(slot) = field.slot_mut(shooter) {
                    slot.agent_mut().decrement_grenades();
                }
                trajectory::grenade_radius(bounds, target)
            }
            Weapon::Hammer => match trajectory::hammer_target(bounds, origin, target) {
                Some(at) => vec![at],
                None => {
                    Self::fizzle(field, shooter, weapon, FizzleReason::OutOfReach);
                    return;
                }
            },
        };

        tracing::trace!(%shooter, %weapon, %target, cells = cells.len(), "shot fired");
        field.record(ArenaEvent::ShotFired {
            shooter,
            weapon,
            target,
            cells: cells.len(),
        });

        let (min, max) = weapon_damage(weapon);
        for at in cells {
            Self::apply_damage_to_cell(field, at, min, max);
        }
    }

    fn fizzle(field: &mut Battlefield, shooter: AgentId, weapon: Weapon, reason: FizzleReason) {
        tracing::trace!(%shooter, %weapon, ?reason, "shot fizzled");
        field.record(ArenaEvent::ShotFizzled {
            shooter,
            weapon,
            reason,
        });
    }
}

impl Resolver for CombatResolver {
    fn handles(&self) -> &[ActionKind] {
        &[ActionKind::Shoot]
    }

    fn resolve(&self, envelope: &ActionEnvelope, field: &mut Battlefield) {
        if let Action::Shoot { weapon, target } = *envelope.action() {
            Self::handle_shot(field, envelope.actor(), weapon, target);
        }
    }
}
