//! Movement resolver for stepwise, hazard-aware movement.
//!
//! A move request is walked one unit step at a time. Each step looks at the
//! next cell and stops at the first of:
//!
//! 1. off the board: stop
//! 2. mound: stop without entering
//! 3. pit: fall in, become trapped for the rest of the game, stop
//! 4. flame: take flame damage, enter, keep going
//! 5. any agent token, live or wrecked: stop
//! 6. empty: enter, keep going
//!
//! Leaving a cell restores the flame tile if the agent was standing on one.
//! Partial progress always stands.

use gridbrawl_grid::{Cell, Coord, Direction, Hazard};

use crate::action::{Action, ActionEnvelope, ActionKind};
use crate::agent::AgentId;
use crate::battlefield::Battlefield;
use crate::event::ArenaEvent;
use crate::flags::SlotFlags;

use super::Resolver;

/// Inclusive damage range for stepping onto a flame tile. Armor does not
/// apply.
pub const FLAME_DAMAGE: (i32, i32) = (30, 50);

/// Resolver for movement requests.
///
/// # Example
///
/// ```
/// use gridbrawl_core::action::ActionKind;
/// use gridbrawl_core::resolver::{MovementResolver, Resolver};
///
/// let resolver = MovementResolver::new();
/// assert!(resolver.handles().contains(&ActionKind::Move));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MovementResolver;

/// What the next step runs into.
enum Step {
    Stop,
    Fall,
    Burn,
    Enter,
}

fn classify(cell: Option<Cell>) -> Step {
    match cell {
        None | Some(Cell::Hazard(Hazard::Mound) | Cell::Agent { .. }) => Step::Stop,
        Some(Cell::Hazard(Hazard::Pit)) => Step::Fall,
        Some(Cell::Hazard(Hazard::Flame)) => Step::Burn,
        Some(Cell::Empty) => Step::Enter,
    }
}

impl MovementResolver {
    /// Creates a new movement resolver.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Walk agent `id` up to `distance` cells toward compass `direction`.
    ///
    /// Unknown, dead or trapped agents, direction codes outside 1–8, and a
    /// zero distance are all no-ops.
    pub fn handle_movement(field: &mut Battlefield, id: AgentId, direction: u8, distance: u32) {
        let Some(slot) = field.slot(id) else {
            return;
        };
        if slot.is_trapped() || !slot.agent().is_alive() {
            return;
        }
        let Some(dir) = Direction::from_index(direction) else {
            return;
        };
        let (dr, dc) = dir.offset();
        let start = slot.agent().current_location();
        let mut at = start;

        for _ in 0..distance {
            let next = at.offset(dr, dc);
            match classify(field.grid().get(next)) {
                Step::Stop => break,
                Step::Fall => {
                    Self::fall(field, id, at, next);
                    at = next;
                    break;
                }
                Step::Burn => {
                    let amount = field.roll(FLAME_DAMAGE.0, FLAME_DAMAGE.1);
                    field.relocate(id, at, next, true);
                    at = next;
                    if Self::burn(field, id, at, amount) {
                        break;
                    }
                }
                Step::Enter => {
                    field.relocate(id, at, next, false);
                    at = next;
                }
            }
        }

        if at != start {
            tracing::trace!(%id, from = %start, to = %at, "moved");
            field.record(ArenaEvent::Moved {
                agent: id,
                from: start,
                to: at,
            });
        }
    }

    /// Drop the agent into the pit at `pit`. Its token becomes inert.
    fn fall(field: &mut Battlefield, id: AgentId, from: Coord, pit: Coord) {
        field.relocate(id, from, pit, false);
        if let Some(slot) = field.slot_mut(id) {
            slot.flags_mut().insert(SlotFlags::TRAPPED);
            slot.agent_mut().disable_movement();
        }
        field.grid_mut().set(pit, Cell::wreck(id));
        tracing::debug!(%id, at = %pit, "agent trapped in pit");
        field.record(ArenaEvent::Trapped { agent: id, at: pit });
    }

    /// Apply flame damage to an agent now standing on `at`. Returns true if
    /// it died.
    fn burn(field: &mut Battlefield, id: AgentId, at: Coord, amount: i32) -> bool {
        let Some(slot) = field.slot_mut(id) else {
            return false;
        };
        let agent = slot.agent_mut();
        agent.take_damage(amount);
        let dead = agent.health() <= 0;
        tracing::trace!(%id, %at, amount, health = agent.health(), "burned");
        field.record(ArenaEvent::Burned {
            agent: id,
            at,
            amount,
        });
        if dead {
            field.wreck(id, at);
            tracing::debug!(%id, %at, "agent destroyed by flame");
            field.record(ArenaEvent::Destroyed { agent: id, at });
        }
        dead
    }
}

impl Resolver for MovementResolver {
    fn handles(&self) -> &[ActionKind] {
        &[ActionKind::Move]
    }

    fn resolve(&self, envelope: &ActionEnvelope, field: &mut Battlefield) {
        if let Action::Move {
            direction,
            distance,
        } = *envelope.action()
        {
            Self::handle_movement(field, envelope.actor(), direction, distance);
        }
    }
}
