//! One round of play: every living agent, in ascending id order, runs
//! radar → decision → action before the next one starts.
//!
//! # Turn Sequence
//!
//! 1. Ask for a radar direction, sweep, and deliver every non-empty cell in
//!    the sweep as one observation list (duplicates included).
//! 2. Ask for a shot target. If there is one, fire and end the turn.
//! 3. Otherwise ask for a move and walk it.
//!
//! Agents that are dead when their turn comes up are skipped. Pit-trapped
//! agents still sweep and decide, but their actions resolve to nothing.

use gridbrawl_grid::trajectory;

use crate::action::{Action, ActionEnvelope};
use crate::agent::{AgentId, ObservedKind, RadarObservation};
use crate::battlefield::Battlefield;
use crate::event::ArenaEvent;
use crate::resolver::{CombatResolver, MovementResolver, Resolver};

/// Drives turns and routes actions to resolvers.
pub struct TurnScheduler {
    resolvers: Vec<Box<dyn Resolver>>,
}

impl std::fmt::Debug for TurnScheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TurnScheduler")
            .field("resolvers", &format!("[{} resolvers]", self.resolvers.len()))
            .finish()
    }
}

impl Default for TurnScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl TurnScheduler {
    /// Scheduler with the combat and movement resolvers.
    #[must_use]
    pub fn new() -> Self {
        Self {
            resolvers: vec![
                Box::new(CombatResolver::new()),
                Box::new(MovementResolver::new()),
            ],
        }
    }

    /// Scheduler with a caller-chosen resolver set.
    #[must_use]
    pub fn with_resolvers(resolvers: Vec<Box<dyn Resolver>>) -> Self {
        Self { resolvers }
    }

    /// Play one round. `round` is the 1-based number stamped on envelopes.
    pub fn run_round(&self, field: &mut Battlefield, round: u64) {
        for id in field.ids() {
            self.take_turn(field, id, round);
        }
    }

    /// Play one agent's turn.
    pub fn take_turn(&self, field: &mut Battlefield, id: AgentId, round: u64) {
        let Some(slot) = field.slot_mut(id) else {
            return;
        };
        if !slot.agent().is_alive() {
            return;
        }

        let direction = slot.agent_mut().radar_direction();
        let observations = scan(field, id, direction);
        field.record(ArenaEvent::RadarSwept {
            agent: id,
            direction,
            contacts: observations.len(),
        });

        let Some(slot) = field.slot_mut(id) else {
            return;
        };
        let agent = slot.agent_mut();
        agent.process_radar_results(&observations);
        let action = match agent.shot_location() {
            Some(target) => Action::Shoot {
                weapon: agent.weapon(),
                target,
            },
            None => {
                let (direction, distance) = agent.move_direction();
                Action::Move {
                    direction,
                    distance,
                }
            }
        };
        tracing::trace!(%id, round, ?action, "turn decided");
        self.dispatch(field, &ActionEnvelope::new(id, round, action));
    }

    /// Send an envelope to the first resolver that handles its kind.
    pub fn dispatch(&self, field: &mut Battlefield, envelope: &ActionEnvelope) {
        let kind = envelope.kind();
        match self.resolvers.iter().find(|r| r.handles().contains(&kind)) {
            Some(resolver) => resolver.resolve(envelope, field),
            None => tracing::warn!(?kind, "no resolver for action"),
        }
    }
}

/// Radar contacts for agent `id` sweeping `direction`, in sweep order.
///
/// Empty cells are skipped; repeated cells are reported every time they are
/// swept.
#[must_use]
pub fn scan(field: &Battlefield, id: AgentId, direction: u8) -> Vec<RadarObservation> {
    let Some(slot) = field.slot(id) else {
        return Vec::new();
    };
    let grid = field.grid();
    trajectory::radar_sweep(grid.bounds(), slot.agent().current_location(), direction)
        .into_iter()
        .filter_map(|at| {
            grid.get(at)
                .and_then(ObservedKind::from_cell)
                .map(|kind| RadarObservation::new(kind, at))
        })
        .collect()
}
