//! Resolvers turn a committed action into board changes.
//!
//! The scheduler routes each [`ActionEnvelope`] to the first resolver whose
//! [`Resolver::handles()`] lists the envelope's [`ActionKind`]. A resolver
//! applies the whole action before the next agent acts, so later agents see
//! earlier effects within the same round.
//!
//! # Invariants
//!
//! - Resolvers never fail. Requests that cannot be honored are ignored, and
//!   partial effects (a move blocked halfway) stand.
//! - All randomness comes from the battlefield's seeded source, in a fixed
//!   order, so replays are bit-identical.
//!
//! # Available Resolvers
//!
//! - [`CombatResolver`]: weapon trajectories and damage
//! - [`MovementResolver`]: stepwise movement and hazard effects

mod combat;
mod movement;

pub use combat::{mitigate, weapon_damage, CombatResolver};
pub use movement::{MovementResolver, FLAME_DAMAGE};

use crate::action::{ActionEnvelope, ActionKind};
use crate::battlefield::Battlefield;

/// Applies one kind of action to the battlefield.
///
/// # Example
///
/// ```
/// use gridbrawl_core::action::{ActionEnvelope, ActionKind};
/// use gridbrawl_core::battlefield::Battlefield;
/// use gridbrawl_core::resolver::Resolver;
///
/// struct Ignore;
///
/// impl Resolver for Ignore {
///     fn handles(&self) -> &[ActionKind] {
///         &[ActionKind::Move]
///     }
///
///     fn resolve(&self, _envelope: &ActionEnvelope, _field: &mut Battlefield) {}
/// }
/// ```
pub trait Resolver: Send + Sync {
    /// Action kinds this resolver accepts.
    fn handles(&self) -> &[ActionKind];

    /// Apply the action. Must be deterministic given the battlefield state.
    fn resolve(&self, envelope: &ActionEnvelope, field: &mut Battlefield);
}
