//! # Gridbrawl Core
//!
//! Turn-based arena simulation for gridbrawl.
//!
//! A fixed number of autonomous agents share a rectangular board strewn with
//! hazards. Every round each living agent sweeps its radar, then either fires
//! its weapon or moves. Damage, armor decay, pits, flame and collisions are
//! resolved immediately, so later agents in the round see earlier effects.
//!
//! ## Architecture
//!
//! - [`agent`]: the [`Agent`](agent::Agent) trait every combatant implements
//! - [`battlefield`]: grid, agents, seeded RNG and event log
//! - [`resolver`]: combat and movement resolution
//! - [`scheduler`]: the per-round radar → decision → action loop
//! - [`arena`]: the public facade
//! - [`registry`]: named agent factories
//!
//! ## Usage
//!
//! ```rust,ignore
//! use gridbrawl_core::arena::Arena;
//!
//! let mut arena = Arena::new(20, 20, agents, 15, seed)?;
//! while arena.alive_count() > 1 && arena.round() < 100 {
//!     arena.iterate();
//! }
//! println!("{:?}", arena.winner());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

// Re-export the substrate so drivers need only one dependency.
pub use gridbrawl_grid;

pub mod action;
pub mod agent;
pub mod arena;
pub mod battlefield;
pub mod error;
pub mod event;
pub mod flags;
pub mod registry;
pub mod resolver;
pub mod scheduler;

#[cfg(test)]
mod tests;

pub use agent::{Agent, AgentId, Chassis, ObservedKind, RadarObservation, Weapon};
pub use arena::Arena;
pub use error::{ArenaError, RegistryError};
pub use event::ArenaEvent;
pub use registry::{AgentFactory, AgentRegistry};
