//! Startup-time table of known agent kinds.
//!
//! Agents are plain Rust types linked into the binary. A driver registers a
//! factory per kind name once, then builds rosters by name.
//!
//! # Example
//!
//! ```
//! use gridbrawl_core::agent::{Agent, Chassis, RadarObservation, Weapon};
//! use gridbrawl_core::registry::AgentRegistry;
//! use gridbrawl_grid::Coord;
//!
//! struct Rock(Chassis);
//!
//! impl Agent for Rock {
//!     fn chassis(&self) -> &Chassis { &self.0 }
//!     fn chassis_mut(&mut self) -> &mut Chassis { &mut self.0 }
//!     fn radar_direction(&mut self) -> u8 { 0 }
//!     fn process_radar_results(&mut self, _: &[RadarObservation]) {}
//!     fn shot_location(&mut self) -> Option<Coord> { None }
//!     fn move_direction(&mut self) -> (u8, u32) { (1, 0) }
//! }
//!
//! fn rock(_seed: u64) -> Box<dyn Agent> {
//!     Box::new(Rock(Chassis::new("rock", 0, 10, Weapon::Hammer)))
//! }
//!
//! let mut registry = AgentRegistry::new();
//! registry.register("rock", "never moves", rock).unwrap();
//! let agent = registry.create("rock", 7).unwrap();
//! assert_eq!(agent.name(), "rock");
//! assert!(registry.create("paper", 7).is_err());
//! ```

use std::collections::BTreeMap;

use crate::agent::Agent;
use crate::error::RegistryError;

/// Builds a fresh agent. The seed lets randomized strategies replay.
pub type AgentFactory = fn(u64) -> Box<dyn Agent>;

#[derive(Debug, Clone, Copy)]
struct Entry {
    description: &'static str,
    factory: AgentFactory,
}

/// Agent kinds by name, iterated in name order.
#[derive(Debug, Clone, Default)]
pub struct AgentRegistry {
    entries: BTreeMap<String, Entry>,
}

impl AgentRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `factory` under `name`.
    ///
    /// # Errors
    ///
    /// [`RegistryError::Duplicate`] if the name is taken.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        description: &'static str,
        factory: AgentFactory,
    ) -> Result<(), RegistryError> {
        let name = name.into();
        if self.entries.contains_key(&name) {
            return Err(RegistryError::Duplicate(name));
        }
        tracing::debug!(%name, "registered agent kind");
        self.entries.insert(
            name,
            Entry {
                description,
                factory,
            },
        );
        Ok(())
    }

    /// Build an agent of kind `name`.
    ///
    /// # Errors
    ///
    /// [`RegistryError::Unknown`] if nothing is registered under `name`.
    pub fn create(&self, name: &str, seed: u64) -> Result<Box<dyn Agent>, RegistryError> {
        self.entries
            .get(name)
            .map(|entry| (entry.factory)(seed))
            .ok_or_else(|| RegistryError::Unknown(name.to_string()))
    }

    /// True if `name` is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// `(name, description)` pairs in name order.
    pub fn kinds(&self) -> impl Iterator<Item = (&str, &'static str)> + '_ {
        self.entries
            .iter()
            .map(|(name, entry)| (name.as_str(), entry.description))
    }

    /// Number of registered kinds.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
