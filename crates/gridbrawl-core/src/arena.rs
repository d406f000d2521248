//! The arena facade.
//!
//! [`Arena`] is the one control point a driver needs: build it, call
//! [`Arena::iterate`] once per round, and ask who is left.
//!
//! # Example
//!
//! ```
//! use gridbrawl_core::agent::{Agent, Chassis, RadarObservation, Weapon};
//! use gridbrawl_core::arena::Arena;
//! use gridbrawl_grid::Coord;
//!
//! struct Sitter(Chassis);
//!
//! impl Agent for Sitter {
//!     fn chassis(&self) -> &Chassis { &self.0 }
//!     fn chassis_mut(&mut self) -> &mut Chassis { &mut self.0 }
//!     fn radar_direction(&mut self) -> u8 { 0 }
//!     fn process_radar_results(&mut self, _: &[RadarObservation]) {}
//!     fn shot_location(&mut self) -> Option<Coord> { None }
//!     fn move_direction(&mut self) -> (u8, u32) { (1, 0) }
//! }
//!
//! let agents: Vec<Box<dyn Agent>> = vec![
//!     Box::new(Sitter(Chassis::new("a", 1, 0, Weapon::Railgun))),
//!     Box::new(Sitter(Chassis::new("b", 1, 0, Weapon::Railgun))),
//! ];
//! let mut arena = Arena::new(10, 10, agents, 5, 42).unwrap();
//! arena.iterate();
//!
//! assert_eq!(arena.round(), 1);
//! assert_eq!(arena.alive_count(), 2);
//! assert_eq!(arena.winner(), None);
//! ```

use std::io;

use gridbrawl_grid::{Coord, Grid};

use crate::agent::{Agent, AgentId, RadarObservation, Weapon};
use crate::battlefield::{AgentSlot, Battlefield};
use crate::error::ArenaError;
use crate::event::ArenaEvent;
use crate::resolver::{CombatResolver, MovementResolver};
use crate::scheduler::{self, TurnScheduler};

/// A running game: board, agents, random source and scheduler.
#[derive(Debug)]
pub struct Arena {
    field: Battlefield,
    scheduler: TurnScheduler,
    round: u64,
    seed: u64,
}

impl Arena {
    /// Build an arena and scatter obstacles and agents on it.
    ///
    /// Obstacles land on interior cells with a uniformly random hazard kind;
    /// agents land anywhere free. Agent ids are assigned `0, 1, ...` in input
    /// order, and map symbols in the same order.
    ///
    /// # Errors
    ///
    /// Fails on zero or oversized dimensions, more obstacles than interior
    /// cells, obstacles plus agents not strictly fewer than all cells, or more
    /// agents than map symbols.
    pub fn new(
        height: usize,
        width: usize,
        agents: Vec<Box<dyn Agent>>,
        obstacles: usize,
        seed: u64,
    ) -> Result<Self, ArenaError> {
        let field = Battlefield::scatter(height, width, agents, obstacles, seed)?;
        tracing::info!(height, width, obstacles, agents = field.ids().len(), seed, "arena ready");
        Ok(Self::from_field(field, seed))
    }

    /// Build an arena from a prepared grid and fixed agent cells.
    ///
    /// # Errors
    ///
    /// Fails if an agent cell is off the board or not empty, or if there are
    /// more agents than map symbols.
    pub fn with_layout(
        grid: Grid,
        agents: Vec<(Box<dyn Agent>, Coord)>,
        seed: u64,
    ) -> Result<Self, ArenaError> {
        let field = Battlefield::from_layout(grid, agents, seed)?;
        Ok(Self::from_field(field, seed))
    }

    fn from_field(field: Battlefield, seed: u64) -> Self {
        Self {
            field,
            scheduler: TurnScheduler::new(),
            round: 0,
            seed,
        }
    }

    /// Play exactly one round.
    ///
    /// The event log is cleared first, so afterwards [`Arena::events`] holds
    /// this round's events only.
    pub fn iterate(&mut self) {
        self.round += 1;
        self.field.clear_events();
        self.scheduler.run_round(&mut self.field, self.round);
        tracing::debug!(
            round = self.round,
            alive = self.alive_count(),
            events = self.field.events().len(),
            "round complete"
        );
    }

    /// Number of agents with health above zero.
    #[must_use]
    pub fn alive_count(&self) -> usize {
        self.field.alive_count()
    }

    /// The sole surviving agent, or `None` when zero or several are alive.
    #[must_use]
    pub fn winner(&self) -> Option<AgentId> {
        let mut alive = self
            .field
            .slots()
            .filter(|(_, slot)| slot.agent().health() > 0)
            .map(|(id, _)| id);
        match (alive.next(), alive.next()) {
            (Some(id), None) => Some(id),
            _ => None,
        }
    }

    /// Rounds played so far.
    #[must_use]
    pub const fn round(&self) -> u64 {
        self.round
    }

    /// Seed the arena was built with.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// The board.
    #[must_use]
    pub const fn grid(&self) -> &Grid {
        self.field.grid()
    }

    /// Underlying state, for resolvers and diagnostics.
    #[must_use]
    pub const fn battlefield(&self) -> &Battlefield {
        &self.field
    }

    /// One agent.
    #[must_use]
    pub fn agent(&self, id: AgentId) -> Option<&dyn Agent> {
        self.field.slot(id).map(AgentSlot::agent)
    }

    /// One agent's slot, including its symbol and flags.
    #[must_use]
    pub fn slot(&self, id: AgentId) -> Option<&AgentSlot> {
        self.field.slot(id)
    }

    /// All agents in id order.
    pub fn agents(&self) -> impl Iterator<Item = (AgentId, &AgentSlot)> + '_ {
        self.field.slots()
    }

    /// Events from the current round.
    #[must_use]
    pub fn events(&self) -> &[ArenaEvent] {
        self.field.events()
    }

    /// What agent `id` would see sweeping `direction` right now.
    #[must_use]
    pub fn radar_results(&self, id: AgentId, direction: u8) -> Vec<RadarObservation> {
        scheduler::scan(&self.field, id, direction)
    }

    /// Fire on behalf of `shooter`, outside the normal turn order.
    pub fn handle_shot(&mut self, shooter: AgentId, weapon: Weapon, target: Coord) {
        CombatResolver::handle_shot(&mut self.field, shooter, weapon, target);
    }

    /// Move on behalf of `id`, outside the normal turn order.
    pub fn handle_movement(&mut self, id: AgentId, direction: u8, distance: u32) {
        MovementResolver::handle_movement(&mut self.field, id, direction, distance);
    }

    /// Roll `[min, max]` damage against whatever live agent stands on `at`.
    pub fn apply_damage_to_cell(&mut self, at: Coord, min: i32, max: i32) {
        CombatResolver::apply_damage_to_cell(&mut self.field, at, min, max);
    }

    /// Write the board as a fixed-width table with row and column headers.
    ///
    /// Empty cells print `.`, hazards `M`/`P`/`F`, live agents `R` plus their
    /// symbol and wrecks `X` plus their symbol.
    ///
    /// # Errors
    ///
    /// Propagates write failures from `out`.
    pub fn print_state<W: io::Write>(&self, out: &mut W) -> io::Result<()> {
        let grid = self.field.grid();
        let label = digits(grid.height() - 1);
        let cell = digits(grid.width() - 1).max(2);

        write!(out, "{:label$} ", "")?;
        for col in 0..grid.width() {
            write!(out, " {col:>cell$}")?;
        }
        writeln!(out)?;

        for (row, cells) in grid.rows().enumerate() {
            write!(out, "{row:>label$} ")?;
            for token in cells {
                write!(out, " {:>cell$}", self.field.glyph(*token))?;
            }
            writeln!(out)?;
        }
        Ok(())
    }

    /// Board printout as a string.
    #[must_use]
    pub fn render(&self) -> String {
        let mut buf = Vec::new();
        // Writing into a Vec cannot fail.
        let _ = self.print_state(&mut buf);
        String::from_utf8_lossy(&buf).into_owned()
    }
}

fn digits(n: i32) -> usize {
    n.max(0).to_string().len()
}
