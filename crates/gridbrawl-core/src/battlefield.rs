//! Shared mutable state that resolvers operate on.
//!
//! A [`Battlefield`] owns the grid, the agents (keyed by id in a `BTreeMap`
//! for deterministic iteration), the seeded random source and the event log
//! for the current round. The public [`Arena`](crate::arena::Arena) wraps it
//! together with the turn scheduler.
//!
//! # Invariants
//!
//! - Every agent has exactly one token on the grid.
//! - A slot's `ON_FLAME` flag is set iff its token sits where a flame tile
//!   will reappear once it leaves.
//! - A token is live iff the agent's health is above zero and it is not
//!   trapped.

use std::collections::BTreeMap;
use std::fmt;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use gridbrawl_grid::{Cell, Coord, Grid, Hazard, Region};

use crate::agent::{Agent, AgentId};
use crate::error::ArenaError;
use crate::event::ArenaEvent;
use crate::flags::SlotFlags;

/// Map symbols handed out to agents in id order.
pub const AGENT_SYMBOLS: [char; 12] = ['@', '#', '$', '%', '&', '!', '*', '+', '=', '<', '>', '?'];

fn check_roster(count: usize) -> Result<(), ArenaError> {
    if count > AGENT_SYMBOLS.len() {
        return Err(ArenaError::TooManyAgents {
            count,
            max: AGENT_SYMBOLS.len(),
        });
    }
    Ok(())
}

// =============================================================================
// AgentSlot
// =============================================================================

/// An agent plus the arena's bookkeeping about it.
pub struct AgentSlot {
    agent: Box<dyn Agent>,
    symbol: char,
    flags: SlotFlags,
}

impl fmt::Debug for AgentSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AgentSlot")
            .field("agent", &self.agent.chassis())
            .field("symbol", &self.symbol)
            .field("flags", &self.flags)
            .finish()
    }
}

impl AgentSlot {
    pub(crate) fn new(agent: Box<dyn Agent>, symbol: char) -> Self {
        Self {
            agent,
            symbol,
            flags: SlotFlags::empty(),
        }
    }

    /// The agent.
    #[must_use]
    pub fn agent(&self) -> &dyn Agent {
        self.agent.as_ref()
    }

    pub(crate) fn agent_mut(&mut self) -> &mut dyn Agent {
        self.agent.as_mut()
    }

    /// Map symbol shown after `R`/`X`.
    #[must_use]
    pub const fn symbol(&self) -> char {
        self.symbol
    }

    /// Arena-side status flags.
    #[must_use]
    pub const fn flags(&self) -> SlotFlags {
        self.flags
    }

    pub(crate) fn flags_mut(&mut self) -> &mut SlotFlags {
        &mut self.flags
    }

    /// True once the agent has fallen into a pit.
    #[must_use]
    pub const fn is_trapped(&self) -> bool {
        self.flags.contains(SlotFlags::TRAPPED)
    }
}

// =============================================================================
// Battlefield
// =============================================================================

/// Grid, agents, random source and event log.
pub struct Battlefield {
    grid: Grid,
    slots: BTreeMap<AgentId, AgentSlot>,
    rng: ChaCha8Rng,
    events: Vec<ArenaEvent>,
}

impl fmt::Debug for Battlefield {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Battlefield")
            .field("grid", &format!("{}x{}", self.grid.height(), self.grid.width()))
            .field("slots", &self.slots)
            .field("events", &self.events.len())
            .finish_non_exhaustive()
    }
}

impl Battlefield {
    /// Build a randomly populated battlefield.
    ///
    /// Obstacles go on interior cells, each a uniformly chosen hazard kind.
    /// Agents then go on any empty cell and are told their location and the
    /// board size. Agent ids follow input order, starting at 0.
    pub(crate) fn scatter(
        height: usize,
        width: usize,
        agents: Vec<Box<dyn Agent>>,
        obstacles: usize,
        seed: u64,
    ) -> Result<Self, ArenaError> {
        let mut grid = Grid::new(height, width)?;
        check_roster(agents.len())?;

        let interior = grid.interior_count();
        if obstacles > interior {
            return Err(ArenaError::TooManyObstacles {
                obstacles,
                interior,
            });
        }
        let occupants = obstacles + agents.len();
        let cells = grid.cell_count();
        if occupants >= cells {
            return Err(ArenaError::Overcrowded { occupants, cells });
        }

        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        for _ in 0..obstacles {
            let at = grid
                .sample_empty(&mut rng, Region::Interior)
                .ok_or(ArenaError::PlacementExhausted)?;
            let kind = Hazard::ALL[rng.gen_range(0..Hazard::ALL.len())];
            grid.set(at, Cell::Hazard(kind));
        }

        let mut placed = Vec::with_capacity(agents.len());
        for agent in agents {
            let at = grid
                .sample_empty(&mut rng, Region::Anywhere)
                .ok_or(ArenaError::PlacementExhausted)?;
            // Reserve the cell so the next agent cannot land on it.
            grid.set(at, Cell::live(AgentId::new(0)));
            placed.push((agent, at));
        }

        tracing::debug!(height, width, obstacles, seed, "scattered battlefield");
        Ok(Self::seat(grid, placed, rng))
    }

    /// Build a battlefield from a prepared grid and fixed agent positions.
    ///
    /// The grid may already hold hazards; every agent cell must be on the
    /// board and empty.
    pub(crate) fn from_layout(
        grid: Grid,
        agents: Vec<(Box<dyn Agent>, Coord)>,
        seed: u64,
    ) -> Result<Self, ArenaError> {
        check_roster(agents.len())?;
        let mut grid = grid;
        for (_, at) in &agents {
            if grid.get(*at) != Some(Cell::Empty) {
                return Err(ArenaError::InvalidPlacement { at: *at });
            }
            grid.set(*at, Cell::live(AgentId::new(0)));
        }
        Ok(Self::seat(grid, agents, ChaCha8Rng::seed_from_u64(seed)))
    }

    /// Assign ids and symbols, write final tokens and brief each agent.
    fn seat(mut grid: Grid, agents: Vec<(Box<dyn Agent>, Coord)>, rng: ChaCha8Rng) -> Self {
        let (height, width) = (grid.height(), grid.width());
        let mut slots = BTreeMap::new();
        for ((index, (mut agent, at)), symbol) in agents.into_iter().enumerate().zip(AGENT_SYMBOLS)
        {
            #[allow(clippy::cast_possible_truncation)]
            let id = AgentId::new(index as u32);
            agent.move_to(at);
            agent.set_boundaries(height, width);
            let token = if agent.is_alive() {
                Cell::live(id)
            } else {
                Cell::wreck(id)
            };
            grid.set(at, token);
            tracing::debug!(%id, %symbol, chassis = %agent.chassis(), "seated agent");
            slots.insert(id, AgentSlot::new(agent, symbol));
        }
        Self {
            grid,
            slots,
            rng,
            events: Vec::new(),
        }
    }

    /// The board.
    #[must_use]
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    pub(crate) fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    /// One agent's slot.
    #[must_use]
    pub fn slot(&self, id: AgentId) -> Option<&AgentSlot> {
        self.slots.get(&id)
    }

    pub(crate) fn slot_mut(&mut self, id: AgentId) -> Option<&mut AgentSlot> {
        self.slots.get_mut(&id)
    }

    /// All slots in ascending id order.
    pub fn slots(&self) -> impl Iterator<Item = (AgentId, &AgentSlot)> + '_ {
        self.slots.iter().map(|(id, slot)| (*id, slot))
    }

    /// Agent ids in ascending order.
    #[must_use]
    pub fn ids(&self) -> Vec<AgentId> {
        self.slots.keys().copied().collect()
    }

    /// Uniform roll in `[min, max]`. A reversed range collapses to `min`.
    pub(crate) fn roll(&mut self, min: i32, max: i32) -> i32 {
        debug_assert!(min <= max, "damage range {min}..={max} is reversed");
        self.rng.gen_range(min..=max.max(min))
    }

    pub(crate) fn record(&mut self, event: ArenaEvent) {
        tracing::trace!(?event, "arena event");
        self.events.push(event);
    }

    /// Events recorded since the log was last cleared.
    #[must_use]
    pub fn events(&self) -> &[ArenaEvent] {
        &self.events
    }

    pub(crate) fn clear_events(&mut self) {
        self.events.clear();
    }

    /// Render one cell the way the board printout shows it.
    #[must_use]
    pub fn glyph(&self, cell: Cell) -> String {
        match cell {
            Cell::Empty => ".".to_string(),
            Cell::Hazard(kind) => kind.glyph().to_string(),
            Cell::Agent { id, alive } => {
                let symbol = self.slot(id).map_or('?', AgentSlot::symbol);
                format!("{}{symbol}", if alive { 'R' } else { 'X' })
            }
        }
    }

    /// Move `id`'s token from `from` to `to`, restoring a flame tile behind
    /// it when it was standing on one.
    ///
    /// The new token is written live; callers flip it afterwards if needed.
    /// `onto_flame` records whether `to` was a flame tile.
    pub(crate) fn relocate(&mut self, id: AgentId, from: Coord, to: Coord, onto_flame: bool) {
        let Some(slot) = self.slots.get_mut(&id) else {
            return;
        };
        let behind = if slot.flags.contains(SlotFlags::ON_FLAME) {
            Cell::Hazard(Hazard::Flame)
        } else {
            Cell::Empty
        };
        slot.flags.set(SlotFlags::ON_FLAME, onto_flame);
        slot.agent.move_to(to);
        self.grid.set(from, behind);
        self.grid.set(to, Cell::live(id));
    }

    /// Flip `id`'s token to a wreck and stop the agent moving.
    pub(crate) fn wreck(&mut self, id: AgentId, at: Coord) {
        if let Some(slot) = self.slots.get_mut(&id) {
            slot.agent.disable_movement();
        }
        self.grid.set(at, Cell::wreck(id));
    }

    /// Number of agents with health above zero.
    #[must_use]
    pub fn alive_count(&self) -> usize {
        self.slots.values().filter(|s| s.agent.health() > 0).count()
    }
}
