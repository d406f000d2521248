//! Test agents and board builders.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use gridbrawl_grid::{Coord, Grid, Hazard};

use crate::agent::{Agent, Chassis, RadarObservation, Weapon};
use crate::arena::Arena;
use crate::battlefield::Battlefield;

// =============================================================================
// Scripted Agent
// =============================================================================

/// Every radar delivery an agent received, one entry per turn.
pub type RadarLog = Arc<Mutex<Vec<Vec<RadarObservation>>>>;

/// One queued decision.
#[derive(Debug, Clone, Copy)]
enum Turn {
    Shoot(Coord),
    Move(u8, u32),
}

/// An agent that replays queued decisions in order and then idles.
///
/// Idling means: scan with the configured radar direction, never shoot,
/// request a zero-length move (or the `keep_moving` move if set).
pub struct ScriptedAgent {
    chassis: Chassis,
    radar: u8,
    script: VecDeque<Turn>,
    repeat_move: Option<(u8, u32)>,
    log: RadarLog,
}

impl ScriptedAgent {
    /// Armor every scripted agent starts with.
    pub const DEFAULT_ARMOR: i32 = 2;

    /// A railgun carrier with nothing queued.
    pub fn idle(name: impl Into<String>) -> Self {
        Self {
            chassis: Chassis::new(name, 1, Self::DEFAULT_ARMOR, Weapon::Railgun),
            radar: 0,
            script: VecDeque::new(),
            repeat_move: None,
            log: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn rebuild(mut self, armor: i32, weapon: Weapon) -> Self {
        let lost = self.chassis.health() - crate::agent::chassis::STARTING_HEALTH;
        let mut chassis = Chassis::new(self.chassis.name(), 1, armor, weapon);
        chassis.take_damage(-lost);
        self.chassis = chassis;
        self
    }

    /// Swap the weapon. Grenade carriers get a full set of charges.
    pub fn weapon(self, weapon: Weapon) -> Self {
        let armor = self.chassis.armor();
        self.rebuild(armor, weapon)
    }

    /// Set starting armor.
    pub fn armor(self, armor: i32) -> Self {
        let weapon = self.chassis.weapon();
        self.rebuild(armor, weapon)
    }

    /// Set starting health; zero or less seats the agent as a wreck.
    pub fn health(mut self, health: i32) -> Self {
        let delta = self.chassis.health() - health;
        self.chassis.take_damage(delta);
        self
    }

    /// Drop grenade charges down to `count`.
    pub fn grenades(mut self, count: u32) -> Self {
        while self.chassis.grenades() > count {
            self.chassis.decrement_grenades();
        }
        self
    }

    /// Radar direction used every turn.
    pub fn radar(mut self, direction: u8) -> Self {
        self.radar = direction;
        self
    }

    /// Queue a shot for the next unscripted turn.
    pub fn shoot_at(mut self, target: Coord) -> Self {
        self.script.push_back(Turn::Shoot(target));
        self
    }

    /// Queue a move for the next unscripted turn.
    pub fn then_move(mut self, direction: u8, distance: u32) -> Self {
        self.script.push_back(Turn::Move(direction, distance));
        self
    }

    /// Once the queue is empty, keep requesting this move.
    pub fn keep_moving(mut self, direction: u8, distance: u32) -> Self {
        self.repeat_move = Some((direction, distance));
        self
    }

    /// Shared handle to the radar deliveries this agent will receive.
    pub fn log(&self) -> RadarLog {
        Arc::clone(&self.log)
    }

    /// Box the agent and pair it with a starting cell.
    pub fn at(self, row: i32, col: i32) -> (Box<dyn Agent>, Coord) {
        (Box::new(self), Coord::new(row, col))
    }
}

impl Agent for ScriptedAgent {
    fn chassis(&self) -> &Chassis {
        &self.chassis
    }

    fn chassis_mut(&mut self) -> &mut Chassis {
        &mut self.chassis
    }

    fn radar_direction(&mut self) -> u8 {
        self.radar
    }

    fn process_radar_results(&mut self, observations: &[RadarObservation]) {
        if let Ok(mut log) = self.log.lock() {
            log.push(observations.to_vec());
        }
    }

    fn shot_location(&mut self) -> Option<Coord> {
        match self.script.front() {
            Some(Turn::Shoot(target)) => {
                let target = *target;
                self.script.pop_front();
                Some(target)
            }
            _ => None,
        }
    }

    fn move_direction(&mut self) -> (u8, u32) {
        match self.script.front() {
            Some(Turn::Move(direction, distance)) => {
                let step = (*direction, *distance);
                self.script.pop_front();
                step
            }
            _ => self.repeat_move.unwrap_or((0, 0)),
        }
    }
}

// =============================================================================
// Wandering Agent
// =============================================================================

/// An agent whose every decision comes from its own seeded generator.
///
/// Used to drive long randomized games whose outcome depends only on the
/// arena seed and the agent seeds.
pub struct Wanderer {
    chassis: Chassis,
    rng: ChaCha8Rng,
}

impl Wanderer {
    /// Build a wanderer; `seed` picks its weapon and all its choices.
    pub fn new(seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let weapon = match rng.gen_range(0..4) {
            0 => Weapon::Railgun,
            1 => Weapon::Flamethrower,
            2 => Weapon::Grenade,
            _ => Weapon::Hammer,
        };
        let armor = rng.gen_range(0..=4);
        Self {
            chassis: Chassis::new(format!("wanderer-{seed}"), 3, armor, weapon),
            rng,
        }
    }
}

impl Agent for Wanderer {
    fn chassis(&self) -> &Chassis {
        &self.chassis
    }

    fn chassis_mut(&mut self) -> &mut Chassis {
        &mut self.chassis
    }

    fn radar_direction(&mut self) -> u8 {
        self.rng.gen_range(0..=8)
    }

    fn process_radar_results(&mut self, _observations: &[RadarObservation]) {}

    fn shot_location(&mut self) -> Option<Coord> {
        if self.rng.gen_bool(0.4) {
            let (height, width) = self.chassis.board();
            let here = self.chassis.location();
            // Occasionally aim off the board or at ourselves.
            let row = self.rng.gen_range(-1..=height);
            let col = self.rng.gen_range(-1..=width);
            Some(if self.rng.gen_bool(0.05) { here } else { Coord::new(row, col) })
        } else {
            None
        }
    }

    fn move_direction(&mut self) -> (u8, u32) {
        (self.rng.gen_range(0..=9), self.rng.gen_range(0..=4))
    }
}

// =============================================================================
// Board Builders
// =============================================================================

/// A battlefield with the given hazards and agents at fixed cells, seed 0.
pub fn field_with(
    height: usize,
    width: usize,
    hazards: &[(Coord, Hazard)],
    agents: Vec<(Box<dyn Agent>, Coord)>,
) -> Battlefield {
    Battlefield::from_layout(hazard_grid(height, width, hazards), agents, 0)
        .expect("test layout is valid")
}

/// An arena with the given hazards and agents at fixed cells.
pub fn arena_with(
    height: usize,
    width: usize,
    hazards: &[(Coord, Hazard)],
    agents: Vec<(Box<dyn Agent>, Coord)>,
    seed: u64,
) -> Arena {
    Arena::with_layout(hazard_grid(height, width, hazards), agents, seed)
        .expect("test layout is valid")
}

fn hazard_grid(height: usize, width: usize, hazards: &[(Coord, Hazard)]) -> Grid {
    let mut grid = Grid::new(height, width).expect("test grid dimensions are valid");
    for (at, kind) in hazards {
        grid.set(*at, gridbrawl_grid::Cell::Hazard(*kind));
    }
    grid
}

/// Box a list of scripted agents for [`Arena::new`].
pub fn boxed(agents: Vec<ScriptedAgent>) -> Vec<Box<dyn Agent>> {
    agents
        .into_iter()
        .map(|a| Box::new(a) as Box<dyn Agent>)
        .collect()
}

/// `count` wanderers seeded `base, base + 1, ...`.
pub fn wanderers(count: u64, base: u64) -> Vec<Box<dyn Agent>> {
    (0..count)
        .map(|i| Box::new(Wanderer::new(base + i)) as Box<dyn Agent>)
        .collect()
}

// =============================================================================
// Assertions
// =============================================================================

/// Every agent's recorded position holds its token and no other cell does;
/// live tokens belong to live, untrapped agents.
pub fn assert_consistent(arena: &Arena) {
    let grid = arena.grid();
    for (id, slot) in arena.agents() {
        let agent = slot.agent();
        let at = agent.current_location();
        let cell = grid.get(at).expect("agent position is on the board");
        assert_eq!(cell.agent(), Some(id), "{id} not at its recorded cell {at}");
        assert_eq!(grid.count_agent(id), 1, "{id} has stray tokens");
        let should_be_live = agent.is_alive() && !slot.is_trapped();
        assert_eq!(
            cell.live_agent().is_some(),
            should_be_live,
            "{id} token liveness out of sync"
        );
    }
}
