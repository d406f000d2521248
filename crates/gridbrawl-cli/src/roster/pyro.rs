//! Flamethrower.
//!
//! Alternates a neighbor scan with a rotating compass sweep. Anything alive
//! within [`FLAME_REACH`] gets burned; anything seen further out is stalked.

use gridbrawl_core::agent::RadarObservation;
use gridbrawl_core::{Agent, Chassis, Weapon};
use gridbrawl_grid::trajectory::FLAME_REACH;
use gridbrawl_grid::{Coord, Direction};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::{route, Memory};

const SPEED: u32 = 2;
const ARMOR: i32 = 3;

/// The `pyro` strategy.
#[derive(Debug)]
pub struct Pyro {
    chassis: Chassis,
    memory: Memory,
    turn: u32,
    sweep: Direction,
    rng: ChaCha8Rng,
}

impl Pyro {
    /// Build a pyro; `seed` drives its wandering.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            chassis: Chassis::new("pyro", SPEED, ARMOR, Weapon::Flamethrower),
            memory: Memory::default(),
            turn: 0,
            sweep: Direction::North,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

/// Registry factory.
pub fn build(seed: u64) -> Box<dyn Agent> {
    Box::new(Pyro::new(seed))
}

impl Agent for Pyro {
    fn chassis(&self) -> &Chassis {
        &self.chassis
    }

    fn chassis_mut(&mut self) -> &mut Chassis {
        &mut self.chassis
    }

    fn radar_direction(&mut self) -> u8 {
        self.turn += 1;
        if self.turn % 2 == 1 {
            return 0;
        }
        let current = self.sweep;
        self.sweep = current.turned(1);
        current.index()
    }

    fn process_radar_results(&mut self, observations: &[RadarObservation]) {
        self.memory.absorb(observations);
    }

    fn shot_location(&mut self) -> Option<Coord> {
        let here = self.chassis.location();
        self.memory
            .nearest_contact(here)
            .filter(|at| here.chebyshev(*at) <= FLAME_REACH)
    }

    fn move_direction(&mut self) -> (u8, u32) {
        let here = self.chassis.location();
        let heading = self
            .memory
            .last_contact()
            .and_then(|quarry| Direction::toward(here, quarry));
        match heading {
            Some(dir) => route(&self.memory, &self.chassis, dir, self.move_speed()),
            None => {
                self.memory.lose_contact();
                let wander = Direction::ALL[self.rng.gen_range(0..Direction::ALL.len())];
                route(&self.memory, &self.chassis, wander, self.move_speed())
            }
        }
    }
}
