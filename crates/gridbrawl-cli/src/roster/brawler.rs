//! Hammer bruiser. Heavily armored and quick on its feet; it has to be, since
//! the hammer only reaches adjacent cells.

use gridbrawl_core::agent::RadarObservation;
use gridbrawl_core::{Agent, Chassis, Weapon};
use gridbrawl_grid::{Coord, Direction};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::{route, Memory};

const SPEED: u32 = 3;
const ARMOR: i32 = 4;

/// The `brawler` strategy.
#[derive(Debug)]
pub struct Brawler {
    chassis: Chassis,
    memory: Memory,
    idle_sweep: Direction,
    rng: ChaCha8Rng,
}

impl Brawler {
    /// Build a brawler; `seed` drives its wandering.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            chassis: Chassis::new("brawler", SPEED, ARMOR, Weapon::Hammer),
            memory: Memory::default(),
            idle_sweep: Direction::North,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

/// Registry factory.
pub fn build(seed: u64) -> Box<dyn Agent> {
    Box::new(Brawler::new(seed))
}

impl Agent for Brawler {
    fn chassis(&self) -> &Chassis {
        &self.chassis
    }

    fn chassis_mut(&mut self) -> &mut Chassis {
        &mut self.chassis
    }

    fn radar_direction(&mut self) -> u8 {
        let here = self.chassis.location();
        match self.memory.last_contact() {
            // Close enough to swing: make sure it is still there.
            Some(quarry) if here.chebyshev(quarry) <= 1 => 0,
            Some(quarry) => Direction::toward(here, quarry).map_or(0, Direction::index),
            None => {
                let current = self.idle_sweep;
                self.idle_sweep = current.turned(1);
                current.index()
            }
        }
    }

    fn process_radar_results(&mut self, observations: &[RadarObservation]) {
        self.memory.absorb(observations);
        // Refreshes the quarry; keeps the old one when nothing is in sight.
        let _ = self.memory.nearest_contact(self.chassis.location());
    }

    fn shot_location(&mut self) -> Option<Coord> {
        let here = self.chassis.location();
        self.memory
            .contacts()
            .iter()
            .copied()
            .find(|at| here.chebyshev(*at) == 1)
    }

    fn move_direction(&mut self) -> (u8, u32) {
        let here = self.chassis.location();
        if let Some(quarry) = self.memory.last_contact() {
            let gap = u32::try_from(here.chebyshev(quarry)).unwrap_or(0);
            if gap <= 1 {
                // Adjacent but not visible any more; it moved on.
                self.memory.lose_contact();
            } else if let Some(dir) = Direction::toward(here, quarry) {
                let limit = (gap - 1).min(self.move_speed());
                return route(&self.memory, &self.chassis, dir, limit);
            }
        }
        let wander = Direction::ALL[self.rng.gen_range(0..Direction::ALL.len())];
        route(&self.memory, &self.chassis, wander, self.move_speed())
    }
}
