//! Railgun sniper.
//!
//! Turns its radar one eighth clockwise every turn, so a full lap takes eight
//! turns. Fires at the nearest live contact; with nothing in sight it keeps a
//! heading until something blocks it, then picks a new one at random.

use gridbrawl_core::agent::RadarObservation;
use gridbrawl_core::{Agent, Chassis, Weapon};
use gridbrawl_grid::{Coord, Direction};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::{route, safe_steps, Memory};

const SPEED: u32 = 2;
const ARMOR: i32 = 2;

/// The `sweeper` strategy.
#[derive(Debug)]
pub struct Sweeper {
    chassis: Chassis,
    memory: Memory,
    sweep: Direction,
    heading: Direction,
    rng: ChaCha8Rng,
}

impl Sweeper {
    /// Build a sweeper; `seed` picks its opening heading and later turns.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let heading = Direction::ALL[rng.gen_range(0..Direction::ALL.len())];
        Self {
            chassis: Chassis::new("sweeper", SPEED, ARMOR, Weapon::Railgun),
            memory: Memory::default(),
            sweep: Direction::North,
            heading,
            rng,
        }
    }
}

/// Registry factory.
pub fn build(seed: u64) -> Box<dyn Agent> {
    Box::new(Sweeper::new(seed))
}

impl Agent for Sweeper {
    fn chassis(&self) -> &Chassis {
        &self.chassis
    }

    fn chassis_mut(&mut self) -> &mut Chassis {
        &mut self.chassis
    }

    fn radar_direction(&mut self) -> u8 {
        let current = self.sweep;
        self.sweep = current.turned(1);
        current.index()
    }

    fn process_radar_results(&mut self, observations: &[RadarObservation]) {
        self.memory.absorb(observations);
    }

    fn shot_location(&mut self) -> Option<Coord> {
        self.memory.nearest_contact(self.chassis.location())
    }

    fn move_direction(&mut self) -> (u8, u32) {
        if safe_steps(&self.memory, &self.chassis, self.heading, 1) == 0 {
            self.heading = self.heading.turned(self.rng.gen_range(1..8));
        }
        let limit = self.move_speed();
        let (direction, distance) = route(&self.memory, &self.chassis, self.heading, limit);
        if let Some(dir) = Direction::from_index(direction) {
            self.heading = dir;
        }
        (direction, distance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridbrawl_core::ObservedKind;

    fn placed(seed: u64, row: i32, col: i32) -> Sweeper {
        let mut sweeper = Sweeper::new(seed);
        sweeper.set_boundaries(10, 10);
        sweeper.move_to(Coord::new(row, col));
        sweeper
    }

    #[test]
    fn radar_laps_the_compass() {
        let mut sweeper = Sweeper::new(0);
        let lap: Vec<u8> = (0..9).map(|_| sweeper.radar_direction()).collect();
        assert_eq!(lap, vec![1, 2, 3, 4, 5, 6, 7, 8, 1]);
    }

    #[test]
    fn fires_at_nearest_contact() {
        let mut sweeper = placed(3, 5, 5);
        sweeper.process_radar_results(&[
            RadarObservation::new(ObservedKind::Agent, Coord::new(0, 5)),
            RadarObservation::new(ObservedKind::Pit, Coord::new(4, 5)),
            RadarObservation::new(ObservedKind::Agent, Coord::new(3, 5)),
        ]);
        assert_eq!(sweeper.shot_location(), Some(Coord::new(3, 5)));
    }

    #[test]
    fn wrecks_are_not_targets() {
        let mut sweeper = placed(3, 5, 5);
        sweeper.process_radar_results(&[RadarObservation::new(
            ObservedKind::Wreck,
            Coord::new(4, 5),
        )]);
        assert_eq!(sweeper.shot_location(), None);
    }

    #[test]
    fn moves_stay_on_board_and_off_hazards() {
        for seed in 0..16 {
            let mut sweeper = placed(seed, 0, 0);
            sweeper.process_radar_results(&[RadarObservation::new(
                ObservedKind::Flame,
                Coord::new(1, 1),
            )]);
            let (direction, distance) = sweeper.move_direction();
            let dir = Direction::from_index(direction).unwrap();
            assert!((1..=SPEED).contains(&distance));
            assert!(matches!(dir, Direction::East | Direction::South));
        }
    }

    #[test]
    fn disabled_sweeper_stays_put() {
        let mut sweeper = placed(5, 5, 5);
        sweeper.disable_movement();
        assert_eq!(sweeper.move_direction(), (0, 0));
    }
}
