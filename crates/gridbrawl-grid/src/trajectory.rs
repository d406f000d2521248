//! Trajectory geometry.
//!
//! Pure functions that turn a shot or radar sweep into the ordered list of
//! cells it touches. Nothing here reads or writes cell contents; callers pass
//! the grid [`Bounds`] and decide what to do with each cell.
//!
//! # Rounding
//!
//! Continuous samples snap to cells with [`f64::round`], which rounds
//! half-way cases away from zero: `0.5 → 1`, `-0.5 → -1`, `2.5 → 3`.
//!
//! # Duplicates
//!
//! The flame strip and the radar strip may yield the same cell more than once
//! for a single action. Those duplicates are kept: each occurrence is a
//! separate hit or observation. Only the railgun suppresses repeats, and only
//! consecutive ones.

use glam::DVec2;

use crate::direction::Direction;
use crate::{Bounds, Coord};

/// Number of unit steps a flamethrower reaches.
pub const FLAME_REACH: i32 = 4;

/// Distance advanced per railgun sample, in cells.
pub const RAIL_STEP: f64 = 0.25;

/// Strip offsets sampled across the direction of travel.
const STRIP: [i32; 3] = [-1, 0, 1];

/// Snap a continuous position (`x` = row, `y` = col) to its cell.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn round_to_cell(pos: DVec2) -> Coord {
    Coord::new(pos.x.round() as i32, pos.y.round() as i32)
}

/// The 3×3 block centered on `target`, clipped to the grid, row-major.
#[must_use]
pub fn grenade_radius(bounds: Bounds, target: Coord) -> Vec<Coord> {
    let mut cells = Vec::with_capacity(9);
    for dr in -1..=1 {
        for dc in -1..=1 {
            let at = target.offset(dr, dc);
            if bounds.contains(at) {
                cells.push(at);
            }
        }
    }
    cells
}

/// Cells scorched by a flamethrower aimed from `from` toward `to`.
///
/// Four unit steps along the normalized direction, each sampling a 3-wide
/// strip perpendicular to it. Returns nothing when `from == to`.
#[must_use]
pub fn flame_path(bounds: Bounds, from: Coord, to: Coord) -> Vec<Coord> {
    let origin = from.as_dvec2();
    let Some(dir) = (to.as_dvec2() - origin).try_normalize() else {
        return Vec::new();
    };
    let perp = dir.perp();

    let mut cells = Vec::with_capacity(12);
    for step in 1..=FLAME_REACH {
        let center = origin + dir * f64::from(step);
        for w in STRIP {
            let at = round_to_cell(center + perp * f64::from(w));
            if bounds.contains(at) {
                cells.push(at);
            }
        }
    }
    cells
}

/// Cells pierced by a railgun fired from `from` toward `to`.
///
/// The shot marches in [`RAIL_STEP`] increments and stops at the first
/// sample that leaves the grid, so it always runs to the edge regardless of
/// how far away `to` is. A cell is recorded only when it differs from the
/// previous one; the shooter's own cell counts as the starting "previous" and
/// is never recorded. Returns nothing when `from == to`.
#[must_use]
pub fn railgun_path(bounds: Bounds, from: Coord, to: Coord) -> Vec<Coord> {
    let mut pos = from.as_dvec2();
    let Some(dir) = (to.as_dvec2() - pos).try_normalize() else {
        return Vec::new();
    };
    let step = dir * RAIL_STEP;

    let mut cells = Vec::new();
    let mut last = from;
    loop {
        pos += step;
        let at = round_to_cell(pos);
        if !bounds.contains(at) {
            break;
        }
        if at != last {
            cells.push(at);
            last = at;
        }
    }
    cells
}

/// The cell a hammer swing from `from` lands on, if `to` is a legal target.
///
/// Legal means inside the grid and exactly one king-move away.
#[must_use]
pub fn hammer_target(bounds: Bounds, from: Coord, to: Coord) -> Option<Coord> {
    (from.chebyshev(to) == 1 && bounds.contains(to)).then_some(to)
}

/// Cells covered by a radar sweep from `origin`.
///
/// - `0`: the eight neighbors, row-major, clipped to the grid.
/// - `1..=8`: march along the [`Direction`] until the center leaves the
///   grid, sampling a 3-wide perpendicular strip at every step.
/// - anything else: nothing.
#[must_use]
pub fn radar_sweep(bounds: Bounds, origin: Coord, direction: u8) -> Vec<Coord> {
    if direction == 0 {
        return neighbors(bounds, origin);
    }
    let Some(dir) = Direction::from_index(direction) else {
        return Vec::new();
    };

    let (dr, dc) = dir.offset();
    let (pr, pc) = (-dc, dr);

    let mut cells = Vec::new();
    let mut center = origin;
    loop {
        center = center.offset(dr, dc);
        if !bounds.contains(center) {
            break;
        }
        for w in STRIP {
            let at = center.offset(pr * w, pc * w);
            if bounds.contains(at) {
                cells.push(at);
            }
        }
    }
    cells
}

/// The up-to-eight cells around `origin`, row-major.
#[must_use]
pub fn neighbors(bounds: Bounds, origin: Coord) -> Vec<Coord> {
    let mut cells = Vec::with_capacity(8);
    for dr in -1..=1 {
        for dc in -1..=1 {
            if dr == 0 && dc == 0 {
                continue;
            }
            let at = origin.offset(dr, dc);
            if bounds.contains(at) {
                cells.push(at);
            }
        }
    }
    cells
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn c(row: i32, col: i32) -> Coord {
        Coord::new(row, col)
    }

    mod rounding_tests {
        use super::*;

        #[test]
        fn half_rounds_away_from_zero() {
            assert_eq!(round_to_cell(DVec2::new(0.5, -0.5)), c(1, -1));
            assert_eq!(round_to_cell(DVec2::new(2.5, 1.49)), c(3, 1));
            assert_eq!(round_to_cell(DVec2::new(-1.5, 0.0)), c(-2, 0));
        }
    }

    mod grenade_tests {
        use super::*;

        #[test]
        fn interior_blast_is_full_block() {
            let cells = grenade_radius(Bounds::new(10, 10), c(5, 5));
            let mut expected = Vec::new();
            for r in 4..=6 {
                for col in 4..=6 {
                    expected.push(c(r, col));
                }
            }
            assert_eq!(cells, expected);
        }

        #[test]
        fn corner_blast_is_clipped() {
            let cells = grenade_radius(Bounds::new(10, 10), c(0, 0));
            assert_eq!(cells, vec![c(0, 0), c(0, 1), c(1, 0), c(1, 1)]);
        }

        #[test]
        fn extreme_target_is_empty() {
            assert!(grenade_radius(Bounds::new(5, 5), c(i32::MAX, i32::MAX)).is_empty());
            assert!(grenade_radius(Bounds::new(5, 5), c(i32::MIN, 0)).is_empty());
        }

        #[test]
        fn off_grid_target_keeps_overlap() {
            let cells = grenade_radius(Bounds::new(5, 5), c(-1, 2));
            assert_eq!(cells, vec![c(0, 1), c(0, 2), c(0, 3)]);
        }
    }

    mod flame_tests {
        use super::*;

        #[test]
        fn zero_length_is_empty() {
            assert!(flame_path(Bounds::new(10, 10), c(3, 3), c(3, 3)).is_empty());
        }

        #[test]
        fn straight_east_sweeps_three_rows() {
            let cells = flame_path(Bounds::new(10, 10), c(5, 0), c(5, 9));
            // perp of (0, 1) is (-1, 0): rows 6, 5, 4 at each step
            let mut expected = Vec::new();
            for col in 1..=4 {
                expected.extend([c(6, col), c(5, col), c(4, col)]);
            }
            assert_eq!(cells, expected);
        }

        #[test]
        fn reach_is_independent_of_target_distance() {
            let near = flame_path(Bounds::new(20, 20), c(10, 10), c(10, 11));
            let far = flame_path(Bounds::new(20, 20), c(10, 10), c(10, 19));
            assert_eq!(near, far);
            assert_eq!(near.len(), 12);
        }

        #[test]
        fn edge_strip_is_clipped() {
            // Along the top row the -1 side of the strip is off the grid.
            let cells = flame_path(Bounds::new(10, 10), c(0, 0), c(0, 5));
            assert_eq!(cells.len(), 8);
            assert!(cells.iter().all(|at| at.row >= 0));
        }

        #[test]
        fn diagonal_strip_keeps_duplicates() {
            let cells = flame_path(Bounds::new(20, 20), c(10, 10), c(14, 14));
            assert_eq!(cells.len(), 12);
            let mut unique = cells.clone();
            unique.sort();
            unique.dedup();
            assert!(unique.len() < cells.len(), "diagonal strips overlap");
        }

        #[test]
        fn never_touches_shooter() {
            for (tr, tc) in [(0, 5), (5, 0), (9, 9), (0, 0), (2, 8)] {
                let cells = flame_path(Bounds::new(10, 10), c(5, 5), c(tr, tc));
                assert!(!cells.contains(&c(5, 5)));
            }
        }
    }

    mod railgun_tests {
        use super::*;

        #[test]
        fn first_sample_on_own_cell_is_skipped() {
            // 0.25 east still rounds to the shooter's cell.
            let cells = railgun_path(Bounds::new(3, 3), c(1, 0), c(1, 2));
            assert_eq!(cells, vec![c(1, 1), c(1, 2)]);
        }

        #[test]
        fn zero_length_is_empty() {
            assert!(railgun_path(Bounds::new(10, 10), c(2, 2), c(2, 2)).is_empty());
        }

        #[test]
        fn along_top_row() {
            let cells = railgun_path(Bounds::new(1, 6), c(0, 0), c(0, 5));
            assert_eq!(cells, vec![c(0, 1), c(0, 2), c(0, 3), c(0, 4), c(0, 5)]);
        }

        #[test]
        fn runs_past_target_to_edge() {
            let cells = railgun_path(Bounds::new(10, 10), c(0, 0), c(0, 2));
            assert_eq!(cells.last(), Some(&c(0, 9)));
            assert_eq!(cells.len(), 9);
        }

        #[test]
        fn diagonal_has_no_consecutive_repeats() {
            let cells = railgun_path(Bounds::new(10, 10), c(0, 0), c(3, 7));
            assert!(!cells.is_empty());
            assert!(cells.windows(2).all(|w| w[0] != w[1]));
            assert!(!cells.contains(&c(0, 0)));
        }

        #[test]
        fn westward_stops_at_edge() {
            let cells = railgun_path(Bounds::new(5, 5), c(2, 2), c(2, 0));
            assert_eq!(cells, vec![c(2, 1), c(2, 0)]);
        }
    }

    mod hammer_tests {
        use super::*;

        #[test]
        fn adjacent_targets_are_legal() {
            let bounds = Bounds::new(5, 5);
            for (dr, dc) in [(-1, -1), (-1, 0), (0, 1), (1, 1)] {
                let to = c(2 + dr, 2 + dc);
                assert_eq!(hammer_target(bounds, c(2, 2), to), Some(to));
            }
        }

        #[test]
        fn own_cell_and_distance_two_rejected() {
            let bounds = Bounds::new(5, 5);
            assert_eq!(hammer_target(bounds, c(2, 2), c(2, 2)), None);
            assert_eq!(hammer_target(bounds, c(2, 2), c(4, 2)), None);
            assert_eq!(hammer_target(bounds, c(2, 2), c(0, 3)), None);
        }

        #[test]
        fn off_grid_rejected() {
            assert_eq!(hammer_target(Bounds::new(5, 5), c(0, 0), c(-1, 0)), None);
        }

        #[test]
        fn extreme_targets_rejected() {
            let bounds = Bounds::new(5, 5);
            assert_eq!(hammer_target(bounds, c(2, 2), c(i32::MIN, 0)), None);
            assert_eq!(hammer_target(bounds, c(2, 2), c(i32::MAX, i32::MAX)), None);
        }
    }

    mod radar_tests {
        use super::*;

        #[test]
        fn direction_zero_is_neighbors() {
            let cells = radar_sweep(Bounds::new(5, 5), c(2, 2), 0);
            assert_eq!(cells.len(), 8);
            assert!(!cells.contains(&c(2, 2)));
        }

        #[test]
        fn corner_neighbors_clipped() {
            let cells = radar_sweep(Bounds::new(5, 5), c(0, 0), 0);
            assert_eq!(cells, vec![c(0, 1), c(1, 0), c(1, 1)]);
        }

        #[test]
        fn north_sweep_is_three_wide() {
            // perp of (-1, 0) is (0, -1): cols 3, 2, 1 at each row
            let cells = radar_sweep(Bounds::new(5, 5), c(3, 2), 1);
            assert_eq!(
                cells,
                vec![
                    c(2, 3),
                    c(2, 2),
                    c(2, 1),
                    c(1, 3),
                    c(1, 2),
                    c(1, 1),
                    c(0, 3),
                    c(0, 2),
                    c(0, 1),
                ]
            );
        }

        #[test]
        fn sweep_stops_when_center_leaves() {
            assert!(radar_sweep(Bounds::new(5, 5), c(0, 2), 1).is_empty());
        }

        #[test]
        fn invalid_direction_is_empty() {
            assert!(radar_sweep(Bounds::new(5, 5), c(2, 2), 9).is_empty());
        }

        #[test]
        fn diagonal_sweep_strip() {
            // NE step (-1, 1), perp (-1, -1)
            let cells = radar_sweep(Bounds::new(6, 6), c(4, 1), 2);
            assert_eq!(&cells[..3], &[c(4, 3), c(3, 2), c(2, 1)]);
        }
    }

    proptest! {
        #[test]
        fn paths_stay_in_bounds(
            h in 1i32..30, w in 1i32..30,
            fr in 0i32..30, fc in 0i32..30,
            tr in -5i32..35, tc in -5i32..35,
            dir in 0u8..10,
        ) {
            let bounds = Bounds::new(h, w);
            let from = c(fr % h, fc % w);
            let to = c(tr, tc);
            for at in flame_path(bounds, from, to) {
                prop_assert!(bounds.contains(at));
            }
            for at in railgun_path(bounds, from, to) {
                prop_assert!(bounds.contains(at));
            }
            for at in grenade_radius(bounds, to) {
                prop_assert!(bounds.contains(at));
            }
            for at in radar_sweep(bounds, from, dir) {
                prop_assert!(bounds.contains(at));
            }
        }

        #[test]
        fn railgun_never_repeats_or_hits_shooter(
            fr in 0i32..20, fc in 0i32..20, tr in 0i32..20, tc in 0i32..20,
        ) {
            let cells = railgun_path(Bounds::new(20, 20), c(fr, fc), c(tr, tc));
            prop_assert!(cells.windows(2).all(|w| w[0] != w[1]));
            prop_assert!(!cells.contains(&c(fr, fc)));
        }

        #[test]
        fn any_target_is_safe(
            fr in 0i32..10, fc in 0i32..10,
            tr in any::<i32>(), tc in any::<i32>(),
        ) {
            let bounds = Bounds::new(10, 10);
            let from = c(fr, fc);
            let to = c(tr, tc);
            prop_assert!(grenade_radius(bounds, to).iter().all(|at| bounds.contains(*at)));
            prop_assert!(flame_path(bounds, from, to).iter().all(|at| bounds.contains(*at)));
            prop_assert!(railgun_path(bounds, from, to).iter().all(|at| bounds.contains(*at)));
            if let Some(at) = hammer_target(bounds, from, to) {
                prop_assert_eq!(from.chebyshev(at), 1);
            }
        }
    }
}
