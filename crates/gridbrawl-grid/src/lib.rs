//! # gridbrawl-grid
//!
//! Cell grid and trajectory geometry for the gridbrawl arena.
//!
//! This crate knows nothing about health, armor or turns. It provides:
//!
//! - **Cells**: a tagged token per grid position (empty, hazard, agent)
//! - **Grid**: a fixed row-major matrix with bounds-checked access and
//!   rejection-sampled placement
//! - **Trajectories**: pure geometry that turns a shot or radar sweep into the
//!   list of cells it touches
//! - **Hashing**: a deterministic digest of grid state for replay checks
//!
//! ## Quick Start
//!
//! ```
//! use gridbrawl_grid::{trajectory, Cell, Coord, Grid, Hazard};
//!
//! let mut grid = Grid::new(10, 10).unwrap();
//! grid.set(Coord::new(4, 4), Cell::Hazard(Hazard::Mound));
//!
//! // Grenade blast centered in the interior covers nine cells.
//! let blast = trajectory::grenade_radius(grid.bounds(), Coord::new(4, 4));
//! assert_eq!(blast.len(), 9);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod cell;
pub mod direction;
pub mod grid;
pub mod hash;
pub mod trajectory;

// Re-exports for convenience
pub use cell::{AgentId, Cell, Hazard};
pub use direction::Direction;
pub use grid::{Grid, GridError, Region};
pub use hash::hash_grid;

use std::fmt;

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// A signed `(row, col)` grid coordinate.
///
/// Coordinates are signed so geometry can describe positions that fall off
/// the edge of the grid before they are clipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Coord {
    /// Row index, 0 at the top.
    pub row: i32,
    /// Column index, 0 at the left.
    pub col: i32,
}

impl Coord {
    /// Create a coordinate.
    #[must_use]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Return this coordinate shifted by `(dr, dc)`.
    ///
    /// Saturates at the `i32` limits; such cells are never on a board.
    #[must_use]
    pub const fn offset(self, dr: i32, dc: i32) -> Self {
        Self {
            row: self.row.saturating_add(dr),
            col: self.col.saturating_add(dc),
        }
    }

    /// Chebyshev (king-move) distance to `other`, capped at `i32::MAX`.
    #[must_use]
    pub fn chebyshev(self, other: Self) -> i32 {
        let dr = (i64::from(self.row) - i64::from(other.row)).abs();
        let dc = (i64::from(self.col) - i64::from(other.col)).abs();
        i32::try_from(dr.max(dc)).unwrap_or(i32::MAX)
    }

    /// Convert to a continuous position, `x` = row and `y` = col.
    #[must_use]
    pub fn as_dvec2(self) -> DVec2 {
        DVec2::new(f64::from(self.row), f64::from(self.col))
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(i32, i32)> for Coord {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

/// Grid dimensions used by the trajectory engine.
///
/// Geometry only needs to know where the edges are, so trajectories take a
/// `Bounds` instead of the whole grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Bounds {
    /// Number of rows.
    pub height: i32,
    /// Number of columns.
    pub width: i32,
}

impl Bounds {
    /// Create bounds from dimensions.
    #[must_use]
    pub const fn new(height: i32, width: i32) -> Self {
        Self { height, width }
    }

    /// Check if a coordinate lies inside the grid.
    #[must_use]
    pub const fn contains(&self, at: Coord) -> bool {
        at.row >= 0 && at.row < self.height && at.col >= 0 && at.col < self.width
    }

    /// Check if a coordinate lies inside the grid but off the outermost ring.
    #[must_use]
    pub const fn is_interior(&self, at: Coord) -> bool {
        at.row >= 1 && at.row < self.height - 1 && at.col >= 1 && at.col < self.width - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coord_offset() {
        assert_eq!(Coord::new(3, 4).offset(-1, 2), Coord::new(2, 6));
    }

    #[test]
    fn test_coord_offset_saturates() {
        let corner = Coord::new(i32::MAX, i32::MIN);
        assert_eq!(corner.offset(1, -1), corner);
        assert_eq!(Coord::new(i32::MIN, 0).offset(-1, 1), Coord::new(i32::MIN, 1));
    }

    #[test]
    fn test_coord_chebyshev() {
        let origin = Coord::new(5, 5);
        assert_eq!(origin.chebyshev(origin), 0);
        assert_eq!(origin.chebyshev(Coord::new(6, 4)), 1);
        assert_eq!(origin.chebyshev(Coord::new(7, 6)), 2);
    }

    #[test]
    fn test_coord_chebyshev_extremes() {
        let near = Coord::new(2, 2);
        assert_eq!(near.chebyshev(Coord::new(i32::MIN, 0)), i32::MAX);
        assert_eq!(near.chebyshev(Coord::new(i32::MAX, i32::MAX)), i32::MAX - 2);
        assert_eq!(
            Coord::new(i32::MIN, 0).chebyshev(Coord::new(i32::MAX, 0)),
            i32::MAX
        );
    }

    #[test]
    fn test_bounds_contains() {
        let bounds = Bounds::new(3, 4);
        assert!(bounds.contains(Coord::new(0, 0)));
        assert!(bounds.contains(Coord::new(2, 3)));
        assert!(!bounds.contains(Coord::new(3, 0)));
        assert!(!bounds.contains(Coord::new(0, 4)));
        assert!(!bounds.contains(Coord::new(-1, 0)));
    }

    #[test]
    fn test_bounds_interior() {
        let bounds = Bounds::new(4, 4);
        assert!(bounds.is_interior(Coord::new(1, 1)));
        assert!(bounds.is_interior(Coord::new(2, 2)));
        assert!(!bounds.is_interior(Coord::new(0, 2)));
        assert!(!bounds.is_interior(Coord::new(3, 2)));
    }

    #[test]
    fn test_coord_display() {
        assert_eq!(Coord::new(1, -2).to_string(), "(1, -2)");
    }
}
