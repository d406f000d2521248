//! The cell matrix.
//!
//! A [`Grid`] is allocated once with fixed dimensions and every position
//! starts [`Cell::Empty`]. Access is bounds-checked: reads outside the grid
//! return `None` and writes outside the grid are a caller bug, caught by a
//! debug assertion and ignored in release builds.

use std::ops::Range;

use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cell::{AgentId, Cell};
use crate::{Bounds, Coord};

/// Errors raised while building a grid.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// One of the dimensions is zero.
    #[error("grid dimensions must be non-zero, got {height}x{width}")]
    ZeroDimension {
        /// Requested rows.
        height: usize,
        /// Requested columns.
        width: usize,
    },
    /// The grid would not be addressable with `i32` coordinates.
    #[error("grid dimensions {height}x{width} exceed the coordinate range")]
    TooLarge {
        /// Requested rows.
        height: usize,
        /// Requested columns.
        width: usize,
    },
}

/// Where placement sampling may pick a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    /// Anywhere except the outermost ring.
    Interior,
    /// Any cell.
    Anywhere,
}

/// Fixed `height × width` matrix of cells, row-major, 0-indexed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    bounds: Bounds,
    cells: Vec<Cell>,
}

impl Grid {
    /// Allocate an all-empty grid.
    ///
    /// # Errors
    ///
    /// Returns [`GridError`] if either dimension is zero or too large for
    /// signed coordinates.
    pub fn new(height: usize, width: usize) -> Result<Self, GridError> {
        if height == 0 || width == 0 {
            return Err(GridError::ZeroDimension { height, width });
        }
        let (Ok(h), Ok(w)) = (i32::try_from(height), i32::try_from(width)) else {
            return Err(GridError::TooLarge { height, width });
        };
        let Some(count) = height.checked_mul(width) else {
            return Err(GridError::TooLarge { height, width });
        };
        Ok(Self {
            bounds: Bounds::new(h, w),
            cells: vec![Cell::Empty; count],
        })
    }

    /// Grid edges, for trajectory computations.
    #[must_use]
    pub const fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Number of rows.
    #[must_use]
    pub const fn height(&self) -> i32 {
        self.bounds.height
    }

    /// Number of columns.
    #[must_use]
    pub const fn width(&self) -> i32 {
        self.bounds.width
    }

    /// Total number of cells.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Number of cells off the outermost ring.
    #[must_use]
    pub fn interior_count(&self) -> usize {
        let rows = usize::try_from(self.bounds.height - 2).unwrap_or(0);
        let cols = usize::try_from(self.bounds.width - 2).unwrap_or(0);
        rows * cols
    }

    /// Check if a coordinate lies inside the grid.
    #[must_use]
    pub const fn in_bounds(&self, at: Coord) -> bool {
        self.bounds.contains(at)
    }

    #[allow(clippy::cast_sign_loss)]
    fn index(&self, at: Coord) -> Option<usize> {
        if self.in_bounds(at) {
            // Both components are non-negative once bounds-checked.
            Some(at.row as usize * self.bounds.width as usize + at.col as usize)
        } else {
            None
        }
    }

    /// The token at `at`, or `None` outside the grid.
    #[must_use]
    pub fn get(&self, at: Coord) -> Option<Cell> {
        self.index(at).map(|i| self.cells[i])
    }

    /// Overwrite the token at `at`.
    ///
    /// Writing outside the grid is a caller bug.
    pub fn set(&mut self, at: Coord, cell: Cell) {
        debug_assert!(self.in_bounds(at), "grid write out of bounds at {at}");
        match self.index(at) {
            Some(i) => self.cells[i] = cell,
            None => tracing::warn!(%at, "ignored grid write outside bounds"),
        }
    }

    /// True when `at` is inside the grid and holds anything but
    /// [`Cell::Empty`].
    #[must_use]
    pub fn is_occupied(&self, at: Coord) -> bool {
        self.get(at).is_some_and(|cell| !cell.is_empty())
    }

    /// Rows as slices, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        let width = usize::try_from(self.bounds.width).unwrap_or(1);
        self.cells.chunks(width)
    }

    /// Every `(coord, cell)` pair in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, Cell)> + '_ {
        let width = self.bounds.width;
        self.cells.iter().enumerate().map(move |(i, cell)| {
            #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
            let i = i as i32;
            (Coord::new(i / width, i % width), *cell)
        })
    }

    /// Where the token for `id` sits, live or not.
    #[must_use]
    pub fn find_agent(&self, id: AgentId) -> Option<Coord> {
        self.iter()
            .find(|(_, cell)| cell.agent() == Some(id))
            .map(|(at, _)| at)
    }

    /// Number of tokens belonging to `id`.
    #[must_use]
    pub fn count_agent(&self, id: AgentId) -> usize {
        self.cells.iter().filter(|c| c.agent() == Some(id)).count()
    }

    fn region_ranges(&self, region: Region) -> (Range<i32>, Range<i32>) {
        match region {
            Region::Interior => (1..self.bounds.height - 1, 1..self.bounds.width - 1),
            Region::Anywhere => (0..self.bounds.height, 0..self.bounds.width),
        }
    }

    /// Number of empty cells inside `region`.
    #[must_use]
    pub fn empty_in(&self, region: Region) -> usize {
        self.iter()
            .filter(|(at, cell)| {
                cell.is_empty()
                    && match region {
                        Region::Interior => self.bounds.is_interior(*at),
                        Region::Anywhere => true,
                    }
            })
            .count()
    }

    /// Pick an empty cell uniformly at random from `region` by rejection
    /// sampling.
    ///
    /// Returns `None` when the region has no empty cell, so sampling always
    /// terminates.
    pub fn sample_empty<R: Rng + ?Sized>(&self, rng: &mut R, region: Region) -> Option<Coord> {
        let (rows, cols) = self.region_ranges(region);
        if rows.is_empty() || cols.is_empty() || self.empty_in(region) == 0 {
            return None;
        }
        loop {
            let at = Coord::new(rng.gen_range(rows.clone()), rng.gen_range(cols.clone()));
            if self.get(at) == Some(Cell::Empty) {
                return Some(at);
            }
        }
    }
}
