//! State hashing for determinism verification.
//!
//! Two arenas built from the same seed and driven by the same agent behavior
//! must end every round with identical grid hashes.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::cell::Cell;
use crate::grid::Grid;

/// Compute a deterministic hash of grid state.
///
/// Covers the dimensions and every cell token in row-major order.
#[must_use]
pub fn hash_grid(grid: &Grid) -> u64 {
    let mut hasher = DefaultHasher::new();
    grid.bounds().hash(&mut hasher);
    for row in grid.rows() {
        for cell in row {
            hash_cell(*cell, &mut hasher);
        }
    }
    hasher.finish()
}

fn hash_cell<H: Hasher>(cell: Cell, hasher: &mut H) {
    match cell {
        Cell::Empty => 0u8.hash(hasher),
        Cell::Hazard(kind) => {
            1u8.hash(hasher);
            kind.hash(hasher);
        }
        Cell::Agent { id, alive } => {
            2u8.hash(hasher);
            id.as_u32().hash(hasher);
            alive.hash(hasher);
        }
    }
}
