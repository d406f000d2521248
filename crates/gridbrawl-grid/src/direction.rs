//! Compass directions.
//!
//! Agents report directions as integers 1–8, starting at north and turning
//! clockwise. Radar additionally accepts 0 for "all neighbors", which is not a
//! [`Direction`].

use serde::{Deserialize, Serialize};

use crate::Coord;

/// One of the eight king-move directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Direction {
    /// Up (row - 1)
    North = 1,
    /// Up and right
    NorthEast = 2,
    /// Right (col + 1)
    East = 3,
    /// Down and right
    SouthEast = 4,
    /// Down (row + 1)
    South = 5,
    /// Down and left
    SouthWest = 6,
    /// Left (col - 1)
    West = 7,
    /// Up and left
    NorthWest = 8,
}

impl Direction {
    /// All directions in index order.
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    /// Decode an agent-supplied index. Anything outside 1–8 is `None`.
    #[must_use]
    pub const fn from_index(index: u8) -> Option<Self> {
        match index {
            1 => Some(Self::North),
            2 => Some(Self::NorthEast),
            3 => Some(Self::East),
            4 => Some(Self::SouthEast),
            5 => Some(Self::South),
            6 => Some(Self::SouthWest),
            7 => Some(Self::West),
            8 => Some(Self::NorthWest),
            _ => None,
        }
    }

    /// The 1–8 index of this direction.
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Unit `(row, col)` step.
    #[must_use]
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Self::North => (-1, 0),
            Self::NorthEast => (-1, 1),
            Self::East => (0, 1),
            Self::SouthEast => (1, 1),
            Self::South => (1, 0),
            Self::SouthWest => (1, -1),
            Self::West => (0, -1),
            Self::NorthWest => (-1, -1),
        }
    }

    /// The direction pointing the other way.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::NorthEast => Self::SouthWest,
            Self::East => Self::West,
            Self::SouthEast => Self::NorthWest,
            Self::South => Self::North,
            Self::SouthWest => Self::NorthEast,
            Self::West => Self::East,
            Self::NorthWest => Self::SouthEast,
        }
    }

    /// Rotate clockwise by `steps` eighth-turns.
    #[must_use]
    pub const fn turned(self, steps: u8) -> Self {
        Self::ALL[((self.index() - 1 + steps % 8) % 8) as usize]
    }

    /// The direction whose step most directly closes the gap from `from` to
    /// `to`, or `None` when they coincide.
    #[must_use]
    pub fn toward(from: Coord, to: Coord) -> Option<Self> {
        let step = (to.row.cmp(&from.row) as i32, to.col.cmp(&from.col) as i32);
        Self::ALL.into_iter().find(|dir| dir.offset() == step)
    }
}
