//! Grid coordinates and movement directions
//!
//! The board is a square of cells on the XZ plane, centered on the origin.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// A single grid cell (x, z)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Cell {
    pub x: i32,
    pub z: i32,
}

impl Cell {
    pub const ORIGIN: Cell = Cell { x: 0, z: 0 };

    pub const fn new(x: i32, z: i32) -> Self {
        Self { x, z }
    }

    /// The neighbouring cell one step in `direction`
    #[inline]
    pub fn offset(self, direction: Direction) -> Cell {
        let (dx, dz) = direction.delta();
        Cell::new(self.x + dx, self.z + dz)
    }

    /// True if both coordinates lie within [-half, half]
    #[inline]
    pub fn in_bounds(self, half: i32) -> bool {
        (-half..=half).contains(&self.x) && (-half..=half).contains(&self.z)
    }

    pub fn manhattan(self, other: Cell) -> u32 {
        self.x.abs_diff(other.x) + self.z.abs_diff(other.z)
    }

    /// World-space center of this cell at the given height
    pub fn to_world(self, y: f32) -> Vec3 {
        Vec3::new(self.x as f32, y, self.z as f32)
    }
}

/// Heading of the snake, one unit along X or Z
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    PlusX,
    MinusX,
    PlusZ,
    MinusZ,
}

impl Direction {
    /// Unit vector (dx, dz)
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::PlusX => (1, 0),
            Direction::MinusX => (-1, 0),
            Direction::PlusZ => (0, 1),
            Direction::MinusZ => (0, -1),
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Direction::PlusX => Direction::MinusX,
            Direction::MinusX => Direction::PlusX,
            Direction::PlusZ => Direction::MinusZ,
            Direction::MinusZ => Direction::PlusZ,
        }
    }

    /// True if `other` is the exact reverse of this direction
    pub fn is_opposite(self, other: Direction) -> bool {
        self.opposite() == other
    }
}
