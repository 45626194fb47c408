//! Occupancy queries over the current board contents
//!
//! Borrows the live collections at call time, so answers are never stale.

use std::collections::VecDeque;

use super::cell::Cell;
use super::state::Obstacle;

/// What is sitting on a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Occupant {
    Snake,
    Obstacle,
    Food,
}

/// Read-only view of snake, food and obstacles
#[derive(Debug, Clone, Copy)]
pub struct GridOccupancy<'a> {
    snake: &'a VecDeque<Cell>,
    foods: &'a [Cell],
    obstacles: &'a [Obstacle],
}

impl<'a> GridOccupancy<'a> {
    pub fn new(snake: &'a VecDeque<Cell>, foods: &'a [Cell], obstacles: &'a [Obstacle]) -> Self {
        Self {
            snake,
            foods,
            obstacles,
        }
    }

    pub fn snake_contains(&self, cell: Cell) -> bool {
        self.snake.contains(&cell)
    }

    pub fn obstacle_contains(&self, cell: Cell) -> bool {
        self.obstacles.iter().any(|o| o.covers(cell))
    }

    pub fn food_contains(&self, cell: Cell) -> bool {
        self.foods.contains(&cell)
    }

    /// Category occupying `cell`, if any (snake, then obstacle, then food)
    pub fn occupant(&self, cell: Cell) -> Option<Occupant> {
        if self.snake_contains(cell) {
            Some(Occupant::Snake)
        } else if self.obstacle_contains(cell) {
            Some(Occupant::Obstacle)
        } else if self.food_contains(cell) {
            Some(Occupant::Food)
        } else {
            None
        }
    }

    #[inline]
    pub fn is_free(&self, cell: Cell) -> bool {
        self.occupant(cell).is_none()
    }
}
