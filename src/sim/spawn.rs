//! Procedural placement of food and obstacles
//!
//! Plain rejection sampling: draw a uniformly random candidate, throw it away
//! if it overlaps anything, try again. Each loop is capped so an over-full
//! board surfaces as an error instead of spinning forever.

use rand::Rng;
use thiserror::Error;

use super::cell::Cell;
use super::occupancy::GridOccupancy;
use super::state::Obstacle;
use crate::consts::MAX_SPAWN_ATTEMPTS;

/// Spawn failure (the board has no room for the requested entity)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SpawnError {
    #[error("no free cell for food after {attempts} attempts")]
    FoodExhausted { attempts: u32 },
    #[error("no free 2x2 footprint for an obstacle after {attempts} attempts")]
    ObstacleExhausted { attempts: u32 },
}

/// Rejection sampler bound to one board size
#[derive(Debug, Clone, Copy)]
pub struct SpawnPlanner {
    grid_half: i32,
    max_attempts: u32,
}

impl SpawnPlanner {
    pub fn new(grid_half: i32) -> Self {
        Self {
            grid_half,
            max_attempts: MAX_SPAWN_ATTEMPTS,
        }
    }

    #[cfg(test)]
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Pick a free cell anywhere in [-H, H]²
    pub fn place_food<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        grid: &GridOccupancy<'_>,
    ) -> Result<Cell, SpawnError> {
        let h = self.grid_half;
        for _ in 0..self.max_attempts {
            let cell = Cell::new(rng.random_range(-h..=h), rng.random_range(-h..=h));
            if grid.is_free(cell) {
                return Ok(cell);
            }
        }
        log::error!("Food placement gave up after {} attempts", self.max_attempts);
        Err(SpawnError::FoodExhausted {
            attempts: self.max_attempts,
        })
    }

    /// Pick a base in [-H, H-1]² whose whole 2x2 footprint is free
    pub fn place_obstacle<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        grid: &GridOccupancy<'_>,
    ) -> Result<Obstacle, SpawnError> {
        let h = self.grid_half;
        if h >= 1 {
            for _ in 0..self.max_attempts {
                let base = Cell::new(rng.random_range(-h..h), rng.random_range(-h..h));
                let obstacle = Obstacle::new(base);
                if obstacle.cells().iter().all(|&c| grid.is_free(c)) {
                    return Ok(obstacle);
                }
            }
        }
        log::error!(
            "Obstacle placement gave up after {} attempts",
            self.max_attempts
        );
        Err(SpawnError::ObstacleExhausted {
            attempts: self.max_attempts,
        })
    }
}
