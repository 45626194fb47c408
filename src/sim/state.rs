//! Game state and core simulation types
//!
//! Everything one episode owns lives in `GameState`. A reset builds a fresh
//! one; nothing carries over between episodes.

use std::collections::VecDeque;

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::cell::{Cell, Direction};
use super::input::InputRouter;
use super::occupancy::GridOccupancy;
use super::spawn::{SpawnError, SpawnPlanner};
use crate::settings::GameConfig;

/// Current phase of an episode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    Running,
    /// Terminal; steps are no-ops until reset
    GameOver,
}

/// Why the episode ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOverReason {
    HitWall,
    HitSelf,
    HitObstacle,
    /// No free cell left for replacement food
    BoardFull,
}

impl GameOverReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameOverReason::HitWall => "hit wall",
            GameOverReason::HitSelf => "hit itself",
            GameOverReason::HitObstacle => "hit obstacle",
            GameOverReason::BoardFull => "board full",
        }
    }
}

/// Something a step did, for the presentation layer to react to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Head advanced to a new cell
    Moved { head: Cell },
    /// Food at `cell` was eaten (score already incremented)
    AteFood { cell: Cell },
    /// Replacement food appeared
    FoodSpawned { cell: Cell },
    /// Episode ended
    GameOver { reason: GameOverReason },
}

/// A 2x2 block anchored at its minimum corner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Obstacle {
    pub base: Cell,
}

impl Obstacle {
    pub fn new(base: Cell) -> Self {
        Self { base }
    }

    /// Footprint: base, +X, +Z, +X+Z
    pub fn cells(&self) -> [Cell; 4] {
        let Cell { x, z } = self.base;
        [
            Cell::new(x, z),
            Cell::new(x + 1, z),
            Cell::new(x, z + 1),
            Cell::new(x + 1, z + 1),
        ]
    }

    pub fn covers(&self, cell: Cell) -> bool {
        (self.base.x..=self.base.x + 1).contains(&cell.x)
            && (self.base.z..=self.base.z + 1).contains(&cell.z)
    }
}

/// Serializable read-only copy of the discrete state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub snake: Vec<Cell>,
    pub foods: Vec<Cell>,
    pub obstacles: Vec<[Cell; 4]>,
    pub score: u32,
    pub phase: GamePhase,
    pub reason: Option<GameOverReason>,
    pub steps: u64,
    pub progress: f32,
}

/// Complete state of one episode
#[derive(Debug, Clone)]
pub struct GameState {
    /// Episode seed for reproducibility
    pub seed: u64,
    /// Board half-extent H
    pub grid_half: i32,
    /// Food count to maintain
    pub food_count: usize,
    /// Snake body, head first
    pub snake: VecDeque<Cell>,
    /// Active food cells
    pub foods: Vec<Cell>,
    /// Obstacles, fixed for the episode
    pub obstacles: Vec<Obstacle>,
    /// Pending/current heading
    pub input: InputRouter,
    pub score: u32,
    pub phase: GamePhase,
    /// Set exactly when `phase` becomes GameOver
    pub reason: Option<GameOverReason>,
    /// Completed moves this episode
    pub steps: u64,
    pub(crate) planner: SpawnPlanner,
    pub(crate) rng: Pcg32,
}

impl GameState {
    /// Start a fresh episode: one-cell snake at the origin heading +X, then
    /// food, then obstacles
    pub fn new(config: &GameConfig, seed: u64) -> Result<Self, SpawnError> {
        let mut state = Self::empty(config, seed);
        state.refill_food()?;
        for _ in 0..config.obstacle_count {
            let grid = GridOccupancy::new(&state.snake, &state.foods, &state.obstacles);
            let obstacle = state.planner.place_obstacle(&mut state.rng, &grid)?;
            state.obstacles.push(obstacle);
        }
        log::info!(
            "New episode (seed {}): food {:?}, obstacles {:?}",
            seed,
            state.foods,
            state.obstacles.iter().map(|o| o.base).collect::<Vec<_>>()
        );
        Ok(state)
    }

    /// Episode skeleton with no food or obstacles placed
    pub fn empty(config: &GameConfig, seed: u64) -> Self {
        Self {
            seed,
            grid_half: config.grid_half,
            food_count: config.food_count,
            snake: VecDeque::from(vec![Cell::ORIGIN]),
            foods: Vec::with_capacity(config.food_count),
            obstacles: Vec::with_capacity(config.obstacle_count),
            input: InputRouter::new(Direction::PlusX),
            score: 0,
            phase: GamePhase::Running,
            reason: None,
            steps: 0,
            planner: SpawnPlanner::new(config.grid_half),
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn head(&self) -> Cell {
        self.snake.front().copied().unwrap_or(Cell::ORIGIN)
    }

    pub fn occupancy(&self) -> GridOccupancy<'_> {
        GridOccupancy::new(&self.snake, &self.foods, &self.obstacles)
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    /// Place food until `food_count` are active. Returns the new cells.
    pub fn refill_food(&mut self) -> Result<Vec<Cell>, SpawnError> {
        let mut spawned = Vec::new();
        while self.foods.len() < self.food_count {
            let grid = GridOccupancy::new(&self.snake, &self.foods, &self.obstacles);
            let cell = self.planner.place_food(&mut self.rng, &grid)?;
            self.foods.push(cell);
            spawned.push(cell);
        }
        Ok(spawned)
    }

    /// Enter the terminal phase (first reason sticks)
    pub fn end(&mut self, reason: GameOverReason) {
        if self.phase == GamePhase::GameOver {
            return;
        }
        self.phase = GamePhase::GameOver;
        self.reason = Some(reason);
        log::info!(
            "Game over ({}) after {} steps, score {}",
            reason.as_str(),
            self.steps,
            self.score
        );
    }

    pub fn snapshot(&self, progress: f32) -> Snapshot {
        Snapshot {
            snake: self.snake.iter().copied().collect(),
            foods: self.foods.clone(),
            obstacles: self.obstacles.iter().map(Obstacle::cells).collect(),
            score: self.score,
            phase: self.phase,
            reason: self.reason,
            steps: self.steps,
            progress,
        }
    }
}
