//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod cell;
pub mod clock;
pub mod input;
pub mod occupancy;
pub mod spawn;
pub mod state;
pub mod step;

pub use cell::{Cell, Direction};
pub use clock::SimulationClock;
pub use input::{DirectionInput, InputRouter};
pub use occupancy::{GridOccupancy, Occupant};
pub use spawn::{SpawnError, SpawnPlanner};
pub use state::{GameEvent, GameOverReason, GamePhase, GameState, Obstacle, Snapshot};
pub use step::step;
