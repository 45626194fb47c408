//! Grid Snake - a grid-based snake simulation for a 3D renderer
//!
//! Core modules:
//! - `sim`: Deterministic simulation (grid state machine, spawning, fixed timestep)
//! - `game`: The host-facing facade (reset, tick, input, accessors)
//! - `settings`: Configuration constants and validation
//! - `view`: Renderer-agnostic interpolation and instance data
//! - `platform`: Browser/native platform abstraction

pub mod game;
pub mod platform;
pub mod settings;
pub mod sim;
pub mod view;

pub use game::{Game, GameError};
pub use settings::{ConfigError, GameConfig, Variant};

/// Game configuration constants
pub mod consts {
    /// Grid half-extent: cells span [-GRID_HALF, GRID_HALF] on both axes
    pub const GRID_HALF: i32 = 15;
    /// Seconds per discrete simulation step
    pub const STEP_SECONDS: f32 = 0.18;
    /// Food items active at the same time
    pub const FOOD_COUNT: usize = 3;
    /// 2x2 obstacles placed per episode
    pub const OBSTACLE_COUNT: usize = 3;

    /// Largest frame delta accepted per tick (stall catch-up bound)
    pub const MAX_FRAME_SECONDS: f32 = 1.0;
    /// Rejection-sampling attempts before a spawn is declared impossible
    pub const MAX_SPAWN_ATTEMPTS: u32 = 100_000;
    /// Largest accepted board half-extent
    pub const MAX_GRID_HALF: i32 = 1024;
}
