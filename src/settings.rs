//! Game configuration
//!
//! Board size, simulation speed and spawn density. Fixed for an episode type;
//! a host may load it from JSON before creating a game.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Presentation variant. Both share the same simulation core; the host picks
/// materials and lighting from this tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Variant {
    /// Flat shading, dark background
    #[default]
    Prototype,
    /// Textured ground, shadows, sky background
    Full,
}

impl Variant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::Prototype => "Prototype",
            Variant::Full => "Full",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "prototype" | "proto" | "minimal" => Some(Variant::Prototype),
            "full" | "textured" => Some(Variant::Full),
            _ => None,
        }
    }
}

/// Configuration rejected before an episode could start
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("step duration must be a positive number of seconds, got {0}")]
    InvalidStep(f32),
    #[error("frame clamp must be positive, got {0}")]
    InvalidFrameClamp(f32),
    #[error("grid half-extent must be at least 1, got {0}")]
    GridTooSmall(i32),
    #[error("grid half-extent must be at most {max}, got {0}", max = MAX_GRID_HALF)]
    GridTooLarge(i32),
    #[error("board has {available} cells but needs more than {required}")]
    OverCapacity { required: usize, available: usize },
    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
}

fn default_max_frame_seconds() -> Option<f32> {
    Some(MAX_FRAME_SECONDS)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Grid half-extent H: cells span [-H, H]
    pub grid_half: i32,
    /// Seconds per discrete step
    pub step_seconds: f32,
    /// Food items kept on the board
    pub food_count: usize,
    /// 2x2 obstacles per episode
    pub obstacle_count: usize,
    /// Per-tick delta clamp (None disables it)
    #[serde(default = "default_max_frame_seconds")]
    pub max_frame_seconds: Option<f32>,
    /// RNG seed; random when absent
    pub seed: Option<u64>,
    /// Presentation variant tag
    pub variant: Variant,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_half: GRID_HALF,
            step_seconds: STEP_SECONDS,
            food_count: FOOD_COUNT,
            obstacle_count: OBSTACLE_COUNT,
            max_frame_seconds: default_max_frame_seconds(),
            seed: None,
            variant: Variant::default(),
        }
    }
}

impl GameConfig {
    /// Parse and validate a JSON config. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        log::info!(
            "Loaded config: H={}, T={}s, food={}, obstacles={}, variant={}",
            config.grid_half,
            config.step_seconds,
            config.food_count,
            config.obstacle_count,
            config.variant.as_str()
        );
        Ok(config)
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Number of cells on the board
    pub fn cell_count(&self) -> usize {
        let side = (self.grid_half.max(0) as usize)
            .saturating_mul(2)
            .saturating_add(1);
        side.saturating_mul(side)
    }

    /// Cells a fresh episode fills: snake head, food, obstacle footprints
    pub fn initial_footprint(&self) -> usize {
        self.obstacle_count
            .saturating_mul(4)
            .saturating_add(self.food_count)
            .saturating_add(1)
    }

    /// Reject boards that cannot hold a fresh episode with room to move
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.step_seconds.is_finite() && self.step_seconds > 0.0) {
            return Err(ConfigError::InvalidStep(self.step_seconds));
        }
        if let Some(max) = self.max_frame_seconds {
            if !(max.is_finite() && max > 0.0) {
                return Err(ConfigError::InvalidFrameClamp(max));
            }
        }
        if self.grid_half < 1 {
            return Err(ConfigError::GridTooSmall(self.grid_half));
        }
        if self.grid_half > MAX_GRID_HALF {
            return Err(ConfigError::GridTooLarge(self.grid_half));
        }
        let required = self.initial_footprint();
        let available = self.cell_count();
        if required >= available {
            return Err(ConfigError::OverCapacity {
                required,
                available,
            });
        }
        Ok(())
    }
}
