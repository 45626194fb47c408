//! WebAssembly binding for a browser host
//!
//! The JavaScript side owns the scene, camera and DOM; it calls `tick` from
//! requestAnimationFrame, forwards keydown events, and reads back flat arrays.

use wasm_bindgen::prelude::*;

use crate::game::{Game, GameError};
use crate::settings::GameConfig;
use crate::sim::GameEvent;
use crate::view::{SegmentTracks, build_instances};

fn to_js(err: GameError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

#[wasm_bindgen(start)]
pub fn start() {
    super::init_logging();
    log::info!("Grid Snake (web) starting...");
}

#[wasm_bindgen]
pub struct WebGame {
    game: Game,
    tracks: SegmentTracks,
}

#[wasm_bindgen]
impl WebGame {
    /// Create a game from an optional JSON config
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: Option<String>) -> Result<WebGame, JsValue> {
        let config = match config_json {
            Some(json) => GameConfig::from_json(&json).map_err(|e| to_js(e.into()))?,
            None => GameConfig::default(),
        };
        let game = Game::new(config).map_err(to_js)?;
        Ok(WebGame {
            game,
            tracks: SegmentTracks::new(),
        })
    }

    pub fn reset(&mut self) -> Result<(), JsValue> {
        self.game.reset().map_err(to_js)
    }

    /// Advance by `dt` seconds
    pub fn tick(&mut self, dt: f32) -> Result<(), JsValue> {
        self.game.tick(dt).map_err(to_js)?;
        self.tracks
            .sync(self.game.snake(), self.game.episodes(), self.game.steps());
        if !self.game.state().is_running() {
            self.tracks.settle();
        }
        Ok(())
    }

    #[wasm_bindgen(js_name = handleKey)]
    pub fn handle_key(&mut self, event: &web_sys::KeyboardEvent) -> Result<(), JsValue> {
        self.game.handle_key(&event.key()).map_err(to_js)
    }

    /// Snake cells as flat [x0, z0, x1, z1, ...], head first
    #[wasm_bindgen(js_name = snakeCells)]
    pub fn snake_cells(&self) -> Vec<i32> {
        self.game.snake().iter().flat_map(|c| [c.x, c.z]).collect()
    }

    #[wasm_bindgen(js_name = foodCells)]
    pub fn food_cells(&self) -> Vec<i32> {
        self.game.foods().iter().flat_map(|c| [c.x, c.z]).collect()
    }

    /// Obstacle base cells as flat [x, z] pairs
    #[wasm_bindgen(js_name = obstacleBases)]
    pub fn obstacle_bases(&self) -> Vec<i32> {
        self.game
            .obstacles()
            .iter()
            .flat_map(|o| [o.base.x, o.base.z])
            .collect()
    }

    pub fn score(&self) -> u32 {
        self.game.score()
    }

    #[wasm_bindgen(js_name = isGameOver)]
    pub fn is_game_over(&self) -> bool {
        !self.game.state().is_running()
    }

    #[wasm_bindgen(js_name = gameOverReason)]
    pub fn game_over_reason(&self) -> Option<String> {
        self.game.game_over_reason().map(|r| r.as_str().to_string())
    }

    pub fn progress(&self) -> f32 {
        self.game.progress()
    }

    pub fn variant(&self) -> String {
        self.game.variant().as_str().to_string()
    }

    /// Interpolated instance records (position xyz + kind) as raw bytes
    #[wasm_bindgen(js_name = instanceData)]
    pub fn instance_data(&mut self) -> js_sys::Uint8Array {
        let progress = self.game.progress();
        let segments = self.tracks.positions(progress).to_vec();
        let instances = build_instances(&segments, self.game.foods(), self.game.obstacles());
        js_sys::Uint8Array::from(bytemuck::cast_slice::<_, u8>(&instances))
    }

    /// Events since the last call, as a JSON array (score label, game-over panel)
    #[wasm_bindgen(js_name = drainEventsJson)]
    pub fn drain_events_json(&mut self) -> Result<String, JsValue> {
        let events: Vec<GameEvent> = self.game.drain_events();
        serde_json::to_string(&events).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    #[wasm_bindgen(js_name = snapshotJson)]
    pub fn snapshot_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.game.snapshot()).map_err(|e| JsValue::from_str(&e.to_string()))
    }
}
