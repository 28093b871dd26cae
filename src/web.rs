//! Browser surface
//!
//! The JS host owns the canvas, image loading and the animation-frame
//! callback. It forwards key and button events here, calls `frame()` once per
//! refresh, and draws from `snapshot()`.

use wasm_bindgen::prelude::*;
use web_sys::KeyboardEvent;

use crate::driver::{Action, Game};
use crate::sim::Background;
use crate::tuning::Tuning;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"Logger already initialized".into());
    }
    log::info!("City Walks module loaded");
}

#[wasm_bindgen]
pub struct WebGame {
    game: Game,
}

#[wasm_bindgen]
impl WebGame {
    /// `asset_count` images must settle before play starts.
    /// `tuning_json` may override world constants; invalid JSON falls back to defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(asset_count: usize, tuning_json: Option<String>) -> WebGame {
        let tuning = match tuning_json.as_deref().map(Tuning::from_json) {
            Some(Ok(tuning)) => tuning,
            Some(Err(e)) => {
                log::warn!("Ignoring bad tuning ({}), using defaults", e);
                Tuning::default()
            }
            None => Tuning::default(),
        };
        WebGame {
            game: Game::new(tuning, asset_count),
        }
    }

    /// Every backdrop image, for the host's preload list
    pub fn background_assets() -> Vec<String> {
        Background::ALL
            .iter()
            .map(|bg| bg.asset_name().to_string())
            .collect()
    }

    /// Settled share of the assets, 0..=1, for the loading bar
    pub fn loading_progress(&self) -> f32 {
        self.game.assets().progress()
    }

    pub fn asset_loaded(&mut self) {
        self.game.asset_loaded();
    }

    pub fn asset_failed(&mut self, name: &str) {
        self.game.asset_failed(name);
    }

    /// Returns true when the key was consumed (host should preventDefault)
    pub fn key_down(&mut self, event: &KeyboardEvent) -> bool {
        self.game.set_key(&event.code(), true)
    }

    pub fn key_up(&mut self, event: &KeyboardEvent) -> bool {
        self.game.set_key(&event.code(), false)
    }

    /// On-screen button: "left", "right", "jump" or "restart"
    pub fn button(&mut self, name: &str, held: bool) {
        let action = match name {
            "left" => Action::Left,
            "right" => Action::Right,
            "jump" => Action::Jump,
            "restart" => Action::Restart,
            other => {
                log::warn!("Unknown button: {}", other);
                return;
            }
        };
        self.game.set_action(action, held);
    }

    /// Canvas tap/click; restarts from the end screens
    pub fn pointer_down(&mut self) {
        self.game.request_restart();
    }

    pub fn blur(&mut self) {
        self.game.clear_input();
    }

    /// Run one frame and return the number of events it produced
    pub fn frame(&mut self) -> usize {
        self.game.frame().len()
    }

    pub fn score(&self) -> f64 {
        self.game.state.score as f64
    }

    pub fn lives(&self) -> u8 {
        self.game.state.lives
    }

    pub fn level(&self) -> u32 {
        self.game.state.level
    }

    pub fn phase(&self) -> String {
        self.game.state.phase.as_str().to_string()
    }

    /// Background image of the active level, if any
    pub fn background(&self) -> Option<String> {
        self.game
            .state
            .background
            .map(|bg| bg.asset_name().to_string())
    }

    /// Horizontal squash for the coin at `index`, None past the end
    pub fn coin_spin(&self, index: usize) -> Option<f32> {
        self.game
            .state
            .collectibles
            .get(index)
            .map(|c| c.spin_scale())
    }

    /// Player sprite selector: "idle", "running" or "jumping"
    pub fn player_animation(&self) -> String {
        use crate::sim::AnimationState;
        match self.game.state.player.animation {
            AnimationState::Idle => "idle",
            AnimationState::Running => "running",
            AnimationState::Jumping => "jumping",
        }
        .to_string()
    }

    /// Full state as JSON for drawing
    pub fn snapshot(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.game.state).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// World constants in effect, as pretty JSON
    pub fn tuning(&self) -> Result<String, JsValue> {
        self.game
            .state
            .tuning
            .to_json_pretty()
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Score/lives/level display as JSON
    pub fn hud(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.game.hud()).map_err(|e| JsValue::from_str(&e.to_string()))
    }
}
