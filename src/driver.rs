//! Frame driver
//!
//! Glue between a host (browser, native window, headless runner) and the
//! simulation: tracks asset readiness, turns key codes and on-screen buttons
//! into an [`InputState`], and runs exactly one tick per display refresh.

use serde::Serialize;

use crate::sim::{GameEvent, GamePhase, GameState, InputState, tick};
use crate::tuning::Tuning;

/// Logical buttons a host can press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Left,
    Right,
    Jump,
    Restart,
}

impl Action {
    /// Map a DOM `KeyboardEvent.code` to an action
    pub fn from_key_code(code: &str) -> Option<Self> {
        match code {
            "ArrowLeft" | "KeyA" => Some(Action::Left),
            "ArrowRight" | "KeyD" => Some(Action::Right),
            "Space" | "ArrowUp" | "KeyW" => Some(Action::Jump),
            "KeyR" => Some(Action::Restart),
            _ => None,
        }
    }
}

/// Counts assets as they settle; a failed asset still counts
#[derive(Debug, Clone)]
pub struct AssetTracker {
    total: usize,
    settled: usize,
    failed: usize,
}

impl AssetTracker {
    pub fn new(total: usize) -> Self {
        Self {
            total,
            settled: 0,
            failed: 0,
        }
    }

    pub fn loaded(&mut self) {
        self.settle();
    }

    /// Missing art must not stall the game; log it and move on
    pub fn failed(&mut self, name: &str) {
        log::warn!("Failed to load asset: {}", name);
        self.failed += 1;
        self.settle();
    }

    fn settle(&mut self) {
        self.settled = (self.settled + 1).min(self.total);
    }

    pub fn is_ready(&self) -> bool {
        self.settled >= self.total
    }

    pub fn failed_count(&self) -> usize {
        self.failed
    }

    /// Fraction settled, 0..=1 (for a loading bar)
    pub fn progress(&self) -> f32 {
        if self.total == 0 {
            1.0
        } else {
            self.settled as f32 / self.total as f32
        }
    }
}

/// Read model for the score/lives/level display
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Hud {
    pub score: u64,
    pub lives: u8,
    pub level: u32,
    pub phase: &'static str,
    pub level_name: Option<&'static str>,
}

/// Game instance holding all state
pub struct Game {
    pub state: GameState,
    pub input: InputState,
    assets: AssetTracker,
}

impl Game {
    /// New game that starts playing once `asset_count` assets have settled
    pub fn new(tuning: Tuning, asset_count: usize) -> Self {
        let mut game = Self {
            state: GameState::new(tuning),
            input: InputState::default(),
            assets: AssetTracker::new(asset_count),
        };
        game.check_ready();
        game
    }

    /// Asset finished loading
    pub fn asset_loaded(&mut self) {
        self.assets.loaded();
        self.check_ready();
    }

    /// Asset failed to load; counts as settled
    pub fn asset_failed(&mut self, name: &str) {
        self.assets.failed(name);
        self.check_ready();
    }

    pub fn assets(&self) -> &AssetTracker {
        &self.assets
    }

    fn check_ready(&mut self) {
        if self.assets.is_ready() && self.state.phase == GamePhase::Loading {
            if self.assets.failed_count() > 0 {
                log::warn!(
                    "Starting with {} missing assets",
                    self.assets.failed_count()
                );
            }
            self.state.begin();
        }
    }

    /// Hold or release an action
    pub fn set_action(&mut self, action: Action, held: bool) {
        match action {
            Action::Left => self.input.left = held,
            Action::Right => self.input.right = held,
            Action::Jump => self.input.jump = held,
            Action::Restart => self.input.restart = held,
        }
    }

    pub fn press(&mut self, action: Action) {
        self.set_action(action, true);
    }

    pub fn release(&mut self, action: Action) {
        self.set_action(action, false);
    }

    /// Key down/up from the host. Returns false for keys the game ignores.
    pub fn set_key(&mut self, code: &str, held: bool) -> bool {
        match Action::from_key_code(code) {
            Some(action) => {
                self.set_action(action, held);
                true
            }
            None => false,
        }
    }

    /// Release everything (focus lost)
    pub fn clear_input(&mut self) {
        self.input = InputState::default();
    }

    /// Run one display frame
    pub fn frame(&mut self) -> &[GameEvent] {
        let input = self.input;
        tick(&mut self.state, &input);
        &self.state.events
    }

    /// Restart request from a click/tap on the end screen
    pub fn request_restart(&mut self) {
        if self.state.phase.is_terminal() {
            self.state.restart();
        }
    }

    pub fn hud(&self) -> Hud {
        Hud {
            score: self.state.score,
            lives: self.state.lives,
            level: self.state.level,
            phase: self.state.phase.as_str(),
            level_name: self.state.level_name(),
        }
    }
}
