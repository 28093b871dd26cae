//! City Walks - a single-screen platformer across Minneapolis landmarks
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, game state)
//! - `tuning`: Data-driven world constants
//! - `driver`: Frame driver (asset readiness, input mapping, one tick per frame)
//! - `web`: wasm-bindgen surface for the browser host

pub mod driver;
pub mod sim;
pub mod tuning;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use driver::{Action, AssetTracker, Game, Hud};
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Playfield dimensions
    pub const WORLD_WIDTH: f32 = 800.0;
    pub const WORLD_HEIGHT: f32 = 400.0;

    /// Downward acceleration per tick, shared by player and enemies
    pub const GRAVITY: f32 = 0.5;
    /// Horizontal velocity multiplier when no direction is held
    pub const FRICTION: f32 = 0.8;

    /// Player defaults
    pub const PLAYER_WIDTH: f32 = 32.0;
    pub const PLAYER_HEIGHT: f32 = 32.0;
    pub const PLAYER_SPEED: f32 = 5.0;
    pub const JUMP_POWER: f32 = 12.0;
    /// Where the player appears on level load, restart and after losing a life
    pub const SPAWN_X: f32 = 100.0;
    pub const SPAWN_Y: f32 = 300.0;

    /// Enemy defaults
    pub const ENEMY_WIDTH: f32 = 24.0;
    pub const ENEMY_HEIGHT: f32 = 24.0;
    /// Patrol speed; enemies start walking left
    pub const ENEMY_SPEED: f32 = 1.0;
    /// Vertical velocity given to the player after a stomp
    pub const STOMP_BOUNCE: f32 = -10.0;

    /// Collectible size
    pub const COLLECTIBLE_SIZE: f32 = 16.0;
    /// Animation phase advance per tick (presentation only)
    pub const COLLECTIBLE_SPIN: f32 = 0.1;

    /// Player x beyond which the level counts as complete
    pub const LEVEL_COMPLETE_X: f32 = 750.0;

    /// Scoring
    pub const COIN_SCORE: u64 = 100;
    pub const STOMP_SCORE: u64 = 200;
    pub const LEVEL_BONUS: u64 = 1000;

    pub const STARTING_LIVES: u8 = 3;
}
