//! World tuning
//!
//! Every physics and scoring constant the simulation reads, gathered in one
//! serializable record. Defaults come from [`crate::consts`]; a JSON document
//! may override any subset of fields.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// World constants consumed by the simulation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === World ===
    pub world_width: f32,
    pub world_height: f32,
    pub gravity: f32,
    pub friction: f32,

    // === Player ===
    pub player_speed: f32,
    pub jump_power: f32,
    /// Player position on level load, restart and life loss
    pub spawn: Vec2,
    /// Vertical velocity after stomping an enemy (negative is up)
    pub stomp_bounce: f32,

    // === Enemies ===
    pub enemy_speed: f32,

    // === Rules ===
    pub level_complete_x: f32,
    pub coin_score: u64,
    pub stomp_score: u64,
    pub level_bonus: u64,
    pub starting_lives: u8,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            world_width: WORLD_WIDTH,
            world_height: WORLD_HEIGHT,
            gravity: GRAVITY,
            friction: FRICTION,

            player_speed: PLAYER_SPEED,
            jump_power: JUMP_POWER,
            spawn: Vec2::new(SPAWN_X, SPAWN_Y),
            stomp_bounce: STOMP_BOUNCE,

            enemy_speed: ENEMY_SPEED,

            level_complete_x: LEVEL_COMPLETE_X,
            coin_score: COIN_SCORE,
            stomp_score: STOMP_SCORE,
            level_bonus: LEVEL_BONUS,
            starting_lives: STARTING_LIVES,
        }
    }
}

impl Tuning {
    /// Parse a tuning override. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let tuning: Self = serde_json::from_str(json)?;
        log::info!(
            "Loaded tuning: gravity={} speed={} jump={}",
            tuning.gravity,
            tuning.player_speed,
            tuning.jump_power
        );
        Ok(tuning)
    }

    /// Serialize for inspection or hand-editing
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Rightmost x an entity of the given width may occupy
    #[inline]
    pub fn max_x(&self, width: f32) -> f32 {
        self.world_width - width
    }
}
