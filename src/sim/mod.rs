//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per frame, no wall-clock time
//! - No randomness (levels are hand-authored)
//! - Stable iteration order (catalog order)
//! - No rendering or platform dependencies

pub mod catalog;
pub mod collision;
pub mod enemy;
pub mod player;
pub mod state;
pub mod tick;

pub use catalog::{Background, CollectibleKind, EnemyKind, LEVEL_COUNT, LevelDef};
pub use collision::Rect;
pub use enemy::Enemy;
pub use player::{AnimationState, Player};
pub use state::{Collectible, GameEvent, GamePhase, GameState, Platform};
pub use tick::{InputState, tick};
