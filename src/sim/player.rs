//! The player character
//!
//! Input-driven horizontal movement, grounded jumping, gravity, and
//! per-platform collision correction.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use super::state::Platform;
use super::tick::InputState;
use crate::consts::{PLAYER_HEIGHT, PLAYER_WIDTH};
use crate::tuning::Tuning;

/// Sprite selector derived from movement each tick (presentation only)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AnimationState {
    #[default]
    Idle,
    Running,
    Jumping,
}

/// The player's character
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: Vec2,
    /// Set only by landing on top of a platform during the last update
    pub grounded: bool,
    pub animation: AnimationState,
}

impl Player {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            size: Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT),
            grounded: false,
            animation: AnimationState::Idle,
        }
    }

    #[inline]
    pub fn bounds(&self) -> Rect {
        Rect::from_pos_size(self.pos, self.size)
    }

    /// Put the player back at `pos` at rest
    pub fn reset(&mut self, pos: Vec2) {
        self.pos = pos;
        self.vel = Vec2::ZERO;
        self.grounded = false;
    }

    /// Advance one tick
    pub fn update(&mut self, input: &InputState, platforms: &[Platform], tuning: &Tuning) {
        // Horizontal movement (left wins when both are held)
        if input.left {
            self.vel.x = -tuning.player_speed;
            self.animation = AnimationState::Running;
        } else if input.right {
            self.vel.x = tuning.player_speed;
            self.animation = AnimationState::Running;
        } else {
            self.vel.x *= tuning.friction;
            self.animation = AnimationState::Idle;
        }

        if input.jump && self.grounded {
            self.vel.y = -tuning.jump_power;
            self.grounded = false;
        }

        if !self.grounded {
            self.animation = AnimationState::Jumping;
        }

        self.vel.y += tuning.gravity;

        let prev = self.pos;
        self.pos += self.vel;

        self.grounded = false;
        for platform in platforms {
            self.resolve_platform(platform, prev);
        }

        self.pos.x = self.pos.x.clamp(0.0, tuning.max_x(self.size.x));
    }

    /// Apply at most one correction against a single platform.
    ///
    /// `prev` is the position before this tick's integration; only the
    /// landing test looks at it. The side tests use the moved position.
    fn resolve_platform(&mut self, platform: &Platform, prev: Vec2) {
        let rect = platform.bounds();
        if !self.bounds().overlaps(&rect) {
            return;
        }

        if self.vel.y > 0.0 && prev.y < rect.y {
            // Landing on top
            self.pos.y = rect.y - self.size.y;
            self.vel.y = 0.0;
            self.grounded = true;
        } else if self.vel.y < 0.0 && self.pos.y > rect.y {
            // Head hits the underside
            self.pos.y = rect.bottom();
            self.vel.y = 0.0;
        } else if self.vel.x > 0.0 && self.pos.x < rect.x {
            self.pos.x = rect.x - self.size.x;
            self.vel.x = 0.0;
        } else if self.vel.x < 0.0 && self.pos.x > rect.x {
            self.pos.x = rect.right();
            self.vel.x = 0.0;
        }
    }
}
