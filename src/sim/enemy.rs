//! Patrolling enemies
//!
//! Enemies walk at a constant speed, fall under gravity, land on platforms,
//! and turn around at the world edges. They ignore the player entirely.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::catalog::EnemyKind;
use super::collision::Rect;
use super::state::Platform;
use crate::consts::{ENEMY_HEIGHT, ENEMY_WIDTH};
use crate::tuning::Tuning;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: Vec2,
    pub kind: EnemyKind,
    /// Stomped; removed from the world at the end of the tick
    pub defeated: bool,
}

impl Enemy {
    /// New enemy walking left at `speed`
    pub fn new(x: f32, y: f32, kind: EnemyKind, speed: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            vel: Vec2::new(-speed, 0.0),
            size: Vec2::new(ENEMY_WIDTH, ENEMY_HEIGHT),
            kind,
            defeated: false,
        }
    }

    #[inline]
    pub fn bounds(&self) -> Rect {
        Rect::from_pos_size(self.pos, self.size)
    }

    pub fn update(&mut self, platforms: &[Platform], tuning: &Tuning) {
        if self.defeated {
            return;
        }

        self.pos.x += self.vel.x;

        self.vel.y += tuning.gravity;
        self.pos.y += self.vel.y;

        // Landing only; enemies pass through platform sides and undersides
        for platform in platforms {
            if self.vel.y > 0.0 && self.bounds().overlaps(&platform.bounds()) {
                self.pos.y = platform.rect.y - self.size.y;
                self.vel.y = 0.0;
            }
        }

        if self.pos.x <= 0.0 || self.pos.x >= tuning.max_x(self.size.x) {
            self.vel.x = -self.vel.x;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn goomba(x: f32, y: f32) -> Enemy {
        Enemy::new(x, y, EnemyKind::Goomba, 1.0)
    }

    #[test]
    fn test_new_enemy_walks_left() {
        let e = goomba(300.0, 280.0);
        assert_eq!(e.vel, Vec2::new(-1.0, 0.0));
        assert_eq!(e.bounds(), Rect::new(300.0, 280.0, 24.0, 24.0));
        assert!(!e.defeated);
    }

    #[test]
    fn test_lands_on_platform() {
        let tuning = Tuning::default();
        let platforms = vec![Platform::new(250.0, 300.0, 100.0, 20.0, 0x8B4513)];
        let mut e = goomba(300.0, 280.0);

        e.update(&platforms, &tuning);
        assert_eq!(e.pos, Vec2::new(299.0, 276.0));
        assert_eq!(e.vel.y, 0.0);

        // Keeps patrolling along the top
        e.update(&platforms, &tuning);
        assert_eq!(e.pos, Vec2::new(298.0, 276.0));
    }

    #[test]
    fn test_walks_off_ledge_and_falls() {
        let tuning = Tuning::default();
        let platforms = vec![Platform::new(250.0, 300.0, 100.0, 20.0, 0x8B4513)];
        let mut e = goomba(227.0, 276.0);

        e.update(&platforms, &tuning);
        // Right edge now at 250, touching the platform edge only
        assert_eq!(e.pos.x, 226.0);
        assert!(e.vel.y > 0.0);
    }

    #[test]
    fn test_reverses_at_world_edges() {
        let tuning = Tuning::default();
        let mut e = goomba(1.0, 0.0);
        e.update(&[], &tuning);
        assert_eq!(e.pos.x, 0.0);
        assert_eq!(e.vel.x, 1.0);

        let mut e = goomba(777.0, 0.0);
        e.vel.x = 1.0;
        e.update(&[], &tuning);
        assert_eq!(e.pos.x, 778.0);
        assert_eq!(e.vel.x, -1.0);
    }

    #[test]
    fn test_no_side_resolution() {
        let tuning = Tuning::default();
        // A wall the enemy walks straight into while standing on the ground
        let platforms = vec![
            Platform::new(0.0, 300.0, 800.0, 50.0, 0x333333),
            Platform::new(200.0, 200.0, 40.0, 100.0, 0x333333),
        ];
        let mut e = goomba(241.0, 276.0);
        e.update(&platforms, &tuning);
        // Landing correction from the ground only; the wall never pushes back
        assert_eq!(e.pos.x, 240.0);
        e.update(&platforms, &tuning);
        assert_eq!(e.pos.x, 239.0);
        assert_eq!(e.vel.x, -1.0);
    }

    #[test]
    fn test_defeated_enemy_is_frozen() {
        let tuning = Tuning::default();
        let mut e = goomba(300.0, 100.0);
        e.defeated = true;
        e.update(&[], &tuning);
        assert_eq!(e.pos, Vec2::new(300.0, 100.0));
        assert_eq!(e.vel, Vec2::new(-1.0, 0.0));
    }
}
