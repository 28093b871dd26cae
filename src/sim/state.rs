//! Game state and core simulation types
//!
//! Everything the presentation layer reads after a tick lives here.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::catalog::{self, Background, CollectibleKind, LevelDef};
use super::collision::Rect;
use super::enemy::Enemy;
use super::player::Player;
use crate::consts::*;
use crate::tuning::Tuning;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the asset collaborator to report readiness
    Loading,
    /// Active gameplay
    Playing,
    /// Lives exhausted, waiting for restart
    GameOver,
    /// Every level cleared, waiting for restart
    Victory,
}

impl GamePhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            GamePhase::Loading => "loading",
            GamePhase::Playing => "playing",
            GamePhase::GameOver => "gameOver",
            GamePhase::Victory => "victory",
        }
    }

    /// Phases a restart request is honoured from
    pub fn is_terminal(&self) -> bool {
        matches!(self, GamePhase::GameOver | GamePhase::Victory)
    }
}

/// Something that happened during the last tick (for audio/effects hosts)
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    CoinCollected { pos: Vec2 },
    EnemyStomped { pos: Vec2 },
    PlayerHurt { lives_left: u8 },
    FellOffWorld { lives_left: u8 },
    LevelComplete { completed: u32 },
    GameOver { score: u64 },
    Victory { score: u64 },
    Restarted,
}

/// A static collision surface
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Platform {
    pub rect: Rect,
    /// Fill color as 0xRRGGBB
    pub color: u32,
}

impl Platform {
    pub const fn new(x: f32, y: f32, width: f32, height: f32, color: u32) -> Self {
        Self {
            rect: Rect::new(x, y, width, height),
            color,
        }
    }

    #[inline]
    pub fn bounds(&self) -> Rect {
        self.rect
    }
}

/// A pickup removed the first time the player touches it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Collectible {
    pub pos: Vec2,
    pub kind: CollectibleKind,
    /// Spin phase; only ever increases (presentation only)
    pub animation: f32,
}

impl Collectible {
    pub fn new(x: f32, y: f32, kind: CollectibleKind) -> Self {
        Self {
            pos: Vec2::new(x, y),
            kind,
            animation: 0.0,
        }
    }

    #[inline]
    pub fn bounds(&self) -> Rect {
        Rect::from_pos_size(self.pos, Vec2::splat(COLLECTIBLE_SIZE))
    }

    /// Horizontal squash of the spinning coin, 0..=1
    pub fn spin_scale(&self) -> f32 {
        self.animation.sin().abs()
    }
}

/// Complete session state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// World constants this session runs with
    pub tuning: Tuning,
    pub score: u64,
    pub lives: u8,
    /// Current level number (1-based)
    pub level: u32,
    pub phase: GamePhase,
    /// Simulation tick counter (counts only ticks spent playing)
    pub time_ticks: u64,
    pub player: Player,
    /// Platforms of the active level; replaced only on level load
    pub platforms: Vec<Platform>,
    pub collectibles: Vec<Collectible>,
    pub enemies: Vec<Enemy>,
    /// Background of the active level (None before the first load)
    pub background: Option<Background>,
    /// Events from the most recent tick
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Tuning::default())
    }
}

impl GameState {
    /// Create a session waiting for assets. Nothing is loaded until [`begin`](Self::begin).
    pub fn new(tuning: Tuning) -> Self {
        let player = Player::new(tuning.spawn);
        Self {
            score: 0,
            lives: tuning.starting_lives,
            level: 1,
            phase: GamePhase::Loading,
            time_ticks: 0,
            player,
            platforms: Vec::new(),
            collectibles: Vec::new(),
            enemies: Vec::new(),
            background: None,
            events: Vec::new(),
            tuning,
        }
    }

    /// Asset readiness signal: `Loading -> Playing`, loads level 1
    pub fn begin(&mut self) {
        if self.phase != GamePhase::Loading {
            log::warn!("begin() ignored in phase {}", self.phase.as_str());
            return;
        }
        self.phase = GamePhase::Playing;
        self.load_level(self.level);
        log::info!("Assets ready, starting at level {}", self.level);
    }

    /// Reset the whole session and start level 1 again
    pub fn restart(&mut self) {
        self.score = 0;
        self.lives = self.tuning.starting_lives;
        self.level = 1;
        self.phase = GamePhase::Playing;
        self.time_ticks = 0;
        self.background = None;
        self.player = Player::new(self.tuning.spawn);
        self.load_level(1);
        self.events.push(GameEvent::Restarted);
        log::info!("Session restarted");
    }

    /// Replace the world with the catalog entry for `level`.
    ///
    /// A level with no entry means the content is exhausted: the session moves
    /// to `Victory` and the previous level's entities are left cleared.
    pub fn load_level(&mut self, level: u32) {
        self.level = level;
        self.platforms.clear();
        self.collectibles.clear();
        self.enemies.clear();

        match catalog::level(level) {
            Some(def) => self.populate(def),
            None => {
                log::info!("No level {}, all landmarks cleared", level);
                self.phase = GamePhase::Victory;
                self.events.push(GameEvent::Victory { score: self.score });
            }
        }
    }

    fn populate(&mut self, def: &LevelDef) {
        self.background = Some(def.background);
        self.platforms.extend(
            def.platforms
                .iter()
                .map(|p| Platform::new(p.x, p.y, p.width, p.height, p.color)),
        );
        self.collectibles
            .extend(def.collectibles.iter().map(|c| Collectible::new(c.x, c.y, c.kind)));
        self.enemies.extend(
            def.enemies
                .iter()
                .map(|e| Enemy::new(e.x, e.y, e.kind, self.tuning.enemy_speed)),
        );
        log::info!(
            "Level {}: {} ({} platforms, {} coins, {} enemies)",
            self.level,
            def.name,
            self.platforms.len(),
            self.collectibles.len(),
            self.enemies.len()
        );
    }

    /// Take one life. Returns true when that was the last one.
    ///
    /// `cause` builds the event reporting the loss from the remaining lives;
    /// it is recorded before any `GameOver` event.
    ///
    /// On the last life the phase becomes `GameOver`; otherwise the player is
    /// put back at the spawn point (the level itself is not reloaded).
    pub(crate) fn lose_life(&mut self, cause: impl FnOnce(u8) -> GameEvent) -> bool {
        self.lives = self.lives.saturating_sub(1);
        self.events.push(cause(self.lives));
        if self.lives == 0 {
            self.phase = GamePhase::GameOver;
            self.events.push(GameEvent::GameOver { score: self.score });
            log::info!("Game over at level {} with score {}", self.level, self.score);
            true
        } else {
            self.player.reset(self.tuning.spawn);
            false
        }
    }

    /// Display name of the active level
    pub fn level_name(&self) -> Option<&'static str> {
        catalog::level(self.level).map(|def| def.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_is_loading_and_empty() {
        let state = GameState::default();
        assert_eq!(state.phase, GamePhase::Loading);
        assert_eq!(state.score, 0);
        assert_eq!(state.lives, 3);
        assert_eq!(state.level, 1);
        assert!(state.platforms.is_empty());
        assert!(state.enemies.is_empty());
        assert_eq!(state.player.pos, Vec2::new(100.0, 300.0));
    }

    #[test]
    fn test_begin_loads_level_one() {
        let mut state = GameState::default();
        state.begin();
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.platforms.len(), 5);
        assert_eq!(state.collectibles.len(), 4);
        assert_eq!(state.enemies.len(), 2);
        assert_eq!(state.background, Some(Background::Spoonbridge));
        assert_eq!(state.level_name(), Some("Spoonbridge and Cherry"));
    }

    #[test]
    fn test_begin_only_from_loading() {
        let mut state = GameState::default();
        state.begin();
        state.score = 500;
        state.phase = GamePhase::GameOver;
        state.begin();
        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(state.score, 500);
    }

    #[test]
    fn test_load_missing_level_is_victory() {
        let mut state = GameState::default();
        state.begin();
        state.load_level(11);
        assert_eq!(state.phase, GamePhase::Victory);
        assert!(state.platforms.is_empty());
        assert!(state.collectibles.is_empty());
        assert!(state.enemies.is_empty());
        assert!(matches!(state.events.last(), Some(GameEvent::Victory { .. })));
    }

    #[test]
    fn test_restart_resets_session() {
        let mut state = GameState::default();
        state.begin();
        state.load_level(7);
        state.score = 4200;
        state.lives = 1;
        state.phase = GamePhase::GameOver;
        state.player.pos = Vec2::new(500.0, 10.0);
        state.player.vel = Vec2::new(3.0, -2.0);

        state.restart();
        assert_eq!(state.score, 0);
        assert_eq!(state.lives, 3);
        assert_eq!(state.level, 1);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.player.pos, Vec2::new(100.0, 300.0));
        assert_eq!(state.player.vel, Vec2::ZERO);
        assert_eq!(state.enemies.len(), 2);
        assert_eq!(state.background, Some(Background::Spoonbridge));
    }

    #[test]
    fn test_lose_life_resets_player_until_last() {
        let mut state = GameState::default();
        state.begin();
        state.player.pos = Vec2::new(400.0, 120.0);

        assert!(!state.lose_life(|lives_left| GameEvent::PlayerHurt { lives_left }));
        assert_eq!(state.lives, 2);
        assert_eq!(state.player.pos, Vec2::new(100.0, 300.0));
        assert_eq!(state.phase, GamePhase::Playing);

        state.lives = 1;
        state.player.pos = Vec2::new(400.0, 120.0);
        state.events.clear();
        assert!(state.lose_life(|lives_left| GameEvent::FellOffWorld { lives_left }));
        assert_eq!(state.lives, 0);
        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(
            state.events,
            vec![
                GameEvent::FellOffWorld { lives_left: 0 },
                GameEvent::GameOver { score: 0 },
            ]
        );
        // Player stays where the fatal hit happened
        assert_eq!(state.player.pos, Vec2::new(400.0, 120.0));
    }

    #[test]
    fn test_collectible_bounds_and_spin() {
        let mut coin = Collectible::new(300.0, 270.0, CollectibleKind::Coin);
        assert_eq!(coin.bounds(), Rect::new(300.0, 270.0, 16.0, 16.0));
        assert_eq!(coin.spin_scale(), 0.0);
        coin.animation = std::f32::consts::FRAC_PI_2;
        assert!((coin.spin_scale() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_state_serializes_for_host() {
        let mut state = GameState::default();
        state.begin();
        let json = serde_json::to_string(&state).unwrap();
        assert!(json.contains("\"phase\":\"Playing\""));
        let back: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(back.enemies.len(), state.enemies.len());
        assert!(back.events.is_empty());
    }
}
