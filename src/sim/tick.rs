//! Per-frame simulation tick
//!
//! One call advances the session by exactly one display frame. Within a tick
//! the order is fixed: player, enemies, collisions, then the off-world and
//! level-completion checks.

use serde::{Deserialize, Serialize};

use super::state::{GameEvent, GamePhase, GameState};

/// Buttons held during this tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputState {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
    /// Only honoured on the game-over and victory screens
    pub restart: bool,
}

/// Advance the game state by one frame
pub fn tick(state: &mut GameState, input: &InputState) {
    state.events.clear();

    if input.restart && state.phase.is_terminal() {
        state.restart();
    }

    if state.phase != GamePhase::Playing {
        return;
    }

    state.time_ticks += 1;

    let tuning = &state.tuning;
    state.player.update(input, &state.platforms, tuning);
    for enemy in &mut state.enemies {
        enemy.update(&state.platforms, tuning);
    }

    collect_items(state);

    let out = resolve_enemy_contacts(state);
    state.enemies.retain(|e| !e.defeated);
    if out {
        return;
    }

    if state.player.pos.y > state.tuning.world_height {
        log::debug!("Fell off the world at x={:.1}", state.player.pos.x);
        if state.lose_life(|lives_left| GameEvent::FellOffWorld { lives_left }) {
            return;
        }
    }

    if state.player.pos.x > state.tuning.level_complete_x {
        complete_level(state);
    }
}

/// Pick up every collectible the player overlaps; spin the rest
fn collect_items(state: &mut GameState) {
    let player = state.player.bounds();
    let coin_score = state.tuning.coin_score;
    let mut collected = Vec::new();

    state.collectibles.retain(|c| {
        if player.overlaps(&c.bounds()) {
            collected.push(c.pos);
            false
        } else {
            true
        }
    });

    for pos in collected {
        state.score += coin_score;
        state.events.push(GameEvent::CoinCollected { pos });
    }

    for c in &mut state.collectibles {
        c.animation += crate::consts::COLLECTIBLE_SPIN;
    }
}

/// Stomp or get hurt by each live enemy the player touches.
///
/// Returns true when the session ended (last life lost). Enemies after the
/// fatal one are not checked, and only the defeated sweep still runs.
fn resolve_enemy_contacts(state: &mut GameState) -> bool {
    for i in 0..state.enemies.len() {
        let enemy = &state.enemies[i];
        if enemy.defeated || !state.player.bounds().overlaps(&enemy.bounds()) {
            continue;
        }

        // Falling and above the enemy's top edge counts as a stomp
        if state.player.vel.y > 0.0 && state.player.pos.y < enemy.pos.y {
            let pos = enemy.pos;
            state.enemies[i].defeated = true;
            state.player.vel.y = state.tuning.stomp_bounce;
            state.score += state.tuning.stomp_score;
            state.events.push(GameEvent::EnemyStomped { pos });
            log::debug!("Stomped enemy at ({:.0}, {:.0})", pos.x, pos.y);
        } else {
            if state.lose_life(|lives_left| GameEvent::PlayerHurt { lives_left }) {
                return true;
            }
        }
    }
    false
}

/// Award the bonus and move on to the next level (or win)
fn complete_level(state: &mut GameState) {
    let completed = state.level;
    state.score += state.tuning.level_bonus;
    state.player.reset(state.tuning.spawn);
    state.events.push(GameEvent::LevelComplete { completed });
    log::info!("Level {} complete, score {}", completed, state.score);
    state.load_level(completed + 1);
}
