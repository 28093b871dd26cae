//! City Walks entry point
//!
//! The browser build is driven from JS through `city_walks::web`. Natively this
//! runs a headless autoplay session and logs how far it gets.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use city_walks::sim::{GameEvent, GamePhase};
    use city_walks::{Action, Game, Tuning};

    /// Hard stop so a stuck run still terminates (~5 minutes at 60 Hz)
    const MAX_FRAMES: u32 = 60 * 60 * 5;
    /// Autoplay hops this often while holding right
    const JUMP_EVERY: u32 = 24;

    env_logger::init();
    log::info!("City Walks (native) starting...");

    let tuning = match std::env::args().nth(1) {
        Some(path) => match std::fs::read_to_string(&path) {
            Ok(json) => Tuning::from_json(&json).unwrap_or_else(|e| {
                log::warn!("Bad tuning file {}: {}, using defaults", path, e);
                Tuning::default()
            }),
            Err(e) => {
                log::warn!("Cannot read {}: {}, using defaults", path, e);
                Tuning::default()
            }
        },
        None => Tuning::default(),
    };

    match tuning.to_json_pretty() {
        Ok(json) => log::debug!("Tuning:\n{}", json),
        Err(e) => log::warn!("Cannot serialize tuning: {}", e),
    }

    // No art to load headless
    let mut game = Game::new(tuning, 0);
    game.press(Action::Right);

    let mut frames = 0;
    while frames < MAX_FRAMES && game.state.phase == GamePhase::Playing {
        if frames % JUMP_EVERY == 0 {
            game.press(Action::Jump);
        } else {
            game.release(Action::Jump);
        }

        for event in game.frame() {
            match event {
                GameEvent::LevelComplete { completed } => {
                    log::info!("Frame {}: cleared level {}", frames, completed)
                }
                GameEvent::PlayerHurt { lives_left } | GameEvent::FellOffWorld { lives_left } => {
                    log::info!("Frame {}: lost a life, {} left", frames, lives_left)
                }
                _ => log::debug!("Frame {}: {:?}", frames, event),
            }
        }
        frames += 1;
    }

    let hud = game.hud();
    println!(
        "{} after {} frames: score {}, lives {}, level {}",
        hud.phase, frames, hud.score, hud.lives, hud.level
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is city_walks::web::wasm_start, this is just to satisfy the compiler
}
