//! Space Wars entry point
//!
//! The crate ships the simulation and the collaborator seams; wiring up a
//! windowed frontend is a frontend's job. The native binary runs a seeded
//! headless demo: it verifies the asset manifest, flies the ship on a
//! scripted input, and logs the run summary.

use std::time::{SystemTime, UNIX_EPOCH};

use glam::Vec2;

use space_wars::assets::{REQUIRED_BITMAPS, REQUIRED_SOUNDS, verify_bundle};
use space_wars::consts::*;
use space_wars::settings::Settings;
use space_wars::sim::{GamePhase, GameState, TickInput, tick};

/// Tick cap for the demo run
const DEMO_TICK_LIMIT: u64 = 20_000;

fn main() {
    env_logger::init();
    log::info!("Space Wars (headless demo) starting...");

    let settings = Settings::load();
    log::info!(
        "Settings: {} fps target, minimap {}",
        settings.target_fps,
        if settings.show_minimap { "on" } else { "off" }
    );

    // A frontend would resolve the real bundle here; the demo checks the
    // manifest against itself so a rename in either table is caught early.
    if let Err(e) = verify_bundle(REQUIRED_BITMAPS, REQUIRED_SOUNDS) {
        log::error!("Asset manifest inconsistent: {e}");
        std::process::exit(1);
    }

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    log::info!("Demo run with seed {seed}");

    let mut state = GameState::new(seed);
    state.phase = GamePhase::Playing;

    // Fly toward the top-right corner of the screen the whole run
    let input = TickInput {
        pointer: Vec2::new(SCREEN_WIDTH, 0.0),
        primary_held: true,
        secondary_pressed: false,
    };

    while state.phase == GamePhase::Playing && state.time_ticks < DEMO_TICK_LIMIT {
        tick(&mut state, &input);
    }

    let center = state.player.center();
    log::info!(
        "Demo finished after {} ticks at ({:.0}, {:.0}): score {}, fuel {:.2}, reason {:?}",
        state.time_ticks,
        center.x,
        center.y,
        state.player.score,
        state.player.fuel_pct,
        state.game_over_by,
    );
    println!(
        "score {} after {} ticks ({:?})",
        state.player.score, state.time_ticks, state.game_over_by
    );
}
