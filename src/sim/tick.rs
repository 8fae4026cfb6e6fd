//! Per-tick simulation step
//!
//! One tick per rendered frame, in a fixed order: spawn gate, player
//! movement and camera follow, collision resolution, culling, entity
//! motion, fuel decay, game-over checks. Movement and fuel constants are
//! per-tick values, so the simulation rate is coupled to the frame rate.

use glam::Vec2;

use super::cull::cull_entities;
use super::spawn::try_spawn;
use super::state::{GameEvent, GameOverReason, GamePhase, GameState};
use super::collision::resolve_collisions;
use crate::consts::*;

/// Input sampled for a single tick
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Pointer position in screen coordinates
    pub pointer: Vec2,
    /// Primary action held: thrust toward the pointer
    pub primary_held: bool,
    /// Secondary action edge: kill all velocity
    pub secondary_pressed: bool,
}

/// Steer the ship from this tick's input.
///
/// While the primary action is held the velocity points from the ship's
/// centre toward the pointer's world-equivalent position (the pointer
/// offset from the screen centre, applied at the ship), capped at
/// [`MAX_VEL`]. A secondary edge stops the ship dead.
pub fn apply_input(state: &mut GameState, input: &TickInput) {
    if input.primary_held {
        let screen_center = Vec2::new(SCREEN_WIDTH / 2.0, SCREEN_HEIGHT / 2.0);
        let heading = input.pointer - screen_center;
        state.player.vel = heading.clamp_length_max(MAX_VEL);
    } else if input.secondary_pressed {
        state.player.vel = Vec2::ZERO;
    }
}

/// Advance the game by one tick. No-op outside the Playing phase.
pub fn tick(state: &mut GameState, input: &TickInput) {
    if state.phase != GamePhase::Playing {
        return;
    }

    state.events.clear();
    state.time_ticks += 1;

    // (a) spawn gate
    try_spawn(state);

    // (b) player movement and camera follow
    apply_input(state, input);
    state.player.integrate();
    let center = state.player.center();
    state.camera.follow(center);

    // (c) collisions, (d) culling
    resolve_collisions(state);
    cull_entities(state);

    // (e) entity motion
    for entity in &mut state.entities {
        entity.integrate();
    }

    // (f) fuel decay while moving
    if state.player.vel != Vec2::ZERO {
        state.player.fuel_pct -= FUEL_DECAY;
    }

    // (g) terminal transitions
    if state.player.fuel_pct <= 0.0 {
        state.player.fuel_pct = 0.0;
        state.player.game_over = true;
        state.game_over_by = GameOverReason::FuelExhausted;
        state.events.push(GameEvent::RanOutOfFuel);
    }
    if state.player.game_over {
        state.phase = GamePhase::GameOver;
    }
}
