//! Entity spawn policy
//!
//! Kind selection is a nested two-draw structure, not a flat split: a first
//! uniform draw decides ally-or-not, and only on failure does a second,
//! independent draw decide foe-or-power-up. The resulting rates are ally
//! 30%, foe 21%, power-up 49%.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use super::state::{ALLY_KINDS, Entity, EntityKind, GameState, POWER_UP_KINDS};
use crate::consts::*;

/// Probability threshold shared by both weighted draws
const KIND_THRESHOLD: f64 = 0.3;

/// Pick the kind of the next entity to spawn.
pub fn spawn_kind(rng: &mut Pcg32) -> EntityKind {
    // 30% chance the spawned entity is an ally
    if rng.random::<f64>() <= KIND_THRESHOLD {
        return ALLY_KINDS[rng.random_range(0..ALLY_KINDS.len())];
    }

    // 21% overall chance it is a foe: a fresh draw, the first is discarded
    if rng.random::<f64>() <= KIND_THRESHOLD {
        return EntityKind::Foe;
    }

    // Otherwise a power-up, picked uniformly with another fresh draw
    POWER_UP_KINDS[rng.random_range(0..POWER_UP_KINDS.len())]
}

/// Create an entity at a random offset from `origin` (the player's centre).
///
/// Allies hold still; every other kind drifts with a per-axis velocity
/// uniform in [-2, 2].
pub fn spawn_entity(origin: Vec2, rng: &mut Pcg32) -> Entity {
    let kind = spawn_kind(rng);

    let pos = origin
        + Vec2::new(
            rng.random_range(-SPAWN_RADIUS..=SPAWN_RADIUS),
            rng.random_range(-SPAWN_RADIUS..=SPAWN_RADIUS),
        );

    let vel = if kind.is_ally() {
        Vec2::ZERO
    } else {
        Vec2::new(rng.random_range(-2.0..=2.0), rng.random_range(-2.0..=2.0))
    };

    Entity { kind, pos, vel }
}

/// Spawn-gate evaluation: with probability [`SPAWN_CHANCE`] and fewer than
/// [`MAX_ENTITIES`] live entities, add one new entity near the player.
pub fn try_spawn(state: &mut GameState) {
    if state.rng.random::<f64>() < SPAWN_CHANCE && state.entities.len() < MAX_ENTITIES {
        let origin = state.player.center();
        let entity = spawn_entity(origin, &mut state.rng);
        state.entities.push(entity);
    }
}
