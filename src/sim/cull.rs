//! Out-of-range entity culling
//!
//! Entities that drift more than [`SPAWN_RADIUS`] from the player on either
//! axis are despawned. Runs once per tick, after collision resolution.

use super::state::GameState;
use crate::consts::SPAWN_RADIUS;

/// Remove every entity outside the ±[`SPAWN_RADIUS`] box around the
/// player's centre. Reverse walk so swap-with-last removal is safe.
pub fn cull_entities(state: &mut GameState) {
    let center = state.player.center();

    for idx in (0..state.entities.len()).rev() {
        let pos = state.entities[idx].pos;
        let out_of_range = pos.x > center.x + SPAWN_RADIUS
            || pos.x < center.x - SPAWN_RADIUS
            || pos.y > center.y + SPAWN_RADIUS
            || pos.y < center.y - SPAWN_RADIUS;

        if out_of_range {
            state.remove_entity(idx);
        }
    }
}
