//! Collision detection and effect resolution
//!
//! Every entity overlapping the player this tick gets exactly one
//! type-specific effect and is then removed. The walk runs from the highest
//! index down so swap-with-last removal never shifts an unvisited entry.

use rand::Rng;

use super::state::{Entity, EntityKind, GameEvent, GameOverReason, GameState, Player};
use crate::aabb_overlap;
use crate::consts::{ENTITY_SIZE, PLAYER_SIZE};

/// Sprite-level bounding overlap between the player and an entity.
pub fn player_hits_entity(player: &Player, entity: &Entity) -> bool {
    aabb_overlap(player.pos, PLAYER_SIZE, entity.pos, ENTITY_SIZE)
}

/// Resolve all player/entity overlaps for this tick.
pub fn resolve_collisions(state: &mut GameState) {
    for idx in (0..state.entities.len()).rev() {
        if player_hits_entity(&state.player, &state.entities[idx]) {
            apply_effect(state, idx);
            state.remove_entity(idx);
        }
    }
}

/// Apply the type-specific effect of the entity at `idx`.
fn apply_effect(state: &mut GameState, idx: usize) {
    let kind = state.entities[idx].kind;
    match kind {
        EntityKind::Fuel => {
            state.player.refuel();
            state.events.push(GameEvent::FuelCollected);
        }
        EntityKind::Star => {
            state.player.score += crate::consts::STAR_SCORE;
            state.events.push(GameEvent::StarCollected);
        }
        kind if kind.is_ally() => {
            let voice = state.rng.random_range(0..3u8);
            state.player.score += crate::consts::RESCUE_SCORE;
            state.events.push(GameEvent::AllyRescued { voice });
        }
        EntityKind::Foe => {
            if !state.player.shield {
                state.player.game_over = true;
                state.game_over_by = GameOverReason::Hit;
                state.events.push(GameEvent::FoeHit);
            } else {
                state.events.push(GameEvent::ShieldAbsorbed);
            }
            // A foe hit always leaves the shield down
            state.player.drop_shield();
        }
        EntityKind::Shield => {
            state.player.activate_shield();
            state.events.push(GameEvent::ShieldActivated);
        }
        _ => unreachable!("all entity kinds handled"),
    }
}
