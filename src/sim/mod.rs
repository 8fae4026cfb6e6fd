//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per rendered frame, fixed step order
//! - Seeded RNG only, owned by the game state
//! - No rendering, audio, or platform dependencies

pub mod collision;
pub mod cull;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{player_hits_entity, resolve_collisions};
pub use cull::cull_entities;
pub use spawn::{spawn_entity, spawn_kind, try_spawn};
pub use state::{
    ALLY_KINDS, Camera, Entity, EntityKind, GameEvent, GameOverReason, GamePhase, GameState,
    POWER_UP_KINDS, Player,
};
pub use tick::{TickInput, apply_input, tick};
