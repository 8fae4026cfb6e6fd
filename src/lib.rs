//! Space Wars - a scrolling 2D arcade space game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (spawning, collisions, game state)
//! - `render`: Thin renderer collaborator trait + frame composition
//! - `audio`: Sound event mapping and playback trait
//! - `input`: Input source collaborator trait
//! - `app`: Welcome / play / end screen flow
//! - `assets`: Symbolic asset names and bundle verification

pub mod app;
pub mod assets;
pub mod audio;
pub mod input;
pub mod render;
pub mod settings;
pub mod sim;

pub use settings::Settings;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Window dimensions
    pub const SCREEN_WIDTH: f32 = 1200.0;
    pub const SCREEN_HEIGHT: f32 = 600.0;

    /// Maximum player velocity magnitude (units per tick)
    pub const MAX_VEL: f32 = 3.0;

    /// Half-extent of the spawn/cull box around the player, per axis
    pub const SPAWN_RADIUS: f32 = 1000.0;
    /// Full width of the spawn box (minimap scaling)
    pub const SPAWN_RANGE: f32 = 2.0 * SPAWN_RADIUS;

    /// Per-tick chance of spawning a new entity
    pub const SPAWN_CHANCE: f64 = 0.02;
    /// Live entity cap enforced by the spawn gate
    pub const MAX_ENTITIES: usize = 20;

    /// Fuel burned per tick while the ship is moving
    pub const FUEL_DECAY: f32 = 0.000_28;
    /// Fuel restored by one fuel pickup (capped at a full tank)
    pub const FUEL_REFILL: f32 = 0.25;

    /// Score awarded for a star pickup
    pub const STAR_SCORE: u32 = 30;
    /// Score awarded for rescuing an ally
    pub const RESCUE_SCORE: u32 = 10;

    /// Sprite bounding boxes for collision (width, height)
    pub const PLAYER_SIZE: (f32, f32) = (50.0, 50.0);
    pub const ENTITY_SIZE: (f32, f32) = (40.0, 40.0);

    /// Target refresh rate; one simulation tick per rendered frame
    pub const TARGET_FPS: u32 = 60;
}

/// Axis-aligned bounding box overlap test.
///
/// Positions are sprite top-left corners, sizes are (width, height).
#[inline]
pub fn aabb_overlap(pos_a: Vec2, size_a: (f32, f32), pos_b: Vec2, size_b: (f32, f32)) -> bool {
    pos_a.x < pos_b.x + size_b.0
        && pos_b.x < pos_a.x + size_a.0
        && pos_a.y < pos_b.y + size_b.1
        && pos_b.y < pos_a.y + size_a.1
}
