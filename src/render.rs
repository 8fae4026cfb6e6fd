//! Renderer collaborator trait and frame composition
//!
//! The renderer is a thin draw-call sink; all layout lives here. Each frame
//! issues calls in a fixed order: player (with force-field layer when up),
//! each live entity, then the HUD overlays (score, location, fuel bar,
//! shield icon, minimap). Composition is read-only over the game state.

use glam::Vec2;

use crate::assets::{self, HUD_FONT};
use crate::consts::*;
use crate::settings::Settings;
use crate::sim::{EntityKind, GameState};

/// RGBA colour for text and pixel draws
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const BLACK: Color = Color::rgba(0, 0, 0, 255);
    pub const WHITE: Color = Color::rgba(255, 255, 255, 255);
    pub const BRIGHT_GREEN: Color = Color::rgba(0, 255, 0, 255);
}

/// Drawing collaborator. Positions are screen coordinates; world-to-screen
/// conversion happens in the compositor via the camera.
pub trait Renderer {
    /// Clear the frame to a solid colour
    fn clear(&mut self, color: Color);
    /// Draw a named sprite bitmap with its top-left at `pos`
    fn draw_bitmap(&mut self, name: &str, pos: Vec2);
    /// Draw the left `part_width` pixels of a named bitmap (fuel gauge fill)
    fn draw_bitmap_part(&mut self, name: &str, pos: Vec2, part_width: f32);
    /// Draw text in a named font
    fn draw_text(&mut self, text: &str, color: Color, font: &str, size: u32, pos: Vec2);
    /// Draw a single pixel (minimap blips)
    fn draw_pixel(&mut self, color: Color, pos: Vec2);
    /// Fill an axis-aligned rectangle
    fn fill_rect(&mut self, color: Color, pos: Vec2, size: Vec2);
    /// Outline an axis-aligned rectangle
    fn draw_rect(&mut self, color: Color, pos: Vec2, size: Vec2);
    /// Pixel width of a named bitmap (fuel gauge scaling)
    fn bitmap_width(&self, name: &str) -> f32;
    /// Present the frame, capped at `fps` frames per second
    fn refresh(&mut self, fps: u32);
}

/// Compose one frame of the running game.
pub fn draw_frame<R: Renderer>(renderer: &mut R, state: &GameState, settings: &Settings) {
    renderer.clear(Color::BLACK);

    draw_player(renderer, state);

    for entity in &state.entities {
        let screen = state.camera.to_screen(entity.pos);
        renderer.draw_bitmap(assets::entity_bitmap(entity.kind), screen);
    }

    draw_hud(renderer, state, settings);
}

fn draw_player<R: Renderer>(renderer: &mut R, state: &GameState) {
    let screen = state.camera.to_screen(state.player.pos);
    renderer.draw_bitmap("player", screen);
    if state.player.force_field_visible {
        // Layer offset fits the force-field bitmap over the hull
        renderer.draw_bitmap("force_field", screen + Vec2::new(-25.0, -35.0));
    }
}

/// HUD overlays, drawn after the world so they sit on top.
fn draw_hud<R: Renderer>(renderer: &mut R, state: &GameState, settings: &Settings) {
    renderer.draw_text(
        &format!("SCORE: {}", state.player.score),
        Color::WHITE,
        HUD_FONT,
        14,
        Vec2::new(1090.0, 590.0),
    );

    if settings.show_location {
        let center = state.player.center();
        renderer.draw_text(
            &format!("LOCATION: {} {}", center.x as i32, center.y as i32),
            Color::WHITE,
            HUD_FONT,
            14,
            Vec2::new(SCREEN_WIDTH / 2.0 - 60.0, SCREEN_HEIGHT - 15.0),
        );
    }

    renderer.draw_bitmap("hud", Vec2::new(1.0, 490.0));
    draw_fuel_gauge(renderer, state);

    if state.player.shield {
        renderer.draw_bitmap("force", Vec2::new(65.0, 510.0));
    }

    if settings.show_minimap {
        draw_minimap(renderer, state);
    }
}

/// Fuel bar: empty gauge, overdrawn by the filled bitmap clipped to the
/// current fuel fraction.
fn draw_fuel_gauge<R: Renderer>(renderer: &mut R, state: &GameState) {
    let part_width = state.player.fuel_pct * renderer.bitmap_width("full");

    renderer.draw_text(
        "FUEL: ",
        Color::BRIGHT_GREEN,
        HUD_FONT,
        25,
        Vec2::new(10.0, 555.0),
    );
    renderer.draw_bitmap("empty", Vec2::new(70.0, 550.0));
    renderer.draw_bitmap_part("full", Vec2::new(70.0, 550.0), part_width);
}

/// Minimap panel origin and edge length, screen coordinates
const MINIMAP_ORIGIN: Vec2 = Vec2::new(20.0, 20.0);
const MINIMAP_SIZE: f32 = 100.0;

/// Map a world position onto the minimap panel.
///
/// The ±[`SPAWN_RADIUS`] box around the player scales onto the panel, so
/// the player always sits at its centre.
pub fn minimap_coordinate(player_center: Vec2, pos: Vec2) -> Vec2 {
    (pos - player_center + Vec2::splat(SPAWN_RADIUS)) / SPAWN_RANGE * MINIMAP_SIZE + MINIMAP_ORIGIN
}

fn draw_minimap<R: Renderer>(renderer: &mut R, state: &GameState) {
    renderer.fill_rect(Color::BLACK, MINIMAP_ORIGIN, Vec2::splat(MINIMAP_SIZE));
    renderer.draw_rect(Color::WHITE, MINIMAP_ORIGIN, Vec2::splat(MINIMAP_SIZE));

    let center = state.player.center();
    for entity in &state.entities {
        let blip = minimap_coordinate(center, entity.pos);
        let color = match entity.kind {
            EntityKind::Foe => Color::rgba(255, 0, 0, 240),
            EntityKind::Shield | EntityKind::Star | EntityKind::Fuel => Color::rgba(0, 255, 0, 240),
            _ => Color::rgba(0, 255, 255, 240),
        };
        renderer.draw_pixel(color, blip);
    }

    // Player blip at the panel centre
    renderer.draw_pixel(
        Color::WHITE,
        MINIMAP_ORIGIN + Vec2::splat(MINIMAP_SIZE / 2.0),
    );
}
