//! Game state and core simulation types
//!
//! Everything the simulation mutates lives here, owned by a single
//! [`GameState`]. Collaborators (renderer, input, audio) only observe it.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::consts::*;

/// Current phase of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Welcome screen, waiting for the player to start
    Menu,
    /// Active gameplay
    Playing,
    /// Run ended
    GameOver,
}

/// Why the run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOverReason {
    /// Unshielded foe collision
    Hit,
    /// Fuel tank ran dry
    FuelExhausted,
}

/// The kinds of entity the spawner can produce.
///
/// Ally variants differ only in appearance; all four are stationary and
/// yield the same rescue bonus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Shield,
    Star,
    Fuel,
    Ally1,
    Ally2,
    Ally3,
    Ally4,
    Foe,
}

/// The four ally variants, in spawn-draw order
pub const ALLY_KINDS: [EntityKind; 4] = [
    EntityKind::Ally1,
    EntityKind::Ally2,
    EntityKind::Ally3,
    EntityKind::Ally4,
];

/// The three power-up kinds, in spawn-draw order
pub const POWER_UP_KINDS: [EntityKind; 3] =
    [EntityKind::Shield, EntityKind::Star, EntityKind::Fuel];

impl EntityKind {
    /// Allies hold position where they spawned; everything else drifts.
    pub fn is_ally(&self) -> bool {
        matches!(
            self,
            EntityKind::Ally1 | EntityKind::Ally2 | EntityKind::Ally3 | EntityKind::Ally4
        )
    }
}

/// A spawned collectible or hazard
#[derive(Debug, Clone)]
pub struct Entity {
    pub kind: EntityKind,
    /// Sprite top-left corner, world coordinates
    pub pos: Vec2,
    /// World units per tick; zero for allies
    pub vel: Vec2,
}

impl Entity {
    /// Advance position by one tick of velocity
    pub fn integrate(&mut self) {
        self.pos += self.vel;
    }
}

/// The player-controlled ship
#[derive(Debug, Clone)]
pub struct Player {
    /// Sprite top-left corner, world coordinates
    pub pos: Vec2,
    /// World units per tick, magnitude capped at [`MAX_VEL`]
    pub vel: Vec2,
    pub score: u32,
    /// Remaining fuel, always in [0, 1]
    pub fuel_pct: f32,
    /// Whether the next foe hit is absorbed
    pub shield: bool,
    /// Force-field sprite layer flag; must always equal `shield`
    pub force_field_visible: bool,
    pub game_over: bool,
}

impl Player {
    /// New ship centred on the initial screen with a full tank.
    pub fn new() -> Self {
        Self {
            pos: Vec2::new(
                (SCREEN_WIDTH - PLAYER_SIZE.0) / 2.0,
                (SCREEN_HEIGHT - PLAYER_SIZE.1) / 2.0,
            ),
            vel: Vec2::ZERO,
            score: 0,
            fuel_pct: 1.0,
            shield: false,
            force_field_visible: false,
            game_over: false,
        }
    }

    /// Sprite centre point
    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::new(PLAYER_SIZE.0 / 2.0, PLAYER_SIZE.1 / 2.0)
    }

    /// Advance position by one tick of velocity
    pub fn integrate(&mut self) {
        self.pos += self.vel;
    }

    /// Add one pickup's worth of fuel, topping off at a full tank.
    ///
    /// Never overshoots: at 0.9 a pickup fills exactly to 1.0.
    pub fn refuel(&mut self) {
        if self.fuel_pct < 1.0 - FUEL_REFILL {
            self.fuel_pct += FUEL_REFILL;
        } else {
            self.fuel_pct = 1.0;
        }
    }

    /// Raise the shield and show the force-field layer
    pub fn activate_shield(&mut self) {
        self.shield = true;
        self.force_field_visible = true;
    }

    /// Drop the shield and hide the force-field layer
    pub fn drop_shield(&mut self) {
        self.shield = false;
        self.force_field_visible = false;
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

/// World-space camera offset with an immediate-snap follow policy.
///
/// The follow boundary is the screen centre on both axes, so any overshoot
/// translates the camera by exactly that overshoot: the player appears to
/// stay still while the world scrolls.
#[derive(Debug, Clone, Copy, Default)]
pub struct Camera {
    /// World coordinate of the viewport's top-left corner
    pub offset: Vec2,
}

impl Camera {
    /// Snap the camera so the given point sits at the screen centre.
    pub fn follow(&mut self, target: Vec2) {
        let screen_center = self.offset + Vec2::new(SCREEN_WIDTH / 2.0, SCREEN_HEIGHT / 2.0);
        // Translate by exactly the overshoot past the centre boundary
        self.offset += target - screen_center;
    }

    /// World → screen coordinates
    pub fn to_screen(&self, world: Vec2) -> Vec2 {
        world - self.offset
    }
}

/// Outcome of a collision effect, drained once per tick to drive audio.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    FuelCollected,
    StarCollected,
    /// `voice` selects one of the three "thank you" cues
    AllyRescued {
        voice: u8,
    },
    FoeHit,
    ShieldAbsorbed,
    ShieldActivated,
    RanOutOfFuel,
}

/// Complete game state (deterministic per seed)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Seeded RNG; every stochastic decision consumes it
    pub rng: Pcg32,
    pub phase: GamePhase,
    pub player: Player,
    /// Unordered live entities; removal is swap-with-last
    pub entities: Vec<Entity>,
    pub camera: Camera,
    /// Persists after `player.game_over` flips, drives the end screen
    pub game_over_by: GameOverReason,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Events raised by the current tick
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a fresh run with the given seed.
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Menu,
            player: Player::new(),
            entities: Vec::new(),
            camera: Camera::default(),
            game_over_by: GameOverReason::Hit,
            time_ticks: 0,
            events: Vec::new(),
        }
    }

    /// Remove the entity at `idx` by swapping the last one into its slot.
    ///
    /// An index outside the current collection is a no-op.
    pub fn remove_entity(&mut self, idx: usize) {
        if idx < self.entities.len() {
            self.entities.swap_remove(idx);
        }
    }

    /// Take this tick's events, leaving the queue empty.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_player_defaults() {
        let player = Player::new();
        assert_eq!(player.score, 0);
        assert_eq!(player.fuel_pct, 1.0);
        assert!(!player.shield);
        assert!(!player.force_field_visible);
        assert!(!player.game_over);
        assert_eq!(player.vel, Vec2::ZERO);
    }

    #[test]
    fn test_refuel_caps_at_full() {
        let mut player = Player::new();
        player.fuel_pct = 0.9;
        player.refuel();
        assert_eq!(player.fuel_pct, 1.0);

        player.fuel_pct = 0.5;
        player.refuel();
        assert_eq!(player.fuel_pct, 0.75);
    }

    #[test]
    fn test_shield_tracks_force_field() {
        let mut player = Player::new();
        player.activate_shield();
        assert!(player.shield);
        assert!(player.force_field_visible);

        player.drop_shield();
        assert!(!player.shield);
        assert!(!player.force_field_visible);
    }

    #[test]
    fn test_camera_snaps_to_overshoot() {
        let mut camera = Camera::default();
        // Player centre sitting exactly at screen centre: no movement
        camera.follow(Vec2::new(SCREEN_WIDTH / 2.0, SCREEN_HEIGHT / 2.0));
        assert_eq!(camera.offset, Vec2::ZERO);

        // 10 units past centre on x: camera moves by exactly 10
        camera.follow(Vec2::new(SCREEN_WIDTH / 2.0 + 10.0, SCREEN_HEIGHT / 2.0));
        assert_eq!(camera.offset, Vec2::new(10.0, 0.0));

        // And back the other way
        camera.follow(Vec2::new(SCREEN_WIDTH / 2.0, SCREEN_HEIGHT / 2.0));
        assert_eq!(camera.offset, Vec2::new(0.0, 0.0));
    }

    #[test]
    fn test_remove_entity_out_of_range_is_noop() {
        let mut state = GameState::new(7);
        state.entities.push(Entity {
            kind: EntityKind::Star,
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
        });
        state.remove_entity(5);
        assert_eq!(state.entities.len(), 1);
        state.remove_entity(0);
        assert!(state.entities.is_empty());
    }
}
